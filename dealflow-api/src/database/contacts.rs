use crate::database::AsyncDbConnection;
use anyhow::Result;
use rusqlite::OptionalExtension;
use shared_types::Contact;

pub async fn insert_contact(
    conn: AsyncDbConnection,
    first_name: String,
    last_name: String,
    email: String,
    phone: Option<String>,
    position: Option<String>,
    company_id: Option<i64>,
) -> Result<i64> {
    let conn = conn.lock().await;
    let now = chrono::Utc::now().timestamp();

    let existing: Result<i64, _> = conn.query_row(
        "SELECT id FROM contacts WHERE email = ? LIMIT 1",
        [&email],
        |row| row.get(0),
    );

    if existing.is_ok() {
        return Err(anyhow::anyhow!("Contact with email {} already exists", email));
    }

    let id: i64 = conn.query_row(
        "INSERT INTO contacts
         (first_name, last_name, email, phone, position, company_id, created_at)
         VALUES (?, ?, ?, ?, ?, ?, ?)
         RETURNING id",
        rusqlite::params![
            &first_name,
            &last_name,
            &email,
            phone.as_ref(),
            position.as_ref(),
            company_id,
            now
        ],
        |row| row.get(0),
    )?;

    Ok(id)
}

pub async fn get_contact(conn: AsyncDbConnection, id: i64) -> Result<Contact> {
    let conn = conn.lock().await;

    let mut stmt = conn.prepare(
        "SELECT id, first_name, last_name, email, phone, position, company_id, created_at
         FROM contacts
         WHERE id = ?",
    )?;

    stmt.query_row([id], |row| {
        Ok(Contact {
            id: row.get(0)?,
            first_name: row.get(1)?,
            last_name: row.get(2)?,
            email: row.get(3)?,
            phone: row.get(4)?,
            position: row.get(5)?,
            company_id: row.get(6)?,
            created_at: row.get(7)?,
        })
    })
    .map_err(|e| anyhow::anyhow!("Failed to get contact: {}", e))
}

pub async fn list_contacts(
    conn: AsyncDbConnection,
    skip: usize,
    limit: usize,
) -> Result<Vec<Contact>> {
    let conn = conn.lock().await;

    let mut stmt = conn.prepare(
        "SELECT id, first_name, last_name, email, phone, position, company_id, created_at
         FROM contacts
         LIMIT ? OFFSET ?",
    )?;

    let contacts = stmt
        .query_map(rusqlite::params![limit, skip], |row| {
            Ok(Contact {
                id: row.get(0)?,
                first_name: row.get(1)?,
                last_name: row.get(2)?,
                email: row.get(3)?,
                phone: row.get(4)?,
                position: row.get(5)?,
                company_id: row.get(6)?,
                created_at: row.get(7)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(contacts)
}

/// Find the first contact whose name parts contain the extracted names.
/// Matching is partial and case-insensitive; a `None` part matches anything.
pub async fn find_contact_by_name(
    conn: AsyncDbConnection,
    first_name: Option<&str>,
    last_name: Option<&str>,
) -> Result<Option<Contact>> {
    if first_name.is_none() && last_name.is_none() {
        return Ok(None);
    }

    let conn = conn.lock().await;

    let mut stmt = conn.prepare(
        "SELECT id, first_name, last_name, email, phone, position, company_id, created_at
         FROM contacts
         WHERE (?1 IS NULL OR first_name LIKE '%' || ?1 || '%')
           AND (?2 IS NULL OR last_name LIKE '%' || ?2 || '%')
         LIMIT 1",
    )?;

    let contact = stmt
        .query_row(rusqlite::params![first_name, last_name], |row| {
            Ok(Contact {
                id: row.get(0)?,
                first_name: row.get(1)?,
                last_name: row.get(2)?,
                email: row.get(3)?,
                phone: row.get(4)?,
                position: row.get(5)?,
                company_id: row.get(6)?,
                created_at: row.get(7)?,
            })
        })
        .optional()?;

    Ok(contact)
}
