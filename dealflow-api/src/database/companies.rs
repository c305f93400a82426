use crate::database::AsyncDbConnection;
use anyhow::Result;
use shared_types::Company;

pub async fn insert_company(
    conn: AsyncDbConnection,
    name: String,
    industry: Option<String>,
    website: Option<String>,
    description: Option<String>,
) -> Result<i64> {
    let conn = conn.lock().await;
    let now = chrono::Utc::now().timestamp();

    let id: i64 = conn.query_row(
        "INSERT INTO companies (name, industry, website, description, created_at)
         VALUES (?, ?, ?, ?, ?)
         RETURNING id",
        rusqlite::params![
            &name,
            industry.as_ref(),
            website.as_ref(),
            description.as_ref(),
            now
        ],
        |row| row.get(0),
    )?;

    Ok(id)
}

pub async fn get_company(conn: AsyncDbConnection, id: i64) -> Result<Company> {
    let conn = conn.lock().await;

    let mut stmt = conn.prepare(
        "SELECT id, name, industry, website, description, created_at
         FROM companies
         WHERE id = ?",
    )?;

    stmt.query_row([id], |row| {
        Ok(Company {
            id: row.get(0)?,
            name: row.get(1)?,
            industry: row.get(2)?,
            website: row.get(3)?,
            description: row.get(4)?,
            created_at: row.get(5)?,
        })
    })
    .map_err(|e| anyhow::anyhow!("Failed to get company: {}", e))
}

pub async fn list_companies(
    conn: AsyncDbConnection,
    skip: usize,
    limit: usize,
) -> Result<Vec<Company>> {
    let conn = conn.lock().await;

    let mut stmt = conn.prepare(
        "SELECT id, name, industry, website, description, created_at
         FROM companies
         LIMIT ? OFFSET ?",
    )?;

    let companies = stmt
        .query_map(rusqlite::params![limit, skip], |row| {
            Ok(Company {
                id: row.get(0)?,
                name: row.get(1)?,
                industry: row.get(2)?,
                website: row.get(3)?,
                description: row.get(4)?,
                created_at: row.get(5)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(companies)
}

pub async fn search_companies_by_name(
    conn: AsyncDbConnection,
    name: &str,
) -> Result<Vec<Company>> {
    let conn = conn.lock().await;

    let mut stmt = conn.prepare(
        "SELECT id, name, industry, website, description, created_at
         FROM companies
         WHERE name = ?",
    )?;

    let companies = stmt
        .query_map([name], |row| {
            Ok(Company {
                id: row.get(0)?,
                name: row.get(1)?,
                industry: row.get(2)?,
                website: row.get(3)?,
                description: row.get(4)?,
                created_at: row.get(5)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(companies)
}
