use crate::database::AsyncDbConnection;
use anyhow::Result;
use rusqlite::OptionalExtension;
use shared_types::{Deal, DealStage};

pub async fn insert_deal(
    conn: AsyncDbConnection,
    title: String,
    stage: DealStage,
    value: Option<f64>,
    company_id: Option<i64>,
    contact_id: Option<i64>,
    description: Option<String>,
) -> Result<i64> {
    let conn = conn.lock().await;
    let now = chrono::Utc::now().timestamp();

    let id: i64 = conn.query_row(
        "INSERT INTO deals
         (title, stage, value, company_id, contact_id, description, created_at)
         VALUES (?, ?, ?, ?, ?, ?, ?)
         RETURNING id",
        rusqlite::params![
            &title,
            stage.as_str(),
            value,
            company_id,
            contact_id,
            description.as_ref(),
            now
        ],
        |row| row.get(0),
    )?;

    Ok(id)
}

fn deal_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Deal> {
    let stage: String = row.get(2)?;

    Ok(Deal {
        id: row.get(0)?,
        title: row.get(1)?,
        // Stage text is constrained by the schema CHECK
        stage: DealStage::from_str(&stage).unwrap_or(DealStage::Lead),
        value: row.get(3)?,
        company_id: row.get(4)?,
        contact_id: row.get(5)?,
        description: row.get(6)?,
        created_at: row.get(7)?,
    })
}

pub async fn get_deal(conn: AsyncDbConnection, id: i64) -> Result<Deal> {
    let conn = conn.lock().await;

    let mut stmt = conn.prepare(
        "SELECT id, title, stage, value, company_id, contact_id, description, created_at
         FROM deals
         WHERE id = ?",
    )?;

    stmt.query_row([id], deal_from_row)
        .map_err(|e| anyhow::anyhow!("Failed to get deal: {}", e))
}

pub async fn list_deals(
    conn: AsyncDbConnection,
    skip: usize,
    limit: usize,
) -> Result<Vec<Deal>> {
    let conn = conn.lock().await;

    let mut stmt = conn.prepare(
        "SELECT id, title, stage, value, company_id, contact_id, description, created_at
         FROM deals
         LIMIT ? OFFSET ?",
    )?;

    let deals = stmt
        .query_map(rusqlite::params![limit, skip], deal_from_row)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(deals)
}

pub async fn find_deal_by_contact(
    conn: AsyncDbConnection,
    contact_id: i64,
) -> Result<Option<Deal>> {
    let conn = conn.lock().await;

    let mut stmt = conn.prepare(
        "SELECT id, title, stage, value, company_id, contact_id, description, created_at
         FROM deals
         WHERE contact_id = ?
         LIMIT 1",
    )?;

    let deal = stmt.query_row([contact_id], deal_from_row).optional()?;

    Ok(deal)
}
