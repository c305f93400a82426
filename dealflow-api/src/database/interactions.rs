use crate::database::AsyncDbConnection;
use anyhow::Result;
use shared_types::Interaction;

pub async fn insert_interaction(
    conn: AsyncDbConnection,
    interaction_type: String,
    summary: String,
    contact_id: Option<i64>,
    deal_id: Option<i64>,
    ai_analysis: Option<String>,
) -> Result<i64> {
    let conn = conn.lock().await;
    let now = chrono::Utc::now().timestamp();

    let id: i64 = conn.query_row(
        "INSERT INTO interactions
         (interaction_type, summary, contact_id, deal_id, created_at, ai_analysis)
         VALUES (?, ?, ?, ?, ?, ?)
         RETURNING id",
        rusqlite::params![
            &interaction_type,
            &summary,
            contact_id,
            deal_id,
            now,
            ai_analysis.as_ref()
        ],
        |row| row.get(0),
    )?;

    Ok(id)
}

pub async fn get_interaction(conn: AsyncDbConnection, id: i64) -> Result<Interaction> {
    let conn = conn.lock().await;

    let mut stmt = conn.prepare(
        "SELECT id, interaction_type, summary, contact_id, deal_id, created_at, ai_analysis
         FROM interactions
         WHERE id = ?",
    )?;

    stmt.query_row([id], |row| {
        Ok(Interaction {
            id: row.get(0)?,
            interaction_type: row.get(1)?,
            summary: row.get(2)?,
            contact_id: row.get(3)?,
            deal_id: row.get(4)?,
            created_at: row.get(5)?,
            ai_analysis: row.get(6)?,
        })
    })
    .map_err(|e| anyhow::anyhow!("Failed to get interaction: {}", e))
}

pub async fn list_interactions(
    conn: AsyncDbConnection,
    skip: usize,
    limit: usize,
) -> Result<Vec<Interaction>> {
    let conn = conn.lock().await;

    let mut stmt = conn.prepare(
        "SELECT id, interaction_type, summary, contact_id, deal_id, created_at, ai_analysis
         FROM interactions
         ORDER BY created_at DESC, id DESC
         LIMIT ? OFFSET ?",
    )?;

    let interactions = stmt
        .query_map(rusqlite::params![limit, skip], |row| {
            Ok(Interaction {
                id: row.get(0)?,
                interaction_type: row.get(1)?,
                summary: row.get(2)?,
                contact_id: row.get(3)?,
                deal_id: row.get(4)?,
                created_at: row.get(5)?,
                ai_analysis: row.get(6)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(interactions)
}
