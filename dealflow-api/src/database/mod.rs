pub mod companies;
pub mod contacts;
pub mod deals;
pub mod interactions;
pub mod migrations;

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub type DbConnection = Arc<Mutex<Connection>>;

#[derive(Clone)]
pub struct AsyncDbConnection {
    pool: Arc<Pool<SqliteConnectionManager>>,
}

impl AsyncDbConnection {
    pub fn new(pool: Pool<SqliteConnectionManager>) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }

    pub async fn lock(&self) -> PooledConnection<SqliteConnectionManager> {
        self.pool
            .get()
            .expect("Failed to get DB connection from pool")
    }
}

pub struct Database {
    pub connection: DbConnection,
    pub async_connection: AsyncDbConnection,
}

impl Database {
    /// Create a new database connection and run migrations
    pub fn new(db_path: &PathBuf) -> anyhow::Result<Self> {
        // Ensure directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Create sync connection first and run migrations
        let sync_conn = Connection::open(db_path)?;
        let sync_mutex = Arc::new(Mutex::new(sync_conn));

        // Run migrations on sync connection before opening async connection
        {
            let conn = sync_mutex.lock().unwrap();
            migrations::run_migrations(&conn)?;
        }

        // Now open pooled connections - they will see the migrated schema
        let manager = SqliteConnectionManager::file(db_path).with_init(|conn| {
            conn.busy_timeout(Duration::from_secs(5))?;
            conn.execute_batch("PRAGMA foreign_keys = ON;")?;
            Ok(())
        });

        let pool = Pool::builder().max_size(8).build(manager)?;

        let database = Database {
            connection: sync_mutex,
            async_connection: AsyncDbConnection::new(pool),
        };

        Ok(database)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::DealStage;

    fn test_database() -> (tempfile::TempDir, Database) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(&dir.path().join("test.sqlite3")).unwrap();
        (dir, db)
    }

    #[tokio::test]
    async fn test_company_round_trip() {
        let (_dir, db) = test_database();
        let conn = db.async_connection.clone();

        let id = companies::insert_company(
            conn.clone(),
            "Acme Corp".to_string(),
            Some("Manufacturing".to_string()),
            None,
            None,
        )
        .await
        .unwrap();

        let company = companies::get_company(conn.clone(), id).await.unwrap();
        assert_eq!(company.name, "Acme Corp");
        assert_eq!(company.industry, Some("Manufacturing".to_string()));
        assert_eq!(company.website, None);

        let companies = companies::list_companies(conn.clone(), 0, 100).await.unwrap();
        assert_eq!(companies.len(), 1);

        let found = companies::search_companies_by_name(conn, "Acme Corp")
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, id);
    }

    #[tokio::test]
    async fn test_contact_name_lookup() {
        let (_dir, db) = test_database();
        let conn = db.async_connection.clone();

        let id = contacts::insert_contact(
            conn.clone(),
            "John".to_string(),
            "Smith".to_string(),
            "john@acme.example".to_string(),
            None,
            Some("VP Engineering".to_string()),
            None,
        )
        .await
        .unwrap();

        // Partial, case-insensitive match on either name part
        let found = contacts::find_contact_by_name(conn.clone(), Some("john"), None)
            .await
            .unwrap();
        assert_eq!(found.map(|c| c.id), Some(id));

        let found = contacts::find_contact_by_name(conn.clone(), Some("John"), Some("smi"))
            .await
            .unwrap();
        assert_eq!(found.map(|c| c.id), Some(id));

        let missing = contacts::find_contact_by_name(conn.clone(), Some("Maria"), None)
            .await
            .unwrap();
        assert!(missing.is_none());

        let duplicate = contacts::insert_contact(
            conn,
            "John".to_string(),
            "Smith".to_string(),
            "john@acme.example".to_string(),
            None,
            None,
            None,
        )
        .await;
        assert!(duplicate.is_err());
    }

    #[tokio::test]
    async fn test_deal_round_trip() {
        let (_dir, db) = test_database();
        let conn = db.async_connection.clone();

        let contact_id = contacts::insert_contact(
            conn.clone(),
            "Jane".to_string(),
            "Doe".to_string(),
            "jane@initech.example".to_string(),
            None,
            None,
            None,
        )
        .await
        .unwrap();

        assert!(deals::find_deal_by_contact(conn.clone(), contact_id)
            .await
            .unwrap()
            .is_none());

        let id = deals::insert_deal(
            conn.clone(),
            "Deal with Initech".to_string(),
            DealStage::ContactMade,
            Some(500000.0),
            None,
            Some(contact_id),
            None,
        )
        .await
        .unwrap();

        let deal = deals::get_deal(conn.clone(), id).await.unwrap();
        assert_eq!(deal.stage, DealStage::ContactMade);
        assert_eq!(deal.value, Some(500000.0));
        assert_eq!(deal.contact_id, Some(contact_id));

        let found = deals::find_deal_by_contact(conn, contact_id).await.unwrap();
        assert_eq!(found.map(|d| d.id), Some(id));
    }

    #[tokio::test]
    async fn test_interactions_list_newest_first() {
        let (_dir, db) = test_database();
        let conn = db.async_connection.clone();

        let first = interactions::insert_interaction(
            conn.clone(),
            "conversation".to_string(),
            "Intro call".to_string(),
            None,
            None,
            Some(r#"{"OverallSentiment":"positive"}"#.to_string()),
        )
        .await
        .unwrap();

        let second = interactions::insert_interaction(
            conn.clone(),
            "conversation".to_string(),
            "Follow-up".to_string(),
            None,
            None,
            None,
        )
        .await
        .unwrap();

        let listed = interactions::list_interactions(conn.clone(), 0, 100)
            .await
            .unwrap();
        assert_eq!(listed.len(), 2);
        // Same created_at second is possible; ids break the tie
        assert_eq!(listed[0].id, second);
        assert_eq!(listed[1].id, first);

        let stored = interactions::get_interaction(conn, first).await.unwrap();
        assert_eq!(
            stored.ai_analysis,
            Some(r#"{"OverallSentiment":"positive"}"#.to_string())
        );
        assert_eq!(stored.contact_id, None);
        assert_eq!(stored.deal_id, None);
    }
}
