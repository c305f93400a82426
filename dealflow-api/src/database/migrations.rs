use rusqlite::Connection;

/// Run all database migrations
pub fn run_migrations(conn: &Connection) -> anyhow::Result<()> {
    // Create companies table
    conn.execute(
        "CREATE TABLE IF NOT EXISTS companies (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name VARCHAR NOT NULL,
            industry VARCHAR,
            website VARCHAR,
            description VARCHAR,
            created_at BIGINT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_companies_name
            ON companies(name)",
        [],
    )?;

    // Create contacts table
    conn.execute(
        "CREATE TABLE IF NOT EXISTS contacts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name VARCHAR NOT NULL,
            last_name VARCHAR NOT NULL,
            email VARCHAR NOT NULL UNIQUE,
            phone VARCHAR,
            position VARCHAR,
            company_id INTEGER,
            created_at BIGINT NOT NULL,
            FOREIGN KEY (company_id) REFERENCES companies (id)
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_contacts_name
            ON contacts(first_name, last_name)",
        [],
    )?;

    // Create deals table
    conn.execute(
        "CREATE TABLE IF NOT EXISTS deals (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title VARCHAR NOT NULL,
            stage VARCHAR NOT NULL CHECK (stage IN (
                'lead', 'contact_made', 'demo_scheduled', 'proposal',
                'negotiation', 'closed_won', 'closed_lost')),
            value DOUBLE,
            company_id INTEGER,
            contact_id INTEGER,
            description VARCHAR,
            created_at BIGINT NOT NULL,
            FOREIGN KEY (company_id) REFERENCES companies (id),
            FOREIGN KEY (contact_id) REFERENCES contacts (id)
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_deals_contact
            ON deals(contact_id)",
        [],
    )?;

    // Create interactions table
    conn.execute(
        "CREATE TABLE IF NOT EXISTS interactions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            interaction_type VARCHAR NOT NULL,
            summary VARCHAR NOT NULL,
            contact_id INTEGER,
            deal_id INTEGER,
            created_at BIGINT NOT NULL,
            ai_analysis VARCHAR,
            FOREIGN KEY (contact_id) REFERENCES contacts (id),
            FOREIGN KEY (deal_id) REFERENCES deals (id)
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_interactions_created
            ON interactions(created_at)",
        [],
    )?;

    Ok(())
}
