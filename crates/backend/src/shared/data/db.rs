use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Tables created on startup when missing. Money columns are TEXT holding a
/// decimal string. `name_key` is the trimmed, lowercased name used for
/// case-insensitive lookups.
const SCHEMA: &[(&str, &str)] = &[
    (
        "a001_client",
        r#"
        CREATE TABLE IF NOT EXISTS a001_client (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            name_key TEXT NOT NULL,
            document TEXT NOT NULL DEFAULT 'N/A',
            email TEXT NOT NULL DEFAULT 'N/A',
            phone TEXT,
            address TEXT
        );
        "#,
    ),
    (
        "a002_product",
        r#"
        CREATE TABLE IF NOT EXISTS a002_product (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            name_key TEXT NOT NULL,
            description TEXT,
            price TEXT NOT NULL DEFAULT '0',
            stock INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a003_sale",
        r#"
        CREATE TABLE IF NOT EXISTS a003_sale (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            client_id INTEGER NOT NULL REFERENCES a001_client(id),
            date TEXT NOT NULL,
            total TEXT NOT NULL
        );
        "#,
    ),
    (
        "a003_sale_detail",
        r#"
        CREATE TABLE IF NOT EXISTS a003_sale_detail (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            sale_id INTEGER NOT NULL REFERENCES a003_sale(id),
            product_id INTEGER NOT NULL REFERENCES a002_product(id),
            quantity INTEGER NOT NULL CHECK (quantity > 0),
            unit_price TEXT NOT NULL
        );
        "#,
    ),
    (
        "system_log",
        r#"
        CREATE TABLE IF NOT EXISTS system_log (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            timestamp TEXT NOT NULL,
            category TEXT NOT NULL,
            message TEXT NOT NULL
        );
        "#,
    ),
];

const INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_a001_client_name_key ON a001_client (name_key);",
    "CREATE INDEX IF NOT EXISTS idx_a002_product_name_key ON a002_product (name_key);",
    "CREATE INDEX IF NOT EXISTS idx_a003_sale_detail_sale ON a003_sale_detail (sale_id);",
];

pub async fn initialize_database(db_path: Option<&str>) -> anyhow::Result<()> {
    let db_file = db_path.unwrap_or("target/db/retail.db");
    if let Some(parent) = std::path::Path::new(db_file).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if std::path::Path::new(db_file).is_absolute() {
        std::path::PathBuf::from(db_file)
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
    let conn = Database::connect(&db_url).await?;

    bootstrap_schema(&conn).await?;
    tracing::info!("Database ready at {}", absolute_path.display());

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Database connection already initialized"))?;
    Ok(())
}

/// Create missing tables and indexes
pub async fn bootstrap_schema<C: ConnectionTrait>(conn: &C) -> anyhow::Result<()> {
    for (table, ddl) in SCHEMA {
        tracing::debug!("Ensuring table {}", table);
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            ddl.to_string(),
        ))
        .await?;
    }
    for ddl in INDEXES {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            ddl.to_string(),
        ))
        .await?;
    }
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}

/// Connection if the database has been initialized
pub fn try_get_connection() -> Option<&'static DatabaseConnection> {
    DB_CONN.get()
}

/// Connection to a private in-memory database with the schema applied
#[cfg(test)]
pub async fn connect_in_memory() -> anyhow::Result<DatabaseConnection> {
    let mut options = sea_orm::ConnectOptions::new("sqlite::memory:".to_string());
    // every pooled connection would otherwise see its own empty database
    options.max_connections(1).min_connections(1).sqlx_logging(false);
    let conn = Database::connect(options).await?;
    bootstrap_schema(&conn).await?;
    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bootstrap_is_idempotent() {
        let conn = connect_in_memory().await.unwrap();
        bootstrap_schema(&conn).await.unwrap();

        let tables = conn
            .query_all(Statement::from_string(
                DatabaseBackend::Sqlite,
                "SELECT name FROM sqlite_master WHERE type='table' AND name LIKE 'a00%' ORDER BY name;"
                    .to_string(),
            ))
            .await
            .unwrap();
        let names: Vec<String> = tables
            .iter()
            .map(|row| row.try_get("", "name").unwrap())
            .collect();
        assert_eq!(
            names,
            vec!["a001_client", "a002_product", "a003_sale", "a003_sale_detail"]
        );
    }
}
