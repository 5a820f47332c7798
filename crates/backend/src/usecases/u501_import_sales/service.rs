use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_import_sales::{ImportResultLog, ImportSales, RawRow};
use sea_orm::DatabaseConnection;

use super::error::ImportError;
use super::executor::{ImportExecutor, ImportOptions};
use super::session::SeaOrmSession;
use crate::shared::config;
use crate::shared::data::db::get_connection;
use crate::shared::logger;

/// Import rows into the application database in one transaction
pub async fn import_sales(
    source: &str,
    rows: Vec<RawRow>,
) -> Result<ImportResultLog, ImportError> {
    let options = config::current().import.options();
    let result = import_with(get_connection(), options, &rows).await;

    let category = ImportSales::full_name();
    match &result {
        Ok(log) => logger::log(
            &category,
            &format!(
                "{}: {} rows, {} sales, {} new clients, {} errors, {} warnings",
                source,
                log.records_processed,
                log.sales_imported,
                log.new_clients_created,
                log.errors.len(),
                log.warnings.len()
            ),
        ),
        Err(e) => logger::log(&category, &format!("{}: aborted, {}", source, e)),
    }
    result
}

async fn import_with(
    db: &DatabaseConnection,
    options: ImportOptions,
    rows: &[RawRow],
) -> Result<ImportResultLog, ImportError> {
    let session = SeaOrmSession::begin(db).await.map_err(ImportError::Begin)?;
    ImportExecutor::new(options).run(session, rows).await
}
