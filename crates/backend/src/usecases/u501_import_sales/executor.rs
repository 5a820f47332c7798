use chrono::{DateTime, Utc};
use contracts::domain::a001_client::{Client, NewClient};
use contracts::domain::a002_product::Product;
use contracts::domain::a003_sale::{NewSale, NewSaleDetail};
use contracts::usecases::u501_import_sales::{ImportResultLog, RawRow};
use std::time::Instant;
use uuid::Uuid;

use super::cache::{CachedProduct, ClientCache, ProductCache};
use super::error::{ImportError, StoreError};
use super::row::{parse_row, ParsedRow, SaleLine, SalePart};
use super::session::ImportSession;

#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Value stored for client document/email when the row has none
    pub missing_value_placeholder: String,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            missing_value_placeholder: "N/A".into(),
        }
    }
}

/// Executor для UseCase импорта продаж
#[derive(Debug, Clone, Default)]
pub struct ImportExecutor {
    options: ImportOptions,
}

impl ImportExecutor {
    pub fn new(options: ImportOptions) -> Self {
        Self { options }
    }

    /// Import `rows` through `session` using the current time as the sale date
    pub async fn run<S: ImportSession>(
        &self,
        session: S,
        rows: &[RawRow],
    ) -> Result<ImportResultLog, ImportError> {
        self.run_at(session, rows, Utc::now()).await
    }

    /// Import `rows`; every sale of the run is dated `imported_at`.
    ///
    /// Row problems are recorded in the returned log. A store failure rolls
    /// the session back and is returned as [`ImportError`].
    pub async fn run_at<S: ImportSession>(
        &self,
        session: S,
        rows: &[RawRow],
        imported_at: DateTime<Utc>,
    ) -> Result<ImportResultLog, ImportError> {
        let started_at = Instant::now();
        let run_id = Uuid::new_v4();
        tracing::info!("Import {} started: {} rows", run_id, rows.len());

        let mut run = ImportRun {
            session,
            options: &self.options,
            imported_at,
            clients: ClientCache::default(),
            products: ProductCache::default(),
            log: ImportResultLog::new(rows.len(), imported_at),
        };

        for (idx, row) in rows.iter().enumerate() {
            let line = idx + 1;
            if idx > 0 && idx % 100 == 0 {
                tracing::info!("Import {} progress: {} rows processed...", run_id, idx);
            }

            if let Err((stage, source)) = run.process_row(line, row).await {
                tracing::error!(
                    "Import {} aborted at row {} while {}: {}",
                    run_id,
                    line,
                    stage,
                    source
                );
                if let Err(e) = run.session.rollback().await {
                    tracing::error!("Import {} rollback failed: {}", run_id, e);
                }
                return Err(ImportError::Store {
                    stage,
                    row: line,
                    source,
                });
            }
        }

        let ImportRun {
            session,
            clients,
            products,
            mut log,
            ..
        } = run;

        let written = session.commit().await.map_err(|e| {
            tracing::error!("Import {} commit failed: {}", run_id, e);
            ImportError::Commit(e)
        })?;

        log.finish(started_at.elapsed().as_millis() as u64);
        tracing::info!(
            "Import {} finished: records={}, sales={}, new_clients={}, errors={}, warnings={}, rows_written={}, cached_clients={}, cached_products={}, elapsed_ms={}",
            run_id,
            log.records_processed,
            log.sales_imported,
            log.new_clients_created,
            log.errors.len(),
            log.warnings.len(),
            written,
            clients.len(),
            products.len(),
            log.elapsed_ms
        );
        Ok(log)
    }
}

type StageError = (&'static str, StoreError);

/// State of one run: the session plus caches and log that accumulate across
/// rows. Never shared between runs.
struct ImportRun<'a, S> {
    session: S,
    options: &'a ImportOptions,
    imported_at: DateTime<Utc>,
    clients: ClientCache,
    products: ProductCache,
    log: ImportResultLog,
}

impl<S: ImportSession> ImportRun<'_, S> {
    async fn process_row(&mut self, line: usize, row: &RawRow) -> Result<(), StageError> {
        let parsed = match parse_row(row) {
            Ok(parsed) => parsed,
            Err(e) => {
                self.log.add_error(e.message(line));
                return Ok(());
            }
        };

        let client = self.resolve_client(&parsed).await?;

        match parsed.sale {
            SalePart::Absent => {}
            SalePart::Unusable {
                product_name,
                reason,
            } => {
                // не ошибка: строка клиента принята, продажа пропущена
                self.log.add_warning(format!(
                    "Row {}: sale of '{}' skipped, {}",
                    line, product_name, reason
                ));
            }
            SalePart::Line(sale_line) => {
                match self.resolve_product(sale_line.product_name).await? {
                    Some(product) => {
                        self.create_sale(line, &client, &product, &sale_line).await?
                    }
                    None => self.log.add_error(format!(
                        "Row {}: Product '{}' not found, sale skipped",
                        line, sale_line.product_name
                    )),
                }
            }
        }
        Ok(())
    }

    /// Cache, then store, then create
    async fn resolve_client(&mut self, row: &ParsedRow<'_>) -> Result<Client, StageError> {
        if let Some(client) = self.clients.get(row.client_name) {
            return Ok(client.clone());
        }

        let existing = self
            .session
            .find_client_by_name(row.client_name)
            .await
            .map_err(|e| ("looking up client", e))?;

        let client = match existing {
            Some(client) => client,
            None => {
                let placeholder = &self.options.missing_value_placeholder;
                let new_client = NewClient {
                    name: row.client_name.to_string(),
                    document: row.client_document.unwrap_or(placeholder).to_string(),
                    email: row.client_email.unwrap_or(placeholder).to_string(),
                };
                let client = self
                    .session
                    .insert_client(new_client)
                    .await
                    .map_err(|e| ("inserting client", e))?;
                self.log.new_clients_created += 1;
                client
            }
        };

        self.clients.insert(row.client_name, client.clone());
        Ok(client)
    }

    /// Cache, then store. Absent products are cached as known missing.
    async fn resolve_product(&mut self, name: &str) -> Result<Option<Product>, StageError> {
        if let Some(cached) = self.products.get(name) {
            return Ok(match cached {
                CachedProduct::Found(product) => Some(product.clone()),
                CachedProduct::KnownMissing => None,
            });
        }

        let found = self
            .session
            .find_product_by_name(name)
            .await
            .map_err(|e| ("looking up product", e))?;

        let entry = match &found {
            Some(product) => CachedProduct::Found(product.clone()),
            None => CachedProduct::KnownMissing,
        };
        self.products.insert(name, entry);
        Ok(found)
    }

    async fn create_sale(
        &mut self,
        row: usize,
        client: &Client,
        product: &Product,
        line: &SaleLine<'_>,
    ) -> Result<(), StageError> {
        let Some(new_sale) =
            NewSale::single_line(client.id, self.imported_at, line.unit_price, line.quantity)
        else {
            self.log.add_error(format!(
                "Row {}: total of '{}' overflows, sale skipped",
                row, line.product_name
            ));
            return Ok(());
        };

        let sale = self
            .session
            .insert_sale(new_sale)
            .await
            .map_err(|e| ("inserting sale", e))?;

        self.session
            .insert_sale_detail(NewSaleDetail {
                sale_id: sale.id,
                product_id: product.id,
                quantity: line.quantity,
                unit_price: line.unit_price,
            })
            .await
            .map_err(|e| ("inserting sale detail", e))?;

        self.log.sales_imported += 1;
        Ok(())
    }
}
