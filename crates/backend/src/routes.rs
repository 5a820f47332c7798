use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::shared::config::Config;

/// Конфигурация всех роутов приложения
pub fn configure_routes(config: &Config) -> Router {
    let upload_limit = DefaultBodyLimit::max(config.import.max_upload_bytes);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // A001 Clients
        .route("/api/clients", get(handlers::a001_client::list_all))
        // A002 Products
        .route(
            "/api/products",
            get(handlers::a002_product::list_all).post(handlers::a002_product::create),
        )
        // A003 Sales
        .route("/api/sales", get(handlers::a003_sale::list_all))
        .route(
            "/api/sales/:id/details",
            get(handlers::a003_sale::get_details),
        )
        // U501 Sales import
        .route(
            "/api/import/sales",
            post(handlers::u501_import_sales::import_sheet).layer(upload_limit.clone()),
        )
        .route(
            "/api/import/sales/csv",
            post(handlers::u501_import_sales::import_csv).layer(upload_limit),
        )
        // System log
        .route("/api/logs", get(handlers::logs::list_recent))
}
