use axum::{extract::Query, Json};
use serde::Deserialize;

use crate::shared::data::db::get_connection;
use crate::shared::logger;

#[derive(Deserialize)]
pub struct LogsQuery {
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    200
}

/// GET /api/logs
pub async fn list_recent(
    Query(query): Query<LogsQuery>,
) -> Result<Json<Vec<contracts::shared::logger::LogEntry>>, axum::http::StatusCode> {
    match logger::repository::recent(get_connection(), query.limit.min(1000)).await {
        Ok(logs) => Ok(Json(logs)),
        Err(e) => {
            tracing::error!("Failed to read system log: {}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
