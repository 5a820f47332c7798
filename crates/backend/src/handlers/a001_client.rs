use axum::Json;

use crate::domain::a001_client;

/// GET /api/clients
pub async fn list_all(
) -> Result<Json<Vec<contracts::domain::a001_client::Client>>, axum::http::StatusCode> {
    match a001_client::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list clients: {}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
