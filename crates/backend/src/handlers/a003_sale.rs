use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a003_sale::{Sale, SaleDetail, SaleId};
use contracts::domain::common::AggregateId;

use crate::domain::a003_sale;

/// GET /api/sales
pub async fn list_all() -> Result<Json<Vec<Sale>>, StatusCode> {
    match a003_sale::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list sales: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/sales/:id/details
pub async fn get_details(Path(id): Path<String>) -> Result<Json<Vec<SaleDetail>>, StatusCode> {
    let id = match SaleId::from_string(&id) {
        Ok(id) => id,
        Err(_) => return Err(StatusCode::BAD_REQUEST),
    };
    match a003_sale::service::get_details(id).await {
        Ok(Some(details)) => Ok(Json(details)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to load sale {} details: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
