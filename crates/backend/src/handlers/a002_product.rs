use axum::{http::StatusCode, Json};
use contracts::domain::a002_product::{Product, ProductDto};
use contracts::usecases::common::UseCaseError;

use crate::domain::a002_product::{self, service::CreateProductError};

/// GET /api/products
pub async fn list_all() -> Result<Json<Vec<Product>>, StatusCode> {
    match a002_product::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list products: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/products
pub async fn create(
    Json(dto): Json<ProductDto>,
) -> Result<(StatusCode, Json<Product>), (StatusCode, Json<UseCaseError>)> {
    match a002_product::service::create(dto).await {
        Ok(product) => Ok((StatusCode::CREATED, Json(product))),
        Err(e) => Err(create_error_response(e)),
    }
}

fn create_error_response(err: CreateProductError) -> (StatusCode, Json<UseCaseError>) {
    match err {
        CreateProductError::Invalid(message) => {
            (StatusCode::BAD_REQUEST, Json(UseCaseError::validation(message)))
        }
        CreateProductError::Duplicate(_) => (
            StatusCode::CONFLICT,
            Json(UseCaseError::conflict(err.to_string())),
        ),
        CreateProductError::Store(e) => {
            tracing::error!("Failed to create product: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(UseCaseError::internal("Failed to create product")),
            )
        }
    }
}
