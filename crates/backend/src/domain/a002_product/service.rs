use super::repository;
use crate::shared::data::db::get_connection;
use contracts::domain::a002_product::{Product, ProductDto};

/// Why a product could not be registered
#[derive(Debug, thiserror::Error)]
pub enum CreateProductError {
    #[error("{0}")]
    Invalid(String),
    #[error("product '{0}' already exists")]
    Duplicate(String),
    #[error(transparent)]
    Store(#[from] sea_orm::DbErr),
}

pub async fn list_all() -> anyhow::Result<Vec<Product>> {
    Ok(repository::list_all(get_connection()).await?)
}

/// Register a product. Names are unique ignoring case since the sales import
/// resolves products by name.
pub async fn create(dto: ProductDto) -> Result<Product, CreateProductError> {
    create_with(get_connection(), dto).await
}

async fn create_with<C: sea_orm::ConnectionTrait>(
    db: &C,
    dto: ProductDto,
) -> Result<Product, CreateProductError> {
    dto.validate().map_err(CreateProductError::Invalid)?;

    if repository::find_by_name_ignore_case(db, &dto.name)
        .await?
        .is_some()
    {
        return Err(CreateProductError::Duplicate(dto.name.trim().to_string()));
    }

    let product = repository::insert(db, &dto).await?;
    tracing::info!("Product {} '{}' registered", product.id, product.name);
    Ok(product)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::connect_in_memory;
    use rust_decimal::Decimal;

    fn dto(name: &str) -> ProductDto {
        ProductDto {
            name: name.into(),
            description: Some("bag".into()),
            price: Decimal::new(1999, 2),
            stock: 3,
        }
    }

    #[tokio::test]
    async fn duplicate_names_are_rejected() {
        let db = connect_in_memory().await.unwrap();
        create_with(&db, dto("Gravel")).await.unwrap();

        let err = create_with(&db, dto("GRAVEL")).await.unwrap_err();
        assert!(matches!(err, CreateProductError::Duplicate(ref name) if name == "GRAVEL"));
    }

    #[tokio::test]
    async fn duplicate_check_folds_non_ascii_letters() {
        let db = connect_in_memory().await.unwrap();
        create_with(&db, dto("Pegamento Ñandú")).await.unwrap();

        let err = create_with(&db, dto("PEGAMENTO ÑANDÚ")).await.unwrap_err();
        assert!(matches!(err, CreateProductError::Duplicate(_)));
    }

    #[tokio::test]
    async fn invalid_dto_is_rejected_before_store() {
        let db = connect_in_memory().await.unwrap();
        let err = create_with(&db, dto("  ")).await.unwrap_err();
        assert!(matches!(err, CreateProductError::Invalid(_)));
        assert!(repository::list_all(&db).await.unwrap().is_empty());
    }
}
