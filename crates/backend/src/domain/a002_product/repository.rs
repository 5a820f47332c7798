use contracts::domain::a002_product::{Product, ProductDto, ProductId};
use contracts::domain::common::normalize_name;
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, ConnectionTrait, QueryFilter, QueryOrder, Set};
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "a002_product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub name_key: String,
    pub description: Option<String>,
    /// Decimal stored as text
    pub price: String,
    pub stock: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Decimal amount read back from a TEXT column
pub fn parse_amount(column: &str, raw: &str) -> Result<Decimal, DbErr> {
    Decimal::from_str(raw.trim())
        .map_err(|e| DbErr::Type(format!("invalid decimal in {}: '{}' ({})", column, raw, e)))
}

impl TryFrom<Model> for Product {
    type Error = DbErr;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        Ok(Product {
            id: ProductId(m.id),
            price: parse_amount("a002_product.price", &m.price)?,
            name: m.name,
            description: m.description,
            stock: m.stock,
        })
    }
}

pub async fn list_all<C: ConnectionTrait>(db: &C) -> Result<Vec<Product>, DbErr> {
    Entity::find()
        .order_by_asc(Column::Name)
        .all(db)
        .await?
        .into_iter()
        .map(Product::try_from)
        .collect()
}

/// Товар по наименованию без учета регистра (по `name_key`)
pub async fn find_by_name_ignore_case<C: ConnectionTrait>(
    db: &C,
    name: &str,
) -> Result<Option<Product>, DbErr> {
    Entity::find()
        .filter(Column::NameKey.eq(normalize_name(name)))
        .order_by_asc(Column::Id)
        .one(db)
        .await?
        .map(Product::try_from)
        .transpose()
}

pub async fn insert<C: ConnectionTrait>(db: &C, dto: &ProductDto) -> Result<Product, DbErr> {
    let active = ActiveModel {
        id: NotSet,
        name: Set(dto.name.trim().to_string()),
        name_key: Set(normalize_name(&dto.name)),
        description: Set(dto.description.clone()),
        price: Set(dto.price.to_string()),
        stock: Set(dto.stock),
    };
    Product::try_from(active.insert(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::connect_in_memory;

    fn dto(name: &str, price: &str) -> ProductDto {
        ProductDto {
            name: name.into(),
            description: None,
            price: Decimal::from_str(price).unwrap(),
            stock: 5,
        }
    }

    #[tokio::test]
    async fn price_round_trips_exactly() {
        let db = connect_in_memory().await.unwrap();
        let created = insert(&db, &dto(" Cement 50kg ", "25.50")).await.unwrap();
        assert_eq!(created.name, "Cement 50kg");

        let found = find_by_name_ignore_case(&db, "cement 50KG")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(found.price.to_string(), "25.50");
    }

    #[tokio::test]
    async fn lookup_folds_non_ascii_letters() {
        let db = connect_in_memory().await.unwrap();
        let created = insert(&db, &dto("Cemento Ñ", "10")).await.unwrap();

        let found = find_by_name_ignore_case(&db, "cemento ñ")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, created.id);
    }

    #[test]
    fn corrupt_amount_is_a_type_error() {
        let model = Model {
            id: 1,
            name: "Broken".into(),
            name_key: "broken".into(),
            description: None,
            price: "twelve".into(),
            stock: 0,
        };
        assert!(matches!(Product::try_from(model), Err(DbErr::Type(_))));
    }
}
