use chrono::{DateTime, Utc};
use contracts::domain::a001_client::ClientId;
use contracts::domain::a003_sale::{NewSale, Sale, SaleId};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, ConnectionTrait, QueryOrder, Set};

use crate::domain::a002_product::repository::parse_amount;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "a003_sale")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub client_id: i64,
    pub date: DateTime<Utc>,
    pub total: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Sale {
    type Error = DbErr;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        Ok(Sale {
            id: SaleId(m.id),
            client_id: ClientId(m.client_id),
            date: m.date,
            total: parse_amount("a003_sale.total", &m.total)?,
        })
    }
}

/// Newest first
pub async fn list_all<C: ConnectionTrait>(db: &C) -> Result<Vec<Sale>, DbErr> {
    Entity::find()
        .order_by_desc(Column::Date)
        .order_by_desc(Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(Sale::try_from)
        .collect()
}

pub async fn get_by_id<C: ConnectionTrait>(db: &C, id: SaleId) -> Result<Option<Sale>, DbErr> {
    Entity::find_by_id(id.0)
        .one(db)
        .await?
        .map(Sale::try_from)
        .transpose()
}

pub async fn insert<C: ConnectionTrait>(db: &C, sale: NewSale) -> Result<Sale, DbErr> {
    let active = ActiveModel {
        id: NotSet,
        client_id: Set(sale.client_id.0),
        date: Set(sale.date),
        total: Set(sale.total.to_string()),
    };
    let inserted = active.insert(db).await?;
    Ok(sale.into_sale(SaleId(inserted.id)))
}
