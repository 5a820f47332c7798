use contracts::domain::a002_product::ProductId;
use contracts::domain::a003_sale::{NewSaleDetail, SaleDetail, SaleDetailId, SaleId};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, ConnectionTrait, QueryFilter, QueryOrder, Set};

use crate::domain::a002_product::repository::parse_amount;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "a003_sale_detail")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub sale_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    pub unit_price: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for SaleDetail {
    type Error = DbErr;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        Ok(SaleDetail {
            id: SaleDetailId(m.id),
            sale_id: SaleId(m.sale_id),
            product_id: ProductId(m.product_id),
            quantity: m.quantity,
            unit_price: parse_amount("a003_sale_detail.unit_price", &m.unit_price)?,
        })
    }
}

pub async fn list_by_sale<C: ConnectionTrait>(
    db: &C,
    sale_id: SaleId,
) -> Result<Vec<SaleDetail>, DbErr> {
    Entity::find()
        .filter(Column::SaleId.eq(sale_id.0))
        .order_by_asc(Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(SaleDetail::try_from)
        .collect()
}

pub async fn insert<C: ConnectionTrait>(
    db: &C,
    detail: NewSaleDetail,
) -> Result<SaleDetail, DbErr> {
    let active = ActiveModel {
        id: NotSet,
        sale_id: Set(detail.sale_id.0),
        product_id: Set(detail.product_id.0),
        quantity: Set(detail.quantity),
        unit_price: Set(detail.unit_price.to_string()),
    };
    let inserted = active.insert(db).await?;
    Ok(detail.into_detail(SaleDetailId(inserted.id)))
}
