use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::a001_client::ClientId;
use crate::domain::a002_product::ProductId;

crate::entity_id!(SaleId);
crate::entity_id!(SaleDetailId);

/// Продажа (заголовок)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    pub id: SaleId,

    #[serde(rename = "clientId")]
    pub client_id: ClientId,

    pub date: DateTime<Utc>,

    pub total: Decimal,
}

/// Строка продажи
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleDetail {
    pub id: SaleDetailId,

    #[serde(rename = "saleId")]
    pub sale_id: SaleId,

    #[serde(rename = "productId")]
    pub product_id: ProductId,

    pub quantity: i32,

    #[serde(rename = "unitPrice")]
    pub unit_price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSale {
    pub client_id: ClientId,
    pub date: DateTime<Utc>,
    pub total: Decimal,
}

impl NewSale {
    /// Sale with a single line: total is `unit_price * quantity`.
    /// `None` when the total does not fit in a `Decimal`.
    pub fn single_line(
        client_id: ClientId,
        date: DateTime<Utc>,
        unit_price: Decimal,
        quantity: i32,
    ) -> Option<Self> {
        let total = unit_price.checked_mul(Decimal::from(quantity))?;
        Some(Self {
            client_id,
            date,
            total,
        })
    }

    pub fn into_sale(self, id: SaleId) -> Sale {
        Sale {
            id,
            client_id: self.client_id,
            date: self.date,
            total: self.total,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSaleDetail {
    pub sale_id: SaleId,
    pub product_id: ProductId,
    pub quantity: i32,
    pub unit_price: Decimal,
}

impl NewSaleDetail {
    pub fn into_detail(self, id: SaleDetailId) -> SaleDetail {
        SaleDetail {
            id,
            sale_id: self.sale_id,
            product_id: self.product_id,
            quantity: self.quantity,
            unit_price: self.unit_price,
        }
    }
}
