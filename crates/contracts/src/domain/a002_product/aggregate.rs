use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

crate::entity_id!(ProductId);

/// Товар каталога. The import only reads products; they are registered
/// through [`ProductDto`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,

    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    pub price: Decimal,

    pub stock: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDto {
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    pub price: Decimal,

    #[serde(default)]
    pub stock: i32,
}

impl ProductDto {
    /// Validation before insert. Returns a human readable reason on failure.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Product name is required".into());
        }
        if self.price < Decimal::ZERO {
            return Err(format!("Price must not be negative, got {}", self.price));
        }
        if self.stock < 0 {
            return Err(format!("Stock must not be negative, got {}", self.stock));
        }
        Ok(())
    }
}
