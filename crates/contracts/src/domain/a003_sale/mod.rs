pub mod aggregate;

pub use aggregate::{NewSale, NewSaleDetail, Sale, SaleDetail, SaleDetailId, SaleId};
