//! u501: sales import from spreadsheet rows.
//!
//! Rows are validated one by one, clients are deduplicated by name, products
//! are resolved by name, and every insert of the run goes through one
//! [`ImportSession`] that is committed once at the end.

pub mod cache;
pub mod csv_rows;
pub mod error;
pub mod executor;
#[cfg(test)]
pub mod memory_session;
pub mod row;
pub mod service;
pub mod session;

pub use error::{ImportError, StoreError};
pub use executor::{ImportExecutor, ImportOptions};
pub use session::{ImportSession, SeaOrmSession};
