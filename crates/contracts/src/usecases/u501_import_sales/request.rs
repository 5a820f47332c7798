use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One spreadsheet line: column name -> raw cell text
pub type RawRow = HashMap<String, String>;

/// Column names recognized by the import. Anything else is ignored.
pub mod columns {
    pub const CLIENT_NAME: &str = "ClientName";
    pub const CLIENT_DOCUMENT: &str = "ClientDocument";
    pub const CLIENT_EMAIL: &str = "ClientEmail";
    pub const PRODUCT_NAME: &str = "ProductName";
    pub const PRICE: &str = "Price";
    pub const QUANTITY: &str = "Quantity";
}

/// Rows extracted from an uploaded sheet by the client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportSalesRequest {
    pub metadata: SheetMetadata,
    pub rows: Vec<RawRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetMetadata {
    #[serde(rename = "fileName")]
    pub file_name: String,

    #[serde(rename = "rowCount", default)]
    pub row_count: usize,

    #[serde(default)]
    pub columns: Vec<String>,
}

impl SheetMetadata {
    /// Only Excel workbooks are accepted for upload
    pub fn has_spreadsheet_extension(&self) -> bool {
        let lower = self.file_name.trim().to_lowercase();
        lower.ends_with(".xlsx") || lower.ends_with(".xls")
    }
}
