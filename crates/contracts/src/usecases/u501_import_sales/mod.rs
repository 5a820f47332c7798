pub mod request;
pub mod response;

pub use request::{columns, ImportSalesRequest, RawRow, SheetMetadata};
pub use response::ImportResultLog;

use crate::usecases::common::UseCaseMetadata;

pub struct ImportSales;

impl UseCaseMetadata for ImportSales {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "import_sales"
    }
}
