use contracts::usecases::u501_import_sales::{columns, RawRow};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Row after field validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRow<'a> {
    pub client_name: &'a str,
    pub client_document: Option<&'a str>,
    pub client_email: Option<&'a str>,
    pub sale: SalePart<'a>,
}

/// Sale columns of a row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SalePart<'a> {
    /// No product on this row: client-only line
    Absent,
    /// Product present but price or quantity unusable; no sale is created
    Unusable { product_name: &'a str, reason: String },
    Line(SaleLine<'a>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleLine<'a> {
    pub product_name: &'a str,
    pub unit_price: Decimal,
    pub quantity: i32,
}

/// Row rejected as a whole
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowError {
    MissingClientName,
}

impl RowError {
    pub fn message(&self, row: usize) -> String {
        match self {
            RowError::MissingClientName => {
                format!("Row {}: client name is required, row skipped", row)
            }
        }
    }
}

/// Trimmed, non-blank cell value
fn field<'a>(row: &'a RawRow, column: &str) -> Option<&'a str> {
    row.get(column)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
}

pub fn parse_row(row: &RawRow) -> Result<ParsedRow<'_>, RowError> {
    let client_name = field(row, columns::CLIENT_NAME).ok_or(RowError::MissingClientName)?;

    Ok(ParsedRow {
        client_name,
        client_document: field(row, columns::CLIENT_DOCUMENT),
        client_email: field(row, columns::CLIENT_EMAIL),
        sale: parse_sale(row),
    })
}

fn parse_sale(row: &RawRow) -> SalePart<'_> {
    let Some(product_name) = field(row, columns::PRODUCT_NAME) else {
        return SalePart::Absent;
    };

    let unit_price = match field(row, columns::PRICE) {
        None => {
            return SalePart::Unusable {
                product_name,
                reason: "price is missing".into(),
            }
        }
        Some(raw) => match parse_price(raw) {
            Some(price) => price,
            None => {
                return SalePart::Unusable {
                    product_name,
                    reason: format!("price '{}' is not a valid amount", raw),
                }
            }
        },
    };

    let quantity = match field(row, columns::QUANTITY) {
        None => {
            return SalePart::Unusable {
                product_name,
                reason: "quantity is missing".into(),
            }
        }
        Some(raw) => match parse_quantity(raw) {
            Some(quantity) => quantity,
            None => {
                return SalePart::Unusable {
                    product_name,
                    reason: format!("quantity '{}' is not a positive whole number", raw),
                }
            }
        },
    };

    SalePart::Line(SaleLine {
        product_name,
        unit_price,
        quantity,
    })
}

/// Decimal amount, sign allowed. A comma is read as the decimal separator
/// when the value has no dot ("25,50").
pub fn parse_price(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    let normalized = if raw.contains('.') {
        raw.to_string()
    } else {
        raw.replace(',', ".")
    };
    Decimal::from_str(&normalized).ok()
}

/// Strictly positive integer
pub fn parse_quantity(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok().filter(|q| *q > 0)
}
