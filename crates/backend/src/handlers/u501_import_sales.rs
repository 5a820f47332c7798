use axum::{http::StatusCode, Json};
use contracts::usecases::common::UseCaseError;
use contracts::usecases::u501_import_sales::{
    ImportResultLog, ImportSalesRequest, RawRow, SheetMetadata,
};

use crate::usecases::u501_import_sales::{csv_rows, service};

type ImportResponse = Result<Json<ImportResultLog>, (StatusCode, Json<UseCaseError>)>;

/// POST /api/import/sales
pub async fn import_sheet(Json(request): Json<ImportSalesRequest>) -> ImportResponse {
    tracing::info!(
        "Received sales import '{}' with {} rows",
        request.metadata.file_name,
        request.rows.len()
    );
    ensure_spreadsheet(&request.metadata).map_err(bad_request)?;
    if request.metadata.row_count != 0 && request.metadata.row_count != request.rows.len() {
        tracing::warn!(
            "Sheet metadata reports {} rows, payload has {}",
            request.metadata.row_count,
            request.rows.len()
        );
    }

    run(&request.metadata.file_name, request.rows).await
}

/// POST /api/import/sales/csv
pub async fn import_csv(body: String) -> ImportResponse {
    let rows = csv_rows::read_rows(&body)
        .map_err(|e| bad_request(UseCaseError::validation(e.to_string())))?;
    tracing::info!("Received CSV sales import with {} rows", rows.len());

    run("csv upload", rows).await
}

async fn run(source: &str, rows: Vec<RawRow>) -> ImportResponse {
    match service::import_sales(source, rows).await {
        Ok(log) => Ok(Json(log)),
        Err(e) => {
            tracing::error!("Sales import '{}' aborted: {}", source, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(
                    UseCaseError::import_aborted("Import aborted, no data was saved")
                        .with_details(e.to_string()),
                ),
            ))
        }
    }
}

/// Только Excel (.xlsx / .xls)
fn ensure_spreadsheet(metadata: &SheetMetadata) -> Result<(), UseCaseError> {
    if metadata.has_spreadsheet_extension() {
        Ok(())
    } else {
        Err(UseCaseError::validation(format!(
            "The file must be an Excel workbook (.xlsx or .xls), got '{}'",
            metadata.file_name
        )))
    }
}

fn bad_request(err: UseCaseError) -> (StatusCode, Json<UseCaseError>) {
    (StatusCode::BAD_REQUEST, Json(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(file_name: &str) -> SheetMetadata {
        SheetMetadata {
            file_name: file_name.into(),
            row_count: 0,
            columns: Vec::new(),
        }
    }

    #[test]
    fn non_excel_upload_is_a_validation_error() {
        let err = ensure_spreadsheet(&meta("sales.pdf")).unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert!(err.message.contains("sales.pdf"));
        assert!(ensure_spreadsheet(&meta("sales.xlsx")).is_ok());
    }
}
