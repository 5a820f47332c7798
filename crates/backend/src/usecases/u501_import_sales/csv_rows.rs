use anyhow::Result;
use contracts::usecases::u501_import_sales::RawRow;

/// Read CSV text with a header row into import rows.
///
/// Header names are trimmed; records shorter than the header only carry the
/// cells they have. Blank records are dropped. A record that cannot be read
/// fails the whole extraction so row numbers in the import log stay aligned
/// with the file.
pub fn read_rows(csv_text: &str) -> Result<Vec<RawRow>> {
    // Strip UTF-8 BOM if present
    let text = csv_text.trim_start_matches('\u{FEFF}');

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = match reader.headers() {
        Ok(h) => h.iter().map(|name| name.trim().to_string()).collect(),
        Err(e) => anyhow::bail!("Failed to read CSV headers: {}", e),
    };

    let mut rows = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = match result {
            Ok(r) => r,
            Err(e) => anyhow::bail!("Malformed CSV record {}: {}", idx + 1, e),
        };

        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }

        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .filter(|(name, _)| !name.is_empty())
            .map(|(name, value)| (name.clone(), value.to_string()))
            .collect();
        rows.push(row);
    }

    tracing::debug!("CSV extracted: {} rows, headers {:?}", rows.len(), headers);
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_cells_to_trimmed_headers() {
        let text = "\u{FEFF}ClientName , ProductName,Price,Quantity\nAna,Cement,\"25,50\",2\n";
        let rows = read_rows(text).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["ClientName"], "Ana");
        assert_eq!(rows[0]["ProductName"], "Cement");
        assert_eq!(rows[0]["Price"], "25,50");
        assert_eq!(rows[0]["Quantity"], "2");
    }

    #[test]
    fn short_records_and_blank_lines() {
        let text = "ClientName,ClientEmail,ProductName\nAna\n,,\nLuis,luis@mail.com\n";
        let rows = read_rows(text).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 1);
        assert!(!rows[0].contains_key("ProductName"));
        assert_eq!(rows[1]["ClientEmail"], "luis@mail.com");
    }

    #[test]
    fn header_only_yields_no_rows() {
        assert!(read_rows("ClientName,Price\n").unwrap().is_empty());
        assert!(read_rows("").unwrap().is_empty());
    }
}
