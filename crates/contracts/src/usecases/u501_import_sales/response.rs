use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of one import run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportResultLog {
    #[serde(rename = "recordsProcessed")]
    pub records_processed: usize,

    #[serde(rename = "salesImported")]
    pub sales_imported: usize,

    #[serde(rename = "newClientsCreated")]
    pub new_clients_created: usize,

    /// Row-level failures, in row order
    pub errors: Vec<String>,

    /// Rows that were accepted but only partially imported
    pub warnings: Vec<String>,

    pub success: bool,

    /// Timestamp shared by every sale of the run
    #[serde(rename = "importedAt")]
    pub imported_at: DateTime<Utc>,

    #[serde(rename = "elapsedMs", default)]
    pub elapsed_ms: u64,
}

impl ImportResultLog {
    pub fn new(records_processed: usize, imported_at: DateTime<Utc>) -> Self {
        Self {
            records_processed,
            sales_imported: 0,
            new_clients_created: 0,
            errors: Vec::new(),
            warnings: Vec::new(),
            success: false,
            imported_at,
            elapsed_ms: 0,
        }
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Closes the log: success is true iff no row errors were recorded
    pub fn finish(&mut self, elapsed_ms: u64) {
        self.success = self.errors.is_empty();
        self.elapsed_ms = elapsed_ms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warnings_do_not_affect_success() {
        let mut log = ImportResultLog::new(2, Utc::now());
        log.add_warning("Row 1: sale skipped");
        log.finish(5);
        assert!(log.success);
        assert_eq!(log.elapsed_ms, 5);
    }

    #[test]
    fn any_error_marks_failure() {
        let mut log = ImportResultLog::new(1, Utc::now());
        log.add_error("Row 1: client name is required, row skipped");
        log.finish(0);
        assert!(!log.success);
    }

    #[test]
    fn serializes_camel_case_fields() {
        let log = ImportResultLog::new(3, Utc::now());
        let value = serde_json::to_value(&log).unwrap();
        assert_eq!(value["recordsProcessed"], 3);
        assert_eq!(value["newClientsCreated"], 0);
        assert!(value["errors"].as_array().unwrap().is_empty());
    }
}
