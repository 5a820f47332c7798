use thiserror::Error;

/// Failure reported by the persistent store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),

    /// In-memory store used by tests
    #[cfg(test)]
    #[error("{0}")]
    Backend(String),
}

/// Run-level failure. The session has been rolled back and nothing from the
/// run is durable.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("could not open import session: {0}")]
    Begin(#[source] StoreError),

    #[error("store failure while {stage} (row {row}): {source}")]
    Store {
        stage: &'static str,
        row: usize,
        #[source]
        source: StoreError,
    },

    #[error("commit failed, import rolled back: {0}")]
    Commit(#[source] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_names_stage_and_row() {
        let err = ImportError::Store {
            stage: "looking up product",
            row: 4,
            source: StoreError::Backend("connection reset".into()),
        };
        assert_eq!(
            err.to_string(),
            "store failure while looking up product (row 4): connection reset"
        );
    }
}
