use serde::{Deserialize, Serialize};

/// Запись системного лога
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: i64,
    pub timestamp: String,
    pub category: String,
    pub message: String,
}
