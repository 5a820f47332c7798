pub mod repository;

use repository::log_event_internal;

/// Записать событие в системный лог (таблица system_log).
///
/// Fire-and-forget: the write runs on a spawned task and failures only go to
/// tracing.
/// ```ignore
/// logger::log("startup", "Server started");
/// ```
pub fn log(category: &str, message: &str) {
    log_event_internal(category, message);
}
