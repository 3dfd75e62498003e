// src/logging.rs

use crate::models::ApiCallLog;
use std::fs::OpenOptions;
use std::io::Write;

pub const API_CALL_LOG_FILE: &str = "api_calls.log";

/// Appends one line per remote call to `api_calls.log`. Logging must never
/// take the UI down, so failures are reported and swallowed.
pub fn log_api_call(log: &ApiCallLog) {
    let log_entry = format!(
        "[{}] {} - {} - Status: {} - Time: {}ms\n",
        log.timestamp.to_rfc3339(),
        log.endpoint,
        log.request_summary,
        log.response_status,
        log.response_time_ms
    );

    match OpenOptions::new()
        .append(true)
        .create(true)
        .open(API_CALL_LOG_FILE)
    {
        Ok(mut file) => {
            if let Err(e) = file.write_all(log_entry.as_bytes()) {
                log::warn!("failed to write to {}: {}", API_CALL_LOG_FILE, e);
            }
        }
        Err(e) => log::warn!("failed to open {}: {}", API_CALL_LOG_FILE, e),
    }
}
