//! Hard-coded demo records standing in for backend responses.

pub mod admin;
pub mod connectors;
pub mod credentials;
pub mod exports;
pub mod insights;
pub mod query;
pub mod smartquote;

const MINUTE_MS: i64 = 60 * 1_000;
const HOUR_MS: i64 = 60 * MINUTE_MS;

pub(crate) fn minutes_ago(now_ms: i64, minutes: i64) -> i64 {
    now_ms - minutes * MINUTE_MS
}

pub(crate) fn hours_ago(now_ms: i64, hours: i64) -> i64 {
    now_ms - hours * HOUR_MS
}
