//! Date/time utilities for anonboard.
//!
//! Timestamps are stored as fixed-width UTC text with microsecond precision,
//! so ordering the column as text orders it chronologically.

use chrono::{DateTime, NaiveDateTime, SubsecRound, Utc};

use crate::{BoardError, Result};

/// Storage format for timestamps (UTC, microsecond precision).
pub const DB_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Current time, truncated to the precision that survives a storage round trip.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Format a timestamp for storage.
pub fn to_db(dt: &DateTime<Utc>) -> String {
    dt.format(DB_FORMAT).to_string()
}

/// Parse a stored timestamp.
///
/// Accepts the storage format as well as SQLite's `datetime('now')` output.
pub fn from_db(s: &str) -> Result<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(s, DB_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S"))
        .map(|naive| naive.and_utc())
        .map_err(|e| BoardError::Database(format!("invalid timestamp {s:?}: {e}")))
}
