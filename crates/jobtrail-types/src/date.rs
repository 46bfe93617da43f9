//! The on-disk date encoding shared by both store formats.
//!
//! Every date a store writes must decode back through this module, so
//! migrating between formats can never produce an unreadable store.

use chrono::NaiveDate;

/// Fixed ISO calendar-date encoding (`2026-08-23`).
pub const FORMAT: &str = "%Y-%m-%d";

pub fn encode(date: NaiveDate) -> String {
    date.format(FORMAT).to_string()
}

/// Decodes a stored date, rejecting anything outside the fixed format.
pub fn decode(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), FORMAT).ok()
}
