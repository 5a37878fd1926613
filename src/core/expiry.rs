//! Freshness classification. Everything here is a pure function of its date
//! arguments; callers supply "today" from a [`Clock`](crate::domain::ports::Clock).

use crate::domain::model::ExpiryStatus;
use chrono::{NaiveDate, NaiveDateTime};

/// Inclusive upper bound, in days, of the expiring window.
pub const EXPIRING_WINDOW_DAYS: i64 = 3;

/// Signed whole days from `reference` to `expiry`; negative once the date has passed.
pub fn days_until(expiry: NaiveDate, reference: NaiveDate) -> i64 {
    expiry.signed_duration_since(reference).num_days()
}

/// Like [`days_until`], ignoring the time of day of `now`.
pub fn days_until_at(expiry: NaiveDate, now: NaiveDateTime) -> i64 {
    days_until(expiry, now.date())
}

pub fn classify(expiry: NaiveDate, reference: NaiveDate) -> ExpiryStatus {
    let days = days_until(expiry, reference);
    if days < 0 {
        ExpiryStatus::Expired(days.unsigned_abs() as u32)
    } else if days <= EXPIRING_WINDOW_DAYS {
        ExpiryStatus::Expiring(days as u32)
    } else {
        ExpiryStatus::Fresh(days.min(u32::MAX as i64) as u32)
    }
}
