//! Day-offset calendar conversion
//!
//! `DATE` cells store an i32 count of days since 1970-01-01. These helpers
//! convert between that storage form and [`chrono::NaiveDate`]. The offset
//! type is wider than the calendar: i32 day-offsets span about 5.8 million
//! years while chrono covers about 262 thousand, so [`from_day_offset`] is
//! fallible and [`to_day_offset`] is total.

use chrono::{Datelike, Days, NaiveDate};

/// The day-offset origin, 1970-01-01.
pub const EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(1970, 1, 1) {
    Some(d) => d,
    None => panic!("1970-01-01 is a valid date"),
};

/// Convert a stored day-offset to a calendar date.
///
/// Returns `None` when the offset lands outside chrono's calendar range.
///
/// # Examples
///
/// ```
/// use seriate::date;
///
/// assert_eq!(date::from_day_offset(0), Some(date::EPOCH));
/// assert_eq!(date::from_day_offset(i32::MAX), None);
/// ```
pub fn from_day_offset(offset: i32) -> Option<NaiveDate> {
    if offset >= 0 {
        EPOCH.checked_add_days(Days::new(offset as u64))
    } else {
        EPOCH.checked_sub_days(Days::new(u64::from(offset.unsigned_abs())))
    }
}

/// Convert a calendar date to its stored day-offset.
///
/// Total: every chrono date is within i32 days of the epoch.
pub fn to_day_offset(date: NaiveDate) -> i32 {
    date.num_days_from_ce() - EPOCH.num_days_from_ce()
}
