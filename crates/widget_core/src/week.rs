//! Week-number derivation for calendar rows.

use chrono::Datelike;

use crate::date::CalendarDate;
use crate::options::WeekNumbering;

/// Week number of the row whose first date is `row_start`.
pub fn week_number(row_start: CalendarDate, numbering: WeekNumbering) -> u32 {
    match numbering {
        WeekNumbering::Iso8601 => iso_week(row_start),
        WeekNumbering::Approximate => approximate_week(row_start),
    }
}

/// ISO-8601 week (1..=53). Early-January dates may belong to the previous year's last week.
pub fn iso_week(date: CalendarDate) -> u32 {
    date.as_naive().iso_week().week()
}

/// `ceil((day_of_year + jan1_weekday) / 7)` with Sunday as weekday 0.
pub fn approximate_week(date: CalendarDate) -> u32 {
    let jan1 = CalendarDate::from_ymd_clamped(date.year(), 1, 1);
    let offset = jan1.weekday_from_sunday();
    (date.ordinal() + offset).div_ceil(7)
}
