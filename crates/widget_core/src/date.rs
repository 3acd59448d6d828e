//! Calendar-day values, inclusive ranges, and the visible-month cursor.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Error raised when an externally supplied date cannot be turned into a [`CalendarDate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// The year/month/day triple does not name a real calendar day.
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// Requested year.
        year: i32,
        /// Requested month (1-based).
        month: u32,
        /// Requested day of month.
        day: u32,
    },
    /// The input string is not an ISO `YYYY-MM-DD` date.
    #[error("unparseable date `{input}`: {reason}")]
    Parse {
        /// Raw input.
        input: String,
        /// Parser diagnostic.
        reason: String,
    },
    /// The locale identifier is not known to the date formatter.
    #[error("unknown locale `{0}`")]
    UnknownLocale(String),
}

/// A day on the proleptic Gregorian calendar. Time of day is not represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Earliest representable date.
    pub const MIN: Self = Self(NaiveDate::MIN);
    /// Latest representable date.
    pub const MAX: Self = Self(NaiveDate::MAX);

    /// Builds a date, rejecting impossible combinations such as February 30.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(CalendarError::InvalidDate { year, month, day })
    }

    /// Builds a date, clamping the month into `1..=12` and the day into the month length.
    pub fn from_ymd_clamped(year: i32, month: u32, day: u32) -> Self {
        let month = month.clamp(1, 12);
        let day = day.clamp(1, days_in_month(year, month));
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .unwrap_or(if year < 0 { Self::MIN } else { Self::MAX })
    }

    /// Parses an ISO `YYYY-MM-DD` string.
    pub fn parse(input: &str) -> Result<Self, CalendarError> {
        NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|err| CalendarError::Parse {
                input: input.to_string(),
                reason: err.to_string(),
            })
    }

    /// Current local date from the host clock.
    pub fn today() -> Self {
        Self(chrono::Local::now().date_naive())
    }

    /// Calendar year.
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Month of year (1-based).
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// Day of month (1-based).
    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Day of year (1-based).
    pub fn ordinal(self) -> u32 {
        self.0.ordinal()
    }

    /// Weekday index with Sunday as 0.
    pub fn weekday_from_sunday(self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    /// Shifts by `days`, saturating at the representable bounds.
    pub fn add_days(self, days: i64) -> Self {
        self.0
            .checked_add_signed(Duration::days(days))
            .map(Self)
            .unwrap_or(if days < 0 { Self::MIN } else { Self::MAX })
    }

    /// Shifts by whole months, clamping the day to the target month length.
    pub fn add_months(self, months: i32) -> Self {
        let target = VisibleMonth::of(self).shift(months);
        Self::from_ymd_clamped(target.year(), target.month(), self.day())
    }

    /// Underlying chrono value, for formatting and interop.
    pub fn as_naive(self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Inclusive date interval with `from <= to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    from: CalendarDate,
    to: CalendarDate,
}

#[derive(Deserialize)]
struct RawDateRange {
    from: CalendarDate,
    to: CalendarDate,
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawDateRange::deserialize(deserializer)?;
        Ok(Self::new(raw.from, raw.to))
    }
}

impl DateRange {
    /// Builds a range from two endpoints in either order.
    pub fn new(a: CalendarDate, b: CalendarDate) -> Self {
        if a <= b {
            Self { from: a, to: b }
        } else {
            Self { from: b, to: a }
        }
    }

    /// Single-day range.
    pub fn single(date: CalendarDate) -> Self {
        Self {
            from: date,
            to: date,
        }
    }

    /// Earlier endpoint.
    pub fn from(&self) -> CalendarDate {
        self.from
    }

    /// Later endpoint.
    pub fn to(&self) -> CalendarDate {
        self.to
    }

    /// Whether `date` lies inside the range, endpoints included.
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.from <= date && date <= self.to
    }

    /// Number of days covered, endpoints included.
    pub fn len_days(&self) -> i64 {
        (self.to.0 - self.from.0).num_days() + 1
    }
}

/// Year and month currently displayed by a calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct VisibleMonth {
    year: i32,
    month: u32,
}

#[derive(Deserialize)]
struct RawVisibleMonth {
    year: i32,
    month: u32,
}

impl<'de> Deserialize<'de> for VisibleMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawVisibleMonth::deserialize(deserializer)?;
        Ok(Self::new(raw.year, raw.month))
    }
}

impl VisibleMonth {
    /// Builds a visible month, clamping `month` into `1..=12`.
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month: month.clamp(1, 12),
        }
    }

    /// Month containing `date`.
    pub fn of(date: CalendarDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Calendar year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Month of year (1-based).
    pub fn month(self) -> u32 {
        self.month
    }

    /// Moves by `delta` whole months, rolling the year over at either end.
    pub fn shift(self, delta: i32) -> Self {
        let index = i64::from(self.year) * 12 + i64::from(self.month) - 1 + i64::from(delta);
        let year = index.div_euclid(12);
        let month = index.rem_euclid(12) as u32 + 1;
        Self {
            year: year.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
            month,
        }
    }

    /// Following month.
    pub fn next(self) -> Self {
        self.shift(1)
    }

    /// Preceding month.
    pub fn previous(self) -> Self {
        self.shift(-1)
    }

    /// Number of days in this month.
    pub fn days_in_month(self) -> u32 {
        days_in_month(self.year, self.month)
    }

    /// First day of this month.
    pub fn first_day(self) -> CalendarDate {
        CalendarDate::from_ymd_clamped(self.year, self.month, 1)
    }

    /// Last day of this month.
    pub fn last_day(self) -> CalendarDate {
        CalendarDate::from_ymd_clamped(self.year, self.month, self.days_in_month())
    }

    /// Whether `date` falls inside this month.
    pub fn contains(self, date: CalendarDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for VisibleMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Number of days in `month` of `year`, with `month` clamped into `1..=12`.
///
/// December of the last representable year has no following month and reports 31.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let month = month.clamp(1, 12);
    let next_first = match month {
        12 => NaiveDate::from_ymd_opt(year.saturating_add(1), 1, 1),
        _ => NaiveDate::from_ymd_opt(year, month + 1, 1),
    };
    next_first
        .and_then(|first| first.pred_opt())
        .map_or(31, |last| last.day())
}

/// Gregorian leap-year rule. Years chrono cannot represent report `false`.
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 1, 1).is_some_and(|first| first.leap_year())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::from_ymd(year, month, day).expect("valid date")
    }

    #[test]
    fn rejects_impossible_days_and_clamps_on_request() {
        assert_eq!(
            CalendarDate::from_ymd(2023, 2, 30),
            Err(CalendarError::InvalidDate {
                year: 2023,
                month: 2,
                day: 30
            })
        );
        assert_eq!(CalendarDate::from_ymd_clamped(2023, 2, 30), date(2023, 2, 28));
        assert_eq!(CalendarDate::from_ymd_clamped(2024, 2, 30), date(2024, 2, 29));
        assert_eq!(CalendarDate::from_ymd_clamped(2024, 13, 0), date(2024, 12, 1));
    }

    #[test]
    fn parses_iso_dates_and_reports_garbage() {
        assert_eq!(CalendarDate::parse(" 2024-01-15 "), Ok(date(2024, 1, 15)));
        assert_eq!("2024-02-29".parse::<CalendarDate>(), Ok(date(2024, 2, 29)));
        let err = CalendarDate::parse("2023-02-29").expect_err("not a leap year");
        assert!(matches!(err, CalendarError::Parse { .. }));
        assert!(CalendarDate::parse("next tuesday").is_err());
    }

    #[test]
    fn displays_and_serializes_as_iso() {
        let value = date(2024, 3, 9);
        assert_eq!(value.to_string(), "2024-03-09");
        assert_eq!(
            serde_json::to_string(&value).expect("serialize"),
            "\"2024-03-09\""
        );
    }

    #[test]
    fn range_orders_endpoints() {
        let early = date(2024, 1, 15);
        let late = date(2024, 1, 20);
        assert_eq!(DateRange::new(late, early), DateRange::new(early, late));
        let range = DateRange::new(late, early);
        assert_eq!(range.from(), early);
        assert_eq!(range.to(), late);
        assert_eq!(range.len_days(), 6);
        assert!(range.contains(date(2024, 1, 17)));
        assert!(!range.contains(date(2024, 1, 21)));
    }

    #[test]
    fn deserialized_range_is_reordered() {
        let range: DateRange =
            serde_json::from_str(r#"{ "from": "2024-01-20", "to": "2024-01-15" }"#)
                .expect("deserialize");
        assert_eq!(range.from(), date(2024, 1, 15));
        assert_eq!(range.to(), date(2024, 1, 20));
    }

    #[test]
    fn month_shift_rolls_over_year_boundaries() {
        let december = VisibleMonth::new(2023, 12);
        assert_eq!(december.next(), VisibleMonth::new(2024, 1));
        assert_eq!(VisibleMonth::new(2024, 1).previous(), december);
        assert_eq!(december.shift(-24), VisibleMonth::new(2021, 12));
        assert_eq!(december.shift(13), VisibleMonth::new(2025, 1));
    }

    #[test]
    fn next_then_previous_is_identity_for_every_month() {
        for year in [1999, 2000, 2023, 2024] {
            for month in 1..=12 {
                let visible = VisibleMonth::new(year, month);
                assert_eq!(visible.next().previous(), visible);
                assert_eq!(visible.previous().next(), visible);
            }
        }
    }

    #[test]
    fn add_months_clamps_day() {
        assert_eq!(date(2024, 1, 31).add_months(1), date(2024, 2, 29));
        assert_eq!(date(2024, 3, 31).add_months(-1), date(2024, 2, 29));
        assert_eq!(date(2024, 12, 15).add_months(1), date(2025, 1, 15));
    }

    #[test]
    fn days_in_month_follows_leap_rules() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2023, 4), 30);
        assert_eq!(VisibleMonth::new(2024, 2).last_day(), date(2024, 2, 29));
    }

    #[test]
    fn month_lengths_come_from_chrono_at_the_edges() {
        assert_eq!(days_in_month(2023, 12), 31);
        assert_eq!(days_in_month(2023, 11), 30);
        assert_eq!(days_in_month(2023, 13), 31);
        assert_eq!(days_in_month(2023, 0), 31);
        assert_eq!(days_in_month(CalendarDate::MAX.year(), 12), 31);
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn deserialized_visible_month_is_clamped() {
        let late: VisibleMonth =
            serde_json::from_str(r#"{ "year": 2024, "month": 13 }"#).expect("deserialize");
        assert_eq!(late, VisibleMonth::new(2024, 12));
        assert_eq!(late.days_in_month(), 31);
        assert!(late.contains(date(2024, 12, 31)));

        let early: VisibleMonth =
            serde_json::from_str(r#"{ "year": 2024, "month": 0 }"#).expect("deserialize");
        assert_eq!(early, VisibleMonth::new(2024, 1));
        assert_eq!(early.next(), VisibleMonth::new(2024, 2));
        assert_eq!(early.previous(), VisibleMonth::new(2023, 12));
    }
}
