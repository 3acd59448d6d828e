//! Locale-aware labels, delegated to chrono's localized formatter.

use chrono::{DateTime, Locale, NaiveTime, TimeZone, Utc};

use crate::date::{CalendarDate, DateRange, VisibleMonth};
use crate::options::WeekStart;
use crate::selection::SelectedValue;
use crate::CalendarError;

const MONTH_CAPTION: &str = "%B %Y";
const WEEKDAY_SHORT: &str = "%a";
const DAY_LABEL: &str = "%A, %B %-d, %Y";
const SHORT_DATE: &str = "%b %-d, %Y";

/// Label formatter for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarLocale {
    locale: Locale,
}

impl Default for CalendarLocale {
    fn default() -> Self {
        Self {
            locale: Locale::en_US,
        }
    }
}

impl CalendarLocale {
    /// Resolves identifiers such as `en-US`, `en_US`, or `de-DE`.
    pub fn parse(identifier: &str) -> Result<Self, CalendarError> {
        let normalized = identifier.trim().replace('-', "_");
        Locale::try_from(normalized.as_str())
            .map(|locale| Self { locale })
            .map_err(|_| CalendarError::UnknownLocale(identifier.to_string()))
    }

    /// Caption for a visible month, e.g. `February 2024`.
    pub fn month_caption(&self, month: VisibleMonth) -> String {
        self.format(month.first_day(), MONTH_CAPTION)
    }

    /// Abbreviated weekday names in column order.
    pub fn weekday_labels(&self, week_start: WeekStart) -> Vec<String> {
        // 2023-01-01 is a Sunday.
        let sunday = CalendarDate::from_ymd_clamped(2023, 1, 1);
        (0..7)
            .map(|column| {
                let date = sunday.add_days(i64::from(week_start.sunday_index() + column));
                self.format(date, WEEKDAY_SHORT)
            })
            .collect()
    }

    /// Full accessible label for a day cell, e.g. `Thursday, February 1, 2024`.
    pub fn day_label(&self, date: CalendarDate) -> String {
        self.format(date, DAY_LABEL)
    }

    /// Compact date for trigger buttons, e.g. `Feb 1, 2024`.
    pub fn short_date(&self, date: CalendarDate) -> String {
        self.format(date, SHORT_DATE)
    }

    /// Compact range label, e.g. `Jan 15, 2024 – Jan 20, 2024`.
    pub fn short_range(&self, range: DateRange) -> String {
        if range.from() == range.to() {
            return self.short_date(range.from());
        }
        format!(
            "{} – {}",
            self.short_date(range.from()),
            self.short_date(range.to())
        )
    }

    /// Compact label for any selection; `None` when nothing is selected.
    pub fn selection_label(&self, value: &SelectedValue) -> Option<String> {
        match value {
            SelectedValue::None => None,
            SelectedValue::Single(date) => Some(self.short_date(*date)),
            SelectedValue::Range(range) => Some(self.short_range(*range)),
        }
    }

    fn format(&self, date: CalendarDate, pattern: &str) -> String {
        let midnight: DateTime<Utc> =
            Utc.from_utc_datetime(&date.as_naive().and_time(NaiveTime::default()));
        midnight.format_localized(pattern, self.locale).to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::from_ymd(year, month, day).expect("valid date")
    }

    #[test]
    fn english_labels() {
        let locale = CalendarLocale::parse("en-US").expect("known locale");
        assert_eq!(locale.month_caption(VisibleMonth::new(2024, 2)), "February 2024");
        assert_eq!(locale.day_label(date(2024, 2, 1)), "Thursday, February 1, 2024");
        assert_eq!(
            locale.weekday_labels(WeekStart::Sunday),
            vec!["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
        );
        assert_eq!(
            locale.weekday_labels(WeekStart::Monday),
            vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
        );
    }

    #[test]
    fn range_labels_collapse_single_day() {
        let locale = CalendarLocale::default();
        let range = DateRange::new(date(2024, 1, 20), date(2024, 1, 15));
        assert_eq!(locale.short_range(range), "Jan 15, 2024 – Jan 20, 2024");
        assert_eq!(
            locale.short_range(DateRange::single(date(2024, 1, 15))),
            "Jan 15, 2024"
        );
        assert_eq!(locale.selection_label(&SelectedValue::None), None);
    }

    #[test]
    fn other_locales_delegate_to_formatter() {
        let locale = CalendarLocale::parse("de_DE").expect("known locale");
        assert!(locale
            .month_caption(VisibleMonth::new(2024, 2))
            .starts_with("Februar"));
    }

    #[test]
    fn unknown_locale_is_an_error() {
        assert_eq!(
            CalendarLocale::parse("xx-YY"),
            Err(CalendarError::UnknownLocale("xx-YY".to_string()))
        );
    }
}
