//! Calendar display and behavior options.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;

/// Locale identifier used when none is supplied.
pub const DEFAULT_LOCALE: &str = "en-US";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// First column of the weekday header.
pub enum WeekStart {
    /// Sunday-first weeks.
    #[default]
    Sunday,
    /// Monday-first weeks.
    Monday,
}

impl WeekStart {
    /// Weekday index (Sunday = 0) shown in the first column.
    pub fn sunday_index(self) -> u32 {
        match self {
            Self::Sunday => 0,
            Self::Monday => 1,
        }
    }

    /// Column (0..7) that `date` occupies for this week start.
    pub fn column_of(self, date: CalendarDate) -> u32 {
        (date.weekday_from_sunday() + 7 - self.sunday_index()) % 7
    }

    /// DOM token for `data-ui-*` attributes.
    pub fn token(self) -> &'static str {
        match self {
            Self::Sunday => "sunday",
            Self::Monday => "monday",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Week-number scheme for the optional week column.
pub enum WeekNumbering {
    /// ISO-8601 week of the row's first date.
    #[default]
    Iso8601,
    /// `ceil((day_of_year + jan1_weekday) / 7)`. Not correct across year boundaries.
    Approximate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Which [`SelectedValue`](crate::SelectedValue) shape a calendar accepts.
pub enum SelectionMode {
    /// One date at a time.
    #[default]
    Single,
    /// Inclusive two-endpoint ranges.
    Range,
}

impl SelectionMode {
    /// Mode for the `enable_range` flag.
    pub fn from_enable_range(enable_range: bool) -> Self {
        if enable_range {
            Self::Range
        } else {
            Self::Single
        }
    }

    /// DOM token for `data-ui-*` attributes.
    pub fn token(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Range => "range",
        }
    }
}

/// Options recognized by the calendar grid and controller.
///
/// Every field has a default so hosts can supply partial JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarOptions {
    /// Emit filler days from the adjacent months.
    pub show_outside_days: bool,
    /// Always lay out six full weeks.
    pub fixed_weeks: bool,
    /// Render a week-number column.
    pub show_week_numbers: bool,
    /// Earliest selectable date, inclusive.
    pub min_date: Option<CalendarDate>,
    /// Latest selectable date, inclusive.
    pub max_date: Option<CalendarDate>,
    /// Individually disabled dates.
    pub disabled_dates: BTreeSet<CalendarDate>,
    /// Locale identifier for labels, e.g. `en-US`.
    pub locale: String,
    /// Select ranges instead of single dates.
    pub enable_range: bool,
    /// First weekday column.
    pub week_start: WeekStart,
    /// Week-number scheme.
    pub week_numbering: WeekNumbering,
}

impl Default for CalendarOptions {
    fn default() -> Self {
        Self {
            show_outside_days: false,
            fixed_weeks: false,
            show_week_numbers: false,
            min_date: None,
            max_date: None,
            disabled_dates: BTreeSet::new(),
            locale: DEFAULT_LOCALE.to_string(),
            enable_range: false,
            week_start: WeekStart::Sunday,
            week_numbering: WeekNumbering::Iso8601,
        }
    }
}

impl CalendarOptions {
    /// Selection mode implied by `enable_range`.
    pub fn selection_mode(&self) -> SelectionMode {
        SelectionMode::from_enable_range(self.enable_range)
    }

    /// Whether `date` is unavailable for selection.
    pub fn is_disabled(&self, date: CalendarDate) -> bool {
        self.disabled_dates.contains(&date)
            || self.min_date.is_some_and(|min| date < min)
            || self.max_date.is_some_and(|max| date > max)
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
    fn partial_json_fills_defaults() {
        let options: CalendarOptions =
            serde_json::from_str(r#"{ "enable_range": true, "week_start": "monday" }"#)
                .expect("deserialize");
        assert_eq!(
            options,
            CalendarOptions {
                enable_range: true,
                week_start: WeekStart::Monday,
                ..CalendarOptions::default()
            }
        );
        assert_eq!(options.locale, "en-US");
        assert_eq!(options.selection_mode(), SelectionMode::Range);
    }

    #[test]
    fn disabled_iff_listed_or_outside_bounds() {
        let options = CalendarOptions {
            min_date: Some(date(2024, 1, 10)),
            max_date: Some(date(2024, 1, 20)),
            disabled_dates: [date(2024, 1, 15)].into_iter().collect(),
            ..CalendarOptions::default()
        };

        for day in 1..=31 {
            let candidate = date(2024, 1, day);
            let expected = day == 15 || day < 10 || day > 20;
            assert_eq!(options.is_disabled(candidate), expected, "day {day}");
        }
    }

    #[test]
    fn week_start_maps_columns() {
        let thursday = date(2024, 2, 1);
        assert_eq!(WeekStart::Sunday.column_of(thursday), 4);
        assert_eq!(WeekStart::Monday.column_of(thursday), 3);
        let sunday = date(2024, 2, 4);
        assert_eq!(WeekStart::Sunday.column_of(sunday), 0);
        assert_eq!(WeekStart::Monday.column_of(sunday), 6);
    }
}
