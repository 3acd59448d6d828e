//! Month navigation bounds and keyboard focus movement.

use crate::date::{CalendarDate, VisibleMonth};
use crate::options::WeekStart;

/// Whether `month` overlaps the inclusive `[min, max]` window.
///
/// Widgets use this to disable previous/next controls; navigation itself is unrestricted.
pub fn can_navigate_to(
    month: VisibleMonth,
    min: Option<CalendarDate>,
    max: Option<CalendarDate>,
) -> bool {
    let after_min = min.map_or(true, |min| month.last_day() >= min);
    let before_max = max.map_or(true, |max| month.first_day() <= max);
    after_min && before_max
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Keyboard-driven move of the focused grid date.
pub enum FocusMove {
    /// One day back.
    PreviousDay,
    /// One day forward.
    NextDay,
    /// Seven days back.
    PreviousWeek,
    /// Seven days forward.
    NextWeek,
    /// First column of the focused week.
    WeekStart,
    /// Last column of the focused week.
    WeekEnd,
    /// Same day, previous month.
    PreviousMonth,
    /// Same day, next month.
    NextMonth,
    /// Same day, previous year.
    PreviousYear,
    /// Same day, next year.
    NextYear,
}

impl FocusMove {
    /// Maps a DOM `KeyboardEvent.key` value (plus shift state) to a move.
    pub fn from_key(key: &str, shift: bool) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::PreviousDay),
            "ArrowRight" => Some(Self::NextDay),
            "ArrowUp" => Some(Self::PreviousWeek),
            "ArrowDown" => Some(Self::NextWeek),
            "Home" => Some(Self::WeekStart),
            "End" => Some(Self::WeekEnd),
            "PageUp" if shift => Some(Self::PreviousYear),
            "PageDown" if shift => Some(Self::NextYear),
            "PageUp" => Some(Self::PreviousMonth),
            "PageDown" => Some(Self::NextMonth),
            _ => None,
        }
    }

    /// Applies the move to `date`.
    pub fn apply(self, date: CalendarDate, week_start: WeekStart) -> CalendarDate {
        match self {
            Self::PreviousDay => date.add_days(-1),
            Self::NextDay => date.add_days(1),
            Self::PreviousWeek => date.add_days(-7),
            Self::NextWeek => date.add_days(7),
            Self::WeekStart => date.add_days(-i64::from(week_start.column_of(date))),
            Self::WeekEnd => date.add_days(6 - i64::from(week_start.column_of(date))),
            Self::PreviousMonth => date.add_months(-1),
            Self::NextMonth => date.add_months(1),
            Self::PreviousYear => date.add_months(-12),
            Self::NextYear => date.add_months(12),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::from_ymd(year, month, day).expect("valid date")
    }

    #[test]
    fn bounds_disable_months_entirely_outside_window() {
        let min = Some(date(2024, 1, 15));
        let max = Some(date(2024, 3, 1));
        assert!(!can_navigate_to(VisibleMonth::new(2023, 12), min, max));
        assert!(can_navigate_to(VisibleMonth::new(2024, 1), min, max));
        assert!(can_navigate_to(VisibleMonth::new(2024, 3), min, max));
        assert!(!can_navigate_to(VisibleMonth::new(2024, 4), min, max));
        assert!(can_navigate_to(VisibleMonth::new(1990, 4), None, None));
    }

    #[test]
    fn keys_map_to_moves() {
        assert_eq!(FocusMove::from_key("ArrowUp", false), Some(FocusMove::PreviousWeek));
        assert_eq!(FocusMove::from_key("PageDown", true), Some(FocusMove::NextYear));
        assert_eq!(FocusMove::from_key("PageDown", false), Some(FocusMove::NextMonth));
        assert_eq!(FocusMove::from_key("Tab", false), None);
    }

    #[test]
    fn moves_respect_week_start_and_month_length() {
        // 2024-02-01 is a Thursday.
        let thursday = date(2024, 2, 1);
        assert_eq!(FocusMove::WeekStart.apply(thursday, WeekStart::Sunday), date(2024, 1, 28));
        assert_eq!(FocusMove::WeekStart.apply(thursday, WeekStart::Monday), date(2024, 1, 29));
        assert_eq!(FocusMove::WeekEnd.apply(thursday, WeekStart::Sunday), date(2024, 2, 3));
        assert_eq!(FocusMove::WeekEnd.apply(thursday, WeekStart::Monday), date(2024, 2, 4));
        assert_eq!(
            FocusMove::NextMonth.apply(date(2024, 1, 31), WeekStart::Sunday),
            date(2024, 2, 29)
        );
        assert_eq!(
            FocusMove::PreviousYear.apply(date(2024, 2, 29), WeekStart::Sunday),
            date(2023, 2, 28)
        );
    }
}
