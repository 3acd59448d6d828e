//! Selection values and the click-driven range tracker.

use serde::{Deserialize, Serialize};

use crate::date::{CalendarDate, DateRange};
use crate::options::SelectionMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
/// Current calendar selection.
pub enum SelectedValue {
    /// Nothing selected.
    #[default]
    None,
    /// One selected date.
    Single(CalendarDate),
    /// Inclusive selected range.
    Range(DateRange),
}

impl SelectedValue {
    /// Coerces the value into the shape `mode` accepts.
    ///
    /// `Single(d)` becomes `Range{d, d}` in range mode; a range becomes `Single(from)` in
    /// single mode.
    pub fn conform_to(self, mode: SelectionMode) -> Self {
        match (mode, self) {
            (_, Self::None) => Self::None,
            (SelectionMode::Single, Self::Range(range)) => Self::Single(range.from()),
            (SelectionMode::Range, Self::Single(date)) => Self::Range(DateRange::single(date)),
            (_, value) => value,
        }
    }

    /// Date a calendar should bring into view for this selection.
    pub fn anchor(&self) -> Option<CalendarDate> {
        match self {
            Self::None => None,
            Self::Single(date) => Some(*date),
            Self::Range(range) => Some(range.from()),
        }
    }

    /// Whether nothing is selected.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Selected single date, if any.
    pub fn as_single(&self) -> Option<CalendarDate> {
        match self {
            Self::Single(date) => Some(*date),
            _ => None,
        }
    }

    /// Selected range, if any.
    pub fn as_range(&self) -> Option<DateRange> {
        match self {
            Self::Range(range) => Some(*range),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Progress of an in-flight range selection.
pub enum RangeSelectionState {
    /// No pending start; the next click starts a new range.
    #[default]
    Idle,
    /// First endpoint chosen; the next click completes the range.
    Pending(CalendarDate),
}

/// Two-click range accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RangeSelectionTracker {
    state: RangeSelectionState,
}

impl RangeSelectionTracker {
    /// Current tracker state.
    pub fn state(&self) -> RangeSelectionState {
        self.state
    }

    /// Pending start date, if a range is half chosen.
    pub fn pending_start(&self) -> Option<CalendarDate> {
        match self.state {
            RangeSelectionState::Idle => None,
            RangeSelectionState::Pending(start) => Some(start),
        }
    }

    /// Feeds a click on an enabled date and returns the resulting range.
    pub fn click(&mut self, date: CalendarDate) -> DateRange {
        match self.state {
            RangeSelectionState::Idle => {
                self.state = RangeSelectionState::Pending(date);
                DateRange::single(date)
            }
            RangeSelectionState::Pending(start) => {
                self.state = RangeSelectionState::Idle;
                DateRange::new(start, date)
            }
        }
    }

    /// Drops any pending start.
    pub fn reset(&mut self) {
        self.state = RangeSelectionState::Idle;
    }
}
