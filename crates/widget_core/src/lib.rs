//! Headless calendar and form-field logic for the widget library.
//!
//! This crate owns everything the widgets compute rather than render: calendar dates and
//! ranges, the month grid, range selection, month navigation and keyboard focus, locale
//! labels, and text-field validation. It has no DOM dependency so it runs in native tests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod controller;
mod date;
mod grid;
mod locale;
mod navigation;
mod options;
mod selection;
mod validation;
mod week;

pub use controller::{CalendarController, CalendarEffect};
pub use date::{days_in_month, is_leap_year, CalendarDate, CalendarError, DateRange, VisibleMonth};
pub use grid::{
    GridCalculator, GridCell, GridRow, GridSlot, MonthGrid, DAYS_PER_WEEK, FIXED_GRID_SLOTS,
};
pub use locale::CalendarLocale;
pub use navigation::{can_navigate_to, FocusMove};
pub use options::{CalendarOptions, SelectionMode, WeekNumbering, WeekStart, DEFAULT_LOCALE};
pub use selection::{RangeSelectionState, RangeSelectionTracker, SelectedValue};
pub use validation::{
    pattern_for, pattern_table, CustomValidator, PatternEntry, PatternRule, ValidationError,
    ValidationKind, ValidationRules,
};
pub use week::{approximate_week, iso_week, week_number};
