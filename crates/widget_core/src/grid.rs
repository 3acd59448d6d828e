//! Month grid computation: filler days, current-month days, and per-cell state.
//!
//! The grid is a pure projection of `(visible month, options, selection, today)`. Nothing
//! here is cached; callers recompute on every render and may memoize if they like.

use serde::Serialize;

use crate::date::{CalendarDate, VisibleMonth};
use crate::options::CalendarOptions;
use crate::selection::SelectedValue;
use crate::week::week_number;

/// Columns per grid row.
pub const DAYS_PER_WEEK: u32 = 7;
/// Slot count of a fixed six-week grid.
pub const FIXED_GRID_SLOTS: u32 = 42;

/// One rendered day in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridCell {
    /// Day this cell represents.
    pub date: CalendarDate,
    /// Column (0..7) relative to the configured week start.
    pub column: u32,
    /// Filler day from an adjacent month.
    pub is_outside_month: bool,
    /// Equals a single-date selection.
    pub is_selected: bool,
    /// First endpoint of a range selection.
    pub is_range_start: bool,
    /// Last endpoint of a range selection.
    pub is_range_end: bool,
    /// Inside a range selection, endpoints included.
    pub is_in_range: bool,
    /// Not selectable.
    pub is_disabled: bool,
    /// Host's current date.
    pub is_today: bool,
}

/// A position in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GridSlot {
    /// Slot that renders a day.
    Day(GridCell),
    /// Reserved slot with nothing rendered (hidden outside day).
    Placeholder,
}

impl GridSlot {
    /// Cell in this slot, if any.
    pub fn cell(&self) -> Option<&GridCell> {
        match self {
            Self::Day(cell) => Some(cell),
            Self::Placeholder => None,
        }
    }
}

/// A week row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridRow {
    /// Date at the row's first column, rendered or not.
    pub start: CalendarDate,
    /// Week number when week numbers are enabled.
    pub week_number: Option<u32>,
    /// Exactly seven slots.
    pub slots: Vec<GridSlot>,
}

/// Computed grid for one visible month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    /// Month this grid paints.
    pub month: VisibleMonth,
    /// Week rows in display order.
    pub rows: Vec<GridRow>,
    /// Number of previous-month slots before the 1st.
    pub leading_filler: u32,
    /// Number of next-month slots after the last day.
    pub trailing_filler: u32,
}

impl MonthGrid {
    /// Total reserved slots, placeholders included.
    pub fn slot_count(&self) -> usize {
        self.rows.iter().map(|row| row.slots.len()).sum()
    }

    /// Every rendered cell in display order.
    pub fn cells(&self) -> impl Iterator<Item = &GridCell> + '_ {
        self.rows
            .iter()
            .flat_map(|row| row.slots.iter())
            .filter_map(GridSlot::cell)
    }

    /// Rendered cells belonging to the visible month.
    pub fn month_cells(&self) -> impl Iterator<Item = &GridCell> + '_ {
        self.cells().filter(|cell| !cell.is_outside_month)
    }

    /// Rendered cell for `date`, if present.
    pub fn cell_for(&self, date: CalendarDate) -> Option<&GridCell> {
        self.cells().find(|cell| cell.date == date)
    }
}

/// Builds [`MonthGrid`]s from calendar options.
#[derive(Debug, Clone, Copy)]
pub struct GridCalculator<'a> {
    options: &'a CalendarOptions,
    today: Option<CalendarDate>,
}

impl<'a> GridCalculator<'a> {
    /// Calculator for `options` with no today highlight.
    pub fn new(options: &'a CalendarOptions) -> Self {
        Self {
            options,
            today: None,
        }
    }

    /// Marks `today` on the computed cells.
    pub fn with_today(mut self, today: CalendarDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Computes the grid for `month` with the given selection.
    pub fn compute(&self, month: VisibleMonth, selected: &SelectedValue) -> MonthGrid {
        let options = self.options;
        let days_in_month = month.days_in_month();
        let first = month.first_day();
        let offset = options.week_start.column_of(first);
        let total = if options.fixed_weeks {
            FIXED_GRID_SLOTS
        } else {
            (offset + days_in_month).div_ceil(DAYS_PER_WEEK) * DAYS_PER_WEEK
        };
        let grid_start = first.add_days(-i64::from(offset));

        let rows = (0..total / DAYS_PER_WEEK)
            .map(|row| {
                let start = grid_start.add_days(i64::from(row * DAYS_PER_WEEK));
                let slots = (0..DAYS_PER_WEEK)
                    .map(|column| {
                        let date = start.add_days(i64::from(column));
                        if month.contains(date) {
                            GridSlot::Day(self.month_cell(date, column, selected))
                        } else if options.show_outside_days {
                            GridSlot::Day(self.filler_cell(date, column))
                        } else {
                            GridSlot::Placeholder
                        }
                    })
                    .collect();
                GridRow {
                    start,
                    week_number: options
                        .show_week_numbers
                        .then(|| week_number(start, options.week_numbering)),
                    slots,
                }
            })
            .collect();

        MonthGrid {
            month,
            rows,
            leading_filler: offset,
            trailing_filler: total - offset - days_in_month,
        }
    }

    fn month_cell(&self, date: CalendarDate, column: u32, selected: &SelectedValue) -> GridCell {
        let (is_selected, is_in_range, is_range_start, is_range_end) = match selected {
            SelectedValue::None => (false, false, false, false),
            SelectedValue::Single(value) => (*value == date, false, false, false),
            SelectedValue::Range(range) => (
                false,
                range.contains(date),
                range.from() == date,
                range.to() == date,
            ),
        };

        GridCell {
            date,
            column,
            is_outside_month: false,
            is_selected,
            is_range_start,
            is_range_end,
            is_in_range,
            is_disabled: self.options.is_disabled(date),
            is_today: self.today == Some(date),
        }
    }

    fn filler_cell(&self, date: CalendarDate, column: u32) -> GridCell {
        GridCell {
            date,
            column,
            is_outside_month: true,
            is_selected: false,
            is_range_start: false,
            is_range_end: false,
            is_in_range: false,
            is_disabled: true,
            is_today: self.today == Some(date),
        }
    }
}
