//! Calendar interaction state and transitions.
//!
//! [`CalendarController`] owns the visible month, the selection, the range tracker, and the
//! keyboard focus date for one calendar instance. Each transition returns the
//! [`CalendarEffect`]s the widget layer must forward to host callbacks, in order.

use crate::date::{CalendarDate, VisibleMonth};
use crate::grid::{GridCalculator, MonthGrid};
use crate::navigation::FocusMove;
use crate::options::{CalendarOptions, SelectionMode};
use crate::selection::{RangeSelectionTracker, SelectedValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Host-facing intents emitted by [`CalendarController`] transitions.
pub enum CalendarEffect {
    /// Selection changed; forward to `on_select`.
    Select(SelectedValue),
    /// An enabled day was clicked; forward to `on_day_click`.
    DayClick(CalendarDate),
    /// Visible month changed; forward to `on_month_change`.
    MonthChange(VisibleMonth),
    /// Keyboard focus should move to this date's cell.
    FocusDate(CalendarDate),
}

/// Explicit owned state of one calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarController {
    mode: SelectionMode,
    visible: VisibleMonth,
    selected: SelectedValue,
    tracker: RangeSelectionTracker,
    focused: CalendarDate,
}

impl CalendarController {
    /// Creates a controller showing the selection's month, or `today`'s month when empty.
    ///
    /// A selection touching a disabled or out-of-bounds date is dropped.
    pub fn new(options: &CalendarOptions, selected: SelectedValue, today: CalendarDate) -> Self {
        let mode = options.selection_mode();
        let selected = admissible(selected.conform_to(mode), options);
        let anchor = selected.anchor().unwrap_or(today);
        Self {
            mode,
            visible: VisibleMonth::of(anchor),
            selected,
            tracker: RangeSelectionTracker::default(),
            focused: anchor,
        }
    }

    /// Active selection mode.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Month currently displayed.
    pub fn visible_month(&self) -> VisibleMonth {
        self.visible
    }

    /// Current selection.
    pub fn selected(&self) -> SelectedValue {
        self.selected
    }

    /// Pending first endpoint while a range is half chosen.
    pub fn pending_start(&self) -> Option<CalendarDate> {
        self.tracker.pending_start()
    }

    /// Date holding the roving tab stop.
    pub fn focused_date(&self) -> CalendarDate {
        self.focused
    }

    /// Handles a click on `date`.
    ///
    /// Disabled dates and filler days outside the visible month are ignored and produce no
    /// effects. Otherwise emits `Select` then `DayClick`.
    pub fn click_day(
        &mut self,
        date: CalendarDate,
        options: &CalendarOptions,
    ) -> Vec<CalendarEffect> {
        if !self.visible.contains(date) || options.is_disabled(date) {
            return Vec::new();
        }

        let value = match self.mode {
            SelectionMode::Single => SelectedValue::Single(date),
            SelectionMode::Range => SelectedValue::Range(self.tracker.click(date)),
        };
        self.selected = value;
        self.focused = date;
        vec![CalendarEffect::Select(value), CalendarEffect::DayClick(date)]
    }

    /// Moves the visible month by `delta` months. The selection is untouched.
    pub fn navigate(&mut self, delta: i32) -> Vec<CalendarEffect> {
        if delta == 0 {
            return Vec::new();
        }
        self.visible = self.visible.shift(delta);
        self.focused = self.focused.add_months(delta);
        if !self.visible.contains(self.focused) {
            self.focused = self.visible.first_day();
        }
        vec![CalendarEffect::MonthChange(self.visible)]
    }

    /// Moves keyboard focus, following it into adjacent months when needed.
    pub fn move_focus(
        &mut self,
        movement: FocusMove,
        options: &CalendarOptions,
    ) -> Vec<CalendarEffect> {
        let next = movement.apply(self.focused, options.week_start);
        self.focused = next;

        let mut effects = Vec::with_capacity(2);
        if !self.visible.contains(next) {
            self.visible = VisibleMonth::of(next);
            effects.push(CalendarEffect::MonthChange(self.visible));
        }
        effects.push(CalendarEffect::FocusDate(next));
        effects
    }

    /// Treats the focused date as clicked (Enter/Space).
    pub fn activate_focused(&mut self, options: &CalendarOptions) -> Vec<CalendarEffect> {
        self.click_day(self.focused, options)
    }

    /// Points keyboard focus at `date` without emitting effects (pointer focus).
    pub fn set_focused(&mut self, date: CalendarDate) {
        if self.visible.contains(date) {
            self.focused = date;
        }
    }

    /// Reconfigures range mode, dropping any pending range start.
    pub fn set_range_mode(&mut self, enabled: bool) {
        self.mode = SelectionMode::from_enable_range(enabled);
        self.tracker.reset();
        self.selected = self.selected.conform_to(self.mode);
    }

    /// Adopts a selection supplied by the host.
    ///
    /// Values equal to the current selection are ignored so a host echoing `on_select` back
    /// does not interrupt a range in progress. A different value resets the tracker and
    /// brings its month into view. Values touching a disabled date are adopted as `None`.
    pub fn sync_selected(&mut self, value: SelectedValue, options: &CalendarOptions) {
        let value = admissible(value.conform_to(self.mode), options);
        if value == self.selected {
            return;
        }
        self.selected = value;
        self.tracker.reset();
        if let Some(anchor) = value.anchor() {
            self.visible = VisibleMonth::of(anchor);
            self.focused = anchor;
        }
    }

    /// Grid for the current state.
    pub fn grid(&self, options: &CalendarOptions, today: Option<CalendarDate>) -> MonthGrid {
        let calculator = GridCalculator::new(options);
        let calculator = match today {
            Some(today) => calculator.with_today(today),
            None => calculator,
        };
        calculator.compute(self.visible, &self.selected)
    }
}

/// `value`, or `None` when a selected date or range endpoint is disabled.
fn admissible(value: SelectedValue, options: &CalendarOptions) -> SelectedValue {
    let blocked = match value {
        SelectedValue::None => false,
        SelectedValue::Single(date) => options.is_disabled(date),
        SelectedValue::Range(range) => {
            options.is_disabled(range.from()) || options.is_disabled(range.to())
        }
    };
    if blocked {
        SelectedValue::None
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::date::DateRange;

    fn date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::from_ymd(year, month, day).expect("valid date")
    }

    fn range_options() -> CalendarOptions {
        CalendarOptions {
            enable_range: true,
            ..CalendarOptions::default()
        }
    }

    fn selections(effects: &[CalendarEffect]) -> Vec<SelectedValue> {
        effects
            .iter()
            .filter_map(|effect| match effect {
                CalendarEffect::Select(value) => Some(*value),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn starts_on_selection_month_or_today() {
        let options = CalendarOptions::default();
        let today = date(2024, 6, 12);
        let empty = CalendarController::new(&options, SelectedValue::None, today);
        assert_eq!(empty.visible_month(), VisibleMonth::new(2024, 6));

        let chosen = CalendarController::new(
            &options,
            SelectedValue::Single(date(2023, 11, 2)),
            today,
        );
        assert_eq!(chosen.visible_month(), VisibleMonth::new(2023, 11));
        assert_eq!(chosen.focused_date(), date(2023, 11, 2));
    }

    #[test]
    fn single_click_emits_select_then_day_click() {
        let options = CalendarOptions::default();
        let mut controller =
            CalendarController::new(&options, SelectedValue::None, date(2024, 1, 1));
        let effects = controller.click_day(date(2024, 1, 9), &options);
        assert_eq!(
            effects,
            vec![
                CalendarEffect::Select(SelectedValue::Single(date(2024, 1, 9))),
                CalendarEffect::DayClick(date(2024, 1, 9)),
            ]
        );
        assert_eq!(controller.selected(), SelectedValue::Single(date(2024, 1, 9)));
    }

    #[test]
    fn range_clicks_in_reverse_order_normalize() {
        let options = range_options();
        let mut controller =
            CalendarController::new(&options, SelectedValue::None, date(2024, 1, 1));

        let first = controller.click_day(date(2024, 1, 20), &options);
        assert_eq!(
            selections(&first),
            vec![SelectedValue::Range(DateRange::single(date(2024, 1, 20)))]
        );
        assert_eq!(controller.pending_start(), Some(date(2024, 1, 20)));

        let second = controller.click_day(date(2024, 1, 15), &options);
        let expected = SelectedValue::Range(DateRange::new(date(2024, 1, 15), date(2024, 1, 20)));
        assert_eq!(
            second,
            vec![
                CalendarEffect::Select(expected),
                CalendarEffect::DayClick(date(2024, 1, 15)),
            ]
        );
        assert_eq!(controller.selected(), expected);
        assert_eq!(controller.pending_start(), None);
    }

    #[test]
    fn clicking_before_min_date_is_a_no_op() {
        let options = CalendarOptions {
            min_date: Some(date(2024, 1, 15)),
            ..CalendarOptions::default()
        };
        let mut controller =
            CalendarController::new(&options, SelectedValue::None, date(2024, 1, 1));
        let effects = controller.click_day(date(2024, 1, 14), &options);
        assert!(effects.is_empty());
        assert_eq!(controller.selected(), SelectedValue::None);
    }

    #[test]
    fn disabled_click_does_not_disturb_pending_range() {
        let options = CalendarOptions {
            disabled_dates: [date(2024, 1, 18)].into_iter().collect(),
            ..range_options()
        };
        let mut controller =
            CalendarController::new(&options, SelectedValue::None, date(2024, 1, 1));
        controller.click_day(date(2024, 1, 10), &options);
        let before = controller.selected();

        assert!(controller.click_day(date(2024, 1, 18), &options).is_empty());
        assert_eq!(controller.selected(), before);
        assert_eq!(controller.pending_start(), Some(date(2024, 1, 10)));
    }

    #[test]
    fn filler_days_are_not_clickable() {
        let options = CalendarOptions {
            show_outside_days: true,
            ..CalendarOptions::default()
        };
        let mut controller =
            CalendarController::new(&options, SelectedValue::None, date(2024, 2, 10));
        assert!(controller.click_day(date(2024, 1, 31), &options).is_empty());
        assert_eq!(controller.visible_month(), VisibleMonth::new(2024, 2));
    }

    #[test]
    fn navigation_round_trips_and_keeps_selection() {
        let options = CalendarOptions::default();
        let selected = SelectedValue::Single(date(2023, 12, 24));
        let mut controller = CalendarController::new(&options, selected, date(2024, 1, 1));

        assert_eq!(
            controller.navigate(1),
            vec![CalendarEffect::MonthChange(VisibleMonth::new(2024, 1))]
        );
        assert_eq!(
            controller.navigate(-1),
            vec![CalendarEffect::MonthChange(VisibleMonth::new(2023, 12))]
        );
        assert_eq!(controller.selected(), selected);
        assert!(controller.navigate(0).is_empty());
    }

    #[test]
    fn keyboard_focus_crossing_month_emits_month_change() {
        let options = CalendarOptions::default();
        let mut controller = CalendarController::new(
            &options,
            SelectedValue::Single(date(2024, 1, 31)),
            date(2024, 1, 1),
        );
        let effects = controller.move_focus(FocusMove::NextDay, &options);
        assert_eq!(
            effects,
            vec![
                CalendarEffect::MonthChange(VisibleMonth::new(2024, 2)),
                CalendarEffect::FocusDate(date(2024, 2, 1)),
            ]
        );

        let effects = controller.move_focus(FocusMove::NextDay, &options);
        assert_eq!(effects, vec![CalendarEffect::FocusDate(date(2024, 2, 2))]);

        let effects = controller.activate_focused(&options);
        assert_eq!(
            selections(&effects),
            vec![SelectedValue::Single(date(2024, 2, 2))]
        );
    }

    #[test]
    fn switching_range_mode_resets_pending_start() {
        let options = range_options();
        let mut controller =
            CalendarController::new(&options, SelectedValue::None, date(2024, 1, 1));
        controller.click_day(date(2024, 1, 3), &options);
        assert!(controller.pending_start().is_some());

        controller.set_range_mode(false);
        assert_eq!(controller.pending_start(), None);
        assert_eq!(controller.mode(), SelectionMode::Single);
        assert_eq!(controller.selected(), SelectedValue::Single(date(2024, 1, 3)));
    }

    #[test]
    fn host_echo_does_not_interrupt_range_but_new_value_does() {
        let options = range_options();
        let mut controller =
            CalendarController::new(&options, SelectedValue::None, date(2024, 1, 1));
        let effects = controller.click_day(date(2024, 1, 5), &options);
        let echoed = selections(&effects)[0];

        controller.sync_selected(echoed, &options);
        assert_eq!(controller.pending_start(), Some(date(2024, 1, 5)));

        let external = SelectedValue::Range(DateRange::new(date(2024, 3, 1), date(2024, 3, 4)));
        controller.sync_selected(external, &options);
        assert_eq!(controller.pending_start(), None);
        assert_eq!(controller.visible_month(), VisibleMonth::new(2024, 3));
    }

    #[test]
    fn grid_reflects_controller_state() {
        let options = range_options();
        let mut controller =
            CalendarController::new(&options, SelectedValue::None, date(2024, 1, 1));
        controller.click_day(date(2024, 1, 20), &options);
        controller.click_day(date(2024, 1, 15), &options);
        let grid = controller.grid(&options, Some(date(2024, 1, 1)));
        assert_eq!(grid.month_cells().filter(|cell| cell.is_in_range).count(), 6);
        assert!(grid.cell_for(date(2024, 1, 1)).is_some_and(|cell| cell.is_today));
    }

    fn bounded_options() -> CalendarOptions {
        CalendarOptions {
            min_date: Some(date(2024, 1, 15)),
            max_date: Some(date(2024, 1, 25)),
            disabled_dates: [date(2024, 1, 20)].into_iter().collect(),
            ..CalendarOptions::default()
        }
    }

    #[test]
    fn initial_selection_outside_bounds_is_dropped() {
        let options = bounded_options();
        let today = date(2024, 1, 17);
        let controller =
            CalendarController::new(&options, SelectedValue::Single(date(2024, 1, 14)), today);
        assert_eq!(controller.selected(), SelectedValue::None);
        assert_eq!(controller.visible_month(), VisibleMonth::new(2024, 1));
        assert_eq!(controller.focused_date(), today);

        let grid = controller.grid(&options, None);
        let before_min = grid.cell_for(date(2024, 1, 14)).expect("cell in month");
        assert!(before_min.is_disabled);
        assert!(!before_min.is_selected);

        let range = SelectedValue::Range(DateRange::new(date(2024, 1, 16), date(2024, 1, 26)));
        let ranged = CalendarController::new(
            &CalendarOptions {
                enable_range: true,
                ..bounded_options()
            },
            range,
            today,
        );
        assert_eq!(ranged.selected(), SelectedValue::None);
    }

    #[test]
    fn host_selection_on_disabled_date_is_dropped() {
        let options = bounded_options();
        let mut controller =
            CalendarController::new(&options, SelectedValue::None, date(2024, 1, 17));
        controller.sync_selected(SelectedValue::Single(date(2024, 1, 20)), &options);
        assert_eq!(controller.selected(), SelectedValue::None);

        controller.click_day(date(2024, 1, 18), &options);
        controller.sync_selected(SelectedValue::Single(date(2024, 2, 1)), &options);
        assert_eq!(controller.selected(), SelectedValue::None);
        assert_eq!(controller.visible_month(), VisibleMonth::new(2024, 1));

        controller.sync_selected(SelectedValue::Single(date(2024, 1, 22)), &options);
        assert_eq!(controller.selected(), SelectedValue::Single(date(2024, 1, 22)));
    }
}
