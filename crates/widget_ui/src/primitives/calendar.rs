use widget_core::{
    can_navigate_to, CalendarController, CalendarDate, CalendarEffect, CalendarLocale,
    CalendarOptions, FocusMove, GridCell, GridRow, GridSlot, SelectedValue, SelectionMode,
    VisibleMonth, DEFAULT_LOCALE,
};

use crate::focus::{focus_html_element, focus_within};

use super::*;

fn focus_day(grid_ref: NodeRef<html::Table>, date: CalendarDate) {
    request_animation_frame(move || {
        if let Some(grid) = grid_ref.get_untracked() {
            focus_within(&grid, &format!("button[data-ui-date=\"{date}\"]"));
        }
    });
}

/// Parses `identifier`, warning and falling back to [`DEFAULT_LOCALE`] when it is unknown.
fn resolve_locale(identifier: &str) -> CalendarLocale {
    CalendarLocale::parse(identifier).unwrap_or_else(|err| {
        logging::warn!("calendar locale fallback to {DEFAULT_LOCALE}: {err}");
        CalendarLocale::default()
    })
}

#[component]
/// Month-view calendar with single or range selection.
///
/// Interaction state lives in a [`CalendarController`]; every transition's effects are
/// forwarded to the host callbacks in order. The grid is a WAI-ARIA `grid` with a roving
/// tab stop: arrow keys move by day/week, Home/End to the week edges, PageUp/PageDown by
/// month, and Shift+PageUp/PageDown by year. Pointer and Enter/Space activation both go
/// through the day button's click.
pub fn Calendar(
    /// Static configuration; `enable_range` may be overridden reactively below.
    #[prop(optional)]
    options: CalendarOptions,
    /// Switches range mode after mount. Changing it resets any half-chosen range.
    #[prop(optional, into)]
    enable_range: Option<MaybeSignal<bool>>,
    /// Host-controlled selection. Echoes of values the calendar just emitted are ignored.
    #[prop(optional, into)]
    selected: Option<MaybeSignal<SelectedValue>>,
    /// Date highlighted as today; defaults to the local date.
    #[prop(optional)]
    today: Option<CalendarDate>,
    /// Focus the roving tab stop on mount.
    #[prop(optional)]
    autofocus: bool,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] on_select: Option<Callback<SelectedValue>>,
    #[prop(optional)] on_day_click: Option<Callback<CalendarDate>>,
    #[prop(optional)] on_month_change: Option<Callback<VisibleMonth>>,
) -> impl IntoView {
    let locale = resolve_locale(&options.locale);
    let today = today.unwrap_or_else(CalendarDate::today);
    let week_start = options.week_start;
    let show_week_numbers = options.show_week_numbers;
    let (min_date, max_date) = (options.min_date, options.max_date);
    let caption_id = next_widget_id("calendar-caption");

    let initial = selected.map(|selected| selected.get_untracked()).unwrap_or_default();
    let controller = create_rw_signal(CalendarController::new(&options, initial, today));
    let options = create_rw_signal(options);
    let grid_ref = create_node_ref::<html::Table>();

    if let Some(enable_range) = enable_range {
        create_effect(move |_| {
            let enabled = enable_range.get();
            if options.with_untracked(|options| options.enable_range) != enabled {
                options.update(|options| options.enable_range = enabled);
                controller.update(|controller| controller.set_range_mode(enabled));
            }
        });
    }
    if let Some(selected) = selected {
        create_effect(move |_| {
            let value = selected.get();
            options.with_untracked(|options| {
                controller.update(|controller| controller.sync_selected(value, options));
            });
        });
    }

    let grid = create_memo(move |_| {
        options.with(|options| controller.with(|controller| controller.grid(options, Some(today))))
    });
    let visible = create_memo(move |_| controller.with(CalendarController::visible_month));
    let focused = create_memo(move |_| controller.with(CalendarController::focused_date));
    let pending = create_memo(move |_| controller.with(CalendarController::pending_start));
    let mode = create_memo(move |_| controller.with(CalendarController::mode));

    let dispatch = move |effects: Vec<CalendarEffect>| {
        for effect in effects {
            match effect {
                CalendarEffect::Select(value) => {
                    if let Some(on_select) = on_select.as_ref() {
                        on_select.call(value);
                    }
                }
                CalendarEffect::DayClick(date) => {
                    if let Some(on_day_click) = on_day_click.as_ref() {
                        on_day_click.call(date);
                    }
                }
                CalendarEffect::MonthChange(month) => {
                    if let Some(on_month_change) = on_month_change.as_ref() {
                        on_month_change.call(month);
                    }
                }
                CalendarEffect::FocusDate(date) => focus_day(grid_ref, date),
            }
        }
    };

    let navigate = move |delta: i32| {
        let effects = controller
            .try_update(|controller| controller.navigate(delta))
            .unwrap_or_default();
        dispatch(effects);
    };

    let on_day = Callback::new(move |date: CalendarDate| {
        let options = options.get_untracked();
        let effects = controller
            .try_update(|controller| controller.click_day(date, &options))
            .unwrap_or_default();
        if !effects.is_empty() {
            dispatch(effects);
            // Selection changes re-render the rows.
            focus_day(grid_ref, date);
        }
    });
    let on_focus_day = Callback::new(move |date: CalendarDate| {
        if focused.get_untracked() != date {
            controller.update(|controller| controller.set_focused(date));
        }
    });

    let on_grid_keydown = move |ev: KeyboardEvent| {
        let Some(movement) = FocusMove::from_key(&ev.key(), ev.shift_key()) else {
            return;
        };
        ev.prevent_default();
        let options = options.get_untracked();
        let effects = controller
            .try_update(|controller| controller.move_focus(movement, &options))
            .unwrap_or_default();
        dispatch(effects);
    };

    if autofocus {
        grid_ref.on_load(move |_| focus_day(grid_ref, focused.get_untracked()));
    }

    let weekday_headers = locale
        .weekday_labels(week_start)
        .into_iter()
        .map(|label| {
            view! {
                <th scope="col" role="columnheader" data-ui-slot="weekday">
                    {label}
                </th>
            }
        })
        .collect_view();

    let rows = move || {
        grid.with(|grid| {
            grid.rows
                .iter()
                .map(|row| week_row(row, locale, focused, pending, on_day, on_focus_day))
                .collect_view()
        })
    };

    view! {
        <div
            class=merge_class("ui-calendar", class.as_deref())
            role="group"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="calendar"
            data-ui-mode=move || mode.get().token()
            data-ui-week-start=week_start.token()
        >
            <div data-ui-slot="header">
                <IconButton
                    icon=IconName::ChevronLeft
                    aria_label="Previous month"
                    ui_slot="previous"
                    disabled=Signal::derive(move || {
                        !can_navigate_to(visible.get().previous(), min_date, max_date)
                    })
                    on_click=Callback::new(move |_| navigate(-1))
                />
                <h2 id=caption_id.clone() aria-live="polite" data-ui-slot="caption">
                    {move || locale.month_caption(visible.get())}
                </h2>
                <IconButton
                    icon=IconName::ChevronRight
                    aria_label="Next month"
                    ui_slot="next"
                    disabled=Signal::derive(move || {
                        !can_navigate_to(visible.get().next(), min_date, max_date)
                    })
                    on_click=Callback::new(move |_| navigate(1))
                />
            </div>
            <table
                node_ref=grid_ref
                role="grid"
                aria-labelledby=caption_id
                aria-multiselectable=move || (mode.get() == SelectionMode::Range).then_some("true")
                data-ui-slot="grid"
                on:keydown=on_grid_keydown
            >
                <thead>
                    <tr role="row">
                        {show_week_numbers
                            .then(|| {
                                view! {
                                    <th scope="col" role="columnheader" data-ui-slot="week-number">
                                        <span aria-hidden="true">"Wk"</span>
                                        <span class="ui-visually-hidden">"Week"</span>
                                    </th>
                                }
                            })}
                        {weekday_headers}
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}

fn week_row(
    row: &GridRow,
    locale: CalendarLocale,
    focused: Memo<CalendarDate>,
    pending: Memo<Option<CalendarDate>>,
    on_day: Callback<CalendarDate>,
    on_focus_day: Callback<CalendarDate>,
) -> impl IntoView {
    let slots = row
        .slots
        .iter()
        .map(|slot| match slot {
            GridSlot::Day(cell) => {
                day_cell(*cell, locale, focused, pending, on_day, on_focus_day).into_view()
            }
            GridSlot::Placeholder => {
                view! { <td role="presentation" data-ui-slot="placeholder"></td> }.into_view()
            }
        })
        .collect_view();

    view! {
        <tr role="row" data-ui-slot="week" data-ui-week-start=row.start.to_string()>
            {row.week_number
                .map(|week| {
                    view! {
                        <th scope="row" role="rowheader" data-ui-slot="week-number">
                            {week}
                        </th>
                    }
                })}
            {slots}
        </tr>
    }
}

fn day_cell(
    cell: GridCell,
    locale: CalendarLocale,
    focused: Memo<CalendarDate>,
    pending: Memo<Option<CalendarDate>>,
    on_day: Callback<CalendarDate>,
    on_focus_day: Callback<CalendarDate>,
) -> impl IntoView {
    let date = cell.date;
    let inert = cell.is_disabled || cell.is_outside_month;
    let selected = cell.is_selected || cell.is_range_start || cell.is_range_end;

    view! {
        <td
            role="gridcell"
            aria-selected=bool_token(selected)
            data-ui-slot="day"
            data-ui-in-range=bool_token(cell.is_in_range)
        >
            <button
                type="button"
                class="ui-calendar-day"
                tabindex=move || if focused.get() == date { "0" } else { "-1" }
                aria-label=locale.day_label(date)
                aria-disabled=inert.then_some("true")
                aria-current=cell.is_today.then_some("date")
                data-ui-date=date.to_string()
                data-ui-selected=bool_token(selected)
                data-ui-range-start=bool_token(cell.is_range_start)
                data-ui-range-end=bool_token(cell.is_range_end)
                data-ui-in-range=bool_token(cell.is_in_range)
                data-ui-outside=bool_token(cell.is_outside_month)
                data-ui-disabled=bool_token(cell.is_disabled)
                data-ui-today=bool_token(cell.is_today)
                data-ui-pending=move || bool_token(pending.get() == Some(date))
                on:click=move |_| on_day.call(date)
                on:focus=move |_| on_focus_day.call(date)
            >
                {date.day()}
            </button>
        </td>
    }
}

/// Whether a selection closes the picker, and whether the next one completes a range.
///
/// Single selections close immediately. A range closes on its second click; the first click
/// only records that an end is awaited.
fn picker_step(value: SelectedValue, awaiting_end: bool) -> (bool, bool) {
    match value {
        SelectedValue::Range(_) if awaiting_end => (true, false),
        SelectedValue::Range(_) => (false, true),
        _ => (true, false),
    }
}

#[component]
/// Button trigger that opens a [`Calendar`] in a [`Popover`].
///
/// The trigger shows the formatted selection, or `placeholder` when nothing is selected.
/// The popover closes once a selection is complete and focus returns to the trigger.
pub fn DatePicker(
    #[prop(optional)] options: CalendarOptions,
    /// Host-controlled value.
    #[prop(optional, into)]
    value: Option<MaybeSignal<SelectedValue>>,
    #[prop(optional, into)] placeholder: Option<String>,
    /// Trigger id, for naming the picker with an external `<label for>`.
    #[prop(optional, into)]
    id: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_select: Option<Callback<SelectedValue>>,
    #[prop(optional)] on_month_change: Option<Callback<VisibleMonth>>,
) -> impl IntoView {
    let locale = resolve_locale(&options.locale);
    let selection_mode = options.selection_mode();
    let placeholder = placeholder.unwrap_or_else(|| match selection_mode {
        SelectionMode::Single => "Pick a date".to_string(),
        SelectionMode::Range => "Pick a date range".to_string(),
    });

    let current = create_rw_signal(
        value
            .map(|value| value.get_untracked())
            .unwrap_or_default()
            .conform_to(selection_mode),
    );
    if let Some(value) = value {
        create_effect(move |_| current.set(value.get().conform_to(selection_mode)));
    }

    let open = create_rw_signal(false);
    let awaiting_end = create_rw_signal(false);
    let trigger_ref = create_node_ref::<html::Button>();
    let surface_id = store_value(next_widget_id("date-picker"));
    let placeholder = store_value(placeholder);
    let trigger_id = store_value(id.unwrap_or_else(|| next_widget_id("date-picker-trigger")));
    let options = store_value(options);

    let label = move || {
        current
            .with(|value| locale.selection_label(value))
            .unwrap_or_else(|| placeholder.get_value())
    };

    let handle_select = Callback::new(move |value: SelectedValue| {
        current.set(value);
        if let Some(on_select) = on_select.as_ref() {
            on_select.call(value);
        }
        let (close, awaiting) = picker_step(value, awaiting_end.get_untracked());
        awaiting_end.set(awaiting);
        if close {
            open.set(false);
            request_animation_frame(move || {
                if let Some(trigger) = trigger_ref.get_untracked() {
                    focus_html_element(&trigger);
                }
            });
        }
    });

    let trigger = move || {
        view! {
            <Button
                variant=ButtonVariant::Outline
                class="ui-date-picker-trigger"
                node_ref=trigger_ref
                id=trigger_id.get_value()
                aria_haspopup="dialog"
                aria_controls=surface_id.get_value()
                aria_expanded=open
                disabled=disabled
                leading_icon=IconName::Calendar
                trailing_icon=IconName::ChevronDown
                on_click=Callback::new(move |_| {
                    awaiting_end.set(false);
                    open.update(|open| *open = !*open);
                })
            >
                <span
                    data-ui-slot="value"
                    data-ui-placeholder=move || bool_token(current.with(SelectedValue::is_none))
                >
                    {label}
                </span>
            </Button>
        }
    };

    view! {
        <Popover
            trigger
            open=open
            on_dismiss=Callback::new(move |_| open.set(false))
            id=surface_id.get_value()
            aria_label="Choose date"
            class=merge_class("ui-date-picker", class.as_deref())
        >
            <Calendar
                options=options.get_value()
                selected=Signal::derive(move || current.get())
                autofocus=true
                on_select=handle_select
                on_month_change=Callback::new(move |month| {
                    if let Some(on_month_change) = on_month_change.as_ref() {
                        on_month_change.call(month);
                    }
                })
            />
        </Popover>
    }
}
