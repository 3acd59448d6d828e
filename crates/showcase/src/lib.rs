//! Browser showcase rendering every widget in the library.
//!
//! Each section exercises one widget family with its interesting states so visual and
//! keyboard behavior can be reviewed in a real page. Calendar configuration is read from
//! JSON the same way a host application would supply it.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::*;
use serde::Serialize;
use serde_json::Value;
use widget_core::{
    CalendarDate, CalendarOptions, PatternRule, SelectedValue, ValidationError, ValidationKind,
    ValidationRules, VisibleMonth,
};
use widget_ui::prelude::*;

/// Calendar options used by the showcase when mounted standalone.
pub const DEMO_CALENDAR_OPTIONS: &str = r#"{
    "show_outside_days": true,
    "show_week_numbers": true,
    "week_start": "monday",
    "min_date": "2024-01-15",
    "max_date": "2024-12-20",
    "disabled_dates": ["2024-02-14", "2024-02-29"]
}"#;

const EVENT_LOG_LIMIT: usize = 6;

/// Parses host-supplied calendar options, falling back to defaults on malformed input.
pub fn calendar_options_from_value(value: Option<Value>) -> CalendarOptions {
    let Some(value) = value else {
        return CalendarOptions::default();
    };
    match serde_json::from_value::<CalendarOptions>(value) {
        Ok(options) => options,
        Err(err) => {
            logging::warn!("showcase calendar options rejected: {err}");
            CalendarOptions::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
struct ShowcaseSnapshot {
    single: SelectedValue,
    range: SelectedValue,
    picker: SelectedValue,
    range_enabled: bool,
    visible_month: Option<VisibleMonth>,
}

fn push_event(log: RwSignal<Vec<String>>, entry: String) {
    log.update(|log| {
        log.insert(0, entry);
        log.truncate(EVENT_LOG_LIMIT);
    });
}

fn username_rules() -> ValidationRules {
    ValidationRules::new()
        .required()
        .min_length(3)
        .max_length(16)
        .custom(|value| {
            value
                .starts_with(|c: char| c.is_ascii_digit())
                .then(|| "Must not start with a digit".to_string())
        })
}

fn invoice_rules() -> ValidationRules {
    match PatternRule::custom(r"^INV-[0-9]{4}$", "Use the form INV-0000") {
        Ok(rule) => ValidationRules::new().pattern(rule),
        Err(err) => {
            logging::warn!("invoice pattern rejected: {err}");
            ValidationRules::new()
        }
    }
}

#[component]
/// Showcase page contents.
pub fn ShowcaseApp(
    /// Host-supplied calendar options as JSON; `None` uses the defaults.
    calendar_options: Option<Value>,
) -> impl IntoView {
    let options = calendar_options_from_value(calendar_options);
    let fixed_options = CalendarOptions {
        fixed_weeks: true,
        ..options.clone()
    };
    let range_options = CalendarOptions {
        enable_range: true,
        ..options.clone()
    };
    let picker_options = options.clone();

    let snapshot = create_rw_signal(ShowcaseSnapshot::default());
    let events = create_rw_signal(Vec::<String>::new());
    let modal_open = create_rw_signal(false);
    let saving = create_rw_signal(false);
    let range_enabled = create_rw_signal(false);
    let email = create_rw_signal(String::new());

    let snapshot_json = move || {
        snapshot.with(|snapshot| match serde_json::to_string_pretty(snapshot) {
            Ok(json) => json,
            Err(err) => {
                logging::warn!("showcase snapshot serialize failed: {err}");
                String::new()
            }
        })
    };

    view! {
        <main class="showcase-root">
            <Stack gap=LayoutGap::Lg>
                <header>
                    <h1>"Widget Showcase"</h1>
                    <p>"Buttons, validated inputs, dialogs, and calendars sharing one DOM contract."</p>
                </header>

                <section aria-labelledby="showcase-buttons">
                    <Stack gap=LayoutGap::Md>
                        <h2 id="showcase-buttons">"Buttons"</h2>
                        <Cluster gap=LayoutGap::Sm>
                            <Button>"Default"</Button>
                            <Button variant=ButtonVariant::Primary>"Primary"</Button>
                            <Button variant=ButtonVariant::Secondary>"Secondary"</Button>
                            <Button variant=ButtonVariant::Outline>"Outline"</Button>
                            <Button variant=ButtonVariant::Ghost>"Ghost"</Button>
                            <Button variant=ButtonVariant::Link>"Link"</Button>
                            <Button variant=ButtonVariant::Destructive>"Delete"</Button>
                        </Cluster>
                        <Cluster gap=LayoutGap::Sm>
                            <Button size=ButtonSize::Sm>"Small"</Button>
                            <Button size=ButtonSize::Lg leading_icon=IconName::Calendar>
                                "Large"
                            </Button>
                            <Button disabled=true>"Disabled"</Button>
                            <Button pressed=true>"Pressed"</Button>
                            <Button
                                variant=ButtonVariant::Primary
                                loading=saving
                                on_click=Callback::new(move |_| {
                                    saving.set(true);
                                    set_timeout(
                                        move || saving.set(false),
                                        std::time::Duration::from_millis(1500),
                                    );
                                })
                            >
                                {move || if saving.get() { "Saving" } else { "Save" }}
                            </Button>
                            <IconButton icon=IconName::Dismiss aria_label="Dismiss" />
                            <IconButton
                                icon=IconName::Checkmark
                                aria_label="Confirm"
                                variant=ButtonVariant::Primary
                            />
                        </Cluster>
                    </Stack>
                </section>

                <section aria-labelledby="showcase-inputs">
                    <Stack gap=LayoutGap::Md>
                        <h2 id="showcase-inputs">"Inputs"</h2>
                        <Input
                            label="Email"
                            description="Validated when the field loses focus."
                            placeholder="name@example.com"
                            autocomplete="email"
                            rules=ValidationRules::new().required().kind(ValidationKind::Email)
                            value=email
                            on_input=Callback::new(move |text| email.set(text))
                        />
                        <Input
                            label="Phone"
                            placeholder="+1 555 010 0200"
                            rules=ValidationRules::new().kind(ValidationKind::Phone)
                        />
                        <Input
                            label="Username"
                            description="3-16 characters, validated as you type."
                            rules=username_rules()
                            validate_on=ValidateOn::Input
                            on_validate=Callback::new(move |result: Result<(), ValidationError>| {
                                if let Err(err) = result {
                                    push_event(events, format!("username invalid: {err}"));
                                }
                            })
                        />
                        <Input
                            label="Invoice"
                            placeholder="INV-0000"
                            rules=invoice_rules()
                            variant=FieldVariant::Inset
                        />
                    </Stack>
                </section>

                <section aria-labelledby="showcase-modal">
                    <Stack gap=LayoutGap::Md>
                        <h2 id="showcase-modal">"Modal"</h2>
                        <Cluster gap=LayoutGap::Sm>
                            <Button
                                variant=ButtonVariant::Primary
                                on_click=Callback::new(move |_| modal_open.set(true))
                            >
                                "Open dialog"
                            </Button>
                        </Cluster>
                        <Modal
                            open=modal_open
                            on_close=Callback::new(move |_| modal_open.set(false))
                            title="Share calendar"
                            description="Invite someone by email. Escape or the backdrop closes the dialog."
                        >
                            <Stack gap=LayoutGap::Md>
                                <Input
                                    label="Recipient"
                                    input_type="email"
                                    rules=ValidationRules::new().required().kind(ValidationKind::Email)
                                />
                                <Cluster gap=LayoutGap::Sm justify=LayoutJustify::End>
                                    <Button
                                        variant=ButtonVariant::Ghost
                                        on_click=Callback::new(move |_| modal_open.set(false))
                                    >
                                        "Cancel"
                                    </Button>
                                    <Button
                                        variant=ButtonVariant::Primary
                                        on_click=Callback::new(move |_| {
                                            push_event(events, "invite sent".to_string());
                                            modal_open.set(false);
                                        })
                                    >
                                        "Send invite"
                                    </Button>
                                </Cluster>
                            </Stack>
                        </Modal>
                    </Stack>
                </section>

                <section aria-labelledby="showcase-calendar">
                    <Stack gap=LayoutGap::Md>
                        <h2 id="showcase-calendar">"Calendar"</h2>
                        <Cluster gap=LayoutGap::Lg align=LayoutAlign::Start>
                            <Calendar
                                options
                                aria_label="Single date"
                                on_select=Callback::new(move |value: SelectedValue| {
                                    snapshot.update(|snapshot| snapshot.single = value);
                                })
                                on_day_click=Callback::new(move |date: CalendarDate| {
                                    push_event(events, format!("day click {date}"));
                                })
                                on_month_change=Callback::new(move |month: VisibleMonth| {
                                    snapshot.update(|snapshot| snapshot.visible_month = Some(month));
                                    push_event(events, format!("month {month}"));
                                })
                            />
                            <Stack gap=LayoutGap::Sm>
                                <Button
                                    variant=ButtonVariant::Outline
                                    pressed=range_enabled
                                    on_click=Callback::new(move |_| {
                                        range_enabled.update(|enabled| *enabled = !*enabled);
                                        let enabled = range_enabled.get_untracked();
                                        snapshot.update(|snapshot| snapshot.range_enabled = enabled);
                                    })
                                >
                                    {move || if range_enabled.get() { "Range mode" } else { "Single mode" }}
                                </Button>
                                <Calendar
                                    options=fixed_options
                                    enable_range=range_enabled
                                    aria_label="Switchable selection"
                                    on_select=Callback::new(move |value: SelectedValue| {
                                        snapshot.update(|snapshot| snapshot.range = value);
                                    })
                                />
                            </Stack>
                        </Cluster>
                    </Stack>
                </section>

                <section aria-labelledby="showcase-picker">
                    <Stack gap=LayoutGap::Md>
                        <h2 id="showcase-picker">"Date picker"</h2>
                        <Cluster gap=LayoutGap::Sm>
                            <DatePicker
                                options=picker_options
                                on_select=Callback::new(move |value: SelectedValue| {
                                    snapshot.update(|snapshot| snapshot.picker = value);
                                })
                            />
                            <DatePicker
                                options=range_options
                                placeholder="Trip dates"
                                on_select=Callback::new(move |value: SelectedValue| {
                                    snapshot.update(|snapshot| snapshot.picker = value);
                                })
                            />
                        </Cluster>
                    </Stack>
                </section>

                <section aria-labelledby="showcase-state">
                    <Stack gap=LayoutGap::Sm>
                        <h2 id="showcase-state">"State"</h2>
                        <pre data-ui-slot="snapshot">{snapshot_json}</pre>
                        <ul aria-live="polite" data-ui-slot="events">
                            {move || {
                                events
                                    .get()
                                    .into_iter()
                                    .map(|entry| view! { <li>{entry}</li> })
                                    .collect_view()
                            }}
                        </ul>
                    </Stack>
                </section>
            </Stack>
        </main>
    }
}

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
/// Mounts the showcase into the document body.
pub fn mount() {
    console_error_panic_hook::set_once();
    let calendar_options = match serde_json::from_str::<Value>(DEMO_CALENDAR_OPTIONS) {
        Ok(value) => Some(value),
        Err(err) => {
            logging::warn!("showcase options are not JSON: {err}");
            None
        }
    };
    leptos::mount_to_body(move || view! { <ShowcaseApp calendar_options /> })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use widget_core::WeekStart;

    use super::*;

    fn date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::from_ymd(year, month, day).expect("valid date")
    }

    #[test]
    fn demo_options_parse() {
        let value = serde_json::from_str::<Value>(DEMO_CALENDAR_OPTIONS).expect("demo json");
        let options = calendar_options_from_value(Some(value));
        assert_eq!(options.week_start, WeekStart::Monday);
        assert_eq!(options.min_date, Some(date(2024, 1, 15)));
        assert!(options.is_disabled(date(2024, 2, 29)));
        assert!(!options.enable_range);
        assert_eq!(options.locale, "en-US");
    }

    #[test]
    fn malformed_options_fall_back_to_defaults() {
        let value = serde_json::json!({ "min_date": "2024-02-30" });
        assert_eq!(calendar_options_from_value(Some(value)), CalendarOptions::default());
        assert_eq!(calendar_options_from_value(None), CalendarOptions::default());
    }

    #[test]
    fn username_rules_run_custom_check_last() {
        let rules = username_rules();
        assert_eq!(
            rules.validate("ab").map_err(|err| err.to_string()),
            Err("Must be at least 3 characters".to_string())
        );
        assert_eq!(
            rules.validate("1abc").map_err(|err| err.to_string()),
            Err("Must not start with a digit".to_string())
        );
        assert_eq!(rules.validate("abc1"), Ok(()));
    }

    #[test]
    fn invoice_pattern_matches_whole_value() {
        let rules = invoice_rules();
        assert_eq!(rules.validate("INV-0042"), Ok(()));
        assert!(rules.validate("XINV-0042").is_err());
        assert_eq!(rules.validate(""), Ok(()));
    }
}
