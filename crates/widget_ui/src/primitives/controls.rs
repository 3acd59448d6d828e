use widget_core::{ValidationError, ValidationRules};

use super::*;

#[component]
/// Shared button primitive with variant/size tokens, icon slots, and a loading state.
///
/// A loading button is disabled, announces `aria-busy`, and swaps its leading icon for a
/// spinner.
pub fn Button(
    #[prop(default = ButtonVariant::Default)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] aria_controls: Option<String>,
    #[prop(optional)] aria_haspopup: Option<&'static str>,
    #[prop(optional, into)] aria_expanded: Option<MaybeSignal<bool>>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional, into)] pressed: MaybeSignal<bool>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] trailing_icon: Option<IconName>,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    children: Children,
) -> impl IntoView {
    let inactive = move || disabled.get() || loading.get();

    view! {
        <button
            type=button_type.unwrap_or("button")
            class=merge_class("ui-button", class.as_deref())
            id=id
            node_ref=node_ref
            aria-label=aria_label
            aria-controls=aria_controls
            aria-haspopup=aria_haspopup
            aria-expanded=move || aria_expanded.map(|expanded| bool_token(expanded.get()))
            aria-busy=move || bool_token(loading.get())
            aria-pressed=move || pressed.get().then_some("true")
            title=title
            disabled=inactive
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-state=move || {
                if loading.get() {
                    "loading"
                } else if pressed.get() {
                    "pressed"
                } else {
                    "idle"
                }
            }
            data-ui-disabled=move || bool_token(inactive())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            on:keydown=move |ev| {
                if let Some(on_keydown) = on_keydown.as_ref() {
                    on_keydown.call(ev);
                }
            }
        >
            {move || {
                if loading.get() {
                    Some(view! { <Icon icon=IconName::Spinner size=IconSize::Sm /> })
                } else {
                    leading_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })
                }
            }}
            {children()}
            {trailing_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
        </button>
    }
}

#[component]
/// Icon-only button. `aria_label` is required since the glyph is hidden from assistive tech.
pub fn IconButton(
    icon: IconName,
    #[prop(into)] aria_label: String,
    #[prop(default = ButtonVariant::Ghost)] variant: ButtonVariant,
    #[prop(default = IconSize::Sm)] icon_size: IconSize,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_class("ui-icon-button", class.as_deref())
            aria-label=aria_label
            title=title
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="icon-button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-size=ButtonSize::Icon.token()
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            <Icon icon size=icon_size />
        </button>
    }
}

#[component]
/// Labelled text input with optional description and rule-based validation.
///
/// The first failing rule is rendered below the field and wired through `aria-invalid` and
/// `aria-describedby`. With [`ValidateOn::Blur`] the field stays quiet until it has been
/// blurred once, then re-validates on every keystroke.
pub fn Input(
    #[prop(default = FieldVariant::Standard)] variant: FieldVariant,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] rules: Option<ValidationRules>,
    #[prop(default = ValidateOn::Blur)] validate_on: ValidateOn,
    #[prop(optional)] node_ref: NodeRef<html::Input>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional)] on_validate: Option<Callback<Result<(), ValidationError>>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    #[prop(optional)] on_focus: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_blur: Option<Callback<FocusEvent>>,
) -> impl IntoView {
    let input_id = id.unwrap_or_else(|| next_widget_id("input"));
    let description_id = description.as_ref().map(|_| format!("{input_id}-description"));
    let error_id = format!("{input_id}-error");

    let kind = rules.as_ref().and_then(ValidationRules::validation_kind);
    let required = rules.as_ref().is_some_and(|rules| rules.required);
    let resolved_type =
        input_type.unwrap_or_else(|| kind.map_or("text", |kind| kind.input_type()));
    let input_mode = kind.and_then(|kind| kind.input_mode());

    let rules = store_value(rules);
    let error = create_rw_signal(None::<ValidationError>);
    let touched = create_rw_signal(false);

    let run_validation = move |text: &str| {
        let result = rules.with_value(|rules| rules.as_ref().map(|rules| rules.validate(text)));
        let Some(result) = result else {
            return;
        };
        error.set(result.as_ref().err().cloned());
        if let Some(on_validate) = on_validate.as_ref() {
            on_validate.call(result);
        }
    };

    let described_by = {
        let description_id = description_id.clone();
        let error_id = error_id.clone();
        move || {
            let ids: Vec<&str> = description_id
                .as_deref()
                .into_iter()
                .chain(error.with(Option::is_some).then_some(error_id.as_str()))
                .collect();
            (!ids.is_empty()).then(|| ids.join(" "))
        }
    };

    view! {
        <div
            class=merge_class("ui-input", class.as_deref())
            data-ui-primitive="true"
            data-ui-kind="input"
            data-ui-variant=variant.token()
            data-ui-invalid=move || bool_token(error.with(Option::is_some))
        >
            {label.map(|label| {
                view! {
                    <label for=input_id.clone() data-ui-slot="label">
                        {label}
                        {required.then(|| view! { <span aria-hidden="true" data-ui-slot="required">"*"</span> })}
                    </label>
                }
            })}
            <input
                class="ui-field"
                id=input_id.clone()
                name=name
                placeholder=placeholder
                node_ref=node_ref
                autocomplete=autocomplete
                type=resolved_type
                inputmode=input_mode
                required=required
                aria-required=required.then_some("true")
                aria-invalid=move || bool_token(error.with(Option::is_some))
                aria-describedby=described_by
                prop:value=move || value.get()
                disabled=move || disabled.get()
                data-ui-disabled=move || bool_token(disabled.get())
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    if validate_on == ValidateOn::Input || touched.get_untracked() {
                        run_validation(&text);
                    }
                    if let Some(on_input) = on_input.as_ref() {
                        on_input.call(text);
                    }
                }
                on:keydown=move |ev| {
                    if let Some(on_keydown) = on_keydown.as_ref() {
                        on_keydown.call(ev);
                    }
                }
                on:focus=move |ev| {
                    if let Some(on_focus) = on_focus.as_ref() {
                        on_focus.call(ev);
                    }
                }
                on:blur=move |ev| {
                    touched.set(true);
                    run_validation(&event_target_value(&ev));
                    if let Some(on_blur) = on_blur.as_ref() {
                        on_blur.call(ev);
                    }
                }
            />
            {description.map(|description| {
                view! {
                    <p id=description_id data-ui-slot="description">
                        {description}
                    </p>
                }
            })}
            {move || {
                error
                    .get()
                    .map(|err| {
                        view! {
                            <p id=error_id.clone() role="alert" data-ui-slot="error">
                                {err.to_string()}
                            </p>
                        }
                    })
            }}
        </div>
    }
}
