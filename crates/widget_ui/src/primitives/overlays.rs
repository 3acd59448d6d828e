use crate::focus::{
    active_html_element, event_within, focus_first_tabbable, focus_html_element, focus_within,
    trap_tab_key,
};

use super::*;

#[component]
/// Modal dialog rendered while `open` is true.
///
/// On open, focus moves to the first tabbable element inside the dialog and Tab/Shift+Tab
/// wrap within it. Escape and backdrop clicks request closing through `on_close`; the host
/// owns `open` and decides. Focus returns to the previously focused element once the dialog
/// unmounts.
pub fn Modal(
    #[prop(into)] open: MaybeSignal<bool>,
    #[prop(optional)] on_close: Option<Callback<()>>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    /// Accessible name when the dialog has no visible title.
    #[prop(optional, into)]
    aria_label: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(default = ModalSize::Md)] size: ModalSize,
    #[prop(default = true)] close_on_escape: bool,
    #[prop(default = true)] close_on_backdrop: bool,
    #[prop(default = true)] show_close_button: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let title_id = next_widget_id("modal-title");
    let description_id = next_widget_id("modal-description");

    view! {
        <Show when=move || open.get()>
            <ModalSurface
                title=title.clone()
                description=description.clone()
                aria_label=aria_label.clone()
                class=class.clone()
                size
                title_id=title_id.clone()
                description_id=description_id.clone()
                close_on_escape
                close_on_backdrop
                show_close_button
                on_close
                body=children.clone()
            />
        </Show>
    }
}

#[component]
fn ModalSurface(
    title: Option<String>,
    description: Option<String>,
    aria_label: Option<String>,
    class: Option<String>,
    size: ModalSize,
    title_id: String,
    description_id: String,
    close_on_escape: bool,
    close_on_backdrop: bool,
    show_close_button: bool,
    on_close: Option<Callback<()>>,
    body: ChildrenFn,
) -> impl IntoView {
    let dialog_ref = create_node_ref::<html::Div>();
    let restore_target = active_html_element();
    on_cleanup(move || {
        if let Some(element) = restore_target.as_ref() {
            focus_html_element(element);
        }
    });
    dialog_ref.on_load(move |dialog| {
        request_animation_frame(move || focus_first_tabbable(&dialog));
    });

    let request_close = move || {
        if let Some(on_close) = on_close.as_ref() {
            on_close.call(());
        }
    };

    let labelled_by = title.as_ref().map(|_| title_id.clone());
    let described_by = description.as_ref().map(|_| description_id.clone());

    view! {
        <div
            class="ui-modal-backdrop"
            data-ui-primitive="true"
            data-ui-kind="modal-backdrop"
            on:click=move |ev: MouseEvent| {
                if close_on_backdrop && ev.target() == ev.current_target() {
                    request_close();
                }
            }
        >
            <div
                class=merge_class("ui-modal", class.as_deref())
                node_ref=dialog_ref
                role="dialog"
                aria-modal="true"
                aria-labelledby=labelled_by
                aria-describedby=described_by
                aria-label=aria_label
                tabindex="-1"
                data-ui-primitive="true"
                data-ui-kind="modal"
                data-ui-size=size.token()
                on:keydown=move |ev: KeyboardEvent| match ev.key().as_str() {
                    "Escape" if close_on_escape => {
                        ev.prevent_default();
                        ev.stop_propagation();
                        request_close();
                    }
                    "Tab" => {
                        if let Some(dialog) = dialog_ref.get_untracked() {
                            trap_tab_key(&dialog, &ev);
                        }
                    }
                    _ => {}
                }
            >
                <header data-ui-slot="header">
                    {title.map(|title| view! { <h2 id=title_id data-ui-slot="title">{title}</h2> })}
                    {description
                        .map(|description| {
                            view! {
                                <p id=description_id data-ui-slot="description">
                                    {description}
                                </p>
                            }
                        })}
                    {show_close_button
                        .then(|| {
                            view! {
                                <IconButton
                                    icon=IconName::Dismiss
                                    aria_label="Close dialog"
                                    ui_slot="close"
                                    on_click=Callback::new(move |_| request_close())
                                />
                            }
                        })}
                </header>
                <div data-ui-slot="body">{body()}</div>
            </div>
        </div>
    }
}

#[component]
/// Non-modal surface anchored to a trigger.
///
/// Escape and pointer presses outside the trigger and surface request dismissal through
/// `on_dismiss`; the host owns `open`.
pub fn Popover(
    /// Anchor content, typically a [`Button`] toggling `open`.
    #[prop(into)]
    trigger: ViewFn,
    #[prop(into)] open: MaybeSignal<bool>,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
    /// Surface id, for `aria-controls` on the trigger.
    #[prop(optional, into)]
    id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(default = PopoverPlacement::BottomStart)] placement: PopoverPlacement,
    children: ChildrenFn,
) -> impl IntoView {
    let root_ref = create_node_ref::<html::Div>();
    let surface_id = id.unwrap_or_else(|| next_widget_id("popover"));

    let dismiss = move || {
        if let Some(on_dismiss) = on_dismiss.as_ref() {
            on_dismiss.call(());
        }
    };

    let outside_click_listener = window_event_listener(ev::mousedown, move |ev| {
        if !open.get_untracked() {
            return;
        }
        let Some(root) = root_ref.get_untracked() else {
            return;
        };
        if !event_within(&root, ev.target()) {
            dismiss();
        }
    });
    on_cleanup(move || outside_click_listener.remove());

    view! {
        <div
            class=merge_class("ui-popover", class.as_deref())
            node_ref=root_ref
            data-ui-primitive="true"
            data-ui-kind="popover"
            data-ui-open=move || bool_token(open.get())
            on:keydown=move |ev: KeyboardEvent| {
                if ev.key() == "Escape" && open.get_untracked() {
                    ev.prevent_default();
                    ev.stop_propagation();
                    dismiss();
                    if let Some(root) = root_ref.get_untracked() {
                        focus_within(&root, "[data-ui-slot=\"trigger\"] > *");
                    }
                }
            }
        >
            <div data-ui-slot="trigger">{trigger.run()}</div>
            <Show when=move || open.get()>
                <div
                    id=surface_id.clone()
                    role="dialog"
                    aria-label=aria_label.clone()
                    data-ui-slot="surface"
                    data-ui-placement=placement.token()
                >
                    {children()}
                </div>
            </Show>
        </div>
    }
}
