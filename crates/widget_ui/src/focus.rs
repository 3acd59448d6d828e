//! Internal DOM focus helpers for dialogs, popovers, and the calendar grid.

use wasm_bindgen::JsCast;

const FOCUSABLE_SELECTOR: &str = concat!(
    "a[href], button:not([disabled]), input:not([disabled]), select:not([disabled]), ",
    "textarea:not([disabled]), [tabindex]:not([tabindex=\"-1\"])"
);

/// Returns the current active element as an [`web_sys::HtmlElement`] when possible.
pub(crate) fn active_html_element() -> Option<web_sys::HtmlElement> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.active_element())
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
}

/// Focuses an HTML element, ignoring browser focus errors.
pub(crate) fn focus_html_element(element: &web_sys::HtmlElement) {
    let _ = element.focus();
}

/// Focuses the first element under `root` matching `selector`.
pub(crate) fn focus_within(root: &web_sys::Element, selector: &str) -> bool {
    let Ok(Some(element)) = root.query_selector(selector) else {
        return false;
    };
    let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
        return false;
    };
    focus_html_element(&element);
    true
}

/// Tabbable descendants of `root` in document order.
pub(crate) fn focusable_elements(root: &web_sys::Element) -> Vec<web_sys::HtmlElement> {
    let Ok(nodes) = root.query_selector_all(FOCUSABLE_SELECTOR) else {
        return Vec::new();
    };

    let mut items = Vec::new();
    for index in 0..nodes.length() {
        let Some(node) = nodes.item(index) else {
            continue;
        };
        let Ok(item) = node.dyn_into::<web_sys::HtmlElement>() else {
            continue;
        };
        if item.get_attribute("aria-hidden").as_deref() == Some("true") {
            continue;
        }
        items.push(item);
    }

    items
}

/// Moves focus to the first tabbable descendant, or to `root` itself when there is none.
pub(crate) fn focus_first_tabbable(root: &web_sys::HtmlElement) {
    match focusable_elements(root).first() {
        Some(first) => focus_html_element(first),
        None => focus_html_element(root),
    }
}

/// Index Tab should land on to keep focus inside a trap, or `None` to let the browser move it.
///
/// `active` is the index of the focused item, `None` when focus sits on the container or
/// outside it.
pub(crate) fn wrapped_tab_target(
    len: usize,
    active: Option<usize>,
    backwards: bool,
) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = len - 1;
    match (active, backwards) {
        (None, false) => Some(0),
        (None, true) | (Some(0), true) => Some(last),
        (Some(index), false) if index == last => Some(0),
        _ => None,
    }
}

/// Keeps Tab/Shift+Tab cycling inside `root`. Call from a `keydown` handler for `Tab`.
pub(crate) fn trap_tab_key(root: &web_sys::HtmlElement, ev: &web_sys::KeyboardEvent) {
    let items = focusable_elements(root);
    if items.is_empty() {
        ev.prevent_default();
        focus_html_element(root);
        return;
    }

    let active = active_html_element()
        .and_then(|active| items.iter().position(|item| item == &active));
    if let Some(target) = wrapped_tab_target(items.len(), active, ev.shift_key()) {
        ev.prevent_default();
        focus_html_element(&items[target]);
    }
}

/// Whether an event target lies inside `root`.
pub(crate) fn event_within(
    root: &web_sys::Element,
    target: Option<web_sys::EventTarget>,
) -> bool {
    target
        .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
        .is_some_and(|node| root.contains(Some(&node)))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn tab_wraps_from_last_to_first() {
        assert_eq!(wrapped_tab_target(3, Some(2), false), Some(0));
        assert_eq!(wrapped_tab_target(3, Some(1), false), None);
    }

    #[test]
    fn shift_tab_wraps_from_first_or_container_to_last() {
        assert_eq!(wrapped_tab_target(3, Some(0), true), Some(2));
        assert_eq!(wrapped_tab_target(3, None, true), Some(2));
        assert_eq!(wrapped_tab_target(3, Some(2), true), None);
    }

    #[test]
    fn focus_outside_trap_enters_at_first() {
        assert_eq!(wrapped_tab_target(2, None, false), Some(0));
        assert_eq!(wrapped_tab_target(0, None, false), None);
    }

    #[test]
    fn single_item_keeps_focus() {
        assert_eq!(wrapped_tab_target(1, Some(0), false), Some(0));
        assert_eq!(wrapped_tab_target(1, Some(0), true), Some(0));
    }
}
