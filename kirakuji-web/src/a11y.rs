// Accessibility helpers
use crate::dom::document;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent};

pub const FOCUSABLE_QUERY: &str =
    "button, [href], input, select, textarea, [tabindex]:not([tabindex='-1'])";

/// Where a Tab press should move focus to stay inside a dialog.
///
/// `active` is the index of the focused element among the dialog's focusable
/// elements, `None` when focus is elsewhere. Returns `None` when the browser's
/// default Tab behaviour already keeps focus inside.
#[must_use]
pub const fn wrap_focus_index(len: usize, active: Option<usize>, shift: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = len - 1;
    match active {
        None => Some(0),
        Some(0) if shift => Some(last),
        Some(index) if !shift && index == last => Some(0),
        Some(_) => None,
    }
}

fn focusable_in(container: &Element) -> Vec<HtmlElement> {
    let Ok(nodes) = container.query_selector_all(FOCUSABLE_QUERY) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Keep Tab and Shift+Tab cycling within `container`.
pub fn trap_tab(container: &Element, event: &KeyboardEvent) {
    let elements = focusable_in(container);
    let active = document().and_then(|doc| doc.active_element());
    let index = active.as_ref().and_then(|active| {
        elements.iter().position(|el| {
            let el: &Element = el.as_ref();
            el == active
        })
    });
    if let Some(target) = wrap_focus_index(elements.len(), index, event.shift_key())
        .and_then(|target| elements.get(target))
    {
        event.prevent_default();
        let _ = target.focus();
    }
}

/// Focus the first focusable element inside `container`.
pub fn focus_first_in(container: &Element) {
    if let Some(first) = focusable_in(container).first() {
        let _ = first.focus();
    }
}

/// Focus the element with `id`. Returns whether it was found and focused.
pub fn focus_by_id(id: &str) -> bool {
    document()
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .is_some_and(|el| el.focus().is_ok())
}

#[cfg(test)]
mod tests {
    use super::wrap_focus_index;

    #[test]
    fn tab_wraps_from_last_to_first() {
        assert_eq!(wrap_focus_index(3, Some(2), false), Some(0));
        assert_eq!(wrap_focus_index(3, Some(1), false), None);
    }

    #[test]
    fn shift_tab_wraps_from_first_to_last() {
        assert_eq!(wrap_focus_index(3, Some(0), true), Some(2));
        assert_eq!(wrap_focus_index(3, Some(2), true), None);
    }

    #[test]
    fn focus_outside_is_pulled_in() {
        assert_eq!(wrap_focus_index(2, None, false), Some(0));
        assert_eq!(wrap_focus_index(2, None, true), Some(0));
    }

    #[test]
    fn empty_dialog_is_left_alone() {
        assert_eq!(wrap_focus_index(0, None, false), None);
    }

    #[test]
    fn single_element_stays_put() {
        assert_eq!(wrap_focus_index(1, Some(0), false), Some(0));
        assert_eq!(wrap_focus_index(1, Some(0), true), Some(0));
    }
}
