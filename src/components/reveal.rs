//! Reveal-on-scroll: elements fade in the first time they enter view.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::dom::Element;

const VISIBLE_CLASS: &str = "visible";

/// Show everything at once when the browser cannot observe intersections.
pub fn reveal_all<E: Element>(elements: &[E]) {
    for el in elements {
        el.toggle_class(VISIBLE_CLASS, true);
    }
}

/// Handle one observer entry. Returns `true` when the element has been
/// revealed and should no longer be observed.
pub fn on_intersect<E: Element>(element: &E, is_intersecting: bool) -> bool {
    if !is_intersecting {
        return false;
    }
    element.toggle_class(VISIBLE_CLASS, true);
    true
}
