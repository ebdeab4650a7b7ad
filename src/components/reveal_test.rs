use super::*;
use crate::dom::fake::FakeElement;

#[test]
fn reveal_all_marks_every_element() {
    let els = vec![FakeElement::new(), FakeElement::new(), FakeElement::new()];
    reveal_all(&els);
    assert!(els.iter().all(|el| el.has_class("visible")));
}

#[test]
fn reveal_all_accepts_empty_slice() {
    reveal_all::<FakeElement>(&[]);
}

#[test]
fn intersecting_entry_reveals_and_unobserves() {
    let el = FakeElement::new();
    assert!(on_intersect(&el, true));
    assert!(el.has_class("visible"));
}

#[test]
fn non_intersecting_entry_keeps_observing() {
    let el = FakeElement::new();
    assert!(!on_intersect(&el, false));
    assert!(!el.has_class("visible"));
}

#[test]
fn leaving_view_does_not_hide_revealed_element() {
    let el = FakeElement::new();
    on_intersect(&el, true);
    on_intersect(&el, false);
    assert!(el.has_class("visible"));
}
