//! Footer copyright year.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use crate::dom::Element;

pub fn stamp_year<E: Element>(el: &E, year: i32) {
    el.set_text(&year.to_string());
}
