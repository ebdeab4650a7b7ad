//! Mobile navigation drawer toggle.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::dom::Element;

const OPEN_CLASS: &str = "open";

pub struct NavToggle<E> {
    button: E,
    links: E,
}

impl<E: Element> NavToggle<E> {
    pub fn new(button: E, links: E) -> Self {
        Self { button, links }
    }

    pub fn is_open(&self) -> bool {
        self.links.has_class(OPEN_CLASS)
    }

    /// Flip the drawer and return whether it is now open.
    pub fn toggle(&self) -> bool {
        let open = !self.is_open();
        self.set_open(open);
        open
    }

    /// Close after a link inside the drawer is followed.
    pub fn close(&self) {
        self.set_open(false);
    }

    fn set_open(&self, open: bool) {
        self.links.toggle_class(OPEN_CLASS, open);
        self.button.set_attribute("aria-expanded", if open { "true" } else { "false" });
    }
}
