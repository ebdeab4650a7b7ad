//! `web-sys` element handles behind the component [`Element`] seam.

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, NodeList};

use crate::dom::Element;

impl Element for web_sys::Element {
    fn attribute(&self, name: &str) -> Option<String> {
        web_sys::Element::get_attribute(self, name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        let _ = web_sys::Element::set_attribute(self, name, value);
    }

    fn remove_attribute(&self, name: &str) {
        let _ = web_sys::Element::remove_attribute(self, name);
    }

    fn has_class(&self, name: &str) -> bool {
        self.class_list().contains(name)
    }

    fn toggle_class(&self, name: &str, on: bool) {
        let _ = self.class_list().toggle_with_force(name, on);
    }

    fn set_style(&self, property: &str, value: &str) {
        let Some(html) = self.dyn_ref::<HtmlElement>() else {
            return;
        };
        let style = html.style();
        if value.is_empty() {
            let _ = style.remove_property(property);
        } else {
            let _ = style.set_property(property, value);
        }
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn focus(&self) {
        if let Some(html) = self.dyn_ref::<HtmlElement>() {
            let _ = html.focus();
        }
    }
}

/// Rendered height of `el` in CSS pixels, when it is an `HtmlElement`.
pub fn offset_height(el: &web_sys::Element) -> Option<f64> {
    el.dyn_ref::<HtmlElement>().map(|html| f64::from(html.offset_height()))
}

/// All elements under `root` matching `selector`, in document order.
pub fn query_all(root: &web_sys::Element, selector: &str) -> Vec<web_sys::Element> {
    root.query_selector_all(selector).map_or_else(|_| Vec::new(), elements)
}

/// All elements in `document` matching `selector`, in document order.
pub fn query_all_in(document: &web_sys::Document, selector: &str) -> Vec<web_sys::Element> {
    document.query_selector_all(selector).map_or_else(|_| Vec::new(), elements)
}

fn elements(list: NodeList) -> Vec<web_sys::Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

pub fn query_one(root: &web_sys::Element, selector: &str) -> Option<web_sys::Element> {
    root.query_selector(selector).ok().flatten()
}
