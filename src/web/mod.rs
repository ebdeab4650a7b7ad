//! Browser boot: resolve page elements, build components, wire events.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only compiled with the `hydrate` feature. Each `wire_*` function owns one
//! component end to end and returns early (logging at debug) when its
//! elements are missing, so one absent section never blocks the others.
//! Listener closures live for the page and are leaked with `forget`.

pub mod element;
pub mod storage;
pub mod timer;
mod wire;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Event, EventTarget};

use crate::config::SiteConfig;

const CONFIG_ELEMENT_ID: &str = "site-config";

/// Entry point run once the wasm module is instantiated.
pub fn boot() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let config = read_config(&document);

    wire::theme(&window, &document, &config.theme);
    wire::nav(&document);
    wire::over_hero_header(&document, &config.header);
    wire::smooth_anchors(&window, &document, &config.anchors);
    wire::reveal_on_scroll(&window, &document, &config.reveal);
    wire::footer_year(&document);
    wire::showcase(&document, &config.showcase);
    wire::viewer(&document);
    log::debug!("boot: page behaviors wired");
}

fn read_config(document: &Document) -> SiteConfig {
    let Some(raw) = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return SiteConfig::default();
    };
    SiteConfig::from_json(&raw).unwrap_or_else(|err| {
        log::warn!("{err}; using defaults");
        SiteConfig::default()
    })
}

/// Attach `handler` to `event` on `target` for the lifetime of the page.
fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    let _ = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
    cb.forget();
}
