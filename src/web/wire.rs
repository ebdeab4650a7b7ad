use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    KeyboardEvent, ScrollBehavior, ScrollToOptions, Window,
};

use super::element::{offset_height, query_all, query_all_in, query_one};
use super::listen;
use super::storage::LocalStore;
use super::timer::IntervalScheduler;
use crate::components::anchors::{SmoothAnchors, anchor_target};
use crate::components::footer::stamp_year;
use crate::components::header::{HeroObservation, OverHeroHeader};
use crate::components::nav::NavToggle;
use crate::components::reveal::{on_intersect, reveal_all};
use crate::components::showcase::{ShowcaseController, ShowcaseItem, is_activation_key};
use crate::components::theme::ThemeController;
use crate::components::viewer::{ViewerModal, document_url, image_source};
use crate::config::{AnchorConfig, HeaderConfig, RevealConfig, ShowcaseConfig, ThemeConfig};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

pub(super) fn theme(window: &Window, document: &Document, config: &ThemeConfig) {
    let Some(root) = document.document_element() else {
        return;
    };
    let prefers_light = window
        .match_media("(prefers-color-scheme: light)")
        .ok()
        .flatten()
        .map_or(false, |mq| mq.matches());

    let theme = ThemeController::new(root, LocalStore::new(), config.storage_key.clone());
    let mode = theme.init(prefers_light);
    log::debug!("theme: starting in {}", mode.as_str());

    if let Ok(Some(toggle)) = document.query_selector(".theme-toggle") {
        listen(&toggle, "click", move |_| {
            theme.toggle();
        });
    }
}

pub(super) fn nav(document: &Document) {
    let (Ok(Some(button)), Ok(Some(links))) =
        (document.query_selector(".nav-toggle"), document.query_selector(".nav-links"))
    else {
        log::debug!("nav: toggle or links missing");
        return;
    };
    let anchors = query_all(&links, "a");
    let nav = Rc::new(NavToggle::new(button.clone(), links));

    let for_button = Rc::clone(&nav);
    listen(&button, "click", move |_| {
        for_button.toggle();
    });
    for a in anchors {
        let nav = Rc::clone(&nav);
        listen(&a, "click", move |_| nav.close());
    }
}

pub(super) fn over_hero_header(document: &Document, config: &HeaderConfig) {
    let (Ok(Some(header)), Some(hero)) = (document.query_selector(".site-header"), document.get_element_by_id("hero"))
    else {
        log::debug!("header: header or hero missing");
        return;
    };
    let over_hero = OverHeroHeader::new(header.clone(), config.clone());

    let options = IntersectionObserverInit::new();
    options.set_root_margin(&over_hero.root_margin(offset_height(&header)));
    let thresholds: Array = over_hero.thresholds().iter().map(|t| JsValue::from_f64(*t)).collect();
    options.set_threshold(&thresholds);

    let on_entries: ObserverCallback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
        let header_height = offset_height(&header).unwrap_or(0.0);
        for entry in entries.iter().filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok()) {
            let obs = HeroObservation {
                is_intersecting: entry.is_intersecting(),
                intersection_height: entry.intersection_rect().height(),
                bounding_top: entry.bounding_client_rect().top(),
            };
            over_hero.observe(obs, header_height);
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    match IntersectionObserver::new_with_options(on_entries.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(&hero);
            on_entries.forget();
        }
        Err(_) => log::debug!("header: IntersectionObserver unavailable"),
    }
}

pub(super) fn smooth_anchors(window: &Window, document: &Document, config: &AnchorConfig) {
    let anchors = Rc::new(SmoothAnchors::new(config.clone()));
    let header = document.query_selector(".site-header").ok().flatten();

    for a in query_all_in(document, "a[href^=\"#\"]") {
        let anchors = Rc::clone(&anchors);
        let header = header.clone();
        let window = window.clone();
        let document = document.clone();
        let link = a.clone();
        listen(&a, "click", move |ev: Event| {
            let href = link.get_attribute("href");
            let Some(id) = anchor_target(href.as_deref()) else {
                return;
            };
            let Ok(Some(target)) = document.query_selector(id) else {
                return;
            };
            ev.prevent_default();

            let header_height = header.as_ref().and_then(offset_height);
            let scroll_y = window.scroll_y().unwrap_or(0.0);
            let top = anchors.scroll_top(target.get_bounding_client_rect().top(), scroll_y, header_height);

            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);

            if let Ok(history) = window.history() {
                let _ = history.push_state_with_url(&JsValue::NULL, "", Some(id));
            }
        });
    }
}

pub(super) fn reveal_on_scroll(window: &Window, document: &Document, config: &RevealConfig) {
    let items = query_all_in(document, ".reveal");
    if items.is_empty() {
        return;
    }
    let supported = Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false);
    if !supported {
        reveal_all(&items);
        return;
    }

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));

    let on_entries: ObserverCallback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter().filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok()) {
            let target = entry.target();
            if on_intersect(&target, entry.is_intersecting()) {
                observer.unobserve(&target);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    match IntersectionObserver::new_with_options(on_entries.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            for el in &items {
                observer.observe(el);
            }
            on_entries.forget();
        }
        Err(_) => reveal_all(&items),
    }
}

pub(super) fn footer_year(document: &Document) {
    let Some(el) = document.get_element_by_id("year") else {
        return;
    };
    let year = i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or_default();
    stamp_year(&el, year);
}

pub(super) fn showcase(document: &Document, config: &ShowcaseConfig) {
    let Some(section) = document.get_element_by_id("pow") else {
        return;
    };
    let Some(image) = query_one(&section, "#pow-image") else {
        log::debug!("showcase: preview image missing");
        return;
    };
    let link = query_one(&section, "#pow-link");
    let elements = query_all(&section, ".pow-item");
    let items = elements.iter().cloned().map(ShowcaseItem::from_element).collect();

    let scheduler = IntervalScheduler::new();
    let tick_target = scheduler.target();
    let Some(controller) = ShowcaseController::new(items, image, link, scheduler, config.interval()) else {
        return;
    };
    let controller = Rc::new(RefCell::new(controller));

    let weak = Rc::downgrade(&controller);
    *tick_target.borrow_mut() = Some(Rc::new(move || {
        if let Some(controller) = weak.upgrade() {
            controller.borrow_mut().advance();
        }
    }));

    for (idx, el) in elements.iter().enumerate() {
        let on_click = Rc::clone(&controller);
        listen(el, "click", move |_| on_click.borrow_mut().select(idx));

        let on_key = Rc::clone(&controller);
        listen(el, "keydown", move |ev: Event| {
            let Some(key_ev) = ev.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if is_activation_key(&key_ev.key()) {
                ev.prevent_default();
                on_key.borrow_mut().select(idx);
            }
        });
    }

    for (event, pause) in [("mouseenter", true), ("mouseleave", false), ("focusin", true), ("focusout", false)] {
        let controller = Rc::clone(&controller);
        listen(&section, event, move |_| {
            let mut controller = controller.borrow_mut();
            if pause {
                controller.pause();
            } else {
                controller.resume();
            }
        });
    }
}

pub(super) fn viewer(document: &Document) {
    let (Some(modal), Some(frame), Some(fallback)) = (
        document.get_element_by_id("pdf-modal"),
        document.get_element_by_id("pdf-frame"),
        document.get_element_by_id("pdf-fallback"),
    ) else {
        log::debug!("viewer: modal parts missing");
        return;
    };
    let image_view = document.get_element_by_id("img-view");
    let close_button = document.query_selector(".modal-close").ok().flatten();

    let viewer = Rc::new(RefCell::new(ViewerModal::new(
        modal.clone(),
        frame,
        fallback,
        image_view,
        close_button.clone(),
    )));

    for opener in query_all_in(document, ".open-pdf") {
        let viewer = Rc::clone(&viewer);
        let source = opener.clone();
        listen(&opener, "click", move |ev: Event| {
            ev.prevent_default();
            viewer.borrow_mut().open_document(&document_url(&source));
        });
    }

    for opener in query_all_in(document, ".open-image") {
        let viewer = Rc::clone(&viewer);
        let source = opener.clone();
        listen(&opener, "click", move |ev: Event| {
            ev.prevent_default();
            if let Some(src) = image_source(&source) {
                viewer.borrow_mut().open_image(&src);
            }
        });
    }

    if let Some(button) = close_button {
        let viewer = Rc::clone(&viewer);
        listen(&button, "click", move |_| viewer.borrow_mut().close());
    }

    let backdrop: Element = modal.clone();
    let for_backdrop = Rc::clone(&viewer);
    listen(&modal, "click", move |ev: Event| {
        let on_backdrop = ev.target().is_some_and(|t| JsValue::from(t) == JsValue::from(backdrop.clone()));
        for_backdrop.borrow_mut().on_backdrop_click(on_backdrop);
    });

    listen(document, "keydown", move |ev: Event| {
        if let Some(key_ev) = ev.dyn_ref::<KeyboardEvent>() {
            viewer.borrow_mut().on_key(&key_ev.key());
        }
    });
}
