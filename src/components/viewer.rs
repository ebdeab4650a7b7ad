//! Document/image viewer overlay.
//!
//! SYSTEM CONTEXT
//! ==============
//! Document links are rewritten into something an `<iframe>` can embed:
//! Google Docs and Drive links use their `/preview` endpoints, direct PDFs
//! load as-is, and anything else goes through the Google Docs viewer.
//! Images bypass the frame and load into a plain `<img>`.
//!
//! The overlay arms Escape-to-close only while it is open.

#[cfg(test)]
#[path = "viewer_test.rs"]
mod viewer_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::dom::Element;

const OPEN_CLASS: &str = "open";
const GVIEW_PREFIX: &str = "https://docs.google.com/gview?embedded=1&url=";

static DOCS_DOCUMENT: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"https?://docs\.google\.com/document/d/([a-zA-Z0-9_-]+)").ok());
static DRIVE_FILE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"https?://drive\.google\.com/file/d/([a-zA-Z0-9_-]+)").ok());
static DIRECT_PDF: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"(?i)\.pdf($|\?)").ok());

fn capture_id<'a>(pattern: &LazyLock<Option<Regex>>, url: &'a str) -> Option<&'a str> {
    let re = pattern.as_ref()?;
    re.captures(url).and_then(|caps| caps.get(1)).map(|m| m.as_str())
}

/// Rewrite a document URL into an embeddable frame source.
pub fn to_embeddable(url: &str) -> String {
    let clean = url.trim();
    if let Some(id) = capture_id(&DOCS_DOCUMENT, clean) {
        return format!("https://docs.google.com/document/d/{id}/preview");
    }
    if let Some(id) = capture_id(&DRIVE_FILE, clean) {
        return format!("https://drive.google.com/file/d/{id}/preview");
    }
    if DIRECT_PDF.as_ref().is_some_and(|re| re.is_match(clean)) {
        return clean.to_owned();
    }
    format!("{GVIEW_PREFIX}{}", urlencoding::encode(clean))
}

/// What the overlay is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerContent {
    Closed,
    Document { src: String },
    Fallback,
    Image { src: String },
}

pub struct ViewerModal<E> {
    modal: E,
    frame: E,
    fallback: E,
    image_view: Option<E>,
    close_button: Option<E>,
    content: ViewerContent,
}

impl<E: Element> ViewerModal<E> {
    pub fn new(modal: E, frame: E, fallback: E, image_view: Option<E>, close_button: Option<E>) -> Self {
        Self { modal, frame, fallback, image_view, close_button, content: ViewerContent::Closed }
    }

    pub fn content(&self) -> &ViewerContent {
        &self.content
    }

    pub fn is_open(&self) -> bool {
        self.content != ViewerContent::Closed
    }

    /// Open a document link, or the "no document" fallback for a blank URL.
    pub fn open_document(&mut self, url: &str) {
        self.frame.set_attribute("src", "");
        self.fallback.set_hidden(true);
        self.clear_image();

        if url.trim().is_empty() {
            self.frame.set_hidden(true);
            self.fallback.set_hidden(false);
            self.content = ViewerContent::Fallback;
        } else {
            let src = to_embeddable(url);
            self.frame.set_hidden(false);
            self.frame.set_attribute("src", &src);
            self.content = ViewerContent::Document { src };
        }
        self.show();
    }

    pub fn open_image(&mut self, url: &str) {
        self.frame.set_attribute("src", "");
        self.frame.set_hidden(true);
        self.fallback.set_hidden(true);
        if let Some(img) = &self.image_view
            && !url.is_empty()
        {
            img.set_hidden(false);
            img.set_attribute("src", url);
        }
        self.content = ViewerContent::Image { src: url.to_owned() };
        self.show();
    }

    pub fn close(&mut self) {
        self.modal.toggle_class(OPEN_CLASS, false);
        self.modal.set_attribute("aria-hidden", "true");
        self.frame.set_attribute("src", "");
        self.frame.set_hidden(false);
        self.clear_image();
        self.content = ViewerContent::Closed;
    }

    /// Document-level keydown. Returns `true` if it closed the overlay.
    pub fn on_key(&mut self, key: &str) -> bool {
        if self.is_open() && key == "Escape" {
            self.close();
            return true;
        }
        false
    }

    /// Click on the overlay. Only clicks on the backdrop itself close it.
    pub fn on_backdrop_click(&mut self, target_is_backdrop: bool) -> bool {
        if target_is_backdrop {
            self.close();
        }
        target_is_backdrop
    }

    fn show(&self) {
        self.modal.toggle_class(OPEN_CLASS, true);
        self.modal.set_attribute("aria-hidden", "false");
        if let Some(button) = &self.close_button {
            button.focus();
        }
    }

    fn clear_image(&self) {
        if let Some(img) = &self.image_view {
            img.set_attribute("src", "");
            img.set_hidden(true);
        }
    }
}

/// Image opener source: `data-img`, else the element's own `src`.
pub fn image_source<E: Element>(opener: &E) -> Option<String> {
    opener
        .attribute("data-img")
        .filter(|src| !src.is_empty())
        .or_else(|| opener.attribute("src"))
        .filter(|src| !src.is_empty())
}

/// Document opener URL from `data-pdf`; blank when absent.
pub fn document_url<E: Element>(opener: &E) -> String {
    opener.attribute("data-pdf").unwrap_or_default()
}
