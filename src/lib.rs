//! # folio-site
//!
//! Client-side behavior for a portfolio site, compiled to WebAssembly.
//!
//! Every page behavior is a small component built from explicit element
//! handles, so the logic runs natively under `cargo test` against fakes and
//! in the browser against `web-sys` elements.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`components`] | Theme, nav, header, anchors, reveal, footer, showcase, viewer |
//! | [`config`] | Tunables parsed from the optional `#site-config` JSON block |
//! | [`dom`] | `Element`, `Scheduler`, and `PreferenceStore` seams |
//! | `web` | `hydrate`-only bindings and the wasm start function |

pub mod components;
pub mod config;
pub mod dom;
#[cfg(feature = "hydrate")]
pub mod web;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    web::boot();
}
