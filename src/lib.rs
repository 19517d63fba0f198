//! Valentine page core crate.
//!
//! The page itself (falling hearts, card, heart burst, background music) is
//! mounted by `start_page()`. The interesting part is the "No" button: it
//! measures itself on hover / touch and jumps to a random spot that is still
//! fully on screen, and pulls itself back in when a resize would clip it.
//! That logic lives in `geometry` and `evasive` and has no DOM dependency.

use wasm_bindgen::prelude::*;

#[macro_use]
mod console;

pub mod audio;
pub mod config;
pub mod effects;
pub mod error;
pub mod evasive;
pub mod geometry;
pub mod page;
pub mod rng;

pub use config::{PageConfig, Variant};
pub use error::PageError;
pub use evasive::{EvasiveControl, Trigger};
pub use geometry::{compute_evade_delta, Delta, Displacement, ElementBox, Viewport};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// Entry points
// -----------------------------------------------------------------------------

/// Mount the default (padded) page.
#[wasm_bindgen]
pub fn start_page() -> Result<(), JsValue> {
    page::mount(PageConfig::default()).map_err(Into::into)
}

/// Mount by variant name: `"classic"` or `"padded"`.
#[wasm_bindgen]
pub fn start_page_with_variant(name: &str) -> Result<(), JsValue> {
    let variant = Variant::from_name(name)?;
    page::mount(PageConfig::for_variant(variant)).map_err(Into::into)
}

/// Mount with a JSON config, e.g. `{"variant":"classic","padding":20}`.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_page_with_config(json: &str) -> Result<(), JsValue> {
    let config = PageConfig::from_json(json)?;
    page::mount(config).map_err(Into::into)
}

/// Tear the page down, releasing every listener. Returns false if nothing was mounted.
#[wasm_bindgen]
pub fn stop_page() -> bool {
    page::unmount()
}
