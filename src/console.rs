//! Browser console logging.
//!
//! Off wasm32 the message is formatted and dropped, so native tests never reach
//! into JS imports. Crate-local: `#[macro_use]` on the module makes them
//! visible to every module declared after it.

macro_rules! page_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        web_sys::console::log_1(
            &format!("[valentine] {}", format_args!($($arg)*)).into(),
        );
        #[cfg(not(target_arch = "wasm32"))]
        let _ = format!($($arg)*);
    }};
}

macro_rules! page_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        web_sys::console::warn_1(
            &format!("[valentine] {}", format_args!($($arg)*)).into(),
        );
        #[cfg(not(target_arch = "wasm32"))]
        let _ = format!($($arg)*);
    }};
}
