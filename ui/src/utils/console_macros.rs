/// Macros for properly formatted console logging.
///
/// On wasm32 these wrap gloo_console with a `js_sys::Date::now()` timestamp.
/// Elsewhere (server-side rendering, host tests) they forward to `tracing`,
/// since the browser console bindings are unavailable there.
#[macro_export]
macro_rules! console_info {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        gloo_console::info!(format!("[{}] {}", js_sys::Date::now(), format!($($arg)*)));
        #[cfg(not(target_arch = "wasm32"))]
        tracing::info!($($arg)*);
    }};
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        gloo_console::warn!(format!("[{}] {}", js_sys::Date::now(), format!($($arg)*)));
        #[cfg(not(target_arch = "wasm32"))]
        tracing::warn!($($arg)*);
    }};
}

#[macro_export]
macro_rules! console_debug {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        gloo_console::debug!(format!("[{}] {}", js_sys::Date::now(), format!($($arg)*)));
        #[cfg(not(target_arch = "wasm32"))]
        tracing::debug!($($arg)*);
    }};
}
