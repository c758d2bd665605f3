//! Console logging macros
//!
//! On wasm32 these forward to `web_sys::console`. Native builds (unit tests,
//! benchmarks) have no JS console to call into, so the macros only evaluate
//! their format arguments and discard them.
//!
//! Usage:
//! ```rust
//! use attractor_engine::console_log;
//!
//! let bodies = 121;
//! console_log!("scene ready with {} bodies", bodies);
//! ```

/// Log an info line to the browser console
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

/// Log a warning line to the browser console
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::warn_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}
