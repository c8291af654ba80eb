/// Console logging for development builds
///
/// `log!` writes request/response tracing to the browser console. It compiles to
/// nothing in release builds unless the `console_logging` feature is enabled.
/// Failures the user should know about are reported with `leptos::logging::error!`
/// regardless of build mode.
///
/// # Examples
///
/// ```rust
/// use bus_reservation::logging::log;
/// # let route_id = 1;
/// # let travel_time = "09:00";
///
/// log!("Fetching occupancy for route {} at {}", route_id, travel_time);
/// ```
#[macro_export]
macro_rules! log {
    ($($arg:expr),+ $(,)?) => {
        #[cfg(all(target_arch = "wasm32", any(debug_assertions, feature = "console_logging")))]
        {
            web_sys::console::log_1(&format!($($arg),+).into());
        }
        #[cfg(not(all(target_arch = "wasm32", any(debug_assertions, feature = "console_logging"))))]
        {
            let _ = ($(&$arg),+);
        }
    };
}

pub use log;
