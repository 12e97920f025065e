// src/utils/console.rs
//
// Diagnostics end up in the browser console for the web app and on stderr natively.

#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
use web_sys::console;

#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
pub fn log_console(message: &str) {
    console::log_1(&message.into());
}

#[cfg(not(all(feature = "wasm", target_arch = "wasm32")))]
pub fn log_console(message: &str) {
    if cfg!(debug_assertions) {
        eprintln!("{}", message);
    }
}

#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
pub fn warn_console(message: &str) {
    console::warn_1(&message.into());
}

#[cfg(not(all(feature = "wasm", target_arch = "wasm32")))]
pub fn warn_console(message: &str) {
    eprintln!("Warning: {}", message);
}
