pub mod console;

pub use console::{log_console, warn_console};
