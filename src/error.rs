//! Error types for recoverable failures.
//!
//! Contract violations (bad harmonic orders, malformed ranges, duplicate emphasis
//! sources) panic at the call site. Only data that comes from outside the crate,
//! such as configuration files and ladders loaded from JSON, reports errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FourierError {
    /// Error reading a configuration file from disk
    #[error("Failed to read config '{path}': {reason}")]
    ConfigRead { path: String, reason: String },

    /// Malformed JSON or a field of the wrong type
    #[error("Invalid config format: {0}")]
    ConfigFormat(#[from] serde_json::Error),

    /// A config value outside its allowed range
    #[error("Invalid config value for '{field}': {reason}")]
    ConfigValue { field: &'static str, reason: String },

    /// An axis ladder with no levels
    #[error("Axis ladder must contain at least one description")]
    EmptyLadder,

    /// Ladder levels out of order
    #[error("Axis ladder must be sorted widest to narrowest: level {index} has max {max}, previous max {previous}")]
    UnsortedLadder { index: usize, max: f64, previous: f64 },

    /// A single description with a non-positive max or spacing
    #[error("Invalid axis description at level {index}: {reason}")]
    InvalidDescription { index: usize, reason: String },

    /// A caller-supplied validation rule rejected the ladder
    #[error("Axis ladder rule violated: {0}")]
    LadderRule(String),
}

pub type FourierResult<T> = Result<T, FourierError>;
