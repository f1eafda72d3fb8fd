//! Error Types
//!
//! This module defines the error types used by the crate.
//!
//! # Overview
//!
//! Running an animation never fails: completions always report success and are
//! simply forwarded up the combinator tree. The only fallible surface is
//! configuration, covered by [`AnimaticsError`]:
//! - Invalid durations and delays
//! - Invalid spring parameters
//! - Malformed JSON presets
//!
//! # Usage
//!
//! ```rust,ignore
//! use animatics::errors::Result;
//! use animatics::AnimationSettings;
//!
//! fn load_preset(json: &str) -> Result<AnimationSettings> {
//!     AnimationSettings::from_json(json)
//! }
//! ```

use thiserror::Error;

/// The main error type for animation configuration.
#[derive(Error, Debug)]
pub enum AnimaticsError {
    // ========================================================================
    // Settings Validation Errors
    // ========================================================================
    /// A duration or delay was negative, NaN or infinite.
    #[error("Invalid {field}: {value} seconds")]
    InvalidDuration {
        /// Name of the offending setting
        field: &'static str,
        /// The rejected value, in seconds
        value: f32,
    },

    /// Spring damping must lie in `(0, 1]`.
    #[error("Invalid spring damping: {damping} (expected 0 < damping <= 1)")]
    InvalidSpring {
        /// The rejected damping ratio
        damping: f32,
    },

    /// Spring initial velocity must be finite.
    #[error("Invalid spring velocity: {value}")]
    InvalidVelocity {
        /// The rejected velocity
        value: f32,
    },

    // ========================================================================
    // Format & Parsing Errors
    // ========================================================================
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Alias for `Result<T, AnimaticsError>`.
pub type Result<T> = std::result::Result<T, AnimaticsError>;
