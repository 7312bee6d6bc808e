//! Error type for tile-stroke.
//!
//! ## Rust Lesson #20: Error Handling
//!
//! Rust uses `Result<T, E>` instead of exceptions. `thiserror` derives the
//! `Display` and `std::error::Error` impls from the `#[error(...)]`
//! attributes, and `#[from]` lets `?` convert a `serde_json::Error` for us.

use thiserror::Error;

/// Everything that can go wrong while preparing or rendering a feature.
///
/// All of these are precondition violations: the renderer refuses the input
/// up front rather than looping or dividing by zero half-way through a path.
#[derive(Debug, Error)]
pub enum Error {
    #[error("dash pattern has no entries")]
    EmptyDashPattern,

    #[error("dash pattern entry {index} has length {length}, must be finite and > 0")]
    InvalidDashLength { index: usize, length: f64 },

    #[error("line part {part} has no points")]
    EmptyLinePart { part: usize },

    #[error("ring {ring} of polygon {polygon} has no points")]
    EmptyRing { polygon: usize, ring: usize },

    #[error("tile size {0} must be finite and > 0")]
    InvalidTileSize(f64),

    #[error("extrusion pad {0} must be finite")]
    InvalidPad(f64),

    #[error("extrusion skip distance {0} must be finite and >= 0")]
    InvalidSkip(f64),

    #[error("invalid tile JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
