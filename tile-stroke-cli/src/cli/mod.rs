//! CLI command implementations.
//!
//! - `render` - Render a tile's features to PNG, SVG or JSON

pub mod common;
pub mod render;
