//! # tile-stroke
//!
//! Stroke and fill path building for clipped map-tile geometry.
//!
//! Vector features arrive already clipped to their tile. Drawn naively, that
//! leaves two artifacts: line strokes stop dead at the tile edge, and
//! polygon outlines get a stroke along the clip seam. This crate emits path
//! commands that avoid both, and dashes long polylines with a phase that
//! never resets at a vertex.
//!
//! ```
//! use tile_stroke::{
//!     render_feature, DashPattern, Geometry, PathRecorder, Point, RenderConfig,
//!     ScaleTransform, StrokeStyle,
//! };
//!
//! let mut road = Geometry::LineString(vec![Point::new(10.0, 10.0), Point::new(256.0, 80.0)]);
//! let style = StrokeStyle::dashed(DashPattern::new(&[6.0, 3.0]).unwrap());
//! let mut surface = PathRecorder::new();
//! render_feature(
//!     &mut surface,
//!     &mut road,
//!     &style,
//!     &ScaleTransform::fit(256.0, 512.0, 512.0),
//!     &RenderConfig::default(),
//! )
//! .unwrap();
//! assert!(!surface.is_empty());
//! ```
//!
//! ## Rust Lesson #7: Modules
//!
//! - `mod foo;` = load from `foo.rs` or `foo/mod.rs`
//! - `pub mod foo;` = also export it publicly
//! - `pub use foo::Bar;` = re-export Bar at this level

pub mod boundary;
pub mod dash;
pub mod error;
pub mod geometry;
pub mod render;
pub mod surface;
pub mod tile;
pub mod transform;

// Re-export common types at crate root for convenience.
pub use boundary::{TileEdges, shared_boundary};
pub use dash::{DashCursor, DashPattern, DashSegment};
pub use error::{Error, Result};
pub use geometry::{Geometry, Parts, Point, Ring};
pub use render::{RenderConfig, StrokeStyle, render_feature};
pub use surface::{PathCommand, PathRecorder, SavedState, Surface, save_scope};
pub use tile::TileData;
pub use transform::{PointTransform, ScaleTransform};
