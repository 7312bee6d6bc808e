//! Feature path building.
//!
//! Turns one feature's geometry into surface path commands, handling the
//! two artifacts of clipped tile data:
//!
//! - **Line endpoints on the tile edge** are pushed `pad` units outward
//!   along the line's own direction, so the stroke runs off the tile instead
//!   of stopping dead at the seam. The over-draw is clipped by the tile's
//!   viewport. This *mutates the caller's geometry*; rendering the same
//!   feature into several tiles needs one copy of the coordinates per tile.
//! - **Ring edges lying along a tile edge** are clip seams, not real
//!   outline. Stroked rings lift the pen across them; filled rings keep
//!   them, since the fill region needs to stay closed.
//!
//! Dash phase is carried along each sub-path (one line part or one ring)
//! by a [`DashCursor`] that lives only for that sub-path.

use log::{debug, trace};

use crate::boundary::{TileEdges, shared_boundary};
use crate::dash::{DashCursor, DashPattern};
use crate::error::{Error, Result};
use crate::geometry::{Geometry, Parts, Point};
use crate::surface::Surface;
use crate::transform::PointTransform;

/// Tile edge length used when none is given.
pub const DEFAULT_TILE_SIZE: f64 = 256.0;
/// How far past the tile edge clipped line endpoints are extended.
pub const DEFAULT_PAD: f64 = 50.0;
/// Neighbours closer than this don't count when finding a line's direction.
pub const DEFAULT_SKIP: f64 = 2.0;

/// Geometry-level settings for a render pass, in tile-local units.
///
/// Use one config for every feature of a tile so extrusions line up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Edge length of the tile square `[0, tile_size]^2`.
    pub tile_size: f64,
    /// Extrusion distance for line endpoints on the tile edge.
    pub pad: f64,
    /// Minimum neighbour distance when establishing extrusion direction.
    pub skip: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            pad: DEFAULT_PAD,
            skip: DEFAULT_SKIP,
        }
    }
}

impl RenderConfig {
    pub fn with_tile_size(mut self, tile_size: f64) -> Self {
        self.tile_size = tile_size;
        self
    }

    pub fn with_pad(mut self, pad: f64) -> Self {
        self.pad = pad;
        self
    }

    pub fn with_skip(mut self, skip: f64) -> Self {
        self.skip = skip;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.tile_size.is_finite() && self.tile_size > 0.0) {
            return Err(Error::InvalidTileSize(self.tile_size));
        }
        if !self.pad.is_finite() {
            return Err(Error::InvalidPad(self.pad));
        }
        // A negative skip would accept a neighbour sitting on the endpoint
        if !(self.skip.is_finite() && self.skip >= 0.0) {
            return Err(Error::InvalidSkip(self.skip));
        }
        Ok(())
    }
}

/// Per-feature rendering flags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrokeStyle {
    /// Dash pattern for strokes; `None` draws solid lines.
    pub dashes: Option<DashPattern>,
    /// Building a fill path: no dashing, no seam pen-lifts.
    pub filled: bool,
}

impl StrokeStyle {
    pub fn solid() -> Self {
        Self::default()
    }

    pub fn dashed(pattern: DashPattern) -> Self {
        Self {
            dashes: Some(pattern),
            filled: false,
        }
    }

    pub fn fill() -> Self {
        Self {
            dashes: None,
            filled: true,
        }
    }
}

/// Render one feature onto `surface`.
///
/// The whole geometry is validated before anything is drawn: an empty line
/// part or ring is rejected with nothing emitted. Line parts too short to
/// extrude are skipped (and logged) without error.
pub fn render_feature<S, T>(
    surface: &mut S,
    geometry: &mut Geometry,
    style: &StrokeStyle,
    transform: &T,
    config: &RenderConfig,
) -> Result<()>
where
    S: Surface + ?Sized,
    T: PointTransform + ?Sized,
{
    config.validate()?;
    let dashes = style.dashes.as_ref();

    let parts = geometry.parts_mut();
    validate(&parts)?;

    match parts {
        Parts::Lines(lines) => {
            for (part, points) in lines.iter_mut().enumerate() {
                render_line(surface, part, points, dashes, transform, config);
            }
        }
        Parts::Polygons(polygons) => {
            for rings in polygons.iter() {
                for ring in rings {
                    render_ring(surface, ring, dashes, style.filled, transform, config.tile_size);
                }
            }
        }
    }
    Ok(())
}

fn validate(parts: &Parts<'_>) -> Result<()> {
    match parts {
        Parts::Lines(lines) => {
            if let Some(part) = lines.iter().position(Vec::is_empty) {
                return Err(Error::EmptyLinePart { part });
            }
        }
        Parts::Polygons(polygons) => {
            for (polygon, rings) in polygons.iter().enumerate() {
                if let Some(ring) = rings.iter().position(Vec::is_empty) {
                    return Err(Error::EmptyRing { polygon, ring });
                }
            }
        }
    }
    Ok(())
}

/// Outcome of trying to extend a line endpoint past the tile edge.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Endpoint {
    /// Not on the tile edge; leave it alone.
    Interior,
    Extruded(Point),
    /// On the tile edge, but every other point is within `skip`.
    Degenerate,
}

/// Extend `points[index]` (the first or last point) away from the nearest
/// point farther than `config.skip`, if it lies on the tile edge.
fn extrude_endpoint(points: &[Point], index: usize, config: &RenderConfig) -> Endpoint {
    let point = points[index];
    if TileEdges::classify(point, config.tile_size).is_empty() {
        return Endpoint::Interior;
    }

    let far_enough = |other: &&Point| point.distance(**other) > config.skip;
    let from = if index == 0 {
        points[1..].iter().find(far_enough)
    } else {
        points[..index].iter().rev().find(far_enough)
    };

    match from {
        Some(from) => {
            let dist = point.distance(*from);
            Endpoint::Extruded(Point::new(
                point.x + config.pad * (point.x - from.x) / dist,
                point.y + config.pad * (point.y - from.y) / dist,
            ))
        }
        None => Endpoint::Degenerate,
    }
}

/// Extrude both ends of a line part in place.
///
/// Returns `false` (leaving `points` untouched) when either end is on the
/// tile edge but has no usable neighbour.
fn extrude_line_ends(points: &mut [Point], config: &RenderConfig) -> bool {
    let last = points.len() - 1;
    let original_head = points[0];

    match extrude_endpoint(points, 0, config) {
        Endpoint::Degenerate => return false,
        Endpoint::Extruded(p) => points[0] = p,
        Endpoint::Interior => {}
    }
    if last == 0 {
        return true;
    }
    // The tail sees the already-extruded head when searching backwards
    match extrude_endpoint(points, last, config) {
        Endpoint::Degenerate => {
            points[0] = original_head;
            false
        }
        Endpoint::Extruded(p) => {
            points[last] = p;
            true
        }
        Endpoint::Interior => true,
    }
}

fn render_line<S, T>(
    surface: &mut S,
    part: usize,
    points: &mut [Point],
    dashes: Option<&DashPattern>,
    transform: &T,
    config: &RenderConfig,
) where
    S: Surface + ?Sized,
    T: PointTransform + ?Sized,
{
    let (head, tail) = (points[0], points[points.len() - 1]);
    if !extrude_line_ends(points, config) {
        debug!(
            "skipping line part {}: {} points, all within {} of its tile-edge endpoint",
            part,
            points.len(),
            config.skip
        );
        return;
    }
    if points[0] != head {
        trace!("extruded line head {:?} -> {:?}", head, points[0]);
    }
    if points[points.len() - 1] != tail {
        trace!("extruded line tail {:?} -> {:?}", tail, points[points.len() - 1]);
    }

    let mut cursor: Option<DashCursor<'_>> = None;
    for (j, point) in points.iter().enumerate() {
        let screen = transform.apply(*point);
        if j == 0 {
            surface.move_to(screen.x, screen.y);
            cursor = dashes.map(|pattern| DashCursor::begin(screen, pattern));
            continue;
        }
        match cursor.as_mut() {
            Some(cursor) => cursor.advance(surface, screen),
            None => surface.line_to(screen.x, screen.y),
        }
    }
}

fn render_ring<S, T>(
    surface: &mut S,
    ring: &[Point],
    dashes: Option<&DashPattern>,
    filled: bool,
    transform: &T,
    tile_size: f64,
) where
    S: Surface + ?Sized,
    T: PointTransform + ?Sized,
{
    let first = ring[0];
    let screen = transform.apply(first);
    surface.move_to(screen.x, screen.y);
    let mut cursor = dashes.map(|pattern| DashCursor::begin(screen, pattern));

    // Walk one past the end so the ring closes on its first point
    let mut prev = first;
    for &point in ring[1..].iter().chain(std::iter::once(&first)) {
        let screen = transform.apply(point);

        if !filled && !shared_boundary(point, prev, tile_size).is_empty() {
            trace!("pen-lift along tile edge {:?} -> {:?}", prev, point);
            surface.move_to(screen.x, screen.y);
            if let Some(cursor) = cursor.as_mut() {
                cursor.reposition(screen);
            }
        } else {
            match cursor.as_mut() {
                Some(cursor) if !filled => cursor.advance(surface, screen),
                _ => surface.line_to(screen.x, screen.y),
            }
        }
        prev = point;
    }
}

// ============================================================================
// TESTS
// ============================================================================
