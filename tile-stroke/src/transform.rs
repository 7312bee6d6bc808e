//! Tile-local to surface coordinate mapping.
//!
//! Projection math lives upstream; the renderer only needs a way to turn a
//! tile-local point into a surface pixel. Any `Fn(Point) -> Point` works,
//! and [`ScaleTransform`] covers the common case of a tile drawn into a
//! `width x height` pixel box.

use crate::geometry::Point;

/// Maps tile-local coordinates onto the drawing surface.
pub trait PointTransform {
    fn apply(&self, point: Point) -> Point;
}

impl<F> PointTransform for F
where
    F: Fn(Point) -> Point,
{
    #[inline]
    fn apply(&self, point: Point) -> Point {
        self(point)
    }
}

/// Independent scale on each axis: `(x * width_scale, y * height_scale)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleTransform {
    pub width_scale: f64,
    pub height_scale: f64,
}

impl ScaleTransform {
    pub fn new(width_scale: f64, height_scale: f64) -> Self {
        Self {
            width_scale,
            height_scale,
        }
    }

    /// Fit a `tile_size` tile into a `width x height` pixel surface.
    pub fn fit(tile_size: f64, width: f64, height: f64) -> Self {
        Self::new(width / tile_size, height / tile_size)
    }

    pub fn identity() -> Self {
        Self::new(1.0, 1.0)
    }
}

impl PointTransform for ScaleTransform {
    #[inline]
    fn apply(&self, point: Point) -> Point {
        Point::new(point.x * self.width_scale, point.y * self.height_scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_each_axis() {
        let t = ScaleTransform::new(2.0, 0.5);
        assert_eq!(t.apply(Point::new(10.0, 10.0)), Point::new(20.0, 5.0));
    }

    #[test]
    fn fit_tile_into_pixels() {
        let t = ScaleTransform::fit(4096.0, 512.0, 256.0);
        assert_eq!(t.apply(Point::new(4096.0, 4096.0)), Point::new(512.0, 256.0));
    }

    #[test]
    fn closures_are_transforms() {
        let shift = |p: Point| Point::new(p.x + 1.0, p.y - 1.0);
        assert_eq!(shift.apply(Point::new(0.0, 0.0)), Point::new(1.0, -1.0));
    }
}
