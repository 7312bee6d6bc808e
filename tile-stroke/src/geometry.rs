//! Core geometry types for tile-stroke.
//!
//! ## Rust Lesson #3: Structs & Derives
//!
//! `#[derive(...)]` auto-generates common functionality:
//! - `Debug` = lets you print with `{:?}`
//! - `Clone`/`Copy` = can duplicate the value (implicitly, for `Copy`)
//! - `PartialEq` = can compare with `==`
//! - `Serialize`/`Deserialize` = serde can read and write it as JSON
//!
//! Coordinates here are tile-local: a tile occupies the square
//! `[0, size] x [0, size]`.

use serde::{Deserialize, Serialize};

/// A 2D point in tile-local (or, after transformation, surface) space.
///
/// Serialized as a GeoJSON position: `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

/// An ordered run of points (one line part or one polygon ring).
pub type Ring = Vec<Point>;

/// Feature geometry, tagged the way GeoJSON tags it.
///
/// ```json
/// { "type": "LineString", "coordinates": [[0, 0], [10, 5]] }
/// ```
///
/// Polygons are lists of rings (outer first, then holes); each ring's first
/// and last point are expected to coincide, but the renderer closes rings
/// itself so an open ring draws the same.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    LineString(Vec<Point>),
    Polygon(Vec<Ring>),
    MultiLineString(Vec<Vec<Point>>),
    MultiPolygon(Vec<Vec<Ring>>),
}

/// A geometry normalized to its multi-part form.
///
/// ## Rust Lesson #8: Borrowed Slices
///
/// `std::slice::from_mut` turns `&mut T` into a one-element `&mut [T]`
/// without copying. That lets a `LineString` pose as a `MultiLineString`
/// while every write still lands in the caller's own storage.
#[derive(Debug)]
pub enum Parts<'a> {
    Lines(&'a mut [Vec<Point>]),
    Polygons(&'a mut [Vec<Ring>]),
}

impl Geometry {
    /// Parse a single feature from JSON.
    ///
    /// Sibling keys other than `type` and `coordinates` (e.g. `properties`)
    /// are ignored.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The GeoJSON tag of this geometry.
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::LineString(_) => "LineString",
            Geometry::Polygon(_) => "Polygon",
            Geometry::MultiLineString(_) => "MultiLineString",
            Geometry::MultiPolygon(_) => "MultiPolygon",
        }
    }

    /// Whether this is a polygon or multi-polygon.
    pub fn is_polygonal(&self) -> bool {
        matches!(self, Geometry::Polygon(_) | Geometry::MultiPolygon(_))
    }

    /// Normalize to multi-part form, borrowing the underlying coordinates.
    pub fn parts_mut(&mut self) -> Parts<'_> {
        match self {
            Geometry::LineString(line) => Parts::Lines(std::slice::from_mut(line)),
            Geometry::MultiLineString(lines) => Parts::Lines(lines),
            Geometry::Polygon(rings) => Parts::Polygons(std::slice::from_mut(rings)),
            Geometry::MultiPolygon(polygons) => Parts::Polygons(polygons),
        }
    }

    /// Total number of points across all parts and rings.
    pub fn point_count(&self) -> usize {
        match self {
            Geometry::LineString(line) => line.len(),
            Geometry::MultiLineString(lines) => lines.iter().map(Vec::len).sum(),
            Geometry::Polygon(rings) => rings.iter().map(Vec::len).sum(),
            Geometry::MultiPolygon(polygons) => polygons
                .iter()
                .flat_map(|rings| rings.iter())
                .map(Vec::len)
                .sum(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_distance() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(3.0, 4.0);
        assert_eq!(p1.distance(p2), 5.0); // 3-4-5 triangle
    }

    #[test]
    fn parse_line_string() {
        let geometry =
            Geometry::from_json(r#"{"type":"LineString","coordinates":[[0,0],[10,5]]}"#).unwrap();
        assert_eq!(
            geometry,
            Geometry::LineString(vec![Point::new(0.0, 0.0), Point::new(10.0, 5.0)])
        );
        assert_eq!(geometry.type_name(), "LineString");
    }

    #[test]
    fn parse_ignores_properties() {
        let json = r#"{
            "type": "Polygon",
            "properties": {"building": "yes"},
            "coordinates": [[[0,0],[10,0],[10,10],[0,0]]]
        }"#;
        let geometry = Geometry::from_json(json).unwrap();
        assert!(geometry.is_polygonal());
        assert_eq!(geometry.point_count(), 4);
    }

    #[test]
    fn parse_rejects_unknown_type() {
        let result = Geometry::from_json(r#"{"type":"Point","coordinates":[1,2]}"#);
        assert!(matches!(result, Err(crate::Error::Json(_))));
    }

    #[test]
    fn point_serializes_as_position() {
        let json = serde_json::to_string(&Point::new(1.5, -2.0)).unwrap();
        assert_eq!(json, "[1.5,-2.0]");
    }

    #[test]
    fn singular_forms_normalize_to_one_part() {
        let mut line = Geometry::LineString(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
        match line.parts_mut() {
            Parts::Lines(parts) => {
                assert_eq!(parts.len(), 1);
                assert_eq!(parts[0].len(), 2);
            }
            Parts::Polygons(_) => panic!("line string normalized to polygons"),
        }

        let mut polygon = Geometry::Polygon(vec![vec![Point::new(0.0, 0.0)], vec![]]);
        match polygon.parts_mut() {
            Parts::Polygons(parts) => {
                assert_eq!(parts.len(), 1);
                assert_eq!(parts[0].len(), 2, "both rings stay in the one part");
            }
            Parts::Lines(_) => panic!("polygon normalized to lines"),
        }
    }

    #[test]
    fn normalized_writes_reach_the_geometry() {
        let mut line = Geometry::LineString(vec![Point::new(0.0, 0.0)]);
        if let Parts::Lines(parts) = line.parts_mut() {
            parts[0][0].x = 42.0;
        }
        assert_eq!(line, Geometry::LineString(vec![Point::new(42.0, 0.0)]));
    }
}
