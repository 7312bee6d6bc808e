//! Tile input: the features of one tile plus its coordinate granularity.
//!
//! ```json
//! {
//!   "granularity": 4096,
//!   "features": [
//!     { "type": "LineString", "coordinates": [[0, 100], [2048, 300]] },
//!     { "type": "Polygon", "coordinates": [[[0, 0], [4096, 0], [2048, 900], [0, 0]]] }
//!   ]
//! }
//! ```

use serde::Deserialize;

use crate::error::Result;
use crate::geometry::Geometry;
use crate::render::{DEFAULT_TILE_SIZE, RenderConfig};

fn default_granularity() -> f64 {
    DEFAULT_TILE_SIZE
}

/// One tile's worth of features in tile-local coordinates.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TileData {
    /// Edge length of the tile's coordinate square.
    #[serde(default = "default_granularity")]
    pub granularity: f64,
    #[serde(default)]
    pub features: Vec<Geometry>,
}

impl TileData {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// `base` with the tile size taken from this tile's granularity.
    pub fn render_config(&self, base: RenderConfig) -> RenderConfig {
        base.with_tile_size(self.granularity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    #[test]
    fn parse_tile() {
        let tile = TileData::from_json(
            r#"{
                "granularity": 4096,
                "features": [
                    {"type": "LineString", "coordinates": [[0, 100], [2048, 300]]},
                    {"type": "MultiPolygon", "coordinates": [[[[0, 0], [10, 0], [10, 10]]]]}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(tile.granularity, 4096.0);
        assert_eq!(tile.features.len(), 2);
        assert_eq!(
            tile.features[0],
            Geometry::LineString(vec![Point::new(0.0, 100.0), Point::new(2048.0, 300.0)])
        );
        assert!(tile.features[1].is_polygonal());
    }

    #[test]
    fn granularity_defaults() {
        let tile = TileData::from_json(r#"{"features": []}"#).unwrap();
        assert_eq!(tile.granularity, DEFAULT_TILE_SIZE);
        assert_eq!(tile.render_config(RenderConfig::default()).tile_size, DEFAULT_TILE_SIZE);
    }

    #[test]
    fn render_config_keeps_pad_and_skip() {
        let tile = TileData::from_json(r#"{"granularity": 10000}"#).unwrap();
        let config = tile.render_config(RenderConfig::default().with_pad(8.0));
        assert_eq!(config.tile_size, 10000.0);
        assert_eq!(config.pad, 8.0);
        assert_eq!(config.skip, crate::render::DEFAULT_SKIP);
    }

    #[test]
    fn malformed_tile_is_an_error() {
        assert!(TileData::from_json(r#"{"features": [{"type": "LineString"}]}"#).is_err());
    }
}
