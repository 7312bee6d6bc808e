//! Tile boundary classification.
//!
//! Upstream tiling clips features exactly at the tile edge, so a vertex
//! sitting *exactly* on `x = 0`, `x = size`, `y = 0` or `y = size` is almost
//! always a clip artifact. Comparisons are exact equality, not tolerances.

use std::ops::{BitAnd, BitOr};

use crate::geometry::Point;

/// Bitmask of the tile edges a point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TileEdges(u8);

impl TileEdges {
    pub const NONE: TileEdges = TileEdges(0);
    /// `x == 0`
    pub const LEFT: TileEdges = TileEdges(1);
    /// `x == size`
    pub const RIGHT: TileEdges = TileEdges(2);
    /// `y == 0`
    pub const TOP: TileEdges = TileEdges(4);
    /// `y == size`
    pub const BOTTOM: TileEdges = TileEdges(8);

    /// Which edges of a `size`-wide tile the point lies on.
    ///
    /// At most one of LEFT/RIGHT and one of TOP/BOTTOM is set; corners carry
    /// two bits. Interior (and exterior) points classify as `NONE`.
    pub fn classify(p: Point, size: f64) -> TileEdges {
        let mut bits = 0;
        if p.x == 0.0 {
            bits |= Self::LEFT.0;
        } else if p.x == size {
            bits |= Self::RIGHT.0;
        }
        if p.y == 0.0 {
            bits |= Self::TOP.0;
        } else if p.y == size {
            bits |= Self::BOTTOM.0;
        }
        TileEdges(bits)
    }

    #[inline]
    pub fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn contains(self, other: TileEdges) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitAnd for TileEdges {
    type Output = TileEdges;

    fn bitand(self, rhs: TileEdges) -> TileEdges {
        TileEdges(self.0 & rhs.0)
    }
}

impl BitOr for TileEdges {
    type Output = TileEdges;

    fn bitor(self, rhs: TileEdges) -> TileEdges {
        TileEdges(self.0 | rhs.0)
    }
}

/// Edges that both `p` and `q` lie on.
///
/// Non-empty means the segment `p -> q` runs along a tile edge, which the
/// renderer treats as a clip seam. A real shape edge that happens to run
/// exactly along the boundary is indistinguishable and gets the same
/// treatment.
pub fn shared_boundary(p: Point, q: Point, size: f64) -> TileEdges {
    let edges = TileEdges::classify(p, size);
    if edges.is_empty() {
        return edges;
    }
    edges & TileEdges::classify(q, size)
}
