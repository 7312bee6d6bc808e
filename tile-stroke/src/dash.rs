//! Dashed strokes with a continuous phase.
//!
//! A map line arrives as many short segments. Restarting the dash pattern
//! at every vertex would produce visibly irregular dashes, so a
//! [`DashCursor`] carries the pattern position (entry index plus the
//! distance already consumed from that entry) from one segment to the next.
//!
//! Each [`DashCursor::advance`] works in a local frame: the surface is
//! translated to the pen and rotated to face the target, so the walk along
//! the segment is one-dimensional.

use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::surface::{Surface, save_scope};

/// One entry of a dash pattern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashSegment {
    pub length: f64,
    /// `true` = pen down for this length, `false` = gap.
    pub drawn: bool,
}

/// A validated dash pattern: non-empty, every length finite and positive.
#[derive(Debug, Clone, PartialEq)]
pub struct DashPattern {
    segments: Vec<DashSegment>,
}

impl DashPattern {
    /// Build the alternating form: even entries draw, odd entries skip.
    ///
    /// An odd-length pattern keeps that tagging as it wraps, so `[4, 2, 3]`
    /// draws 3 and then 4 back to back.
    pub fn new(lengths: &[f64]) -> Result<Self> {
        Self::from_segments(
            lengths
                .iter()
                .enumerate()
                .map(|(i, &length)| DashSegment {
                    length,
                    drawn: i % 2 == 0,
                })
                .collect(),
        )
    }

    /// Build from explicitly tagged entries.
    pub fn from_segments(segments: Vec<DashSegment>) -> Result<Self> {
        if segments.is_empty() {
            return Err(Error::EmptyDashPattern);
        }
        // A zero-length entry would never consume distance and loop forever
        if let Some((index, seg)) = segments
            .iter()
            .enumerate()
            .find(|(_, s)| !(s.length.is_finite() && s.length > 0.0))
        {
            return Err(Error::InvalidDashLength {
                index,
                length: seg.length,
            });
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[DashSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Length of one full cycle.
    pub fn period(&self) -> f64 {
        self.segments.iter().map(|s| s.length).sum()
    }
}

/// Position within a dash pattern along one sub-path.
///
/// Created at the first point of a sub-path and dropped when the sub-path
/// ends; never shared between sub-paths or features.
#[derive(Debug, Clone)]
pub struct DashCursor<'p> {
    pattern: &'p DashPattern,
    index: usize,
    /// Distance already consumed from `pattern[index]`.
    phase: f64,
    pen: Point,
}

impl<'p> DashCursor<'p> {
    /// Start at `pen` with the first pattern entry, nothing consumed.
    pub fn begin(pen: Point, pattern: &'p DashPattern) -> Self {
        Self {
            pattern,
            index: 0,
            phase: 0.0,
            pen,
        }
    }

    pub fn pen(&self) -> Point {
        self.pen
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Move the pen without drawing or consuming any of the pattern.
    pub fn reposition(&mut self, pen: Point) {
        self.pen = pen;
    }

    /// Draw the dashes between the pen and `to`, carrying the leftover
    /// phase into the next call.
    pub fn advance<S: Surface + ?Sized>(&mut self, surface: &mut S, to: Point) {
        let dx = to.x - self.pen.x;
        let dy = to.y - self.pen.y;
        let dist = (dx * dx + dy * dy).sqrt();

        let mut local = save_scope(surface);
        local.translate(self.pen.x, self.pen.y);
        local.rotate(dy.atan2(dx));
        local.move_to(0.0, 0.0);

        let mut x = 0.0;
        loop {
            let seg = self.pattern.segments[self.index];
            x += seg.length - self.phase;
            let more = x < dist;

            if !more {
                self.phase = seg.length - (x - dist);
                x = dist;
            }

            if seg.drawn {
                local.line_to(x, 0.0);
            } else {
                local.move_to(x, 0.0);
            }

            if !more {
                break;
            }
            self.phase = 0.0;
            self.index = (self.index + 1) % self.pattern.len();
        }

        self.pen = to;
    }
}
