//! Line segment geometry for trail crossing
//!
//! A trail is a polyline; every pair of consecutive trail points is a segment.
//! Two segments cross when the 2x2 system
//!
//! ```text
//! a1 + s * (a2 - a1) = b1 + t * (b2 - b1)
//! ```
//!
//! has a solution with both `s` and `t` in `[0, 1]`. Parallel, collinear and
//! zero-length segments make the system rank deficient and never cross.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Relative determinant threshold below which the system is treated as singular
pub const RANK_EPSILON: f64 = 1e-9;

/// A directed segment between two trail points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: DVec2,
    pub end: DVec2,
}

impl Segment {
    pub fn new(start: DVec2, end: DVec2) -> Self {
        Self { start, end }
    }

    /// Direction vector (end - start)
    #[inline]
    pub fn delta(&self) -> DVec2 {
        self.end - self.start
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.delta().length()
    }

    /// Solve for the crossing parameters `(s, t)` of `self` and `other`.
    ///
    /// Returns `None` when the segments are parallel (or degenerate) or when
    /// the lines meet outside either segment.
    pub fn crossing(&self, other: &Segment) -> Option<(f64, f64)> {
        let da = self.delta();
        let db = other.delta();

        // Full-rank check before any division
        let det = da.perp_dot(db);
        if det.abs() <= RANK_EPSILON * da.length() * db.length() {
            return None;
        }

        let r = other.start - self.start;
        let s = r.perp_dot(db) / det;
        let t = r.perp_dot(da) / det;

        if (0.0..=1.0).contains(&s) && (0.0..=1.0).contains(&t) {
            Some((s, t))
        } else {
            None
        }
    }

    #[inline]
    pub fn crosses(&self, other: &Segment) -> bool {
        self.crossing(other).is_some()
    }
}

/// Iterate the segments of a polyline, oldest first
pub fn segments(
    points: &[DVec2],
) -> impl DoubleEndedIterator<Item = Segment> + ExactSizeIterator + '_ {
    points.windows(2).map(|w| Segment::new(w[0], w[1]))
}

/// Total length of a polyline (zero for fewer than two points)
pub fn polyline_length(points: &[DVec2]) -> f64 {
    segments(points).map(|s| s.length()).sum()
}
