//! 2D line segment type.

use super::{Point2, Vec2};
use num_traits::Float;

/// A 2D line segment defined by two endpoints.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Returns the direction vector from start to end.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.end - self.start
    }

    /// Returns the length of the segment.
    #[inline]
    pub fn length(self) -> F {
        self.start.distance(self.end)
    }

    /// Returns the midpoint of the segment.
    #[inline]
    pub fn midpoint(self) -> Point2<F> {
        self.start.midpoint(self.end)
    }

    /// Intersects this segment with the carrier line of `other`.
    ///
    /// The two segments are treated as infinite lines to find the crossing
    /// point, which is then accepted only if it lies within the extent of
    /// `self`. The extent of `other` is deliberately ignored, so the
    /// operation is not symmetric: `a.clipped_intersection(b)` and
    /// `b.clipped_intersection(a)` can disagree.
    ///
    /// Returns `None` for (near-)parallel carriers or a crossing outside
    /// `self`.
    pub fn clipped_intersection(self, other: Self) -> Option<Point2<F>> {
        let a1 = self.end.y - self.start.y;
        let b1 = self.start.x - self.end.x;
        let c1 = a1 * self.start.x + b1 * self.start.y;

        let a2 = other.end.y - other.start.y;
        let b2 = other.start.x - other.end.x;
        let c2 = a2 * other.start.x + b2 * other.start.y;

        let delta = a1 * b2 - a2 * b1;
        if delta.abs() <= F::epsilon() {
            return None;
        }

        let crossing = Point2::new((b2 * c1 - b1 * c2) / delta, (a1 * c2 - a2 * c1) / delta);

        if self.contains_collinear(crossing) {
            Some(crossing)
        } else {
            None
        }
    }

    /// Tests whether a point on the carrier line lies within the segment.
    ///
    /// The point is within the extent when neither endpoint is further from
    /// it than the endpoints are from each other.
    fn contains_collinear(self, p: Point2<F>) -> bool {
        let span = self.length();
        span >= self.start.distance(p) && span >= self.end.distance(p)
    }
}

impl<F: Float> From<(Point2<F>, Point2<F>)> for Segment2<F> {
    fn from((start, end): (Point2<F>, Point2<F>)) -> Self {
        Self::new(start, end)
    }
}
