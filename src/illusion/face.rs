//! A single panel of the illusion.

use crate::primitives::Point2;
use num_traits::Float;

/// One closed face of the generated illusion.
///
/// A face is an ordered vertex loop (implicitly closed, per SVG `<polygon>`
/// semantics) plus its assigned fill color. Ownership of the fill transfers
/// to the caller once rendered; recoloring does not require regeneration.
#[derive(Debug, Clone, PartialEq)]
pub struct Face<F> {
    /// Vertices of the face outline, at least 3.
    pub vertices: Vec<Point2<F>>,
    /// Fill color, e.g. `"#e63946"`.
    pub fill: String,
}

impl<F: Float> Face<F> {
    /// Creates a face from an outline and a fill color.
    #[inline]
    pub fn new(vertices: Vec<Point2<F>>, fill: impl Into<String>) -> Self {
        Self {
            vertices,
            fill: fill.into(),
        }
    }

    /// Returns the number of vertices in the outline.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}
