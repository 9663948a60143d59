//! Error types for illusion generation.

use thiserror::Error;

/// Errors that can occur while building or editing an impossible polygon.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IllusionError {
    /// Fewer than three edges cannot form a closed illusion.
    #[error("edge count must be at least 3, got {n}")]
    EdgeCountTooSmall {
        /// The rejected edge count.
        n: u32,
    },

    /// A continuous parameter was NaN or infinite.
    ///
    /// Out-of-range values are clamped instead; only non-finite input is fatal.
    #[error("parameter `{name}` must be finite")]
    NonFiniteParameter {
        /// Name of the offending parameter.
        name: &'static str,
    },

    /// The corner intersections required by the illusion do not exist
    /// for the given parameters.
    #[error("construction failed: degenerate corner intersections")]
    ConstructionFailed,

    /// A face index was outside the generated face range.
    #[error("face index {index} out of range for {face_count} faces")]
    FaceIndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of faces currently generated.
        face_count: usize,
    },

    /// A color edit was requested while no face is selected.
    #[error("no face is selected")]
    NoFaceSelected,
}
