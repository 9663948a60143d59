//! Generation parameters.

use crate::error::IllusionError;
use num_traits::Float;

/// Parameters for one impossible-polygon generation.
///
/// The color palette is not part of the spec: it is owned by the caller and
/// only read at generation time, so the same spec can be re-rendered with an
/// edited palette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolygonSpec<F> {
    /// Number of edges (and faces) of the illusion, at least 3.
    pub edge_count: u32,
    /// Reflect the shape across the vertical axis.
    pub mirrored: bool,
    /// Apparent wall width of each face, in [0, 1].
    pub thickness: F,
    /// Pseudo-3D skew of the impossible joints, in [0, 1].
    pub perspective: F,
}

impl<F: Float> PolygonSpec<F> {
    /// Creates a validated spec.
    ///
    /// `thickness` and `perspective` are clamped into [0, 1]; values outside
    /// the range have no distinct geometric meaning, only visually extreme
    /// results. Non-finite values and edge counts below 3 are rejected.
    ///
    /// # Example
    ///
    /// ```
    /// use illusory::PolygonSpec;
    ///
    /// let spec = PolygonSpec::new(5, false, 1.5, -0.2).unwrap();
    /// assert_eq!(spec.thickness, 1.0);
    /// assert_eq!(spec.perspective, 0.0);
    ///
    /// assert!(PolygonSpec::<f64>::new(2, false, 0.5, 0.5).is_err());
    /// ```
    pub fn new(
        edge_count: u32,
        mirrored: bool,
        thickness: F,
        perspective: F,
    ) -> Result<Self, IllusionError> {
        if edge_count < 3 {
            return Err(IllusionError::EdgeCountTooSmall { n: edge_count });
        }
        if !thickness.is_finite() {
            return Err(IllusionError::NonFiniteParameter { name: "thickness" });
        }
        if !perspective.is_finite() {
            return Err(IllusionError::NonFiniteParameter {
                name: "perspective",
            });
        }

        Ok(Self {
            edge_count,
            mirrored,
            thickness: clamp_unit(thickness),
            perspective: clamp_unit(perspective),
        })
    }
}

/// Clamps a value into [0, 1].
#[inline]
pub(crate) fn clamp_unit<F: Float>(v: F) -> F {
    v.max(F::zero()).min(F::one())
}
