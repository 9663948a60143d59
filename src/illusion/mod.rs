//! Impossible-polygon generation.
//!
//! Maps a [`PolygonSpec`] and a color palette to the faces of a
//! Penrose-style "impossible" figure, and on to SVG markup. Generation is a
//! pure function: no state survives between calls, identical inputs produce
//! byte-identical output, and concurrent calls need no coordination.
//!
//! # Example
//!
//! ```
//! use illusory::{generate, PolygonSpec};
//!
//! let palette = vec![
//!     "#e63946".to_string(),
//!     "#457b9d".to_string(),
//!     "#2a9d8f".to_string(),
//! ];
//! let spec = PolygonSpec::new(3, false, 0.0, 0.5).unwrap();
//! let svg = generate(&spec, &palette).unwrap();
//!
//! assert!(svg.starts_with("<svg"));
//! assert_eq!(svg.matches("<polygon").count(), 3);
//! ```

mod construct;
mod face;
mod spec;

pub use construct::build_faces;
pub use face::Face;
pub use spec::PolygonSpec;

use crate::error::IllusionError;
use crate::io::faces_to_svg;
use num_traits::Float;
use std::fmt;

/// Generates the SVG markup for an impossible polygon.
///
/// Shorthand for [`build_faces`] followed by [`faces_to_svg`]. The returned
/// fragment is ready to be injected as the inner content of a container
/// element; use [`crate::io::faces_to_svg_document`] for a standalone file.
pub fn generate<F: Float + fmt::Display>(
    spec: &PolygonSpec<F>,
    palette: &[String],
) -> Result<String, IllusionError> {
    let faces = build_faces(spec, palette)?;
    Ok(faces_to_svg(&faces))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> Vec<String> {
        vec!["#fff".to_string(), "#000".to_string()]
    }

    #[test]
    fn test_generate_polygon_count() {
        for n in 3..=16 {
            let spec = PolygonSpec::new(n, false, 0.5, 0.5).unwrap();
            let svg = generate(&spec, &palette()).unwrap();
            assert_eq!(svg.matches("<polygon ").count(), n as usize);
        }
    }

    #[test]
    fn test_generate_is_byte_identical() {
        let spec = PolygonSpec::new(7, true, 0.25, 0.75).unwrap();
        let a = generate(&spec, &palette()).unwrap();
        let b = generate(&spec, &palette()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_rejects_two_edges() {
        assert_eq!(
            PolygonSpec::<f64>::new(2, false, 0.5, 0.5).unwrap_err(),
            IllusionError::EdgeCountTooSmall { n: 2 }
        );
    }

    #[test]
    fn test_parameters_change_output() {
        let base = PolygonSpec::new(6, false, 0.3, 0.3).unwrap();
        let thicker = PolygonSpec::new(6, false, 0.7, 0.3).unwrap();
        let deeper = PolygonSpec::new(6, false, 0.3, 0.7).unwrap();

        let reference = generate(&base, &palette()).unwrap();
        assert_ne!(reference, generate(&thicker, &palette()).unwrap());
        assert_ne!(reference, generate(&deeper, &palette()).unwrap());
    }
}
