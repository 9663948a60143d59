//! Serialization of generated geometry.
//!
//! Currently SVG only: markup fragments for DOM injection and standalone
//! documents for file export.

mod svg;

pub use svg::{faces_to_svg, faces_to_svg_document};
