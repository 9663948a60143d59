//! illusory - Impossible-polygon SVG illusions
//!
//! A deterministic geometry engine for Penrose-style "impossible" figures:
//! edge count, thickness, and perspective go in, SVG markup comes out. The
//! engine is a pure function over its inputs, so it can be re-run wholesale
//! on every parameter change and called concurrently without coordination.

pub mod controller;
pub mod error;
pub mod illusion;
pub mod io;
pub mod primitives;

pub use controller::{ControllerObserver, IllusionController, SelectionState};
pub use error::IllusionError;
pub use illusion::{build_faces, generate, Face, PolygonSpec};
pub use primitives::{Point2, Segment2, Vec2};
