//! SVG serialization for generated faces.
//!
//! Two output forms:
//!
//! - [`faces_to_svg`] - an `<svg>` fragment meant to be injected as the
//!   inner content of a container element;
//! - [`faces_to_svg_document`] - a standalone `.svg` file with an XML
//!   declaration and the SVG namespace on the root element.
//!
//! Each face becomes one `<polygon points="x1,y1 x2,y2 ..." fill="..."/>`;
//! the first and last point are implicitly connected per SVG polygon
//! semantics.

use crate::illusion::Face;
use num_traits::Float;
use std::fmt;
use std::fmt::Write;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Fraction of the bounding-box size added as viewport padding on each side.
const VIEWBOX_PADDING: f64 = 0.1;

/// Renders faces into an `<svg>` markup fragment.
///
/// The `viewBox` is fitted to the faces' bounding box with a small margin,
/// so the figure stays fully visible at any render size.
///
/// # Example
///
/// ```
/// use illusory::io::faces_to_svg;
/// use illusory::{build_faces, PolygonSpec};
///
/// let palette = vec!["#fff".to_string()];
/// let spec = PolygonSpec::new(4, false, 0.5, 0.5).unwrap();
/// let faces = build_faces(&spec, &palette).unwrap();
///
/// let svg = faces_to_svg(&faces);
/// assert!(svg.starts_with("<svg viewBox="));
/// assert!(svg.ends_with("</svg>"));
/// ```
pub fn faces_to_svg<F: Float + fmt::Display>(faces: &[Face<F>]) -> String {
    render(faces, false)
}

/// Renders faces into a standalone SVG document string.
///
/// Identical to [`faces_to_svg`] except for the XML declaration prefix and
/// the `xmlns` attribute required when the markup is saved as a file.
pub fn faces_to_svg_document<F: Float + fmt::Display>(faces: &[Face<F>]) -> String {
    render(faces, true)
}

fn render<F: Float + fmt::Display>(faces: &[Face<F>], standalone: bool) -> String {
    let (x, y, w, h) = view_box(faces);

    let mut out = String::new();
    if standalone {
        out.push_str(XML_DECLARATION);
        out.push('\n');
        let _ = write!(
            out,
            r#"<svg xmlns="{SVG_NAMESPACE}" viewBox="{x} {y} {w} {h}">"#
        );
    } else {
        let _ = write!(out, r#"<svg viewBox="{x} {y} {w} {h}">"#);
    }

    for face in faces {
        let _ = write!(
            out,
            r#"<polygon points="{}" fill="{}"/>"#,
            points_attribute(face),
            face.fill
        );
    }

    out.push_str("</svg>");
    out
}

/// Formats a face outline as an SVG `points` attribute value.
fn points_attribute<F: Float + fmt::Display>(face: &Face<F>) -> String {
    let mut attr = String::new();
    for (i, v) in face.vertices.iter().enumerate() {
        if i > 0 {
            attr.push(' ');
        }
        let _ = write!(attr, "{},{}", v.x, v.y);
    }
    attr
}

/// Computes a padded viewBox `(x, y, width, height)` covering all vertices.
fn view_box<F: Float>(faces: &[Face<F>]) -> (F, F, F, F) {
    let mut vertices = faces.iter().flat_map(|f| f.vertices.iter());

    let first = match vertices.next() {
        Some(v) => *v,
        None => return (F::zero(), F::zero(), F::zero(), F::zero()),
    };

    let mut min = first;
    let mut max = first;
    for v in vertices {
        min.x = min.x.min(v.x);
        min.y = min.y.min(v.y);
        max.x = max.x.max(v.x);
        max.y = max.y.max(v.y);
    }

    let padding = F::from(VIEWBOX_PADDING).unwrap();
    let two = F::from(2.0).unwrap();
    let pad_x = (max.x - min.x) * padding;
    let pad_y = (max.y - min.y) * padding;

    (
        min.x - pad_x,
        min.y - pad_y,
        (max.x - min.x) + two * pad_x,
        (max.y - min.y) + two * pad_y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::illusion::{build_faces, PolygonSpec};
    use crate::primitives::Point2;

    fn sample_faces() -> Vec<Face<f64>> {
        let palette = vec!["#fff".to_string(), "#000".to_string()];
        let spec = PolygonSpec::new(5, false, 0.5, 0.5).unwrap();
        build_faces(&spec, &palette).unwrap()
    }

    #[test]
    fn test_fragment_structure() {
        let svg = faces_to_svg(&sample_faces());
        assert!(svg.starts_with("<svg viewBox=\""));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches("<polygon points=\"").count(), 5);
        assert_eq!(svg.matches("fill=\"#fff\"").count(), 3);
        assert_eq!(svg.matches("fill=\"#000\"").count(), 2);
        assert!(!svg.contains("xmlns"));
    }

    #[test]
    fn test_document_structure() {
        let svg = faces_to_svg_document(&sample_faces());
        assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg "));
        assert!(svg.contains(r#"xmlns="http://www.w3.org/2000/svg""#));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_points_attribute_format() {
        let face = Face::new(
            vec![
                Point2::new(0.0, 1.0),
                Point2::new(2.5, -3.0),
                Point2::new(-4.0, 0.5),
            ],
            "#abc",
        );
        assert_eq!(points_attribute(&face), "0,1 2.5,-3 -4,0.5");
    }

    #[test]
    fn test_view_box_covers_all_vertices() {
        let faces = sample_faces();
        let (x, y, w, h) = view_box(&faces);

        assert!(w > 0.0 && h > 0.0);
        for face in &faces {
            for v in &face.vertices {
                assert!(v.x >= x && v.x <= x + w);
                assert!(v.y >= y && v.y <= y + h);
            }
        }
    }

    #[test]
    fn test_empty_face_list() {
        let faces: Vec<Face<f64>> = Vec::new();
        let svg = faces_to_svg(&faces);
        assert_eq!(svg, r#"<svg viewBox="0 0 0 0"></svg>"#);
    }
}
