//! Face construction for the impossible polygon.
//!
//! The illusion is built from two concentric regular n-gons: a fixed inner
//! ring and an outer ring rotated by half an edge step whose carrier lines
//! cut the inner ring's corners. The 2n crossings between the rings, together
//! with a family of n inward-offset "occluding" lines, yield one six-vertex
//! outline per edge. Consecutive outlines alternately overlap each other,
//! which is what produces the impossible-object paradox.

use crate::error::IllusionError;
use crate::illusion::spec::clamp_unit;
use crate::illusion::{Face, PolygonSpec};
use crate::primitives::{Point2, Segment2, Vec2};
use num_traits::Float;
use std::cmp::Ordering;
use std::f64::consts::PI;

/// Side length of the fixed inner reference ring.
const INNER_SIDE_LEN: f64 = 10.0;

/// Step used when probing the feasible outer side-length range.
const PROBE_STEP: f64 = 0.1;

/// Fill assigned when the palette is empty.
const DEFAULT_FILL: &str = "#000000";

/// Builds the faces of an impossible polygon.
///
/// Produces exactly `spec.edge_count` faces. Fill colors are taken from
/// `palette` cyclically (`palette[i % palette.len()]`); an empty palette
/// falls back to a default fill rather than failing. The palette is never
/// mutated and the construction is deterministic.
///
/// # Example
///
/// ```
/// use illusory::{build_faces, PolygonSpec};
///
/// let palette = vec!["#fff".to_string(), "#000".to_string()];
/// let spec = PolygonSpec::new(5, false, 0.0, 0.5).unwrap();
/// let faces = build_faces(&spec, &palette).unwrap();
///
/// assert_eq!(faces.len(), 5);
/// assert_eq!(faces[2].fill, "#fff");
/// ```
pub fn build_faces<F: Float>(
    spec: &PolygonSpec<F>,
    palette: &[String],
) -> Result<Vec<Face<F>>, IllusionError> {
    let n = spec.edge_count;
    if n < 3 {
        return Err(IllusionError::EdgeCountTooSmall { n });
    }
    if !spec.thickness.is_finite() {
        return Err(IllusionError::NonFiniteParameter { name: "thickness" });
    }
    if !spec.perspective.is_finite() {
        return Err(IllusionError::NonFiniteParameter {
            name: "perspective",
        });
    }

    // Re-clamp so specs built by struct literal behave like validated ones.
    let thickness = clamp_unit(spec.thickness);
    let perspective = clamp_unit(spec.perspective);

    let side_len = outer_side_len(n, thickness, perspective)?;
    let outlines = face_outlines(n, side_len, perspective)?;

    let faces = outlines
        .into_iter()
        .enumerate()
        .map(|(i, outline)| {
            let outline = if spec.mirrored {
                outline.into_iter().map(Point2::mirrored_x).collect()
            } else {
                outline
            };
            let fill = if palette.is_empty() {
                DEFAULT_FILL.to_string()
            } else {
                palette[i % palette.len()].clone()
            };
            Face::new(outline, fill)
        })
        .collect();

    Ok(faces)
}

/// Builds the n six-vertex face outlines for a concrete outer side length.
///
/// Fails when the two rings do not cross in exactly 2n points or when a
/// required occluder intersection does not exist; the side-length probe in
/// [`outer_side_len`] relies on these failures to find the feasible range.
fn face_outlines<F: Float>(
    n: u32,
    outer_side_len: F,
    perspective: F,
) -> Result<Vec<Vec<Point2<F>>>, IllusionError> {
    let pi = F::from(PI).unwrap();
    let half = F::from(0.5).unwrap();
    let alpha = interior_angle::<F>(n);

    let inner = ring_segments(n, F::from(INNER_SIDE_LEN).unwrap(), F::zero());
    let outer = ring_segments(n, outer_side_len, pi / F::from(n).unwrap());

    let mut crossings = ring_crossings(&outer, &inner);
    if crossings.len() != 2 * n as usize {
        return Err(IllusionError::ConstructionFailed);
    }
    // Even rings come out of the angular sort one slot off.
    if n % 2 == 0 {
        crossings.rotate_right(1);
    }

    // Base offset of the occluding lines, derived from the chord between the
    // first crossing pair and the ring's interior angle.
    let offset = {
        let chord = crossings[0].distance(crossings[1]);
        ((pi - alpha).sin() / alpha.sin()) * ((pi - alpha) * half).sin() * chord
    };

    let occluders = occluding_lines(&crossings, offset * (F::one() + perspective))?;

    let len = crossings.len();
    let m = occluders.len();
    let mut outlines = Vec::with_capacity(n as usize);

    for e in 0..n as usize {
        let near_a = crossings[2 * e];
        let near_b = crossings[2 * e + 1];
        let near_c = crossings[(2 * e + 2) % len];
        let reach_fwd = crossings[(2 * e + 5) % len];
        let reach_back = crossings[(2 * e + 3) % len];

        let ahead = occluders[(e + 3) % m];
        let behind = occluders[(e + 2) % m];

        let corner_fwd = Segment2::new(near_c, reach_fwd)
            .clipped_intersection(ahead)
            .ok_or(IllusionError::ConstructionFailed)?;
        let corner_mid = ahead
            .clipped_intersection(behind)
            .ok_or(IllusionError::ConstructionFailed)?;
        let corner_back = Segment2::new(near_a, reach_back)
            .clipped_intersection(behind)
            .ok_or(IllusionError::ConstructionFailed)?;

        outlines.push(vec![
            near_a, near_b, near_c, corner_fwd, corner_mid, corner_back,
        ]);
    }

    Ok(outlines)
}

/// Builds the family of long occluding lines, one per edge.
///
/// Each line runs parallel to a crossing-pair chord, pushed inward along the
/// chord normal by `offset`, and is extended well past the figure so later
/// intersections are clipped only by the face diagonals.
fn occluding_lines<F: Float>(
    crossings: &[Point2<F>],
    offset: F,
) -> Result<Vec<Segment2<F>>, IllusionError> {
    let mut shifted = crossings.to_vec();
    shifted.rotate_right(1);

    let half = F::from(0.5).unwrap();
    let reach = F::from(10.0).unwrap();

    let mut lines = Vec::with_capacity(shifted.len() / 2);
    for pair in shifted.chunks(2) {
        let chord = pair[1] - pair[0];
        let normal = chord
            .perpendicular()
            .normalize()
            .ok_or(IllusionError::ConstructionFailed)?;
        let anchor = pair[0] + chord * half - normal * offset;
        lines.push(Segment2::new(
            anchor - chord * reach,
            anchor + chord * reach,
        ));
    }

    Ok(lines)
}

/// Computes all crossings between the outer and inner ring segments.
///
/// A crossing must lie on the outer segment but may sit anywhere on the
/// inner segment's carrier line, which is how the outer ring "cuts the
/// corners" of the inner one. Results are sorted by angle about their
/// centroid so consecutive entries walk around the figure.
fn ring_crossings<F: Float>(outer: &[Segment2<F>], inner: &[Segment2<F>]) -> Vec<Point2<F>> {
    let mut points = Vec::new();
    for o in outer {
        for i in inner {
            if let Some(p) = o.clipped_intersection(*i) {
                points.push(p);
            }
        }
    }

    if points.is_empty() {
        return points;
    }

    let mut center = Vec2::zero();
    for p in &points {
        center = center + p.to_vec();
    }
    let center = center / F::from(points.len()).unwrap();

    points.sort_by(|a, b| {
        let da = a.to_vec() - center;
        let db = b.to_vec() - center;
        da.x.atan2(da.y)
            .partial_cmp(&db.x.atan2(db.y))
            .unwrap_or(Ordering::Equal)
    });

    points
}

/// Chooses the outer ring's side length from the thickness parameter.
///
/// The feasible range is found by probing [`face_outlines`]: the lower bound
/// walks up from 1.0 until construction succeeds, the upper bound walks down
/// from the side length at which the outer ring circumscribes the inner one.
/// `thickness` then interpolates within the range. The smallest rings get a
/// raised interpolation floor because the low end of their range produces
/// visually broken figures (floor values found by trial and error).
fn outer_side_len<F: Float>(n: u32, thickness: F, perspective: F) -> Result<F, IllusionError> {
    let step = F::from(PROBE_STEP).unwrap();
    let half = F::from(0.5).unwrap();
    let pi = F::from(PI).unwrap();

    let circumscribing = {
        let alpha = interior_angle::<F>(n);
        let two = F::from(2.0).unwrap();
        two * F::from(INNER_SIDE_LEN).unwrap() * ((pi - alpha) * half).sin() / alpha.sin()
    };

    let mut min = F::one();
    while face_outlines(n, min, perspective).is_err() {
        min = min + step;
        if min > circumscribing {
            return Err(IllusionError::ConstructionFailed);
        }
    }

    let mut max = circumscribing;
    while face_outlines(n, max, perspective).is_err() {
        max = max - step;
        if max < min {
            return Err(IllusionError::ConstructionFailed);
        }
    }

    let floor = F::from(match n {
        3 => 0.5,
        4 => 0.48,
        5 => 0.26,
        _ => 0.0,
    })
    .unwrap();

    Ok(min + (max - min) * (floor + (F::one() - floor) * thickness))
}

/// Returns the interior angle of a regular n-gon.
fn interior_angle<F: Float>(n: u32) -> F {
    F::from(n - 2).unwrap() * F::from(PI).unwrap() / F::from(n).unwrap()
}

/// Returns the circumradius of a regular n-gon with the given side length.
fn circumradius<F: Float>(n: u32, side_len: F) -> F {
    let alpha = interior_angle::<F>(n);
    let half = F::from(0.5).unwrap();
    let pi = F::from(PI).unwrap();
    side_len * (alpha * half).sin() / (pi - alpha).sin()
}

/// Builds the edge segments of a regular n-gon rotated by `phi` radians.
fn ring_segments<F: Float>(n: u32, side_len: F, phi: F) -> Vec<Segment2<F>> {
    let radius = circumradius(n, side_len);
    let step = F::from(2.0 * PI).unwrap() / F::from(n).unwrap();

    let vertices: Vec<Point2<F>> = (0..n)
        .map(|k| F::from(k).unwrap() * step + phi)
        .map(|a| Point2::new(a.sin() * radius, a.cos() * radius))
        .collect();

    let len = vertices.len();
    (0..len)
        .map(|i| Segment2::new(vertices[i], vertices[(i + 1) % len]))
        .collect()
}
