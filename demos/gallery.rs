//! Write a set of sample illusion SVGs to the current directory.
//!
//! Run with: cargo run --example gallery

use illusory::io::faces_to_svg_document;
use illusory::{build_faces, PolygonSpec};
use std::fs;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let palette = vec![
        "#e63946".to_string(),
        "#f1faee".to_string(),
        "#a8dadc".to_string(),
        "#457b9d".to_string(),
        "#1d3557".to_string(),
    ];

    for (name, n, mirrored, thickness, perspective) in [
        ("triangle", 3, false, 0.0, 0.5),
        ("triangle_mirrored", 3, true, 0.0, 0.5),
        ("square_thick", 4, false, 0.8, 0.3),
        ("hexagon", 6, false, 0.5, 0.5),
        ("dodecagon_deep", 12, false, 0.4, 1.0),
    ] {
        let spec = PolygonSpec::new(n, mirrored, thickness, perspective)?;
        let faces = build_faces(&spec, &palette)?;
        let path = format!("gallery_{name}.svg");
        fs::write(&path, faces_to_svg_document(&faces))?;
        println!("wrote {path}");
    }

    Ok(())
}
