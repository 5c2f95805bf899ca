// Host-side tests for typeface parsing and outline flattening.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod typeface {
    include!("../src/typeface.rs");
}

use typeface::*;

const SQUARE_FONT: &str = r#"{
  "familyName": "Test Sans",
  "resolution": 100,
  "glyphs": {
    "+": { "ha": 120, "o": "m 0 0 l 100 0 l 100 100 l 0 100" },
    "%": { "ha": 140, "o": "m 0 0 l 100 0 l 100 100 l 0 100 m 25 25 l 25 75 l 75 75 l 75 25" },
    " ": { "ha": 50 }
  }
}"#;

#[test]
fn parses_glyph_map_and_metadata() {
    let face = Typeface::from_json(SQUARE_FONT).expect("valid json");
    assert_eq!(face.resolution, 100.0);
    assert_eq!(face.family_name, "Test Sans");
    assert_eq!(face.glyphs.len(), 3);
}

#[test]
fn outline_scales_font_units_to_requested_size() {
    let face = Typeface::from_json(SQUARE_FONT).expect("valid json");
    let outline = face.outline("+", 2.0).expect("glyph exists");
    // 100 font units at resolution 100 and size 2.0 span 2.0 world units
    assert_eq!(outline.contours.len(), 1);
    let contour = &outline.contours[0];
    assert_eq!(contour.len(), 4);
    assert_eq!(contour[0], glam::Vec2::new(0.0, 0.0));
    assert!((contour[2] - glam::Vec2::new(2.0, 2.0)).length() < 1e-5);
    assert!((outline.advance - 2.4).abs() < 1e-5);
}

#[test]
fn holes_become_separate_contours() {
    let face = Typeface::from_json(SQUARE_FONT).expect("valid json");
    let outline = face.outline("%", 1.0).expect("glyph exists");
    assert_eq!(outline.contours.len(), 2);
    assert_eq!(outline.contours[1].len(), 4);
}

#[test]
fn missing_glyph_and_empty_outline_are_handled() {
    let face = Typeface::from_json(SQUARE_FONT).expect("valid json");
    assert!(face.outline("Ω", 1.0).is_none());
    // A glyph with no outline commands (space) flattens to zero contours
    let space = face.outline(" ", 1.0).expect("glyph exists");
    assert!(space.contours.is_empty());
    assert!((space.advance - 0.5).abs() < 1e-5);
}

#[test]
fn quadratic_segments_end_on_their_end_point() {
    // End point comes first in the command stream, then the control point
    let contours = parse_outline_commands("m 0 0 l 100 0 q 100 100 100 50", 0.01);
    assert_eq!(contours.len(), 1);
    let contour = &contours[0];
    assert!(contour.len() > 2, "curve was not subdivided");
    let last = contour[contour.len() - 1];
    assert!((last.x - 1.0).abs() < 1e-6);
    assert!((last.y - 1.0).abs() < 1e-6);
}

#[test]
fn cubic_segments_end_on_their_end_point() {
    let contours = parse_outline_commands("m 0 0 l 100 0 b 0 100 90 40 30 90", 0.01);
    let contour = &contours[0];
    let last = contour[contour.len() - 1];
    assert!((last.x - 0.0).abs() < 1e-6);
    assert!((last.y - 1.0).abs() < 1e-6);
}

#[test]
fn degenerate_contours_are_dropped() {
    // Two points cannot close into a region
    let contours = parse_outline_commands("m 0 0 l 100 0", 1.0);
    assert!(contours.is_empty());
}
