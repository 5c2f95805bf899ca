use fnv::FnvHashMap;
use glam::Vec2;
use serde::Deserialize;
use smallvec::SmallVec;
use std::str::SplitWhitespace;

/// One closed glyph contour in scaled glyph units, y-up.
pub type Contour = SmallVec<[Vec2; 16]>;

// Fixed subdivision of curved segments; glyphs this size need no adaptivity.
const QUAD_SEGMENTS: u32 = 8;
const CUBIC_SEGMENTS: u32 = 10;

/// Parsed typeface description file (the three.js `typeface.json` format):
/// a map of glyph outlines in font units plus the design resolution used to
/// scale them to world units.
#[derive(Debug, Deserialize)]
pub struct Typeface {
    pub glyphs: FnvHashMap<String, GlyphDef>,
    pub resolution: f32,
    #[serde(rename = "familyName", default)]
    pub family_name: String,
}

#[derive(Debug, Deserialize)]
pub struct GlyphDef {
    /// Outline command string: `m`/`l`/`q`/`b` followed by coordinates.
    #[serde(default)]
    pub o: String,
    /// Horizontal advance in font units.
    pub ha: f32,
}

/// A glyph flattened to closed polyline contours at a requested size.
#[derive(Debug)]
pub struct GlyphOutline {
    pub contours: Vec<Contour>,
    pub advance: f32,
}

impl Typeface {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Flatten a glyph's outline at `size` world units per `resolution` font
    /// units. Returns `None` when the typeface has no such glyph.
    pub fn outline(&self, glyph: &str, size: f32) -> Option<GlyphOutline> {
        let def = self.glyphs.get(glyph)?;
        let scale = size / self.resolution;
        Some(GlyphOutline {
            contours: parse_outline_commands(&def.o, scale),
            advance: def.ha * scale,
        })
    }
}

#[inline]
fn read_point(toks: &mut SplitWhitespace, scale: f32) -> Option<Vec2> {
    let x: f32 = toks.next()?.parse().ok()?;
    let y: f32 = toks.next()?.parse().ok()?;
    Some(Vec2::new(x * scale, y * scale))
}

/// Parse an outline command string into closed contours. Each `m` starts a
/// new contour and implicitly closes the previous one; curve commands carry
/// the end point first, then the control point(s).
pub fn parse_outline_commands(commands: &str, scale: f32) -> Vec<Contour> {
    let mut contours = Vec::new();
    let mut current: Contour = SmallVec::new();
    let mut toks = commands.split_whitespace();

    while let Some(cmd) = toks.next() {
        match cmd {
            "m" => {
                let Some(p) = read_point(&mut toks, scale) else {
                    break;
                };
                if current.len() >= 3 {
                    contours.push(std::mem::take(&mut current));
                } else {
                    current.clear();
                }
                current.push(p);
            }
            "l" => {
                let Some(p) = read_point(&mut toks, scale) else {
                    break;
                };
                current.push(p);
            }
            "q" => {
                let (Some(end), Some(ctrl)) = (
                    read_point(&mut toks, scale),
                    read_point(&mut toks, scale),
                ) else {
                    break;
                };
                let from = match current.last() {
                    Some(p) => *p,
                    None => continue,
                };
                for i in 1..=QUAD_SEGMENTS {
                    let t = i as f32 / QUAD_SEGMENTS as f32;
                    let u = 1.0 - t;
                    current.push(from * (u * u) + ctrl * (2.0 * u * t) + end * (t * t));
                }
            }
            "b" => {
                let (Some(end), Some(c1), Some(c2)) = (
                    read_point(&mut toks, scale),
                    read_point(&mut toks, scale),
                    read_point(&mut toks, scale),
                ) else {
                    break;
                };
                let from = match current.last() {
                    Some(p) => *p,
                    None => continue,
                };
                for i in 1..=CUBIC_SEGMENTS {
                    let t = i as f32 / CUBIC_SEGMENTS as f32;
                    let u = 1.0 - t;
                    current.push(
                        from * (u * u * u)
                            + c1 * (3.0 * u * u * t)
                            + c2 * (3.0 * u * t * t)
                            + end * (t * t * t),
                    );
                }
            }
            _ => {}
        }
    }
    if current.len() >= 3 {
        contours.push(current);
    }
    contours
}
