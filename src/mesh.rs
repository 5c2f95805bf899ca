use crate::typeface::{Contour, GlyphOutline};
use anyhow::anyhow;
use glam::Vec2;
use lyon::math::point;
use lyon::path::Path;
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, VertexBuffers,
};

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Extruded glyph ready for GPU upload. Front cap at `z = depth`, back cap
/// at `z = 0`, side walls in between; centered on its local x-axis.
pub struct GlyphMesh {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

/// Give a flattened 2D glyph outline depth: tessellate the filled outline
/// (holes included) for the two caps and stitch side-wall quads along every
/// contour edge.
pub fn extrude(outline: &GlyphOutline, depth: f32, tolerance: f32) -> anyhow::Result<GlyphMesh> {
    let contours = centered_contours(outline);
    if contours.is_empty() {
        return Ok(GlyphMesh {
            vertices: Vec::new(),
            indices: Vec::new(),
        });
    }

    let mut builder = Path::builder();
    for contour in &contours {
        builder.begin(point(contour[0].x, contour[0].y));
        for p in &contour[1..] {
            builder.line_to(point(p.x, p.y));
        }
        builder.close();
    }
    let path = builder.build();

    let mut cap: VertexBuffers<[f32; 2], u32> = VertexBuffers::new();
    let mut tessellator = FillTessellator::new();
    tessellator
        .tessellate_path(
            &path,
            &FillOptions::tolerance(tolerance),
            &mut BuffersBuilder::new(&mut cap, |v: FillVertex| {
                let p = v.position();
                [p.x, p.y]
            }),
        )
        .map_err(|e| anyhow!("glyph tessellation failed: {:?}", e))?;

    let cap_vertex_count = cap.vertices.len() as u32;
    let mut vertices =
        Vec::with_capacity(cap.vertices.len() * 2 + contours.iter().map(|c| c.len() * 4).sum::<usize>());
    let mut indices = Vec::with_capacity(cap.indices.len() * 2);

    // Front cap (z = depth), counter-clockwise when seen from +z.
    for p in &cap.vertices {
        vertices.push(MeshVertex {
            position: [p[0], p[1], depth],
            normal: [0.0, 0.0, 1.0],
        });
    }
    for tri in cap.indices.chunks_exact(3) {
        let (a, b, c) = ccw(tri, &cap.vertices);
        indices.extend_from_slice(&[a, b, c]);
    }

    // Back cap (z = 0), reversed winding.
    for p in &cap.vertices {
        vertices.push(MeshVertex {
            position: [p[0], p[1], 0.0],
            normal: [0.0, 0.0, -1.0],
        });
    }
    for tri in cap.indices.chunks_exact(3) {
        let (a, b, c) = ccw(tri, &cap.vertices);
        indices.extend_from_slice(&[
            a + cap_vertex_count,
            c + cap_vertex_count,
            b + cap_vertex_count,
        ]);
    }

    // Side walls: one quad per contour edge, flat outward normal.
    for contour in &contours {
        let n = contour.len();
        for i in 0..n {
            let p0 = contour[i];
            let p1 = contour[(i + 1) % n];
            let edge = p1 - p0;
            let len = edge.length();
            if len <= f32::EPSILON {
                continue;
            }
            // Contours arrive wound outer CCW / holes CW, so this points
            // out of the solid on both.
            let normal = [edge.y / len, -edge.x / len, 0.0];
            let base = vertices.len() as u32;
            for &(p, z) in &[(p0, 0.0), (p1, 0.0), (p1, depth), (p0, depth)] {
                vertices.push(MeshVertex {
                    position: [p.x, p.y, z],
                    normal,
                });
            }
            indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }
    }

    Ok(GlyphMesh { vertices, indices })
}

/// Shift every contour so the glyph's x extent is centered on zero, and
/// normalize winding to outer contours CCW, holes CW. Source fonts carry
/// whichever direction they were digitized with.
fn centered_contours(outline: &GlyphOutline) -> Vec<Contour> {
    let mut min_x = f32::MAX;
    let mut max_x = f32::MIN;
    for contour in &outline.contours {
        for p in contour {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
        }
    }
    if min_x > max_x {
        return Vec::new();
    }
    let offset = -(min_x + max_x) * 0.5;
    let mut contours: Vec<Contour> = outline
        .contours
        .iter()
        .filter(|c| c.len() >= 3)
        .map(|c| c.iter().map(|p| Vec2::new(p.x + offset, p.y)).collect())
        .collect();
    for i in 0..contours.len() {
        let sample = contours[i][0];
        let enclosing = contours
            .iter()
            .enumerate()
            .filter(|&(j, other)| j != i && contains(other, sample))
            .count();
        // Odd nesting depth marks a hole
        let is_hole = enclosing % 2 == 1;
        if (signed_area(&contours[i]) > 0.0) == is_hole {
            contours[i].reverse();
        }
    }
    contours
}

fn signed_area(c: &Contour) -> f32 {
    let n = c.len();
    let mut sum = 0.0;
    for i in 0..n {
        let p = c[i];
        let q = c[(i + 1) % n];
        sum += p.x * q.y - q.x * p.y;
    }
    sum * 0.5
}

/// Even-odd crossing test with a rightward ray from `p`.
fn contains(c: &Contour, p: Vec2) -> bool {
    let n = c.len();
    let mut inside = false;
    for i in 0..n {
        let a = c[i];
        let b = c[(i + 1) % n];
        if (a.y > p.y) != (b.y > p.y) {
            let x = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if p.x < x {
                inside = !inside;
            }
        }
    }
    inside
}

/// Return a triangle re-ordered to be counter-clockwise in the xy plane.
#[inline]
fn ccw(tri: &[u32], positions: &[[f32; 2]]) -> (u32, u32, u32) {
    let a = positions[tri[0] as usize];
    let b = positions[tri[1] as usize];
    let c = positions[tri[2] as usize];
    let area2 = (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0]);
    if area2 >= 0.0 {
        (tri[0], tri[1], tri[2])
    } else {
        (tri[0], tri[2], tri[1])
    }
}
