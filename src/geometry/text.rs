//! Extruded Glyph Meshes
//!
//! Builds one 3D mesh per character: the glyph outline is converted into a
//! lyon path, the front cap is fill-tessellated, the back cap reuses the
//! same triangulation with reversed winding at `z = -depth`, and side walls
//! are emitted as one quad per flattened outline edge.

use glam::Vec2;
use lyon_path::Path;
use lyon_path::math::{Point, point};
use lyon_tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, FillVertexConstructor, VertexBuffers,
};

use super::{MeshData, Vertex};
use crate::assets::{Font, OutlineCommand, parse_outline};
use crate::errors::{IntroError, Result};

#[derive(Clone, Copy)]
struct FrontVertexCtor;

impl FillVertexConstructor<Vertex> for FrontVertexCtor {
    fn new_vertex(&mut self, vertex: FillVertex) -> Vertex {
        let p = vertex.position();
        Vertex {
            position: [p.x, p.y, 0.0],
            normal: [0.0, 0.0, 1.0],
        }
    }
}

/// Builds the centered, extruded mesh for one character.
///
/// Returns `None` when neither the character nor the `?` fallback exists in
/// the face. Blank glyphs (the space) produce an empty mesh that still
/// occupies its slot in the row.
pub fn build_letter_mesh(
    font: &Font,
    ch: char,
    size: f32,
    depth: f32,
    tolerance: f32,
) -> Result<Option<MeshData>> {
    let Some((glyph, _)) = font.glyph_or_fallback(ch) else {
        return Ok(None);
    };
    let commands = parse_outline(&glyph.o)?;
    let scale = size / font.resolution();
    let mut mesh = build_glyph_mesh(&commands, scale, depth, tolerance)?;
    mesh.center();
    Ok(Some(mesh))
}

/// Tessellates an outline command list into an extruded mesh.
///
/// The front cap sits at `z = 0` facing `+z` (toward the camera), the back
/// cap at `z = -depth`.
pub fn build_glyph_mesh(
    outline: &[OutlineCommand],
    scale: f32,
    depth: f32,
    tolerance: f32,
) -> Result<MeshData> {
    if outline.is_empty() {
        return Ok(MeshData::default());
    }

    let path = build_path(outline, scale);

    // Front cap
    let mut buffers: VertexBuffers<Vertex, u32> = VertexBuffers::new();
    let mut tessellator = FillTessellator::new();
    tessellator
        .tessellate_path(
            path.as_slice(),
            &FillOptions::tolerance(tolerance),
            &mut BuffersBuilder::new(&mut buffers, FrontVertexCtor),
        )
        .map_err(|e| IntroError::TessellationFailed(format!("{e:?}")))?;

    let mut mesh = MeshData {
        vertices: buffers.vertices.clone(),
        indices: buffers.indices.clone(),
    };

    // Back cap: same triangulation at z = -depth, winding reversed
    let back_offset = mesh.vertices.len() as u32;
    for vertex in &buffers.vertices {
        mesh.vertices.push(Vertex {
            position: [vertex.position[0], vertex.position[1], -depth],
            normal: [0.0, 0.0, -1.0],
        });
    }
    for tri in buffers.indices.chunks_exact(3) {
        mesh.indices.push(back_offset + tri[0]);
        mesh.indices.push(back_offset + tri[2]);
        mesh.indices.push(back_offset + tri[1]);
    }

    // Side walls: one quad per flattened outline edge
    for event in path.iter() {
        match event {
            lyon_path::Event::Begin { .. } => {}
            lyon_path::Event::Line { from, to } => {
                add_side_quad(&mut mesh, from, to, depth);
            }
            lyon_path::Event::Quadratic { from, ctrl, to } => {
                let segment = lyon_geom::QuadraticBezierSegment { from, ctrl, to };
                segment.for_each_flattened(tolerance, &mut |line: &lyon_geom::LineSegment<f32>| {
                    add_side_quad(&mut mesh, line.from, line.to, depth);
                });
            }
            lyon_path::Event::Cubic {
                from,
                ctrl1,
                ctrl2,
                to,
            } => {
                let segment = lyon_geom::CubicBezierSegment {
                    from,
                    ctrl1,
                    ctrl2,
                    to,
                };
                segment.for_each_flattened(tolerance, &mut |line: &lyon_geom::LineSegment<f32>| {
                    add_side_quad(&mut mesh, line.from, line.to, depth);
                });
            }
            lyon_path::Event::End { last, first, close } => {
                if close {
                    add_side_quad(&mut mesh, last, first, depth);
                }
            }
        }
    }

    Ok(mesh)
}

fn build_path(outline: &[OutlineCommand], scale: f32) -> Path {
    let mut builder = Path::builder();
    let mut open = false;
    let pt = |v: Vec2| point(v.x * scale, v.y * scale);

    for command in outline {
        match *command {
            OutlineCommand::MoveTo(to) => {
                if open {
                    builder.end(true);
                }
                builder.begin(pt(to));
                open = true;
            }
            OutlineCommand::LineTo(to) if open => {
                builder.line_to(pt(to));
            }
            OutlineCommand::QuadTo { ctrl, to } if open => {
                builder.quadratic_bezier_to(pt(ctrl), pt(to));
            }
            OutlineCommand::CubicTo { ctrl1, ctrl2, to } if open => {
                builder.cubic_bezier_to(pt(ctrl1), pt(ctrl2), pt(to));
            }
            // Outline programs always open with `m`; drop anything stray.
            _ => {}
        }
    }
    if open {
        builder.end(true);
    }

    builder.build()
}

fn add_side_quad(mesh: &mut MeshData, from: Point, to: Point, depth: f32) {
    let edge = Vec2::new(to.x - from.x, to.y - from.y);
    let len = edge.length();
    if len < 1e-6 {
        return;
    }
    let normal = [edge.y / len, -edge.x / len, 0.0];

    let base = mesh.vertices.len() as u32;
    mesh.vertices.push(Vertex {
        position: [from.x, from.y, 0.0],
        normal,
    });
    mesh.vertices.push(Vertex {
        position: [to.x, to.y, 0.0],
        normal,
    });
    mesh.vertices.push(Vertex {
        position: [to.x, to.y, -depth],
        normal,
    });
    mesh.vertices.push(Vertex {
        position: [from.x, from.y, -depth],
        normal,
    });
    mesh.indices
        .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
}
