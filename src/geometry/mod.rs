//! Letter Mesh Data
//!
//! CPU-side mesh representation for the extruded glyphs: interleaved
//! position + normal vertices and a `u32` triangle index list, matching the
//! vertex layout the letter pipeline consumes.

pub mod text;

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// One interleaved vertex as uploaded to the GPU.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Axis-aligned bounds of a mesh.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

/// Triangle mesh for one letter.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Bounds over all vertex positions. `None` for an empty mesh.
    #[must_use]
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let first = self.vertices.first()?;
        let mut min = Vec3::from_array(first.position);
        let mut max = min;
        for vertex in &self.vertices[1..] {
            let p = Vec3::from_array(vertex.position);
            min = min.min(p);
            max = max.max(p);
        }
        Some(BoundingBox { min, max })
    }

    /// Translates the mesh so its bounding-box center sits at the origin.
    ///
    /// Letter positions then address the visual center of the glyph, which
    /// is what the row layout expects.
    pub fn center(&mut self) {
        let Some(bounds) = self.bounding_box() else {
            return;
        };
        let offset = bounds.center();
        for vertex in &mut self.vertices {
            vertex.position[0] -= offset.x;
            vertex.position[1] -= offset.y;
            vertex.position[2] -= offset.z;
        }
    }
}
