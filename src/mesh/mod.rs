//! Mesh generation for grown regions
//!
//! Builds engine-agnostic triangle-fan data from region vertex buffers. The
//! growth engine never holds on to a mesh; hosts rebuild one after each step.

mod colors;

pub use colors::{ColorMapper, FnColorMapper, PayloadColorMapper, UniformColorMapper};

use crate::boundary::Boundary;
use crate::engine::GrowthEngine;
use crate::region::Region;
use crate::seed::Rgba;

/// Engine-agnostic mesh data output
///
/// Positions are world-space `[x, y]`; lift them into 3D however the renderer
/// expects (`[x, y, 0.0]` for an XY-plane diagram).
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    /// Vertex positions (world coordinates)
    pub positions: Vec<[f32; 2]>,
    /// Vertex colors (RGBA)
    pub colors: Vec<[f32; 4]>,
    /// Triangle indices
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check if mesh is empty
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Build a triangle fan for a single region
///
/// Vertex 0 of the mesh is the seed position, followed by the outer ring in
/// ring order; every vertex gets `color`.
pub fn region_mesh<T>(region: &Region<T>, color: Rgba) -> MeshData {
    let mut mesh = MeshData::default();
    append_region(region, color, &mut mesh);
    mesh
}

/// Build one mesh holding every region of the engine, colored by payload
pub fn generate_mesh<T, B, C>(engine: &GrowthEngine<T, B>, color_mapper: &C) -> MeshData
where
    B: Boundary,
    C: ColorMapper<T>,
{
    let mut mesh = MeshData::default();
    for region in engine.regions() {
        append_region(region, color_mapper.map_color(region.payload()), &mut mesh);
    }
    mesh
}

fn append_region<T>(region: &Region<T>, color: Rgba, mesh: &mut MeshData) {
    let base_idx = mesh.positions.len() as u32;

    for vertex in region.world_vertices() {
        mesh.positions.push([vertex.x, vertex.y]);
        mesh.colors.push(color);
    }

    for [a, b, c] in region.fan_triangles() {
        mesh.indices.push(base_idx + a);
        mesh.indices.push(base_idx + b);
        mesh.indices.push(base_idx + c);
    }
}
