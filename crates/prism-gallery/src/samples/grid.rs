use prism_engine::render::{PassDesc, Renderer};

use crate::sample::SampleError;

use super::{CELL_VERTICES, CLEAR, FRAGMENT_ENTRY, VERTEX_ENTRY};

pub const ID: &str = "grid";
pub const DESCRIPTION: &str = "Draws a grid of cells";

/// Cells per side. The vertex stage divides positions by this.
pub const GRID_SIZE: f32 = 4.0;

const SHADER: &str = include_str!("shaders/grid.wgsl");

/// Draws one cell of a `GRID_SIZE` x `GRID_SIZE` grid.
///
/// The grid dimensions travel as a `vec2f` uniform (8 bytes) at group 0,
/// binding 0.
pub fn render(renderer: &mut dyn Renderer) -> Result<(), SampleError> {
    let grid = [GRID_SIZE, GRID_SIZE];

    let submission = renderer.submit(&PassDesc {
        label: "grid",
        clear: CLEAR,
        shader: SHADER,
        vertex_entry: VERTEX_ENTRY,
        fragment_entry: FRAGMENT_ENTRY,
        vertices: &CELL_VERTICES,
        uniforms: Some(bytemuck::cast_slice(&grid)),
        vertex_count: CELL_VERTICES.len() as u32,
    })?;

    log::debug!("grid: {submission:?}");
    Ok(())
}
