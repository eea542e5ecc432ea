use prism_engine::render::{PassDesc, Renderer};

use crate::sample::SampleError;

use super::{CELL_VERTICES, CLEAR, FRAGMENT_ENTRY, VERTEX_ENTRY};

pub const ID: &str = "rectangle";
pub const DESCRIPTION: &str = "Draws a rectangle";

const SHADER: &str = include_str!("shaders/rectangle.wgsl");

/// Draws the cell quad as-is, filling most of the canvas.
pub fn render(renderer: &mut dyn Renderer) -> Result<(), SampleError> {
    let submission = renderer.submit(&PassDesc {
        label: "rectangle",
        clear: CLEAR,
        shader: SHADER,
        vertex_entry: VERTEX_ENTRY,
        fragment_entry: FRAGMENT_ENTRY,
        vertices: &CELL_VERTICES,
        uniforms: None,
        vertex_count: CELL_VERTICES.len() as u32,
    })?;

    log::debug!("rectangle: {submission:?}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingRenderer;

    #[test]
    fn submits_one_draw_of_six_vertices() {
        let mut renderer = RecordingRenderer::default();
        render(&mut renderer).unwrap();

        assert_eq!(renderer.passes.len(), 1);
        let pass = &renderer.passes[0];
        assert_eq!(pass.submission.draw_calls, 1);
        assert_eq!(pass.submission.vertex_count, 6);
        assert_eq!(pass.submission.vertex_buffer_size, 48);
        assert_eq!(pass.submission.uniform_buffer_size, None);
    }

    #[test]
    fn clears_to_dark_blue() {
        let mut renderer = RecordingRenderer::default();
        render(&mut renderer).unwrap();
        assert_eq!(renderer.passes[0].clear, CLEAR);
    }

    #[test]
    fn shader_exposes_both_entry_points() {
        assert!(SHADER.contains("fn vertexMain"));
        assert!(SHADER.contains("fn fragmentMain"));
        assert!(!SHADER.contains("var<uniform>"));
    }
}
