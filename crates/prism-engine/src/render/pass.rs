use bytemuck::{Pod, Zeroable};

use crate::coords::Rect;
use crate::paint::Color;

use super::{BandSegment, RenderError};

/// A single 2D position, two packed `f32`s (8 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex2 {
    pub pos: [f32; 2],
}

impl Vertex2 {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { pos: [x, y] }
    }

    /// Stride 8, one `Float32x2` position at offset 0, location 0.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex2>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Everything one sample draw needs, as plain data.
///
/// Executing a pass means: one encoder, one render pass clearing to `clear`,
/// `vertices` uploaded to a vertex buffer, `shader` compiled, a pipeline with
/// an automatic layout, `uniforms` (if any) bound at group 0 binding 0, one
/// non-indexed draw of `vertex_count` vertices, submit.
#[derive(Debug, Clone, Copy)]
pub struct PassDesc<'a> {
    pub label: &'a str,
    pub clear: Color,
    /// WGSL source.
    pub shader: &'a str,
    pub vertex_entry: &'a str,
    pub fragment_entry: &'a str,
    pub vertices: &'a [Vertex2],
    pub uniforms: Option<&'a [u8]>,
    pub vertex_count: u32,
}

impl<'a> PassDesc<'a> {
    /// Raw bytes of the vertex list.
    #[inline]
    pub fn vertex_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.vertices)
    }

    /// Checks the pass can be executed as described.
    pub fn validate(&self) -> Result<(), RenderError> {
        let invalid = |reason| {
            Err(RenderError::InvalidPass {
                label: self.label.to_string(),
                reason,
            })
        };

        if self.vertices.is_empty() {
            return invalid("vertex list is empty");
        }
        if self.vertex_count as usize > self.vertices.len() {
            return invalid("vertex count exceeds the vertex list");
        }
        if let Some(u) = self.uniforms {
            if u.is_empty() || u.len() % 4 != 0 {
                return invalid("uniform data must be a non-empty multiple of 4 bytes");
            }
        }
        Ok(())
    }
}

/// What a renderer actually recorded for one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    /// Draw calls issued. Zero when the canvas has no visible area.
    pub draw_calls: u32,
    pub vertex_count: u32,
    pub vertex_buffer_size: u64,
    pub uniform_buffer_size: Option<u64>,
}

impl Submission {
    /// The submission `pass` describes when its draw is issued.
    pub fn of(pass: &PassDesc<'_>, drawn: bool) -> Self {
        Self {
            draw_calls: u32::from(drawn),
            vertex_count: pass.vertex_count,
            vertex_buffer_size: pass.vertex_bytes().len() as u64,
            uniform_buffer_size: pass.uniforms.map(|u| u.len() as u64),
        }
    }
}

/// Executes sample passes against the current frame.
pub trait Renderer {
    /// Output format pipelines must target.
    fn surface_format(&self) -> wgpu::TextureFormat;

    /// Records and submits `pass` into the current frame.
    fn submit(&mut self, pass: &PassDesc<'_>) -> Result<Submission, RenderError>;
}

/// A renderer that also owns presentation of the frame.
pub trait Presenter: Renderer {
    /// Draws `overlay` on the current frame and presents it.
    ///
    /// Does nothing when no pass acquired a frame.
    fn present(&mut self, overlay: &[BandSegment]);

    /// Applies a new surface size and canvas region.
    fn resize(&mut self, surface: (u32, u32), canvas: Rect);
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUAD: [Vertex2; 6] = [
        Vertex2::new(-0.8, -0.8),
        Vertex2::new(0.8, -0.8),
        Vertex2::new(0.8, 0.8),
        Vertex2::new(-0.8, -0.8),
        Vertex2::new(0.8, 0.8),
        Vertex2::new(-0.8, 0.8),
    ];

    fn pass<'a>(vertices: &'a [Vertex2], uniforms: Option<&'a [u8]>, count: u32) -> PassDesc<'a> {
        PassDesc {
            label: "test",
            clear: Color::opaque(0.0, 0.0, 0.4),
            shader: "",
            vertex_entry: "vertexMain",
            fragment_entry: "fragmentMain",
            vertices,
            uniforms,
            vertex_count: count,
        }
    }

    // ── Vertex2 ───────────────────────────────────────────────────────────

    #[test]
    fn vertex_layout_is_two_packed_floats() {
        let layout = Vertex2::layout();
        assert_eq!(layout.array_stride, 8);
        assert_eq!(layout.attributes.len(), 1);
        assert_eq!(layout.attributes[0].offset, 0);
        assert_eq!(layout.attributes[0].shader_location, 0);
        assert_eq!(layout.attributes[0].format, wgpu::VertexFormat::Float32x2);
    }

    // ── validate ──────────────────────────────────────────────────────────

    #[test]
    fn six_vertices_validate() {
        assert!(pass(&QUAD, None, 6).validate().is_ok());
    }

    #[test]
    fn empty_vertex_list_is_rejected() {
        assert!(matches!(
            pass(&[], None, 0).validate(),
            Err(RenderError::InvalidPass { .. })
        ));
    }

    #[test]
    fn overlong_vertex_count_is_rejected() {
        assert!(pass(&QUAD, None, 7).validate().is_err());
    }

    #[test]
    fn misaligned_uniforms_are_rejected() {
        assert!(pass(&QUAD, Some(&[0u8; 6]), 6).validate().is_err());
        assert!(pass(&QUAD, Some(&[0u8; 8]), 6).validate().is_ok());
    }

    // ── Submission ────────────────────────────────────────────────────────

    #[test]
    fn submission_reports_buffer_sizes() {
        let s = Submission::of(&pass(&QUAD, Some(&[0u8; 8]), 6), true);
        assert_eq!(s.draw_calls, 1);
        assert_eq!(s.vertex_buffer_size, 48);
        assert_eq!(s.uniform_buffer_size, Some(8));
    }

    #[test]
    fn undrawn_submission_has_no_draw_calls() {
        assert_eq!(Submission::of(&pass(&QUAD, None, 6), false).draw_calls, 0);
    }
}
