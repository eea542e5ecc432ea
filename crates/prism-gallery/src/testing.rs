//! GPU-free renderer used by the gallery tests.

use prism_engine::coords::Rect;
use prism_engine::paint::Color;
use prism_engine::render::{
    BandSegment, PassDesc, Presenter, RenderError, Renderer, Submission, Vertex2,
};

/// A pass as the recorder saw it, with its borrowed data copied out.
#[derive(Debug, Clone)]
pub struct RecordedPass {
    pub label: String,
    pub clear: Color,
    pub vertices: Vec<Vertex2>,
    pub uniforms: Option<Vec<u8>>,
    pub submission: Submission,
}

/// Records every pass, presentation and resize instead of touching a GPU.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub passes: Vec<RecordedPass>,
    /// Overlay handed to each `present` call.
    pub presents: Vec<Vec<BandSegment>>,
    pub resizes: Vec<((u32, u32), Rect)>,
    /// When set, every `submit` fails with this reason.
    pub reject: Option<&'static str>,
}

impl Renderer for RecordingRenderer {
    fn surface_format(&self) -> wgpu::TextureFormat {
        wgpu::TextureFormat::Bgra8UnormSrgb
    }

    fn submit(&mut self, pass: &PassDesc<'_>) -> Result<Submission, RenderError> {
        pass.validate()?;
        if let Some(reason) = self.reject {
            return Err(RenderError::InvalidPass {
                label: pass.label.to_string(),
                reason,
            });
        }

        let submission = Submission::of(pass, true);
        self.passes.push(RecordedPass {
            label: pass.label.to_string(),
            clear: pass.clear,
            vertices: pass.vertices.to_vec(),
            uniforms: pass.uniforms.map(<[u8]>::to_vec),
            submission,
        });
        Ok(submission)
    }
}

impl Presenter for RecordingRenderer {
    fn present(&mut self, overlay: &[BandSegment]) {
        self.presents.push(overlay.to_vec());
    }

    fn resize(&mut self, surface: (u32, u32), canvas: Rect) {
        self.resizes.push((surface, canvas));
    }
}
