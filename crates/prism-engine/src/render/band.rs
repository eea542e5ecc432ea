use bytemuck::{Pod, Zeroable};

use crate::coords::{Rect, Vec2, Viewport};
use crate::paint::Color;

use super::RenderCtx;

/// One filled rectangle of the selector band overlay.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BandSegment {
    pub rect: Rect,
    pub color: Color,
}

impl BandSegment {
    #[inline]
    pub fn new(rect: Rect, color: Color) -> Self {
        Self { rect, color }
    }
}

/// Draws the selector band on top of a finished frame.
///
/// The band is a handful of flat rectangles, so they are tessellated on the
/// CPU into two triangles each, already in NDC, and drawn with one
/// non-indexed call. Colors are premultiplied; the pass loads the existing
/// frame contents.
#[derive(Default)]
pub struct BandRenderer {
    pipeline: Option<(wgpu::TextureFormat, wgpu::RenderPipeline)>,
    vertices: Option<wgpu::Buffer>,
    /// Capacity of `vertices`, in vertices.
    capacity: usize,
}

impl BandRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the overlay pass for `segments` into `encoder`.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        encoder: &mut wgpu::CommandEncoder,
        segments: &[BandSegment],
    ) {
        if !ctx.viewport.is_valid() {
            return;
        }
        let vertices = band_vertices(segments, ctx.viewport);
        if vertices.is_empty() {
            return;
        }

        self.ensure_pipeline(ctx);
        self.ensure_capacity(ctx.device, vertices.len());

        let (Some((_, pipeline)), Some(buffer)) = (self.pipeline.as_ref(), self.vertices.as_ref())
        else {
            return;
        };
        ctx.queue.write_buffer(buffer, 0, bytemuck::cast_slice(&vertices));

        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("prism band pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: ctx.view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        pass.set_pipeline(pipeline);
        pass.set_vertex_buffer(0, buffer.slice(..));
        pass.draw(0..vertices.len() as u32, 0..1);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if matches!(&self.pipeline, Some((format, _)) if *format == ctx.format) {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("prism band shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/band.wgsl").into()),
        });

        let layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("prism band pipeline layout"),
            bind_group_layouts: &[],
            immediate_size: 0,
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("prism band pipeline"),
            layout: Some(&layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("band_vs"),
                compilation_options: Default::default(),
                buffers: &[BandVertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("band_fs"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.format,
                    blend: Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        self.pipeline = Some((ctx.format, pipeline));
    }

    fn ensure_capacity(&mut self, device: &wgpu::Device, required: usize) {
        if required <= self.capacity && self.vertices.is_some() {
            return;
        }

        // Room for a few more segments before the next reallocation.
        let capacity = required.next_power_of_two().max(64);
        self.vertices = Some(device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("prism band vertices"),
            size: (capacity * std::mem::size_of::<BandVertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.capacity = capacity;
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct BandVertex {
    ndc: [f32; 2],
    color: [f32; 4],
}

impl BandVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<BandVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Tessellates `segments` into triangles in NDC, in draw order.
///
/// Empty or non-finite segments are skipped.
fn band_vertices(segments: &[BandSegment], viewport: Viewport) -> Vec<BandVertex> {
    let mut out = Vec::with_capacity(segments.len() * 6);

    for seg in segments {
        let r = seg.rect.normalized();
        if r.is_empty() || !r.is_finite() || !seg.color.is_finite() {
            continue;
        }

        let color = seg.color.to_array();
        let (min, max) = (r.origin, r.max());
        let corner = |x, y| BandVertex {
            ndc: viewport.to_ndc(Vec2::new(x, y)),
            color,
        };

        let (tl, tr) = (corner(min.x, min.y), corner(max.x, min.y));
        let (br, bl) = (corner(max.x, max.y), corner(min.x, max.y));
        out.extend_from_slice(&[tl, bl, br, tl, br, tr]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const VP: Viewport = Viewport::new(800.0, 600.0);

    #[test]
    fn each_segment_becomes_two_triangles() {
        let segments = [
            BandSegment::new(Rect::new(0.0, 0.0, 800.0, 50.0), Color::opaque(0.1, 0.1, 0.1)),
            BandSegment::new(Rect::new(4.0, 4.0, 392.0, 42.0), Color::opaque(0.8, 0.4, 0.1)),
        ];
        let v = band_vertices(&segments, VP);
        assert_eq!(v.len(), 12);
        assert_eq!(v[6].color, [0.8, 0.4, 0.1, 1.0]);
    }

    #[test]
    fn full_width_band_spans_clip_space_horizontally() {
        let seg = [BandSegment::new(Rect::new(0.0, 0.0, 800.0, 300.0), Color::opaque(1.0, 1.0, 1.0))];
        let v = band_vertices(&seg, VP);
        let xs: Vec<f32> = v.iter().map(|v| v.ndc[0]).collect();
        let ys: Vec<f32> = v.iter().map(|v| v.ndc[1]).collect();
        assert!(xs.iter().all(|x| *x == -1.0 || *x == 1.0));
        assert!(ys.iter().all(|y| *y == 1.0 || *y == 0.0));
    }

    #[test]
    fn degenerate_segments_are_skipped() {
        let white = Color::opaque(1.0, 1.0, 1.0);
        let segments = [
            BandSegment::new(Rect::new(0.0, 0.0, 0.0, 50.0), white),
            BandSegment::new(Rect::new(0.0, 0.0, f32::NAN, 50.0), white),
        ];
        assert!(band_vertices(&segments, VP).is_empty());
    }

    #[test]
    fn negative_sizes_are_normalized() {
        let seg = [BandSegment::new(Rect::new(800.0, 600.0, -800.0, -600.0), Color::opaque(0.0, 0.0, 0.0))];
        let v = band_vertices(&seg, VP);
        assert_eq!(v[0].ndc, [-1.0, 1.0]);
    }

    #[test]
    fn vertex_stride_is_position_plus_color() {
        assert_eq!(BandVertex::layout().array_stride, 24);
    }
}
