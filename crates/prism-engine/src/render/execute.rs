use crate::coords::{Rect, Viewport};
use crate::device::RenderInstance;

use super::{BandSegment, PassDesc, Presenter, RenderCtx, RenderError, Renderer, Submission, Vertex2};

impl Renderer for RenderInstance {
    fn surface_format(&self) -> wgpu::TextureFormat {
        RenderInstance::surface_format(self)
    }

    fn submit(&mut self, pass: &PassDesc<'_>) -> Result<Submission, RenderError> {
        pass.validate()?;
        self.acquire_frame()?;

        let format = RenderInstance::surface_format(self);
        let scissor = self.canvas().to_pixels(self.size());
        let device = self.device();
        let queue = self.queue();
        let Some(view) = self.frame_view() else {
            return Err(RenderError::InvalidPass {
                label: pass.label.to_string(),
                reason: "no frame to draw into",
            });
        };

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some(pass.label),
        });

        let vertex_bytes = pass.vertex_bytes();
        let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("prism sample vertices"),
            size: vertex_bytes.len() as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        queue.write_buffer(&vertex_buffer, 0, vertex_bytes);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(pass.label),
            source: wgpu::ShaderSource::Wgsl(pass.shader.into()),
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(pass.label),
            // Automatic layout, derived from the shader.
            layout: None,

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some(pass.vertex_entry),
                compilation_options: Default::default(),
                buffers: &[Vertex2::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some(pass.fragment_entry),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        let bind_group = pass.uniforms.map(|bytes| {
            let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("prism sample uniforms"),
                size: bytes.len() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            queue.write_buffer(&uniform_buffer, 0, bytes);

            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("prism sample bind group"),
                layout: &pipeline.get_bind_group_layout(0),
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                }],
            })
        });

        let drawn = {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some(pass.label),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(pass.clear.into()),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            // Clip space maps onto the canvas, not the whole window.
            match scissor {
                Some((x, y, w, h)) => {
                    rpass.set_viewport(x as f32, y as f32, w as f32, h as f32, 0.0, 1.0);
                    rpass.set_scissor_rect(x, y, w, h);
                    rpass.set_pipeline(&pipeline);
                    rpass.set_vertex_buffer(0, vertex_buffer.slice(..));
                    if let Some(bind_group) = bind_group.as_ref() {
                        rpass.set_bind_group(0, bind_group, &[]);
                    }
                    rpass.draw(0..pass.vertex_count, 0..1);
                    true
                }
                None => {
                    log::debug!("{}: canvas has no visible area; draw skipped", pass.label);
                    false
                }
            }
        };

        queue.submit(std::iter::once(encoder.finish()));

        Ok(Submission::of(pass, drawn))
    }
}

impl Presenter for RenderInstance {
    fn present(&mut self, overlay: &[BandSegment]) {
        let Some(mut parts) = self.present_parts() else { return };
        let (width, height) = parts.size;

        if !overlay.is_empty() {
            let mut encoder = parts.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("prism overlay encoder"),
            });

            let ctx = RenderCtx {
                device: parts.device,
                queue: parts.queue,
                format: parts.format,
                viewport: Viewport::new(width as f32, height as f32),
                view: &parts.frame.view,
            };
            parts.band.render(&ctx, &mut encoder, overlay);

            parts.queue.submit(std::iter::once(encoder.finish()));
        }

        parts.window.pre_present_notify();
        parts.frame.surface_texture.present();
    }

    fn resize(&mut self, surface: (u32, u32), canvas: Rect) {
        RenderInstance::resize(self, surface, canvas);
    }
}
