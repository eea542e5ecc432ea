use std::sync::Arc;

use winit::window::Window;

use crate::coords::Rect;
use crate::render::{BandRenderer, RenderError};

use super::frame::Frame;
use super::surface;
use super::{GpuInit, NegotiationError, SurfaceErrorAction};

/// The negotiated handle bundle: surface, logical device and pixel format.
///
/// Created once per session by [`RenderInstance::acquire`] and never
/// reconfigured beyond resizes. Samples draw into [`canvas`](Self::canvas), a
/// sub-rectangle of the window surface; the rest belongs to the selector band.
pub struct RenderInstance {
    /// Window the surface presents to. Shared so the surface can be `'static`.
    window: Arc<Window>,

    /// Surface bound to the window.
    surface: wgpu::Surface<'static>,

    /// Selected adapter.
    adapter: wgpu::Adapter,

    /// Logical device.
    device: wgpu::Device,

    /// Command queue.
    queue: wgpu::Queue,

    /// Active surface configuration. Width/height are the surface size.
    config: wgpu::SurfaceConfiguration,

    /// Region samples draw into, in surface pixels.
    canvas: Rect,

    /// Frame acquired by the current draw, presented by `present`.
    frame: Option<Frame>,

    /// Overlay renderer for the selector band.
    band: BandRenderer,
}

impl RenderInstance {
    /// Negotiates accelerated rendering for `window`.
    ///
    /// Adapter/device acquisition is asynchronous under wgpu. Fails closed:
    /// every failure is reported as a [`NegotiationError`] and nothing is kept.
    /// On success the surface is configured for presentation exactly once.
    pub async fn acquire(
        window: Arc<Window>,
        canvas: Rect,
        init: GpuInit,
    ) -> Result<Self, NegotiationError> {
        let GpuInit {
            backends,
            prefer_srgb,
            power_preference,
            present_mode,
            alpha_mode,
            required_features,
            required_limits,
            desired_maximum_frame_latency,
        } = init;

        if backends.is_empty() {
            return Err(NegotiationError::NotSupported(
                "no graphics backend is enabled".to_string(),
            ));
        }

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .map_err(|e| NegotiationError::NotSupported(e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| NegotiationError::NoAdapterFound(e.to_string()))?;

        let info = adapter.get_info();
        log::info!("adapter: \"{}\" ({:?}, {:?})", info.name, info.backend, info.device_type);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("prism device"),
                required_features,
                required_limits,
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await
            .map_err(|e| NegotiationError::NoDeviceFound(e.to_string()))?;

        let size = window.inner_size();
        if size.width == 0 || size.height == 0 {
            return Err(NegotiationError::SurfaceConfigurationError(
                "window has zero size".to_string(),
            ));
        }

        let caps = surface.get_capabilities(&adapter);
        let format = surface::choose_surface_format(&caps, prefer_srgb).ok_or_else(|| {
            NegotiationError::SurfaceConfigurationError(
                "surface exposes no formats for this adapter".to_string(),
            )
        })?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width,
            height: size.height,
            present_mode,
            alpha_mode: surface::choose_alpha_mode(&caps, alpha_mode),
            view_formats: vec![],
            desired_maximum_frame_latency,
        };

        surface.configure(&device, &config);
        log::info!("surface configured: {:?} {}x{}", format, size.width, size.height);

        Ok(Self {
            window,
            surface,
            adapter,
            device,
            queue,
            config,
            canvas,
            frame: None,
            band: BandRenderer::new(),
        })
    }

    /// Returns the negotiated surface format.
    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Returns the surface size in physical pixels.
    pub fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    /// Returns the region samples draw into.
    pub fn canvas(&self) -> Rect {
        self.canvas
    }

    /// Returns information about the negotiated adapter.
    pub fn adapter_info(&self) -> wgpu::AdapterInfo {
        self.adapter.get_info()
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    /// Reconfigures the surface after a resize and moves the canvas.
    ///
    /// A frame still held from before the resize is discarded.
    pub fn resize(&mut self, new_size: (u32, u32), canvas: Rect) {
        self.frame = None;
        self.canvas = canvas;
        surface::apply_resize(&self.surface, &self.device, &mut self.config, new_size);
    }

    /// Converts a `SurfaceError` into a higher-level action.
    pub fn handle_surface_error(&self, err: &wgpu::SurfaceError) -> SurfaceErrorAction {
        surface::map_surface_error(&self.surface, &self.device, &self.config, err)
    }

    /// Acquires the next surface texture unless this frame already holds one.
    pub(crate) fn acquire_frame(&mut self) -> Result<(), RenderError> {
        if self.frame.is_some() {
            return Ok(());
        }

        let surface_texture = match self.surface.get_current_texture() {
            Ok(t) => t,
            Err(err) => {
                let action = self.handle_surface_error(&err);
                log::warn!("surface texture unavailable ({err}); {action:?}");
                return Err(RenderError::Surface { error: err, action });
            }
        };

        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.frame = Some(Frame {
            surface_texture,
            view,
        });
        Ok(())
    }

    pub(crate) fn frame_view(&self) -> Option<&wgpu::TextureView> {
        self.frame.as_ref().map(|f| &f.view)
    }

    /// Detaches the frame and the band renderer for the presentation pass.
    pub(crate) fn present_parts(&mut self) -> Option<PresentParts<'_>> {
        let frame = self.frame.take()?;
        Some(PresentParts {
            frame,
            window: &self.window,
            device: &self.device,
            queue: &self.queue,
            format: self.config.format,
            size: (self.config.width, self.config.height),
            band: &mut self.band,
        })
    }
}

/// Borrowed pieces needed to finish and present one frame.
pub(crate) struct PresentParts<'a> {
    pub frame: Frame,
    pub window: &'a Window,
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub format: wgpu::TextureFormat,
    pub size: (u32, u32),
    pub band: &'a mut BandRenderer,
}
