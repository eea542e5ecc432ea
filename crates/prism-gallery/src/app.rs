use winit::dpi::LogicalSize;

use prism_engine::core::{App as EngineApp, AppControl, WindowCtx};
use prism_engine::device::{GpuInit, RenderInstance};
use prism_engine::input::InputEvent;
use prism_engine::window::{Runtime, RuntimeConfig};

use crate::registry::SampleRegistry;
use crate::sample::SampleError;
use crate::shell::{Dispatch, Shell, ShellConfig, Startup};

// ── Gallery ───────────────────────────────────────────────────────────────

/// Top-level gallery builder.
///
/// Configure the window, the sample set and the negotiation parameters, then
/// start the event loop with [`run`](Gallery::run).
///
/// ```rust,ignore
/// Gallery::new()
///     .title("prism samples")
///     .default_sample("rectangle")
///     .gpu(GpuInit::default().without_acceleration())
///     .run()?;
/// ```
pub struct Gallery {
    title:    String,
    width:    f64,
    height:   f64,
    shell:    ShellConfig,
    gpu:      GpuInit,
    registry: SampleRegistry,
}

impl Gallery {
    pub fn new() -> Self {
        Self {
            title:    "prism samples".to_string(),
            width:    800.0,
            height:   600.0,
            shell:    ShellConfig::default(),
            gpu:      GpuInit::default(),
            registry: SampleRegistry::builtin(),
        }
    }

    /// Set the window title. The active sample's description is appended.
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width  = width;
        self.height = height;
        self
    }

    /// Sample rendered at startup.
    pub fn default_sample(mut self, id: impl Into<String>) -> Self {
        self.shell.default_sample = id.into();
        self
    }

    /// Selector band height in logical pixels.
    pub fn selector_height(mut self, height: f32) -> Self {
        self.shell.selector_height = height;
        self
    }

    /// Negotiation parameters.
    pub fn gpu(mut self, init: GpuInit) -> Self {
        self.gpu = init;
        self
    }

    /// Replace the built-in samples.
    pub fn registry(mut self, registry: SampleRegistry) -> Self {
        self.registry = registry;
        self
    }

    // ── Entry point ───────────────────────────────────────────────────────

    /// Opens the window and runs until it is closed or a fatal render error
    /// occurs.
    pub fn run(self) -> anyhow::Result<()> {
        let config = RuntimeConfig {
            title:        self.title.clone(),
            initial_size: LogicalSize::new(self.width, self.height),
        };
        Runtime::run(config, GalleryApp::new(self))
    }
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new()
    }
}

// ── GalleryApp ────────────────────────────────────────────────────────────

/// Engine-facing side of the gallery. Owns the shell once the window exists.
struct GalleryApp {
    title:    String,
    config:   ShellConfig,
    gpu:      GpuInit,
    registry: Option<SampleRegistry>,
    shell:    Option<Shell<RenderInstance>>,
}

impl GalleryApp {
    fn new(gallery: Gallery) -> Self {
        Self {
            title:    gallery.title,
            config:   gallery.shell,
            gpu:      gallery.gpu,
            registry: Some(gallery.registry),
            shell:    None,
        }
    }

    /// Logs a render outcome; fatal errors end the session.
    fn report(&self, outcome: Result<Dispatch, SampleError>) -> AppControl {
        match outcome {
            Ok(dispatch) => {
                log::debug!("render dispatched: {dispatch:?}");
                AppControl::Continue
            }
            Err(e) if e.is_fatal() => {
                log::error!("fatal render error: {e}");
                AppControl::Exit
            }
            Err(e) => {
                log::error!("sample failed: {e}");
                AppControl::Continue
            }
        }
    }

    fn update_title(&self, window: &WindowCtx<'_>) {
        let sample = self.shell.as_ref().and_then(Shell::active_sample);
        match sample {
            Some(s) => window.set_title(&format!("{} - {}", self.title, s.description)),
            None => window.set_title(&self.title),
        }
    }
}

impl EngineApp for GalleryApp {
    fn on_start(&mut self, window: &WindowCtx<'_>) -> AppControl {
        let Some(registry) = self.registry.take() else {
            return AppControl::Continue;
        };

        let config = self.config.clone().scaled(window.scale_factor());
        let gpu = self.gpu.clone();
        let handle = window.handle();

        let Startup { shell, first_render } =
            Shell::start(registry, &config, window.physical_size(), |layout| {
                pollster::block_on(RenderInstance::acquire(handle, layout.canvas, gpu))
            });

        if let Some(instance) = shell.instance() {
            let info = instance.adapter_info();
            log::info!("rendering with {} ({:?})", info.name, info.backend);
        }

        self.shell = Some(shell);
        self.update_title(window);
        self.report(first_render)
    }

    fn on_input(&mut self, window: &WindowCtx<'_>, event: &InputEvent) -> AppControl {
        let Some(outcome) = self.shell.as_mut().and_then(|s| s.handle_input(event)) else {
            return AppControl::Continue;
        };
        self.update_title(window);
        self.report(outcome)
    }

    fn on_resize(&mut self, window: &WindowCtx<'_>, size: (u32, u32)) -> AppControl {
        if let Some(shell) = self.shell.as_mut() {
            // Also reached on ScaleFactorChanged.
            shell.set_scale_factor(window.scale_factor());
            shell.resize(size);
            window.request_redraw();
        }
        AppControl::Continue
    }

    fn on_redraw(&mut self, _window: &WindowCtx<'_>) -> AppControl {
        let Some(shell) = self.shell.as_mut() else {
            return AppControl::Continue;
        };
        match shell.redraw().transpose() {
            Some(outcome) => self.report(outcome),
            None => AppControl::Continue,
        }
    }
}
