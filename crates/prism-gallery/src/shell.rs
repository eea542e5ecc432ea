use prism_engine::coords::Vec2;
use prism_engine::device::NegotiationError;
use prism_engine::input::{
    InputEvent, Key, KeyState, MouseButton, MouseButtonState, PointerButtonEvent,
};
use prism_engine::render::Presenter;

use crate::layout::Layout;
use crate::registry::SampleRegistry;
use crate::sample::{Sample, SampleError};
use crate::selector::Selector;

/// Shell settings.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Sample rendered at startup.
    pub default_sample: String,

    /// Height of the selector band, in logical pixels.
    pub selector_height: f32,

    /// Physical pixels per logical pixel.
    pub scale_factor: f64,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            default_sample: "grid".to_string(),
            selector_height: 50.0,
            scale_factor: 1.0,
        }
    }
}

impl ShellConfig {
    /// Targets a display with `factor` physical pixels per logical pixel.
    ///
    /// Non-positive or non-finite factors are ignored.
    pub fn scaled(mut self, factor: f64) -> Self {
        if factor.is_finite() && factor > 0.0 {
            self.scale_factor = factor;
        }
        self
    }

    /// Selector band height in physical pixels.
    pub fn band_height(&self) -> f32 {
        (self.selector_height as f64 * self.scale_factor) as f32
    }
}

/// Which routine a selection ended up running.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Dispatch {
    /// Primary routine on the negotiated instance; the frame was presented.
    Accelerated,
    /// Fallback routine.
    Fallback,
    /// The sample has no routine usable in this session.
    NoRoutine,
    /// Unknown sample id; nothing changed.
    Ignored,
}

/// A freshly started shell and the outcome of its first render.
pub struct Startup<R> {
    pub shell: Shell<R>,
    pub first_render: Result<Dispatch, SampleError>,
}

/// Owns the layout, the selector and the session's render instance.
///
/// Negotiation happens once, in [`Shell::start`]. Its outcome fixes, for the
/// whole session, whether samples run their primary or their fallback
/// routine.
pub struct Shell<R> {
    registry: SampleRegistry,
    selector: Selector,
    layout: Layout,
    config: ShellConfig,

    /// `Some` when accelerated rendering was negotiated.
    instance: Option<R>,

    active: Option<&'static str>,
}

impl<R: Presenter> Shell<R> {
    /// Lays out a `container` (physical pixels), negotiates once through
    /// `negotiate`, then renders `config.default_sample`.
    ///
    /// A negotiation failure is logged and leaves the session fallback-only.
    pub fn start<F>(
        registry: SampleRegistry,
        config: &ShellConfig,
        container: (u32, u32),
        negotiate: F,
    ) -> Startup<R>
    where
        F: FnOnce(&Layout) -> Result<R, NegotiationError>,
    {
        let layout = Layout::compute(container.0, container.1, config.band_height());
        let selector = Selector::from_registry(&registry);

        let instance = match negotiate(&layout) {
            Ok(instance) => {
                log::info!("accelerated rendering negotiated");
                Some(instance)
            }
            Err(e) => {
                log::error!("accelerated rendering unavailable: {e}");
                None
            }
        };

        let mut shell = Self {
            registry,
            selector,
            layout,
            config: config.clone(),
            instance,
            active: None,
        };

        let first_render = shell.select(&config.default_sample);
        if first_render.as_ref().is_ok_and(|d| *d == Dispatch::Ignored) {
            log::warn!("default sample {:?} is not registered", config.default_sample);
        }

        Startup { shell, first_render }
    }

    /// Makes `id` the active sample and renders it.
    ///
    /// Unknown ids are ignored. Routine failures are returned to the caller;
    /// the sample stays active.
    pub fn select(&mut self, id: &str) -> Result<Dispatch, SampleError> {
        let Some(sample) = self.registry.get(id).copied() else {
            log::debug!("ignoring selection of unknown sample {id:?}");
            return Ok(Dispatch::Ignored);
        };

        self.active = Some(sample.id);
        self.selector.select_value(sample.id);
        log::debug!("selected sample {:?}", sample.id);

        self.dispatch(&sample)
    }

    /// Renders the active sample's primary routine again.
    ///
    /// Only accelerated draws are repeated: fallback rendering has no surface
    /// to refresh, so a session without an instance, or a sample without a
    /// primary routine, redraws nothing.
    pub fn redraw(&mut self) -> Result<Option<Dispatch>, SampleError> {
        if self.instance.is_none() {
            return Ok(None);
        }
        let Some(sample) = self.active_sample().copied() else {
            return Ok(None);
        };
        if sample.primary.is_none() {
            return Ok(None);
        }
        self.dispatch(&sample).map(Some)
    }

    /// Records a new display scale. Applied by the next [`resize`](Self::resize).
    pub fn set_scale_factor(&mut self, factor: f64) {
        self.config = self.config.clone().scaled(factor);
    }

    /// Re-lays out for a new container size and resizes the surface.
    pub fn resize(&mut self, container: (u32, u32)) {
        self.layout = Layout::compute(container.0, container.1, self.config.band_height());
        if let Some(instance) = self.instance.as_mut() {
            instance.resize(container, self.layout.canvas);
        }
    }

    /// Drives the selector from input.
    ///
    /// Left click on an option, arrow keys (wrapping) and digits `1..=9`
    /// pick a sample. Returns `None` unless the selection actually changed.
    pub fn handle_input(&mut self, event: &InputEvent) -> Option<Result<Dispatch, SampleError>> {
        let target = match *event {
            InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Left,
                state: MouseButtonState::Pressed,
                x,
                y,
            }) => self.selector.hit_test(self.layout.selector, Vec2::new(x, y))?,

            InputEvent::Key { key, state: KeyState::Pressed, .. } => match key {
                Key::ArrowLeft | Key::ArrowUp => self.selector.step(-1)?,
                Key::ArrowRight | Key::ArrowDown => self.selector.step(1)?,
                _ => {
                    let digit = key.digit().filter(|d| *d > 0)?;
                    let index = usize::from(digit) - 1;
                    self.selector.get(index)?;
                    index
                }
            },

            _ => return None,
        };

        if self.selector.selected_index() == Some(target) {
            return None;
        }
        let id = self.selector.get(target)?.value;
        Some(self.select(id))
    }

    fn dispatch(&mut self, sample: &Sample) -> Result<Dispatch, SampleError> {
        match (self.instance.as_mut(), sample.primary, sample.fallback) {
            (Some(instance), Some(primary), _) => {
                let drawn = primary(&mut *instance);
                // Present even a failed draw so the band stays current.
                instance.present(&self.selector.segments(self.layout.selector));
                drawn?;
                Ok(Dispatch::Accelerated)
            }
            (_, _, Some(fallback)) => {
                fallback()?;
                Ok(Dispatch::Fallback)
            }
            _ => {
                log::warn!("sample {:?} has no routine for this session", sample.id);
                Ok(Dispatch::NoRoutine)
            }
        }
    }
}

impl<R> Shell<R> {
    /// True when accelerated rendering was negotiated.
    pub fn is_accelerated(&self) -> bool {
        self.instance.is_some()
    }

    pub fn instance(&self) -> Option<&R> {
        self.instance.as_ref()
    }

    /// Id of the active sample.
    pub fn active(&self) -> Option<&'static str> {
        self.active
    }

    pub fn active_sample(&self) -> Option<&Sample> {
        self.active.and_then(|id| self.registry.get(id))
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    pub fn registry(&self) -> &SampleRegistry {
        &self.registry
    }
}
