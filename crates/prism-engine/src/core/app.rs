use crate::input::InputEvent;

use super::ctx::WindowCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
///
/// The runtime drives redraws on demand only: the app draws in `on_start`, in
/// response to input, and when the platform asks for a redraw.
pub trait App {
    /// Called once, after the window exists.
    fn on_start(&mut self, window: &WindowCtx<'_>) -> AppControl;

    /// Called for translated input events.
    fn on_input(&mut self, window: &WindowCtx<'_>, event: &InputEvent) -> AppControl {
        let _ = (window, event);
        AppControl::Continue
    }

    /// Called when the drawable size changes (physical pixels).
    fn on_resize(&mut self, window: &WindowCtx<'_>, size: (u32, u32)) -> AppControl {
        let _ = (window, size);
        AppControl::Continue
    }

    /// Called when the platform asks for the window contents.
    fn on_redraw(&mut self, window: &WindowCtx<'_>) -> AppControl;
}
