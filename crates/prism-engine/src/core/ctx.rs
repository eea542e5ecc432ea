use std::sync::Arc;

use winit::window::{Window, WindowId};

/// Per-window handles and window metadata passed to app callbacks.
pub struct WindowCtx<'a> {
    pub id: WindowId,
    pub window: &'a Arc<Window>,
}

impl<'a> WindowCtx<'a> {
    /// Returns the drawable size as `(width, height)` in physical pixels.
    pub fn physical_size(&self) -> (u32, u32) {
        let size = self.window.inner_size();
        (size.width, size.height)
    }

    pub fn scale_factor(&self) -> f64 {
        self.window.scale_factor()
    }

    pub fn set_title(&self, title: &str) {
        self.window.set_title(title);
    }

    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }

    /// Clones the shared window handle (e.g. to create a surface).
    pub fn handle(&self) -> Arc<Window> {
        Arc::clone(self.window)
    }
}
