use prism_engine::coords::Rect;

/// Selector band on top, canvas below, both spanning the container width.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Layout {
    pub container: Rect,
    pub selector: Rect,
    pub canvas: Rect,
}

impl Layout {
    /// Lays out a `width` x `height` container (physical pixels) with a
    /// selector band of `selector_height`.
    ///
    /// The canvas height saturates at zero when the band does not fit.
    pub fn compute(width: u32, height: u32, selector_height: f32) -> Self {
        let container = Rect::new(0.0, 0.0, width as f32, height as f32);
        let (selector, canvas) = container.split_top(selector_height.max(0.0));
        Self {
            container,
            selector,
            canvas,
        }
    }

    /// Canvas size rounded to whole pixels.
    pub fn canvas_size(&self) -> (u32, u32) {
        (
            self.canvas.width().round() as u32,
            self.canvas.height().round() as u32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_takes_everything_below_the_band() {
        let layout = Layout::compute(800, 600, 50.0);
        assert_eq!(layout.selector, Rect::new(0.0, 0.0, 800.0, 50.0));
        assert_eq!(layout.canvas, Rect::new(0.0, 50.0, 800.0, 550.0));
        assert_eq!(layout.canvas_size(), (800, 550));
    }

    #[test]
    fn band_taller_than_container_leaves_an_empty_canvas() {
        let layout = Layout::compute(320, 30, 50.0);
        assert_eq!(layout.selector.height(), 30.0);
        assert_eq!(layout.canvas_size(), (320, 0));
        assert!(layout.canvas.is_empty());
    }

    #[test]
    fn zero_band_gives_the_whole_container_to_the_canvas() {
        let layout = Layout::compute(640, 480, 0.0);
        assert_eq!(layout.canvas, layout.container);
    }
}
