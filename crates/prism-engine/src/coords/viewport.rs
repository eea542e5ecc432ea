use super::Vec2;

/// Viewport size in surface pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Maps a surface pixel position to normalized device coordinates
    /// (`-1..1`, +Y up).
    #[inline]
    pub fn to_ndc(self, p: Vec2) -> [f32; 2] {
        [
            p.x / self.width * 2.0 - 1.0,
            1.0 - p.y / self.height * 2.0,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_to_clip_space_corners() {
        let vp = Viewport::new(800.0, 600.0);
        assert_eq!(vp.to_ndc(Vec2::new(0.0, 0.0)), [-1.0, 1.0]);
        assert_eq!(vp.to_ndc(Vec2::new(800.0, 600.0)), [1.0, -1.0]);
        assert_eq!(vp.to_ndc(Vec2::new(400.0, 300.0)), [0.0, 0.0]);
    }

    #[test]
    fn zero_sized_viewport_is_invalid() {
        assert!(!Viewport::new(0.0, 600.0).is_valid());
        assert!(Viewport::new(1.0, 1.0).is_valid());
    }
}
