/// Linear premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are expected to be multiplied by `a` (premultiplied alpha).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    /// Creates an opaque color. Opaque colors are premultiplied trivially.
    #[inline]
    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<Color> for wgpu::Color {
    fn from(c: Color) -> Self {
        wgpu::Color {
            r: c.r as f64,
            g: c.g as f64,
            b: c.b as f64,
            a: c.a as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_has_full_alpha() {
        assert_eq!(Color::opaque(0.2, 0.4, 0.6).to_array(), [0.2, 0.4, 0.6, 1.0]);
    }

    #[test]
    fn nan_component_is_not_finite() {
        assert!(!Color::opaque(f32::NAN, 0.0, 0.0).is_finite());
    }

    #[test]
    fn converts_to_wgpu_color() {
        let c: wgpu::Color = Color::opaque(0.0, 0.0, 0.4).into();
        assert_eq!(c.b, 0.4f32 as f64);
        assert_eq!(c.a, 1.0);
    }
}
