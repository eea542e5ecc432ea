use super::Vec2;

/// Axis-aligned rectangle in surface pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let r = self.normalized();
        let max = r.max();
        p.x >= r.origin.x && p.y >= r.origin.y && p.x < max.x && p.y < max.y
    }

    /// Splits off a band of `height` from the top.
    ///
    /// The band is clamped to the rectangle, so the remainder never has a
    /// negative height.
    pub fn split_top(self, height: f32) -> (Rect, Rect) {
        let r = self.normalized();
        let band = height.clamp(0.0, r.size.y);
        let top = Rect::new(r.origin.x, r.origin.y, r.size.x, band);
        let rest = Rect::new(r.origin.x, r.origin.y + band, r.size.x, r.size.y - band);
        (top, rest)
    }

    /// Splits the rectangle into `n` equal-width columns, left to right.
    pub fn columns(self, n: usize) -> impl Iterator<Item = Rect> {
        let r = self.normalized();
        let w = if n == 0 { 0.0 } else { r.size.x / n as f32 };
        (0..n).map(move |i| Rect::new(r.origin.x + w * i as f32, r.origin.y, w, r.size.y))
    }

    /// Rounds to whole pixels as `(x, y, w, h)`, clipped to `bounds`.
    ///
    /// Returns `None` when nothing of the rectangle lies inside `bounds`.
    pub fn to_pixels(self, bounds: (u32, u32)) -> Option<(u32, u32, u32, u32)> {
        let r = self.normalized();
        let (bw, bh) = bounds;
        let x = (r.origin.x.max(0.0).round() as u32).min(bw);
        let y = (r.origin.y.max(0.0).round() as u32).min(bh);
        let x2 = (r.max().x.max(0.0).round() as u32).min(bw);
        let y2 = (r.max().y.max(0.0).round() as u32).min(bh);
        let (w, h) = (x2.saturating_sub(x), y2.saturating_sub(y));
        if w == 0 || h == 0 { None } else { Some((x, y, w, h)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── normalized ────────────────────────────────────────────────────────

    #[test]
    fn normalized_positive_is_identity() {
        let rect = r(1.0, 2.0, 10.0, 20.0);
        assert_eq!(rect.normalized(), rect);
    }

    #[test]
    fn normalized_negative_width() {
        let rect = r(10.0, 0.0, -4.0, 5.0);
        let n = rect.normalized();
        assert_eq!(n.origin.x, 6.0);
        assert_eq!(n.size.x, 4.0);
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_top_left_inclusive() {
        assert!(r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn contains_bottom_right_exclusive() {
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(10.0, 10.0)));
    }

    // ── split_top ─────────────────────────────────────────────────────────

    #[test]
    fn split_top_takes_band_from_top() {
        let (top, rest) = r(0.0, 0.0, 800.0, 600.0).split_top(50.0);
        assert_eq!(top, r(0.0, 0.0, 800.0, 50.0));
        assert_eq!(rest, r(0.0, 50.0, 800.0, 550.0));
    }

    #[test]
    fn split_top_band_taller_than_rect_leaves_empty_rest() {
        let (top, rest) = r(0.0, 0.0, 100.0, 30.0).split_top(50.0);
        assert_eq!(top.height(), 30.0);
        assert_eq!(rest.height(), 0.0);
        assert!(rest.is_empty());
    }

    // ── columns ───────────────────────────────────────────────────────────

    #[test]
    fn columns_cover_width_evenly() {
        let cols: Vec<Rect> = r(0.0, 0.0, 300.0, 50.0).columns(3).collect();
        assert_eq!(cols.len(), 3);
        assert_eq!(cols[1], r(100.0, 0.0, 100.0, 50.0));
        assert_eq!(cols[2].max().x, 300.0);
    }

    #[test]
    fn columns_zero_is_empty() {
        assert_eq!(r(0.0, 0.0, 300.0, 50.0).columns(0).count(), 0);
    }

    // ── to_pixels ─────────────────────────────────────────────────────────

    #[test]
    fn to_pixels_clips_to_bounds() {
        assert_eq!(r(-10.0, 40.0, 900.0, 600.0).to_pixels((800, 600)), Some((0, 40, 800, 560)));
    }

    #[test]
    fn to_pixels_outside_bounds_is_none() {
        assert_eq!(r(900.0, 0.0, 10.0, 10.0).to_pixels((800, 600)), None);
    }
}
