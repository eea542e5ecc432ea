use prism_engine::coords::{Rect, Vec2};
use prism_engine::paint::Color;
use prism_engine::render::BandSegment;

use crate::registry::SampleRegistry;

const BAND: Color = Color::opaque(0.08, 0.08, 0.1);
const TILE: Color = Color::opaque(0.22, 0.22, 0.26);
const ACCENT: Color = Color::opaque(0.85, 0.45, 0.1);

/// Gap between tiles, in pixels.
const INSET: f32 = 4.0;

/// One entry of the selector: the sample id and what the user sees.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Single-choice control listing the registered samples.
///
/// The band is split into equal columns, one per option, in listing order.
#[derive(Debug, Clone, Default)]
pub struct Selector {
    options: Vec<SelectOption>,
    selected: Option<usize>,
}

impl Selector {
    /// One option per registry entry (value = id, label = description).
    pub fn from_registry(registry: &SampleRegistry) -> Self {
        Self {
            options: registry
                .list()
                .map(|(value, label)| SelectOption { value, label })
                .collect(),
            selected: None,
        }
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn get(&self, index: usize) -> Option<&SelectOption> {
        self.options.get(index)
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected(&self) -> Option<&SelectOption> {
        self.selected.and_then(|i| self.options.get(i))
    }

    /// Value of the selected option.
    pub fn value(&self) -> Option<&'static str> {
        self.selected().map(|o| o.value)
    }

    pub fn index_of(&self, value: &str) -> Option<usize> {
        self.options.iter().position(|o| o.value == value)
    }

    /// Selects `index`. Returns whether the selection changed.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.options.len() || self.selected == Some(index) {
            return false;
        }
        self.selected = Some(index);
        true
    }

    /// Selects the option holding `value`. Returns whether the selection changed.
    pub fn select_value(&mut self, value: &str) -> bool {
        self.index_of(value).is_some_and(|i| self.select(i))
    }

    /// Index `delta` steps away from the selection, wrapping at both ends.
    ///
    /// With nothing selected, forward steps land on the first option and
    /// backward steps on the last.
    pub fn step(&self, delta: isize) -> Option<usize> {
        let n = self.options.len();
        if n == 0 {
            return None;
        }
        let next = match self.selected {
            Some(i) => (i as isize + delta).rem_euclid(n as isize) as usize,
            None if delta < 0 => n - 1,
            None => 0,
        };
        Some(next)
    }

    /// Option whose column of `band` contains `point`.
    pub fn hit_test(&self, band: Rect, point: Vec2) -> Option<usize> {
        band.columns(self.options.len()).position(|col| col.contains(point))
    }

    /// Overlay geometry: the band background, then one tile per option with
    /// the selected one highlighted.
    pub fn segments(&self, band: Rect) -> Vec<BandSegment> {
        let mut out = Vec::with_capacity(self.options.len() + 1);
        out.push(BandSegment::new(band, BAND));

        for (i, col) in band.columns(self.options.len()).enumerate() {
            let tile = Rect::new(
                col.origin.x + INSET,
                col.origin.y + INSET,
                col.width() - 2.0 * INSET,
                col.height() - 2.0 * INSET,
            );
            let color = if self.selected == Some(i) { ACCENT } else { TILE };
            out.push(BandSegment::new(tile, color));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector() -> Selector {
        Selector::from_registry(&SampleRegistry::builtin())
    }

    // ── options ───────────────────────────────────────────────────────────

    #[test]
    fn options_mirror_the_registry() {
        let s = selector();
        assert_eq!(
            s.options(),
            [
                SelectOption { value: "grid", label: "Draws a grid of cells" },
                SelectOption { value: "rectangle", label: "Draws a rectangle" },
            ]
        );
        assert_eq!(s.value(), None);
    }

    // ── select ────────────────────────────────────────────────────────────

    #[test]
    fn selecting_the_current_option_is_not_a_change() {
        let mut s = selector();
        assert!(s.select_value("rectangle"));
        assert!(!s.select_value("rectangle"));
        assert_eq!(s.value(), Some("rectangle"));
    }

    #[test]
    fn unknown_value_leaves_selection_alone() {
        let mut s = selector();
        s.select(0);
        assert!(!s.select_value("teapot"));
        assert!(!s.select(7));
        assert_eq!(s.selected_index(), Some(0));
    }

    // ── step ──────────────────────────────────────────────────────────────

    #[test]
    fn step_wraps_both_ways() {
        let mut s = selector();
        s.select(1);
        assert_eq!(s.step(1), Some(0));
        s.select(0);
        assert_eq!(s.step(-1), Some(1));
    }

    #[test]
    fn step_without_selection_picks_an_end() {
        let s = selector();
        assert_eq!(s.step(1), Some(0));
        assert_eq!(s.step(-1), Some(1));
        assert_eq!(Selector::default().step(1), None);
    }

    // ── hit_test ──────────────────────────────────────────────────────────

    #[test]
    fn hit_test_maps_columns_to_options() {
        let s = selector();
        let band = Rect::new(0.0, 0.0, 800.0, 50.0);
        assert_eq!(s.hit_test(band, Vec2::new(10.0, 25.0)), Some(0));
        assert_eq!(s.hit_test(band, Vec2::new(400.0, 25.0)), Some(1));
        assert_eq!(s.hit_test(band, Vec2::new(400.0, 60.0)), None);
    }

    // ── segments ──────────────────────────────────────────────────────────

    #[test]
    fn segments_highlight_only_the_selection() {
        let mut s = selector();
        s.select_value("grid");
        let segs = s.segments(Rect::new(0.0, 0.0, 800.0, 50.0));

        assert_eq!(segs.len(), 3);
        assert_eq!(segs[0].color, BAND);
        assert_eq!(segs[1].color, ACCENT);
        assert_eq!(segs[2].color, TILE);
        assert_eq!(segs[2].rect, Rect::new(404.0, 4.0, 392.0, 42.0));
    }
}
