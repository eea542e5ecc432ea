use crate::sample::{not_implemented, Sample};
use crate::samples;

/// Ordered identifier → [`Sample`] mapping.
///
/// Insertion order is listing order. Built once and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct SampleRegistry {
    samples: Vec<Sample>,
}

impl SampleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The samples shipped with the gallery: `grid`, then `rectangle`.
    pub fn builtin() -> Self {
        Self::new()
            .with(
                Sample::new(samples::grid::ID, samples::grid::DESCRIPTION)
                    .with_primary(samples::grid::render)
                    .with_fallback(not_implemented),
            )
            .with(
                Sample::new(samples::rectangle::ID, samples::rectangle::DESCRIPTION)
                    .with_primary(samples::rectangle::render)
                    .with_fallback(not_implemented),
            )
    }

    /// Adds `sample`. Re-registering an id replaces the entry in place.
    pub fn with(mut self, sample: Sample) -> Self {
        match self.position(sample.id) {
            Some(i) => self.samples[i] = sample,
            None => self.samples.push(sample),
        }
        self
    }

    /// `(id, description)` pairs in listing order.
    pub fn list(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.samples.iter().map(|s| (s.id, s.description))
    }

    pub fn get(&self, id: &str) -> Option<&Sample> {
        self.samples.iter().find(|s| s.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.samples.iter().position(|s| s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sample> + '_ {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_lists_grid_then_rectangle() {
        let ids: Vec<_> = SampleRegistry::builtin().list().map(|(id, _)| id).collect();
        assert_eq!(ids, ["grid", "rectangle"]);
    }

    #[test]
    fn every_builtin_sample_is_described_and_accelerated() {
        let registry = SampleRegistry::builtin();
        for (id, _) in registry.list() {
            let sample = registry.get(id).expect("listed id resolves");
            assert!(!sample.description.is_empty(), "{id} has no description");
            assert!(sample.primary.is_some(), "{id} has no primary routine");
        }
    }

    #[test]
    fn builtin_fallbacks_are_stubs() {
        let registry = SampleRegistry::builtin();
        for sample in registry.iter() {
            let fallback = sample.fallback.expect("builtin samples carry a fallback");
            assert!(matches!(fallback(), Err(crate::SampleError::NotImplemented)));
        }
    }

    #[test]
    fn unknown_id_is_absent() {
        assert!(SampleRegistry::builtin().get("teapot").is_none());
    }

    #[test]
    fn re_registering_keeps_position() {
        let registry = SampleRegistry::new()
            .with(Sample::new("a", "first"))
            .with(Sample::new("b", "second"))
            .with(Sample::new("a", "replaced"));
        let listed: Vec<_> = registry.list().collect();
        assert_eq!(listed, [("a", "replaced"), ("b", "second")]);
    }
}
