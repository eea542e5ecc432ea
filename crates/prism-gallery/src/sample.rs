use thiserror::Error;

use prism_engine::render::{RenderError, Renderer};

/// Routine drawing a sample with the accelerated backend.
pub type PrimaryFn = fn(&mut dyn Renderer) -> Result<(), SampleError>;

/// Routine drawing a sample without acceleration.
pub type FallbackFn = fn() -> Result<(), SampleError>;

/// Errors a sample routine can report.
#[derive(Debug, Error)]
pub enum SampleError {
    /// The routine exists only as a placeholder.
    #[error("not implemented")]
    NotImplemented,

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl SampleError {
    /// True when the session cannot keep rendering.
    pub fn is_fatal(&self) -> bool {
        matches!(self, SampleError::Render(e) if e.is_fatal())
    }
}

/// An entry of the gallery.
///
/// Either routine may be absent; the shell picks one per dispatch based on
/// whether accelerated rendering was negotiated. Routines keep no state
/// between invocations.
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub id: &'static str,
    pub description: &'static str,
    pub primary: Option<PrimaryFn>,
    pub fallback: Option<FallbackFn>,
}

impl Sample {
    pub const fn new(id: &'static str, description: &'static str) -> Self {
        Self {
            id,
            description,
            primary: None,
            fallback: None,
        }
    }

    pub fn with_primary(mut self, routine: PrimaryFn) -> Self {
        self.primary = Some(routine);
        self
    }

    pub fn with_fallback(mut self, routine: FallbackFn) -> Self {
        self.fallback = Some(routine);
        self
    }
}

/// Fallback placeholder: always rejects.
pub fn not_implemented() -> Result<(), SampleError> {
    Err(SampleError::NotImplemented)
}
