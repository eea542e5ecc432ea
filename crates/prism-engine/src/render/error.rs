use thiserror::Error;

use crate::device::SurfaceErrorAction;

/// Errors raised while executing a sample pass.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The next surface texture could not be acquired. `action` says what the
    /// surface layer already did about it.
    #[error("failed to acquire the next surface texture: {error}")]
    Surface {
        #[source]
        error: wgpu::SurfaceError,
        action: SurfaceErrorAction,
    },

    #[error("invalid pass `{label}`: {reason}")]
    InvalidPass { label: String, reason: &'static str },
}

impl RenderError {
    /// True when the session cannot keep rendering.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            RenderError::Surface { action: SurfaceErrorAction::Fatal, .. }
        )
    }
}
