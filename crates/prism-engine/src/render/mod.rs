//! GPU rendering subsystem.
//!
//! Samples describe a single draw as a [`PassDesc`] and hand it to a
//! [`Renderer`]; the renderer owns every wgpu call. The selector band is an
//! overlay drawn by [`BandRenderer`] just before a frame is presented.
//!
//! Convention:
//! - Sample vertices are already in clip space (or scaled into it by a uniform).
//! - Overlay geometry is in surface pixels, converted to NDC on the CPU.

mod band;
mod ctx;
mod error;
mod execute;
mod pass;

pub use band::{BandRenderer, BandSegment};
pub use ctx::RenderCtx;
pub use error::RenderError;
pub use pass::{PassDesc, Presenter, Renderer, Submission, Vertex2};
