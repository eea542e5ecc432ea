//! GPU capability negotiation + surface management.
//!
//! This module is responsible for:
//! - negotiating the wgpu Instance/Adapter/Device/Queue for a window
//! - creating & configuring the Surface (swapchain) once
//! - holding the frame currently being drawn until it is presented

mod error;
mod frame;
mod init;
mod instance;
mod surface;

pub use error::{NegotiationError, SurfaceErrorAction};
pub use init::GpuInit;
pub use instance::RenderInstance;
pub(crate) use instance::PresentParts;
