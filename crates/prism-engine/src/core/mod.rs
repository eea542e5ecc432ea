//! Core engine-facing contracts.
//!
//! This module defines the interface between the runtime (platform loop) and
//! the gallery. It keeps winit internals out of application code.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::WindowCtx;
