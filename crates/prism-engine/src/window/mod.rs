//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the window, and forwards events to the app.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
