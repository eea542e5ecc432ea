//! Prism engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the gallery:
//! capability negotiation, sample pass execution and the window loop.

pub mod device;
pub mod window;
pub mod input;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
