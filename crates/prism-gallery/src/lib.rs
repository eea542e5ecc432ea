//! Sample gallery built on `prism-engine`.
//!
//! A [`SampleRegistry`] lists the samples, the [`Shell`] owns the layout, the
//! selector and the negotiated render instance, and [`Gallery`] wires the shell
//! to a native window.
//!
//! ```rust,ignore
//! Gallery::new()
//!     .title("prism samples")
//!     .default_sample("rectangle")
//!     .run()?;
//! ```

mod app;
mod layout;
mod registry;
mod sample;
pub mod samples;
mod selector;
mod shell;

#[cfg(test)]
mod testing;

pub use app::Gallery;
pub use layout::Layout;
pub use registry::SampleRegistry;
pub use sample::{not_implemented, FallbackFn, PrimaryFn, Sample, SampleError};
pub use selector::{SelectOption, Selector};
pub use shell::{Dispatch, Shell, ShellConfig, Startup};
