use std::env;

use anyhow::Result;

use prism_engine::device::GpuInit;
use prism_engine::logging::{init_logging, LoggingConfig};
use prism_gallery::Gallery;

/// Sample shown first (`grid` when unset).
const SAMPLE_VAR: &str = "PRISM_SAMPLE";

/// Any value other than empty/`0` disables accelerated rendering.
const NO_GPU_VAR: &str = "PRISM_NO_GPU";

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut gallery = Gallery::new().title("prism samples").size(800.0, 600.0);

    if let Ok(id) = env::var(SAMPLE_VAR) {
        log::info!("{SAMPLE_VAR}={id}");
        gallery = gallery.default_sample(id);
    }

    if env::var(NO_GPU_VAR).is_ok_and(|v| !v.is_empty() && v != "0") {
        log::info!("{NO_GPU_VAR} set; accelerated rendering disabled");
        gallery = gallery.gpu(GpuInit::default().without_acceleration());
    }

    gallery.run()
}
