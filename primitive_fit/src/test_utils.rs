use std::sync::Once;

use crate::raster::{Raster, Sample};

/// Installs a test-writer tracing subscriber once per test binary.
/// Respects `RUST_LOG`, defaulting to `debug` for this crate.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("primitive_fit=debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Zeroed single-channel 8-bit raster.
pub fn gray(width: usize, height: usize) -> Raster<u8> {
    Raster::new_default(width, height, 1).unwrap()
}

/// Number of pixels with at least one non-zero channel.
pub fn covered_pixels<T: Sample>(raster: &Raster<T>) -> usize {
    raster
        .samples()
        .chunks_exact(raster.channels())
        .filter(|pixel| pixel.iter().any(|&s| s != T::default()))
        .count()
}
