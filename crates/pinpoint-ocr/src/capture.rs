use std::path::Path;

use anyhow::{Context, Result};
use xcap::Monitor;

/// Full-resolution RGBA8 screenshot in physical pixels, owned by one
/// pipeline invocation.
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// Capture the primary monitor at full physical resolution.
pub fn capture_primary() -> Result<RasterImage> {
    let monitors = Monitor::all().context("Failed to get monitors")?;
    let monitor = monitors
        .iter()
        .find(|m| m.is_primary())
        .or(monitors.first())
        .context("No monitor found")?;

    let image = monitor.capture_image().context("Failed to capture screen")?;
    Ok(RasterImage {
        width: image.width(),
        height: image.height(),
        data: image.into_raw(),
    })
}

/// Write the capture to disk as a PNG for inspection.
///
/// The artifact is a hand-off for humans; recognition consumes the
/// in-memory raster and never reads this file back.
pub fn save_artifact(image: &RasterImage, path: &Path) -> Result<()> {
    image::save_buffer(
        path,
        &image.data,
        image.width,
        image.height,
        image::ExtendedColorType::Rgba8,
    )
    .with_context(|| format!("Failed to write {}", path.display()))
}
