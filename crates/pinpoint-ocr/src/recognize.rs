use std::path::Path;

use anyhow::{Context, Result};
use image::DynamicImage;
use pinpoint_core::{ClickError, Rect, TextFragment};
use rusty_tesseract::{Args, Image};

use crate::capture::RasterImage;

/// Fail fast if the trained-language-data directory is missing, instead of
/// letting the engine silently fall back to whatever it finds.
pub fn ensure_tessdata(dir: &Path) -> Result<(), ClickError> {
    if !dir.is_dir() {
        return Err(ClickError::Configuration {
            path: dir.to_path_buf(),
        });
    }
    // Tesseract discovers traineddata through this variable.
    unsafe { std::env::set_var("TESSDATA_PREFIX", dir) };
    Ok(())
}

/// Word-level OCR over a captured raster.
///
/// Boxes come back in physical pixels, in the engine's block/paragraph/line
/// document order. An empty screen yields an empty list, not an error.
pub fn recognize(image: &RasterImage, language: &str, dpi: i32) -> Result<Vec<TextFragment>> {
    let rgba = image::RgbaImage::from_raw(image.width, image.height, image.data.clone())
        .context("Capture buffer does not match its dimensions")?;
    // Tesseract mishandles alpha channels; flatten to RGB first.
    let rgb = DynamicImage::ImageRgba8(rgba).to_rgb8();

    let tess_image = Image::from_dynamic_image(&DynamicImage::ImageRgb8(rgb))
        .context("Failed to prepare image for tesseract")?;
    let args = Args {
        lang: language.to_string(),
        dpi: Some(dpi),
        ..Args::default()
    };

    let output =
        rusty_tesseract::image_to_data(&tess_image, &args).context("Tesseract OCR failed")?;

    // TSV level 5 rows are individual words; everything above is layout.
    let fragments = output
        .data
        .iter()
        .filter(|row| row.level == 5 && !row.text.trim().is_empty())
        .map(|row| TextFragment {
            text: row.text.trim().to_string(),
            bounds: Rect::new(
                row.left as f64,
                row.top as f64,
                (row.left + row.width) as f64,
                (row.top + row.height) as f64,
            ),
        })
        .collect();
    Ok(fragments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_tessdata_is_a_configuration_error() {
        let missing = std::env::temp_dir().join("pinpoint_no_such_tessdata");
        let result = ensure_tessdata(&missing);
        assert!(matches!(
            result,
            Err(ClickError::Configuration { path }) if path == missing
        ));
    }

    #[test]
    fn existing_tessdata_passes_validation() {
        let dir = std::env::temp_dir();
        assert!(ensure_tessdata(&dir).is_ok());
        assert_eq!(
            std::env::var("TESSDATA_PREFIX").ok().map(Into::into),
            Some(dir)
        );
    }
}
