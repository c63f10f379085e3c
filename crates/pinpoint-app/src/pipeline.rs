use pinpoint_config::Config;
use pinpoint_core::{ClickError, LocateOutcome, find_match, normalize_fragments};
use pinpoint_input::PointerDriver;
use pinpoint_ocr::{ScaleCache, capture_primary, ensure_tessdata, recognize, save_artifact};

/// One locate-and-click pipeline over an immutable configuration.
///
/// Holds the session-cached display scale; every other value is created
/// fresh per invocation and discarded with it.
pub struct Pipeline {
    config: Config,
    scale: ScaleCache,
    pointer: PointerDriver,
}

impl Pipeline {
    /// Validates the OCR language data up front; a missing tessdata
    /// directory is a configuration error, not a per-click failure.
    pub fn new(config: Config) -> Result<Self, ClickError> {
        ensure_tessdata(&config.ocr.tessdata_dir)?;
        let pointer = PointerDriver::new(config.pointer.move_duration(), config.pointer.move_steps);
        Ok(Self {
            config,
            scale: ScaleCache::new(),
            pointer,
        })
    }

    /// Capture, recognize, normalize, match, click.
    pub fn locate_and_click(&self, query: &str) -> Result<LocateOutcome, ClickError> {
        let scale = self.scale.get_or_resolve();

        let image = capture_primary().map_err(ClickError::Capture)?;
        tracing::debug!("captured {}x{} physical px", image.width, image.height);

        if let Some(path) = &self.config.capture.artifact_path {
            if let Err(e) = save_artifact(&image, path) {
                tracing::warn!("screenshot artifact not written: {e:#}");
            }
        }

        let fragments = recognize(&image, &self.config.ocr.language, self.config.ocr.dpi)
            .map_err(ClickError::Recognition)?;
        tracing::debug!("recognized {} words", fragments.len());

        let normalized = normalize_fragments(fragments, scale);
        let Some(fragment) = find_match(query, &normalized) else {
            return Ok(LocateOutcome::NotFound {
                query: query.to_string(),
            });
        };

        let target = fragment.click_target();
        self.pointer
            .click_at(&target)
            .map_err(ClickError::Dispatch)?;
        tracing::info!(
            "clicked '{}' at ({:.0}, {:.0})",
            fragment.text,
            target.x,
            target.y
        );

        Ok(LocateOutcome::Clicked {
            text: fragment.text.clone(),
            target,
        })
    }

    /// Re-resolve the display scale after a display reconfiguration.
    pub fn display_changed(&self) {
        let scale = self.scale.refresh();
        tracing::info!("display scale re-resolved: {scale:.2}");
    }
}
