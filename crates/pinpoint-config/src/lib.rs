use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use self::capture::CaptureConfig;
use self::ocr::OcrConfig;
use self::pointer::PointerConfig;

pub mod capture;
pub mod ocr;
pub mod pointer;

/// Immutable pipeline configuration, fixed at construction.
#[derive(Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub ocr: OcrConfig,
    pub capture: CaptureConfig,
    pub pointer: PointerConfig,
}

impl Config {
    /// Defaults with `PINPOINT_*` environment overrides applied.
    pub fn new() -> Self {
        let mut config = Config::default();

        if let Ok(dir) = env::var("PINPOINT_TESSDATA_DIR") {
            config.ocr.tessdata_dir = PathBuf::from(dir);
        }
        if let Ok(language) = env::var("PINPOINT_OCR_LANGUAGE") {
            config.ocr.language = language;
        }
        if let Some(dpi) = env::var("PINPOINT_OCR_DPI")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.ocr.dpi = dpi;
        }
        if let Ok(path) = env::var("PINPOINT_ARTIFACT_PATH") {
            config.capture.artifact_path = Some(PathBuf::from(path));
        }
        if let Some(ms) = env::var("PINPOINT_MOVE_DURATION_MS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.pointer.move_duration_ms = ms;
        }

        config
    }
}
