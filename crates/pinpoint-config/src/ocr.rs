use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_tessdata_dir() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from(r"C:\Program Files\Tesseract-OCR\tessdata")
    } else {
        PathBuf::from("/usr/share/tesseract-ocr/5/tessdata")
    }
}

fn default_language() -> String {
    "eng".to_string()
}

fn default_dpi() -> i32 {
    300
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct OcrConfig {
    /// Trained-language-data directory; must exist before the first capture.
    #[serde(default = "default_tessdata_dir")]
    pub tessdata_dir: PathBuf,
    #[serde(default = "default_language")]
    pub language: String,
    /// DPI hint handed to the engine. Small UI text recognizes poorly
    /// without an accurate value.
    #[serde(default = "default_dpi")]
    pub dpi: i32,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            tessdata_dir: default_tessdata_dir(),
            language: default_language(),
            dpi: default_dpi(),
        }
    }
}
