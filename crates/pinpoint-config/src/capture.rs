use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_artifact_path() -> Option<PathBuf> {
    Some(std::env::temp_dir().join("pinpoint_capture.png"))
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct CaptureConfig {
    /// Where to drop the capture as a PNG for inspection. `None` disables
    /// the artifact; recognition always runs on the in-memory raster.
    #[serde(default = "default_artifact_path")]
    pub artifact_path: Option<PathBuf>,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            artifact_path: default_artifact_path(),
        }
    }
}
