//! Pipeline construction tests; capture-dependent paths are exercised
//! against a real display, not here.

use pinpoint_config::Config;
use pinpoint_core::ClickError;

use crate::pipeline::Pipeline;

/// A missing tessdata directory fails fast at construction, before any
/// capture is attempted.
#[test]
fn missing_language_data_is_fatal_up_front() {
    let mut config = Config::default();
    config.ocr.tessdata_dir = std::env::temp_dir().join("pinpoint_absent_tessdata");

    let error = Pipeline::new(config).err().expect("construction must fail");
    assert!(matches!(error, ClickError::Configuration { .. }));
}

#[test]
fn construction_succeeds_with_language_data_present() {
    let mut config = Config::default();
    config.ocr.tessdata_dir = std::env::temp_dir();

    assert!(Pipeline::new(config).is_ok());
}
