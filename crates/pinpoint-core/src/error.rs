use std::path::PathBuf;

/// Failure taxonomy for a locate-and-click invocation.
///
/// A query with no matching fragment is not an error; see
/// [`crate::LocateOutcome::NotFound`].
#[derive(Debug, thiserror::Error)]
pub enum ClickError {
    #[error("OCR language data not found at {path}")]
    Configuration { path: PathBuf },

    #[error("Screen capture failed: {0}")]
    Capture(anyhow::Error),

    #[error("Text recognition failed: {0}")]
    Recognition(anyhow::Error),

    #[error("Pointer dispatch failed: {0}")]
    Dispatch(anyhow::Error),
}
