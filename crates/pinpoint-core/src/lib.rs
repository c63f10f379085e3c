pub mod error;
pub mod fragment;
pub mod geometry;
pub mod matcher;
pub mod outcome;

pub use error::ClickError;
pub use fragment::{ClickTarget, NormalizedFragment, TextFragment, normalize_fragments};
pub use geometry::Rect;
pub use matcher::find_match;
pub use outcome::LocateOutcome;
