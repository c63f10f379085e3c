mod pointer;

pub use pointer::{PointerDriver, movement_path};
