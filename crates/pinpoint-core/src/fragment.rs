use crate::geometry::Rect;

/// One OCR-recognized word with its bounding box in physical pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFragment {
    pub text: String,
    pub bounds: Rect,
}

/// A fragment converted to logical (DPI-scaled) pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedFragment {
    pub text: String,
    pub bounds: Rect,
}

impl NormalizedFragment {
    /// Logical-pixel point the pointer should be driven to.
    pub fn click_target(&self) -> ClickTarget {
        let (x, y) = self.bounds.center();
        ClickTarget { x, y }
    }
}

/// Logical-pixel coordinates for a pointer action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickTarget {
    pub x: f64,
    pub y: f64,
}

/// Convert physical-pixel fragments to logical pixels and order them
/// top-to-bottom, then left-to-right.
///
/// Nothing is dropped or merged; duplicate text survives as separate
/// entries and disambiguation is left to the matcher.
pub fn normalize_fragments(fragments: Vec<TextFragment>, scale: f64) -> Vec<NormalizedFragment> {
    debug_assert!(scale.is_finite() && scale > 0.0);

    let mut normalized: Vec<NormalizedFragment> = fragments
        .into_iter()
        .map(|fragment| NormalizedFragment {
            text: fragment.text,
            bounds: fragment.bounds.divided_by(scale),
        })
        .collect();

    // Stable sort keeps the order reproducible across repeated passes.
    normalized.sort_by(|a, b| {
        a.bounds
            .y0
            .total_cmp(&b.bounds.y0)
            .then(a.bounds.x0.total_cmp(&b.bounds.x0))
    });
    normalized
}
