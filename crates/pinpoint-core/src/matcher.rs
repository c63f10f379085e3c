use crate::fragment::NormalizedFragment;

/// First fragment, in reading order, whose text contains the query.
///
/// Containment is case-insensitive and has no word-boundary requirement, so
/// "sub" matches "Submit". `None` means no element matched; an expected
/// outcome, not a failure.
pub fn find_match<'a>(
    query: &str,
    fragments: &'a [NormalizedFragment],
) -> Option<&'a NormalizedFragment> {
    let needle = query.to_lowercase();
    fragments
        .iter()
        .find(|fragment| fragment.text.to_lowercase().contains(&needle))
}
