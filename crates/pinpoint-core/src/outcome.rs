use crate::fragment::ClickTarget;

/// Terminal outcome of an invocation that ran to completion.
#[derive(Debug, Clone, PartialEq)]
pub enum LocateOutcome {
    /// A fragment matched and a click was dispatched at its centroid.
    Clicked { text: String, target: ClickTarget },
    /// No fragment contained the query. Expected and reportable; callers
    /// keep going.
    NotFound { query: String },
}
