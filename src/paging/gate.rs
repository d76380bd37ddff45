use serde::{Deserialize, Serialize};

/// Who is asking: a caller with full access sees every match, anyone else
/// sees a bounded preview. Derived from the surrounding application's
/// session state and passed in explicitly so the gating rule stays testable
/// on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessContext {
    pub is_entitled: bool,
    /// Size of the preview; only consulted when `is_entitled` is false.
    pub preview_limit: usize,
}

impl AccessContext {
    pub fn entitled() -> Self {
        Self {
            is_entitled: true,
            preview_limit: 0,
        }
    }

    pub fn preview(limit: usize) -> Self {
        Self {
            is_entitled: false,
            preview_limit: limit,
        }
    }
}

/// Truncates the ordered result set to what the caller may see and reports
/// how much was held back.
///
/// A pure prefix cut applied after sorting and before pagination: an
/// unentitled caller's effective result set shrinks to the preview, so
/// requesting page 2 of a gated set pages within the preview rather than
/// opening a fresh window. Content is never inspected or reordered.
pub fn apply_gate<T>(mut ordered: Vec<T>, access: &AccessContext) -> (Vec<T>, usize) {
    if access.is_entitled {
        return (ordered, 0);
    }
    let hidden = ordered.len().saturating_sub(access.preview_limit);
    ordered.truncate(access.preview_limit);
    (ordered, hidden)
}
