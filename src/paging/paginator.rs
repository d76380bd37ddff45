use serde::{Serialize, Serializer};

use crate::error::SearchError;

/// One entry in the compact page-number strip: a page number, or the
/// ellipsis standing in for a run of hidden pages. Serializes as a bare
/// number or the string `"…"`, matching what the result UI consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Num(usize),
    Gap,
}

impl Serialize for PageItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageItem::Num(n) => serializer.serialize_u64(*n as u64),
            PageItem::Gap => serializer.serialize_str("…"),
        }
    }
}

/// Slices one page out of the ordered sequence and computes the page count.
///
/// The page count is at least 1 even for an empty sequence, so "no results"
/// still renders as a single empty page. A page past the end is not an
/// error: it yields an empty slice, the no-op boundary a stale link lands
/// on. A page below 1 (or a zero page size) is malformed and rejected.
pub fn paginate<T: Clone>(
    ordered: &[T],
    page: usize,
    page_size: usize,
) -> Result<(Vec<T>, usize), SearchError> {
    if page < 1 {
        return Err(SearchError::InvalidQuery("page must be >= 1".to_string()));
    }
    if page_size < 1 {
        return Err(SearchError::InvalidQuery(
            "page size must be >= 1".to_string(),
        ));
    }

    let total = ordered.len();
    let page_count = total.div_ceil(page_size).max(1);

    let start = (page - 1) * page_size;
    if start >= total {
        return Ok((Vec::new(), page_count));
    }
    let end = (start + page_size).min(total);
    Ok((ordered[start..end].to_vec(), page_count))
}

/// The compact page-number strip for a pager UI.
///
/// Up to five pages are listed in full; beyond that the strip pins the first
/// and last page and keeps a window around the current one:
///
/// - `total <= 5`           → `[1, 2, ..., total]`
/// - `current <= 3`         → `[1, 2, 3, 4, …, total]`
/// - `current >= total - 2` → `[1, …, total-3, total-2, total-1, total]`
/// - otherwise              → `[1, …, current-1, current, current+1, …, total]`
pub fn page_numbers(current: usize, total: usize) -> Vec<PageItem> {
    if total <= 5 {
        return (1..=total).map(PageItem::Num).collect();
    }

    if current <= 3 {
        vec![
            PageItem::Num(1),
            PageItem::Num(2),
            PageItem::Num(3),
            PageItem::Num(4),
            PageItem::Gap,
            PageItem::Num(total),
        ]
    } else if current >= total - 2 {
        vec![
            PageItem::Num(1),
            PageItem::Gap,
            PageItem::Num(total - 3),
            PageItem::Num(total - 2),
            PageItem::Num(total - 1),
            PageItem::Num(total),
        ]
    } else {
        vec![
            PageItem::Num(1),
            PageItem::Gap,
            PageItem::Num(current - 1),
            PageItem::Num(current),
            PageItem::Num(current + 1),
            PageItem::Gap,
            PageItem::Num(total),
        ]
    }
}
