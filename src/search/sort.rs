use super::types::SortBy;
use crate::store::types::JobRecord;

/// Orders the matched set in place under the chosen strategy.
///
/// Every strategy ends its tie-break chain at the record id, which makes the
/// order total: no two distinct records ever compare equal, so sorting the
/// same input twice yields the same sequence and pagination stays stable
/// across repeated calls.
pub fn order(matched: &mut [(JobRecord, f64)], sort_by: SortBy) {
    match sort_by {
        SortBy::Relevance => matched.sort_by(|a, b| {
            b.1.total_cmp(&a.1)
                .then_with(|| b.0.posted_at.cmp(&a.0.posted_at))
                .then_with(|| a.0.id.cmp(&b.0.id))
        }),
        SortBy::DatePosted => matched.sort_by(|a, b| {
            b.0.posted_at
                .cmp(&a.0.posted_at)
                .then_with(|| a.0.id.cmp(&b.0.id))
        }),
        SortBy::SalaryHighLow => matched.sort_by(|a, b| {
            // An open-ended range advertises "at least min": rank it above
            // every bounded one.
            let top = |r: &JobRecord| r.salary.max.unwrap_or(u32::MAX);
            top(&b.0)
                .cmp(&top(&a.0))
                .then_with(|| a.0.id.cmp(&b.0.id))
        }),
        SortBy::SalaryLowHigh => matched.sort_by(|a, b| {
            a.0.salary
                .min
                .cmp(&b.0.salary.min)
                .then_with(|| a.0.id.cmp(&b.0.id))
        }),
        SortBy::CompanyAZ => matched.sort_by(|a, b| {
            a.0.company
                .to_lowercase()
                .cmp(&b.0.company.to_lowercase())
                .then_with(|| a.0.id.cmp(&b.0.id))
        }),
    }
}
