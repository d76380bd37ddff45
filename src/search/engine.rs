use super::scorer;
use super::sort;
use super::types::{ResultPage, SearchQuery};
use crate::config::EngineConfig;
use crate::error::SearchError;
use crate::filter::predicate;
use crate::paging::gate::{self, AccessContext};
use crate::paging::paginator;
use crate::store::types::JobRecord;

/// Runs one query against a snapshot of the job collection.
///
/// Pipeline: validate → filter + score → sort → gate → paginate. The
/// snapshot is read-only; the returned page is a fresh value. Zero matches
/// are a normal outcome, not an error.
pub fn search(
    records: &[JobRecord],
    query: &SearchQuery,
    access: &AccessContext,
    config: &EngineConfig,
) -> Result<ResultPage, SearchError> {
    validate(query, access)?;

    let mut matched: Vec<(JobRecord, f64)> = records
        .iter()
        .filter(|record| predicate::matches(record, &query.filters, config))
        .map(|record| {
            let score = scorer::score(record, query.free_text.as_deref(), config);
            (record.clone(), score)
        })
        .filter(|(_, score)| *score > 0.0)
        .collect();
    let total_matched = matched.len();

    sort::order(&mut matched, query.sort_by);
    let ordered: Vec<JobRecord> = matched.into_iter().map(|(record, _)| record).collect();

    let (visible, hidden_count) = gate::apply_gate(ordered, access);
    let total_visible = visible.len();

    let (items, page_count) = paginator::paginate(&visible, query.page, query.page_size)?;

    tracing::debug!(
        "search matched {} jobs ({} visible, {} hidden), page {}/{}",
        total_matched,
        total_visible,
        hidden_count,
        query.page,
        page_count
    );

    Ok(ResultPage {
        items,
        total_matched,
        total_visible,
        hidden_count,
        page: query.page,
        page_size: query.page_size,
        page_count,
    })
}

/// Rejects malformed requests before any record is touched. Unknown sort
/// strategies and filter categories cannot reach this point: they are
/// rejected at parse time by `SortBy::from_str` and `FilterSet::insert`.
fn validate(query: &SearchQuery, access: &AccessContext) -> Result<(), SearchError> {
    if query.page < 1 {
        return Err(SearchError::InvalidQuery("page must be >= 1".to_string()));
    }
    if query.page_size < 1 {
        return Err(SearchError::InvalidQuery(
            "page size must be >= 1".to_string(),
        ));
    }
    if !access.is_entitled && access.preview_limit < 1 {
        return Err(SearchError::InvalidQuery(
            "preview limit must be >= 1 for preview access".to_string(),
        ));
    }
    Ok(())
}
