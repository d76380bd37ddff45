use thiserror::Error;

/// Errors returned by the search pipeline and the job store.
///
/// An empty result set is not an error: a query that matches nothing yields
/// a valid page with no items. Errors are reserved for requests that cannot
/// be evaluated at all.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The query was rejected before any record was examined: a zero page
    /// number or page size, an unusable preview limit, an unknown sort
    /// strategy, or an unknown filter category.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// A store operation referenced a job id that is not present.
    #[error("no job with id {0}")]
    NotFound(String),
}
