use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::SearchError;
use crate::filter::types::FilterSet;
use crate::paging::paginator::{self, PageItem};
use crate::store::types::JobRecord;

/// Result ordering strategies. Every strategy is a total order (ties end at
/// the record id), so repeated queries paginate identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortBy {
    #[default]
    Relevance,
    DatePosted,
    SalaryHighLow,
    SalaryLowHigh,
    CompanyAZ,
}

impl FromStr for SortBy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(|c| c.to_lowercase())
            .collect();
        match key.as_str() {
            "relevance" => Ok(SortBy::Relevance),
            "dateposted" | "newest" => Ok(SortBy::DatePosted),
            "salaryhighlow" => Ok(SortBy::SalaryHighLow),
            "salarylowhigh" => Ok(SortBy::SalaryLowHigh),
            "companyaz" | "company" => Ok(SortBy::CompanyAZ),
            _ => Err(SearchError::InvalidQuery(format!(
                "unknown sort strategy: {}",
                s
            ))),
        }
    }
}

/// One search request: free text, structured filters, ordering, and the
/// page window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchQuery {
    pub free_text: Option<String>,
    pub filters: FilterSet,
    pub sort_by: SortBy,
    /// 1-based.
    pub page: usize,
    pub page_size: usize,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            free_text: None,
            filters: FilterSet::new(),
            sort_by: SortBy::Relevance,
            page: 1,
            page_size: 10,
        }
    }
}

/// One page of gated results plus the counts a caller needs to render
/// pagination and the "N more jobs hidden" banner. A fresh value per query,
/// never cached or mutated after return.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultPage {
    pub items: Vec<JobRecord>,
    /// Records matching filters and text, before access gating.
    pub total_matched: usize,
    /// Records this caller may see across all pages.
    pub total_visible: usize,
    /// `total_matched - total_visible`; zero for entitled callers.
    pub hidden_count: usize,
    pub page: usize,
    pub page_size: usize,
    pub page_count: usize,
}

impl ResultPage {
    /// The compact page-number strip for this page, ellipses included.
    pub fn page_numbers(&self) -> Vec<PageItem> {
        paginator::page_numbers(self.page, self.page_count)
    }
}
