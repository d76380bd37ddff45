use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::SearchError;

/// The structured half of a search query: five value sets, one per filter
/// category. An empty set means "no constraint", never "match nothing".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSet {
    pub job_types: HashSet<String>,
    pub experience_levels: HashSet<String>,
    pub salary_ranges: HashSet<String>,
    pub companies: HashSet<String>,
    pub locations: HashSet<String>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no category constrains anything.
    pub fn is_empty(&self) -> bool {
        self.job_types.is_empty()
            && self.experience_levels.is_empty()
            && self.salary_ranges.is_empty()
            && self.companies.is_empty()
            && self.locations.is_empty()
    }

    /// Adds a value to a category addressed by name, for callers that carry
    /// category names as strings ("jobTypes", "salary_ranges", ...). An
    /// unknown category is rejected rather than silently ignored.
    pub fn insert(&mut self, category: &str, value: impl Into<String>) -> Result<(), SearchError> {
        let key: String = category
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(|c| c.to_lowercase())
            .collect();
        let target = match key.as_str() {
            "jobtypes" => &mut self.job_types,
            "experiencelevels" => &mut self.experience_levels,
            "salaryranges" => &mut self.salary_ranges,
            "companies" => &mut self.companies,
            "locations" => &mut self.locations,
            _ => {
                return Err(SearchError::InvalidQuery(format!(
                    "unknown filter category: {}",
                    category
                )));
            }
        };
        target.insert(value.into());
        Ok(())
    }
}
