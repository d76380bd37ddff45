use super::buckets::parse_bucket;
use super::experience::infer_level;
use super::types::FilterSet;
use crate::config::EngineConfig;
use crate::store::types::{JobRecord, JobType};

/// Evaluates the compound filter against one record: every non-empty
/// category must be satisfied by at least one of its values. Pure function
/// of its inputs.
pub fn matches(record: &JobRecord, filters: &FilterSet, config: &EngineConfig) -> bool {
    job_type_matches(record, filters)
        && location_matches(record, filters)
        && company_matches(record, filters)
        && salary_matches(record, filters)
        && level_matches(record, filters, config)
}

fn job_type_matches(record: &JobRecord, filters: &FilterSet) -> bool {
    filters.job_types.is_empty()
        || filters
            .job_types
            .iter()
            .any(|value| record.job_type.matches_label(value))
}

fn location_matches(record: &JobRecord, filters: &FilterSet) -> bool {
    if filters.locations.is_empty() {
        return true;
    }
    let location = record.location.to_lowercase();
    filters.locations.iter().any(|value| {
        let value = value.trim().to_lowercase();
        // "remote" is a location in the filter UI even though it is really
        // a job type; honor both readings.
        if value == "remote" && record.job_type == JobType::Remote {
            return true;
        }
        location.contains(&value)
    })
}

fn company_matches(record: &JobRecord, filters: &FilterSet) -> bool {
    if filters.companies.is_empty() {
        return true;
    }
    let company = record.company.to_lowercase();
    filters
        .companies
        .iter()
        .any(|value| value.trim().to_lowercase() == company)
}

fn salary_matches(record: &JobRecord, filters: &FilterSet) -> bool {
    if filters.salary_ranges.is_empty() {
        return true;
    }
    filters.salary_ranges.iter().any(|label| {
        match parse_bucket(label) {
            Some(bucket) => bucket.overlaps(&record.salary),
            None => {
                // Bucket labels are fixed options upstream; one that does
                // not parse is a data problem, not a caller error.
                tracing::warn!("unparseable salary bucket label: {:?}", label);
                false
            }
        }
    })
}

fn level_matches(record: &JobRecord, filters: &FilterSet, config: &EngineConfig) -> bool {
    if filters.experience_levels.is_empty() {
        return true;
    }
    let level = infer_level(record, config);
    filters
        .experience_levels
        .iter()
        .any(|value| value.trim().eq_ignore_ascii_case(&level))
}
