use crate::config::EngineConfig;
use crate::store::types::JobRecord;

/// Classifies a record into an experience level by scanning its title and
/// tags against the configured keyword table.
///
/// The scan is a plain substring check over the lowercased title followed by
/// the lowercased tags; the first rule that hits wins, so the table order is
/// part of the classification. Records matching no rule fall back to
/// `EngineConfig::fallback_level`. Best-effort, but deterministic for
/// identical input.
pub fn infer_level(record: &JobRecord, config: &EngineConfig) -> String {
    let mut haystack = record.title.to_lowercase();
    for tag in &record.tags {
        haystack.push(' ');
        haystack.push_str(&tag.to_lowercase());
    }

    for rule in &config.level_rules {
        if haystack.contains(&rule.keyword.to_lowercase()) {
            return rule.level.clone();
        }
    }
    config.fallback_level.clone()
}
