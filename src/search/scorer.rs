use crate::config::EngineConfig;
use crate::store::types::JobRecord;

/// Splits a free-text query into normalized terms: lowercase, whitespace
/// split, punctuation trimmed from the edges, short terms dropped.
pub fn query_terms(text: &str, min_len: usize) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|word| {
            word.trim_matches(|c: char| !c.is_alphanumeric())
                .to_string()
        })
        .filter(|word| word.len() >= min_len)
        .collect()
}

/// Relevance score of a record against a free-text query.
///
/// Each term contributes `title_weight` when it occurs in the title and
/// `tag_weight` per tag containing it; contributions add up across terms. A
/// score of zero means "no match". An absent or empty query (including one
/// whose every term was dropped as too short) scores every record uniformly
/// at 1.0 so that nothing is excluded and the sort strategy decides order.
///
/// Deterministic: the same record and query always produce the same score.
pub fn score(record: &JobRecord, free_text: Option<&str>, config: &EngineConfig) -> f64 {
    let terms = match free_text {
        Some(text) => query_terms(text, config.min_token_len),
        None => Vec::new(),
    };
    if terms.is_empty() {
        return 1.0;
    }

    let title = record.title.to_lowercase();
    let tags: Vec<String> = record.tags.iter().map(|t| t.to_lowercase()).collect();

    let mut total = 0.0;
    for term in &terms {
        if title.contains(term.as_str()) {
            total += config.title_weight;
        }
        let tag_hits = tags.iter().filter(|tag| tag.contains(term.as_str())).count();
        total += config.tag_weight * tag_hits as f64;
    }
    total
}
