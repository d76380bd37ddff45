//! Engine Configuration
//!
//! Tuning knobs for scoring and classification. The engine takes the config
//! as an explicit parameter so deployments can load it from whatever source
//! the surrounding application uses; `Default` gives the stock behavior.

use serde::{Deserialize, Serialize};

/// One experience-level classification rule: a record whose title or tags
/// contain `keyword` is classified as `level`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelRule {
    pub keyword: String,
    pub level: String,
}

impl LevelRule {
    fn new(keyword: &str, level: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
            level: level.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Score contributed by a query term occurring in the job title.
    pub title_weight: f64,

    /// Score contributed per tag containing a query term.
    /// Keep `title_weight >= tag_weight` so a title hit never ranks below a
    /// single tag hit.
    pub tag_weight: f64,

    /// Query terms shorter than this are dropped before matching.
    pub min_token_len: usize,

    /// Experience-level rules, checked in order; the first keyword found in
    /// the record wins.
    pub level_rules: Vec<LevelRule>,

    /// Level assigned when no rule matches.
    pub fallback_level: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            title_weight: 2.0,
            tag_weight: 1.0,
            min_token_len: 2,
            level_rules: vec![
                LevelRule::new("intern", "internship"),
                LevelRule::new("graduate", "entry"),
                LevelRule::new("junior", "entry"),
                LevelRule::new("entry", "entry"),
                LevelRule::new("principal", "lead"),
                LevelRule::new("staff", "lead"),
                LevelRule::new("head of", "lead"),
                LevelRule::new("lead", "lead"),
                LevelRule::new("senior", "senior"),
                LevelRule::new("sr.", "senior"),
            ],
            fallback_level: "mid".to_string(),
        }
    }
}
