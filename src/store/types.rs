use chrono::{DateTime, Duration, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;

/// Employment type of a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Remote,
    Internship,
}

impl JobType {
    /// Case- and punctuation-insensitive comparison against a label such as
    /// `"Full Time"`, `"full-time"` or `"fulltime"`.
    pub fn matches_label(&self, label: &str) -> bool {
        normalize(label) == normalize(&self.to_string())
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            JobType::FullTime => "Full Time",
            JobType::PartTime => "Part Time",
            JobType::Contract => "Contract",
            JobType::Remote => "Remote",
            JobType::Internship => "Internship",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for JobType {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "fulltime" => Ok(JobType::FullTime),
            "parttime" => Ok(JobType::PartTime),
            "contract" => Ok(JobType::Contract),
            "remote" => Ok(JobType::Remote),
            "internship" | "intern" => Ok(JobType::Internship),
            _ => Err(SearchError::InvalidQuery(format!(
                "unknown job type: {}",
                s
            ))),
        }
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(|c| c.to_lowercase())
        .collect()
}

/// Annual salary range in whole currency units. `max` of `None` means the
/// range is open-ended at the top ("150k+").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: u32,
    pub max: Option<u32>,
}

impl SalaryRange {
    /// Builds a range, swapping an inverted pair so `min <= max` always
    /// holds when both ends are present.
    pub fn new(min: u32, max: Option<u32>) -> Self {
        match max {
            Some(max) if max < min => Self {
                min: max,
                max: Some(min),
            },
            _ => Self { min, max },
        }
    }

    pub fn bounded(min: u32, max: u32) -> Self {
        Self::new(min, Some(max))
    }

    pub fn open_ended(min: u32) -> Self {
        Self { min, max: None }
    }
}

/// A stored job posting.
///
/// Everything except `is_bookmarked` is immutable once the record enters a
/// store; queries clone records out and never write back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: JobType,
    pub salary: SalaryRange,
    pub description: String,
    pub posted_at: DateTime<Utc>,
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_bookmarked: bool,
}

/// Ingestion payload for `JobStore::add`: a record minus the fields the
/// store owns (id, bookmark flag).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDraft {
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: JobType,
    pub salary: SalaryRange,
    pub description: String,
    pub posted_at: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Resolves a relative-age display label ("3 days ago", "2 weeks ago",
/// "today") against `now`, for feeds that do not carry a real timestamp.
/// Returns `None` for labels it does not recognize.
pub fn posted_at_from_label(label: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let label = label.trim().to_lowercase();

    match label.as_str() {
        "today" | "just now" | "now" => return Some(now),
        "yesterday" => return Some(now - Duration::days(1)),
        _ => {}
    }

    let re = Regex::new(r"^(\d+)\s*(hour|day|week|month)s?\s+ago$").unwrap();
    let caps = re.captures(&label)?;
    let count: i64 = caps[1].parse().ok()?;
    let age = match &caps[2] {
        "hour" => Duration::hours(count),
        "day" => Duration::days(count),
        "week" => Duration::weeks(count),
        // Close enough for recency sorting; feeds with month-granularity
        // labels do not carry anything more precise.
        "month" => Duration::days(30 * count),
        _ => return None,
    };
    Some(now - age)
}
