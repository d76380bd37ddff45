use regex::Regex;

use crate::store::types::SalaryRange;

/// A parsed salary bucket. `max` of `None` is an open-ended bucket such as
/// `"150k+"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryBucket {
    pub min: u32,
    pub max: Option<u32>,
}

impl SalaryBucket {
    /// Interval overlap against a record's salary range. Open ends on either
    /// side count as unbounded: an open-ended bucket matches any record whose
    /// top end is unbounded or at least the bucket threshold.
    pub fn overlaps(&self, salary: &SalaryRange) -> bool {
        let below_bucket_top = match self.max {
            Some(bucket_max) => salary.min <= bucket_max,
            None => true,
        };
        let above_bucket_floor = match salary.max {
            Some(salary_max) => salary_max >= self.min,
            None => true,
        };
        below_bucket_top && above_bucket_floor
    }
}

/// Parses a bucket label as the filter UI emits them: `"80k-120k"`,
/// `"$80k - $120k"`, `"150k+"`, or the same shapes with full figures
/// (`"80000-120000"`). Returns `None` for anything else.
pub fn parse_bucket(label: &str) -> Option<SalaryBucket> {
    let label = label.trim().to_lowercase();

    let range = Regex::new(r"^\$?(\d+)(k?)\s*-\s*\$?(\d+)(k?)$").unwrap();
    if let Some(caps) = range.captures(&label) {
        let min = scale(caps[1].parse().ok()?, &caps[2]);
        let max = scale(caps[3].parse().ok()?, &caps[4]);
        if min > max {
            return None;
        }
        return Some(SalaryBucket {
            min,
            max: Some(max),
        });
    }

    let open = Regex::new(r"^\$?(\d+)(k?)\s*\+$").unwrap();
    if let Some(caps) = open.captures(&label) {
        let min = scale(caps[1].parse().ok()?, &caps[2]);
        return Some(SalaryBucket { min, max: None });
    }

    None
}

fn scale(value: u32, suffix: &str) -> u32 {
    if suffix == "k" {
        value.saturating_mul(1000)
    } else {
        value
    }
}
