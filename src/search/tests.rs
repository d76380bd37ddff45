//! Search Module Tests
//!
//! Validates the query pipeline end to end, plus its pieces in isolation.
//!
//! ## Test Scopes
//! - **Scorer**: term normalization and the title/tag weighting.
//! - **Sort**: every strategy is a deterministic total order.
//! - **Engine**: the reference scenarios for matching, gating, and paging.

#[cfg(test)]
mod tests {
    use crate::config::EngineConfig;
    use crate::error::SearchError;
    use crate::paging::gate::AccessContext;
    use crate::search::engine::search;
    use crate::search::scorer::{query_terms, score};
    use crate::search::sort::order;
    use crate::search::types::{SearchQuery, SortBy};
    use crate::store::types::{JobRecord, JobType, SalaryRange};
    use chrono::{DateTime, TimeZone, Utc};

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, d, 12, 0, 0).unwrap()
    }

    fn job(id: &str, title: &str) -> JobRecord {
        JobRecord {
            id: id.to_string(),
            title: title.to_string(),
            company: "Acme".to_string(),
            location: "Berlin, Germany".to_string(),
            job_type: JobType::FullTime,
            salary: SalaryRange::bounded(80_000, 120_000),
            description: "Build things".to_string(),
            posted_at: day(1),
            tags: vec![],
            is_bookmarked: false,
        }
    }

    /// Ten full-time jobs with zero-padded ids and staggered posting dates.
    fn ten_jobs() -> Vec<JobRecord> {
        (1..=10)
            .map(|i| {
                let mut record = job(&format!("job-{:02}", i), &format!("Engineer {}", i));
                record.posted_at = day(i);
                record
            })
            .collect()
    }

    fn config() -> EngineConfig {
        EngineConfig::default()
    }

    // ============================================================
    // SCORER TESTS - query_terms
    // ============================================================

    #[test]
    fn test_query_terms_lowercases_and_splits() {
        let terms = query_terms("Rust Engineer", 2);
        assert_eq!(terms, vec!["rust", "engineer"]);
    }

    #[test]
    fn test_query_terms_trims_punctuation() {
        let terms = query_terms("rust, (remote)", 2);
        assert_eq!(terms, vec!["rust", "remote"]);
    }

    #[test]
    fn test_query_terms_drops_short_words() {
        let terms = query_terms("a ML engineer", 2);
        assert_eq!(terms, vec!["ml", "engineer"]);
    }

    #[test]
    fn test_query_terms_empty_input() {
        assert!(query_terms("", 2).is_empty());
        assert!(query_terms("   ", 2).is_empty());
    }

    // ============================================================
    // SCORER TESTS - score
    // ============================================================

    #[test]
    fn test_score_title_hit_outranks_tag_hit() {
        let mut titled = job("a", "Rust Engineer");
        titled.tags = vec![];
        let mut tagged = job("b", "Backend Engineer");
        tagged.tags = vec!["Rust".to_string()];

        let title_score = score(&titled, Some("rust"), &config());
        let tag_score = score(&tagged, Some("rust"), &config());

        assert!(title_score > tag_score);
        assert_eq!(title_score, 2.0);
        assert_eq!(tag_score, 1.0);
    }

    #[test]
    fn test_score_accumulates_across_terms_and_tags() {
        let mut record = job("a", "Senior Rust Engineer");
        record.tags = vec!["Rust".to_string(), "Tokio".to_string()];

        // "rust": title (2.0) + one tag (1.0); "tokio": one tag (1.0).
        assert_eq!(score(&record, Some("rust tokio"), &config()), 4.0);
    }

    #[test]
    fn test_score_zero_when_nothing_matches() {
        let mut record = job("a", "Backend Engineer");
        record.tags = vec!["Python".to_string()];
        assert_eq!(score(&record, Some("React"), &config()), 0.0);
    }

    #[test]
    fn test_score_uniform_without_text() {
        let record = job("a", "Backend Engineer");
        assert_eq!(score(&record, None, &config()), 1.0);
        assert_eq!(score(&record, Some(""), &config()), 1.0);
        // Every term too short to survive normalization: same as no text.
        assert_eq!(score(&record, Some("a"), &config()), 1.0);
    }

    #[test]
    fn test_score_is_deterministic() {
        let mut record = job("a", "Rust Engineer");
        record.tags = vec!["Rust".to_string()];
        let first = score(&record, Some("rust"), &config());
        let second = score(&record, Some("rust"), &config());
        assert_eq!(first, second);
    }

    // ============================================================
    // SORT TESTS
    // ============================================================

    #[test]
    fn test_sort_relevance_descending_then_date_then_id() {
        let mut low = job("job-1", "Backend Engineer");
        low.posted_at = day(9);
        let mut high = job("job-2", "Rust Engineer");
        high.posted_at = day(1);
        let mut tied = job("job-0", "Backend Engineer");
        tied.posted_at = day(9);

        let mut matched = vec![(low, 1.0), (high, 2.0), (tied, 1.0)];
        order(&mut matched, SortBy::Relevance);

        let ids: Vec<&str> = matched.iter().map(|(r, _)| r.id.as_str()).collect();
        // Highest score first; equal scores by date, then id.
        assert_eq!(ids, vec!["job-2", "job-0", "job-1"]);
    }

    #[test]
    fn test_sort_date_posted_newest_first() {
        let mut a = job("job-1", "A");
        a.posted_at = day(2);
        let mut b = job("job-2", "B");
        b.posted_at = day(8);

        let mut matched = vec![(a, 1.0), (b, 1.0)];
        order(&mut matched, SortBy::DatePosted);

        assert_eq!(matched[0].0.id, "job-2");
        assert_eq!(matched[1].0.id, "job-1");
    }

    #[test]
    fn test_sort_salary_high_low_puts_open_ended_first() {
        let mut bounded = job("job-1", "A");
        bounded.salary = SalaryRange::bounded(100_000, 180_000);
        let mut open = job("job-2", "B");
        open.salary = SalaryRange::open_ended(90_000);

        let mut matched = vec![(bounded, 1.0), (open, 1.0)];
        order(&mut matched, SortBy::SalaryHighLow);

        assert_eq!(
            matched[0].0.id, "job-2",
            "An open-ended range outranks any bounded one"
        );
    }

    #[test]
    fn test_sort_salary_low_high_uses_lower_bound() {
        let mut cheap = job("job-1", "A");
        cheap.salary = SalaryRange::bounded(60_000, 200_000);
        let mut rich = job("job-2", "B");
        rich.salary = SalaryRange::bounded(90_000, 100_000);

        let mut matched = vec![(rich, 1.0), (cheap, 1.0)];
        order(&mut matched, SortBy::SalaryLowHigh);

        assert_eq!(matched[0].0.id, "job-1");
    }

    #[test]
    fn test_sort_company_az_is_case_insensitive() {
        let mut zeta = job("job-1", "A");
        zeta.company = "zeta".to_string();
        let mut alpha = job("job-2", "B");
        alpha.company = "Alpha".to_string();

        let mut matched = vec![(zeta, 1.0), (alpha, 1.0)];
        order(&mut matched, SortBy::CompanyAZ);

        assert_eq!(matched[0].0.company, "Alpha");
    }

    #[test]
    fn test_sort_is_stable_across_repeated_calls() {
        let records = ten_jobs();
        let mut first: Vec<(JobRecord, f64)> =
            records.iter().cloned().map(|r| (r, 1.0)).collect();
        let mut second = first.clone();

        order(&mut first, SortBy::Relevance);
        order(&mut second, SortBy::Relevance);

        let first_ids: Vec<&str> = first.iter().map(|(r, _)| r.id.as_str()).collect();
        let second_ids: Vec<&str> = second.iter().map(|(r, _)| r.id.as_str()).collect();
        assert_eq!(first_ids, second_ids);
    }

    #[test]
    fn test_sort_by_parses_names_and_rejects_unknown() {
        assert_eq!("relevance".parse::<SortBy>().unwrap(), SortBy::Relevance);
        assert_eq!("DatePosted".parse::<SortBy>().unwrap(), SortBy::DatePosted);
        assert_eq!(
            "salary-high-low".parse::<SortBy>().unwrap(),
            SortBy::SalaryHighLow
        );
        assert!(matches!(
            "best".parse::<SortBy>(),
            Err(SearchError::InvalidQuery(_))
        ));
    }

    // ============================================================
    // ENGINE TESTS - reference scenarios
    // ============================================================

    #[test]
    fn test_entitled_first_page_of_ten() {
        let records = ten_jobs();
        let query = SearchQuery {
            page_size: 5,
            ..SearchQuery::default()
        };

        let page = search(&records, &query, &AccessContext::entitled(), &config()).unwrap();

        assert_eq!(page.items.len(), 5);
        assert_eq!(page.total_matched, 10);
        assert_eq!(page.total_visible, 10);
        assert_eq!(page.hidden_count, 0);
        assert_eq!(page.page_count, 2);
    }

    #[test]
    fn test_preview_caller_sees_gated_set() {
        let records = ten_jobs();
        let query = SearchQuery {
            page_size: 5,
            ..SearchQuery::default()
        };

        let page = search(&records, &query, &AccessContext::preview(5), &config()).unwrap();

        assert_eq!(page.total_matched, 10);
        assert_eq!(page.total_visible, 5);
        assert_eq!(page.hidden_count, 5);
        assert_eq!(page.page_count, 1, "The gate shrinks the page count too");
    }

    #[test]
    fn test_preview_caller_cannot_page_past_the_gate() {
        let records = ten_jobs();
        let query = SearchQuery {
            page: 2,
            page_size: 5,
            ..SearchQuery::default()
        };

        let page = search(&records, &query, &AccessContext::preview(5), &config()).unwrap();

        assert!(
            page.items.is_empty(),
            "Page 2 of a five-item preview is past the end, not a fresh window"
        );
        assert_eq!(page.hidden_count, 5);
    }

    #[test]
    fn test_job_type_filter_narrows_matched_count() {
        let mut records = ten_jobs();
        for record in records.iter_mut().take(3) {
            record.job_type = JobType::Remote;
        }
        let mut query = SearchQuery::default();
        query.filters.job_types.insert("Remote".to_string());

        let page = search(&records, &query, &AccessContext::entitled(), &config()).unwrap();

        assert_eq!(page.total_matched, 3);
        assert!(page.items.iter().all(|r| r.job_type == JobType::Remote));
    }

    #[test]
    fn test_free_text_excludes_non_matches_and_ranks_title_first() {
        let mut tagged = job("job-1", "Frontend Engineer");
        tagged.tags = vec!["React".to_string(), "Node.js".to_string()];
        let mut other = job("job-2", "Data Engineer");
        other.tags = vec!["Python".to_string()];
        let titled = job("job-3", "React Developer");

        let records = vec![tagged, other, titled];
        let query = SearchQuery {
            free_text: Some("React".to_string()),
            ..SearchQuery::default()
        };

        let page = search(&records, &query, &AccessContext::entitled(), &config()).unwrap();

        assert_eq!(page.total_matched, 2);
        assert_eq!(page.items[0].id, "job-3", "Title hit ranks above tag hit");
        assert_eq!(page.items[1].id, "job-1");
    }

    #[test]
    fn test_page_past_the_end_is_empty_not_an_error() {
        let records = ten_jobs();
        let query = SearchQuery {
            page: 99,
            page_size: 5,
            ..SearchQuery::default()
        };

        let page = search(&records, &query, &AccessContext::entitled(), &config()).unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.page_count, 2);
    }

    #[test]
    fn test_zero_matches_is_a_valid_empty_page() {
        let records = ten_jobs();
        let query = SearchQuery {
            free_text: Some("blockchain".to_string()),
            ..SearchQuery::default()
        };

        let page = search(&records, &query, &AccessContext::entitled(), &config()).unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.total_matched, 0);
        assert_eq!(page.page_count, 1);
    }

    #[test]
    fn test_concatenated_pages_reproduce_the_gated_sequence() {
        let records = ten_jobs();
        let access = AccessContext::entitled();

        let mut seen: Vec<String> = Vec::new();
        let mut page_no = 1;
        loop {
            let query = SearchQuery {
                page: page_no,
                page_size: 3,
                sort_by: SortBy::DatePosted,
                ..SearchQuery::default()
            };
            let page = search(&records, &query, &access, &config()).unwrap();
            seen.extend(page.items.iter().map(|r| r.id.clone()));
            if page_no >= page.page_count {
                break;
            }
            page_no += 1;
        }

        let full_query = SearchQuery {
            page_size: 100,
            sort_by: SortBy::DatePosted,
            ..SearchQuery::default()
        };
        let full = search(&records, &full_query, &access, &config()).unwrap();
        let expected: Vec<String> = full.items.iter().map(|r| r.id.clone()).collect();

        assert_eq!(seen, expected, "No gaps, no duplicates, same order");
    }

    // ============================================================
    // ENGINE TESTS - validation
    // ============================================================

    #[test]
    fn test_page_zero_is_rejected() {
        let query = SearchQuery {
            page: 0,
            ..SearchQuery::default()
        };
        let err = search(&ten_jobs(), &query, &AccessContext::entitled(), &config()).unwrap_err();
        assert!(matches!(err, SearchError::InvalidQuery(_)));
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let query = SearchQuery {
            page_size: 0,
            ..SearchQuery::default()
        };
        let err = search(&ten_jobs(), &query, &AccessContext::entitled(), &config()).unwrap_err();
        assert!(matches!(err, SearchError::InvalidQuery(_)));
    }

    #[test]
    fn test_zero_preview_limit_is_rejected_for_preview_access() {
        let query = SearchQuery::default();
        let err = search(&ten_jobs(), &query, &AccessContext::preview(0), &config()).unwrap_err();
        assert!(matches!(err, SearchError::InvalidQuery(_)));
    }

    // ============================================================
    // SERIALIZATION TESTS
    // ============================================================

    #[test]
    fn test_result_page_serialization() {
        let records = ten_jobs();
        let query = SearchQuery {
            page_size: 5,
            ..SearchQuery::default()
        };
        let page = search(&records, &query, &AccessContext::preview(7), &config()).unwrap();

        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value["total_matched"], 10);
        assert_eq!(value["total_visible"], 7);
        assert_eq!(value["hidden_count"], 3);
        assert_eq!(value["page_count"], 2);
        assert_eq!(value["items"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_search_query_deserializes_with_defaults() {
        let query: SearchQuery = serde_json::from_str(r#"{ "free_text": "rust" }"#).unwrap();
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, 10);
        assert_eq!(query.sort_by, SortBy::Relevance);
        assert!(query.filters.is_empty());
    }
}
