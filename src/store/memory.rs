use dashmap::DashMap;
use uuid::Uuid;

use super::types::{JobDraft, JobRecord, SalaryRange};
use crate::config::EngineConfig;
use crate::error::SearchError;
use crate::paging::gate::AccessContext;
use crate::search::engine;
use crate::search::types::{ResultPage, SearchQuery};

/// Concurrent in-memory job collection.
///
/// `DashMap` keys the records by id, which makes id uniqueness structural
/// and gives each record shard-level exclusive access for the bookmark
/// toggle. Any number of queries may run against snapshots in parallel.
pub struct JobStore {
    jobs: DashMap<String, JobRecord>,
}

impl JobStore {
    pub fn new() -> Self {
        Self {
            jobs: DashMap::new(),
        }
    }

    /// Seeds a store from pre-built records (fixtures, an upstream feed, a
    /// database dump). Records sharing an id collapse to the last one seen.
    pub fn with_records(records: impl IntoIterator<Item = JobRecord>) -> Self {
        let store = Self::new();
        for record in records {
            store.insert(record);
        }
        store
    }

    /// Ingests a draft, minting a fresh uuid for it and normalizing the
    /// salary pair. Returns the stored record.
    pub fn add(&self, draft: JobDraft) -> JobRecord {
        let record = JobRecord {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            company: draft.company,
            location: draft.location,
            job_type: draft.job_type,
            salary: SalaryRange::new(draft.salary.min, draft.salary.max),
            description: draft.description,
            posted_at: draft.posted_at,
            tags: draft.tags,
            is_bookmarked: false,
        };
        tracing::debug!("ingested job {} ({})", record.id, record.title);
        self.jobs.insert(record.id.clone(), record.clone());
        record
    }

    /// Stores a record under its existing id. An id collision replaces the
    /// previous record, last write wins.
    pub fn insert(&self, record: JobRecord) {
        self.jobs.insert(record.id.clone(), record);
    }

    pub fn get(&self, id: &str) -> Option<JobRecord> {
        self.jobs.get(id).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Clones the current records out of the map. Queries run against the
    /// returned snapshot, so toggles or ingestion landing mid-query cannot
    /// produce a partially-updated result.
    pub fn snapshot(&self) -> Vec<JobRecord> {
        self.jobs
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    /// Flips the bookmark flag on one record and returns the updated copy.
    ///
    /// The flip happens under the map's exclusive entry access: two toggles
    /// racing on the same id serialize into a no-op pair, they cannot lose
    /// an update.
    pub fn toggle_bookmark(&self, id: &str) -> Result<JobRecord, SearchError> {
        match self.jobs.get_mut(id) {
            Some(mut entry) => {
                entry.is_bookmarked = !entry.is_bookmarked;
                tracing::debug!("bookmark for {} now {}", id, entry.is_bookmarked);
                Ok(entry.clone())
            }
            None => Err(SearchError::NotFound(id.to_string())),
        }
    }

    /// The saved-jobs view: every bookmarked record, newest first.
    pub fn bookmarked(&self) -> Vec<JobRecord> {
        let mut saved: Vec<JobRecord> = self
            .jobs
            .iter()
            .filter(|entry| entry.value().is_bookmarked)
            .map(|entry| entry.value().clone())
            .collect();
        saved.sort_by(|a, b| {
            b.posted_at
                .cmp(&a.posted_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        saved
    }

    /// Convenience wrapper: snapshot the store and run the search pipeline
    /// against it.
    pub fn search(
        &self,
        query: &SearchQuery,
        access: &AccessContext,
        config: &EngineConfig,
    ) -> Result<ResultPage, SearchError> {
        engine::search(&self.snapshot(), query, access, config)
    }
}

impl Default for JobStore {
    fn default() -> Self {
        Self::new()
    }
}
