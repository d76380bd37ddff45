//! Job Search & Pagination Engine
//!
//! This library crate implements the search core of a job-listing
//! application as one pure, side-effect-free pipeline: a query goes in, a
//! page of results comes out. The surrounding application owns ingestion,
//! sessions, and whatever surface (HTTP, UI) wraps the engine.
//!
//! ## Architecture Modules
//! The crate is composed of four loosely coupled subsystems plus their
//! shared configuration and error types:
//!
//! - **`store`**: the concurrent in-memory job collection. Hands out
//!   point-in-time snapshots to readers and owns the only mutation in the
//!   system, the bookmark toggle.
//! - **`filter`**: structured categorical filtering. OR within a category,
//!   AND across categories, with salary-bucket parsing and experience-level
//!   inference.
//! - **`search`**: free-text relevance scoring, the named sort strategies,
//!   and the orchestrating pipeline (filter → score → sort → gate →
//!   paginate).
//! - **`paging`**: entitlement gating (preview truncation for unentitled
//!   callers) and page slicing, including the compact page-number strip the
//!   result UI renders.

pub mod config;
pub mod error;
pub mod filter;
pub mod paging;
pub mod search;
pub mod store;

pub use config::{EngineConfig, LevelRule};
pub use error::SearchError;
pub use filter::types::FilterSet;
pub use paging::gate::AccessContext;
pub use paging::paginator::PageItem;
pub use search::engine::search;
pub use search::types::{ResultPage, SearchQuery, SortBy};
pub use store::memory::JobStore;
pub use store::types::{JobDraft, JobRecord, JobType, SalaryRange};
