//! Search Module
//!
//! The query pipeline: free-text matching, ranking, and orchestration.
//!
//! ## Overview
//! A query enters as a `SearchQuery` plus an `AccessContext` and leaves as a
//! `ResultPage`. The pipeline is a pure function over a store snapshot:
//!
//! filter → score → sort → gate → paginate
//!
//! ## Submodules
//! - **`engine`**: validation and the pipeline itself.
//! - **`scorer`**: deterministic free-text relevance scoring over title and
//!   tags.
//! - **`sort`**: the named sort strategies, all total orders.
//! - **`types`**: query and result DTOs.

pub mod engine;
pub mod scorer;
pub mod sort;
pub mod types;

#[cfg(test)]
mod tests;
