//! Filter Module
//!
//! Structured, categorical narrowing of the job collection.
//!
//! ## Semantics
//! A `FilterSet` carries five named categories. Inside a category the values
//! combine with OR (any value may satisfy the record); across categories
//! they combine with AND (every non-empty category must be satisfied). An
//! empty category imposes no constraint at all.
//!
//! ## Submodules
//! - **`predicate`**: the compound record matcher.
//! - **`buckets`**: parsing of salary bucket labels ("80k-120k", "150k+").
//! - **`experience`**: keyword-table inference of an experience level from
//!   a record's title and tags.
//! - **`types`**: the `FilterSet` DTO.

pub mod buckets;
pub mod experience;
pub mod predicate;
pub mod types;
