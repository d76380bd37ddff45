//! Paging Module
//!
//! The tail of the pipeline: what a caller is allowed to see, cut into
//! pages.
//!
//! ## Responsibilities
//! - **Gating**: unentitled callers get a bounded preview of the ordered
//!   result set, a pure prefix truncation applied before pagination.
//! - **Slicing**: fixed-size page windows with a total page count.
//! - **Page strips**: the compact page-number list with ellipses that the
//!   result UI renders, reproduced shape-for-shape.

pub mod gate;
pub mod paginator;
