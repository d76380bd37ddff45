//! Job Store Module
//!
//! Holds the job collection the search pipeline runs against.
//!
//! ## Core Concepts
//! - **Records**: `JobRecord` is the unit of storage, keyed by an opaque id
//!   that is unique within a store and never changes after creation.
//! - **Snapshots**: readers never query the live map. `JobStore::snapshot`
//!   clones the current records out, so a query in flight cannot observe a
//!   half-applied mutation.
//! - **Bookmarks**: `is_bookmarked` is the only mutable field, flipped under
//!   the store's per-key exclusive access so concurrent toggles on the same
//!   id serialize while toggles on different ids proceed independently.

pub mod memory;
pub mod types;
