//! # Storage Layer
//!
//! The [`TableStore`] trait abstracts persistence of the restaurant table so
//! the catalog and controllers never touch the filesystem directly.
//!
//! ## Implementations
//!
//! - [`fs::CsvStore`]: production storage, one CSV file with a header row in
//!   the canonical column order. Handles seeding, schema repair, and vote
//!   coercion on load.
//! - [`memory::InMemoryStore`]: in-memory storage for tests. No persistence,
//!   fast and isolated.
//!
//! ## Consistency model
//!
//! The whole table is loaded and saved as a unit. There is no partial update,
//! no locking, and no atomic-rename step: concurrent writers race and the
//! last save wins. That is an accepted limitation for the single-admin,
//! low-concurrency target usage; the trait boundary is where file locking or
//! an embedded table engine would slot in later without changing callers.

use crate::error::Result;
use crate::model::Restaurant;

pub mod fs;
pub mod memory;

/// Abstract interface for restaurant table storage.
pub trait TableStore {
    /// Load the full table, creating or repairing the backing data as needed.
    fn load(&mut self) -> Result<Vec<Restaurant>>;

    /// Persist the full table, replacing any previous contents.
    fn save(&mut self, rows: &[Restaurant]) -> Result<()>;
}
