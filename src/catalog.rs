//! In-memory catalog of restaurants, backed by a [`TableStore`].
//!
//! Each user interaction opens (or reloads) a catalog, mutates it, and lets
//! the catalog persist the whole table. Mutations key on the generated row
//! id, so rows that happen to share a name never change together.

use crate::error::{LunchError, Result};
use crate::model::Restaurant;
use crate::store::TableStore;
use rand::seq::SliceRandom;
use uuid::Uuid;

pub struct Catalog<S: TableStore> {
    store: S,
    rows: Vec<Restaurant>,
}

impl<S: TableStore> Catalog<S> {
    /// Load the table from the store and keep it in memory.
    pub fn open(mut store: S) -> Result<Self> {
        let rows = store.load()?;
        Ok(Self { store, rows })
    }

    /// All rows in store order.
    pub fn list(&self) -> &[Restaurant] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn find(&self, id: Uuid) -> Option<&Restaurant> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// Uniform-random row, or [`LunchError::EmptyTable`] when there is none.
    pub fn random_pick(&self) -> Result<&Restaurant> {
        self.rows
            .choose(&mut rand::thread_rng())
            .ok_or(LunchError::EmptyTable)
    }

    /// The first `min(n, len)` rows sorted by votes descending. The sort is
    /// stable, so ties keep their store order.
    pub fn top_by_votes(&self, n: usize) -> Vec<Restaurant> {
        let mut sorted = self.rows.clone();
        sorted.sort_by(|a, b| b.votes.cmp(&a.votes));
        sorted.truncate(n.min(self.rows.len()));
        sorted
    }

    /// Add one vote to the row with the given id and persist the table.
    ///
    /// Returns whether a row matched; a vote against an unknown id is a
    /// silent no-op, not an error, and leaves the store untouched.
    pub fn increment_vote(&mut self, id: Uuid) -> Result<bool> {
        match self.rows.iter_mut().find(|r| r.id == id) {
            Some(row) => {
                row.votes += 1;
                self.store.save(&self.rows)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Replace the whole table (admin bulk save) and persist it.
    pub fn replace_all(&mut self, rows: Vec<Restaurant>) -> Result<()> {
        self.rows = rows;
        self.store.save(&self.rows)
    }

    /// Re-read the table from the store.
    pub fn reload(&mut self) -> Result<()> {
        self.rows = self.store.load()?;
        Ok(())
    }
}
