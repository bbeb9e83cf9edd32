use super::TableStore;
use crate::error::Result;
use crate::model::Restaurant;

/// In-memory table store for tests. Nothing is persisted.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    rows: Vec<Restaurant>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<Restaurant>) -> Self {
        Self { rows }
    }

    /// The rows as last saved, for asserting on persistence.
    pub fn saved_rows(&self) -> &[Restaurant] {
        &self.rows
    }
}

impl TableStore for InMemoryStore {
    fn load(&mut self) -> Result<Vec<Restaurant>> {
        Ok(self.rows.clone())
    }

    fn save(&mut self, rows: &[Restaurant]) -> Result<()> {
        self.rows = rows.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// Builder for a pre-populated in-memory table.
    #[derive(Default)]
    pub struct TableFixture {
        rows: Vec<Restaurant>,
    }

    impl TableFixture {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_restaurant(mut self, name: &str, votes: u64) -> Self {
            let mut row = Restaurant::new(
                name,
                format!("{} menu", name),
                "100m",
                format!("https://maps.example/{}", name.to_lowercase()),
                None,
            );
            row.votes = votes;
            self.rows.push(row);
            self
        }

        pub fn with_photo_restaurant(mut self, name: &str, photo_url: &str) -> Self {
            self.rows.push(Restaurant::new(
                name,
                format!("{} menu", name),
                "100m",
                format!("https://maps.example/{}", name.to_lowercase()),
                Some(photo_url.to_string()),
            ));
            self
        }

        pub fn build(self) -> InMemoryStore {
            InMemoryStore::with_rows(self.rows)
        }
    }
}
