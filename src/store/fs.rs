use super::TableStore;
use crate::error::{LunchError, Result};
use crate::model::{coerce_votes, seed_rows, Restaurant};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Header of the store file, in canonical order.
///
/// `id` is a generated per-row key; the remaining six columns are the
/// user-visible table. Legacy files missing columns (including `id`) are
/// repaired on load and rewritten in this order.
pub const CANONICAL_COLUMNS: [&str; 7] = [
    "id",
    "name",
    "menu",
    "distance",
    "map_link",
    "photo_url",
    "votes",
];

/// CSV-file-backed table store.
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TableStore for CsvStore {
    fn load(&mut self) -> Result<Vec<Restaurant>> {
        if !self.path.exists() {
            info!("no store file at {}, seeding sample table", self.path.display());
            let rows = seed_rows();
            self.save(&rows)?;
            return Ok(rows);
        }

        let (rows, needs_rewrite) = parse_table(&self.path)?;
        if needs_rewrite {
            self.save(&rows)?;
        }
        debug!("loaded {} rows from {}", rows.len(), self.path.display());
        Ok(rows)
    }

    fn save(&mut self, rows: &[Restaurant]) -> Result<()> {
        write_table(&self.path, rows)
    }
}

/// Parse a store file without the seeding branch.
///
/// Used by the admin bulk-save path to ingest an edited table. Rows missing
/// an `id` cell get a fresh one.
pub fn read_table(path: &Path) -> Result<Vec<Restaurant>> {
    let (rows, _) = parse_table(path)?;
    Ok(rows)
}

fn write_table(path: &Path, rows: &[Restaurant]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(CANONICAL_COLUMNS)?;
    for row in rows {
        writer.write_record(&to_record(row))?;
    }
    writer.flush()?;
    Ok(())
}

fn to_record(row: &Restaurant) -> [String; 7] {
    [
        row.id.to_string(),
        row.name.clone(),
        row.menu.clone(),
        row.distance.clone(),
        row.map_link.clone(),
        row.photo_url.clone().unwrap_or_default(),
        row.votes.to_string(),
    ]
}

/// Read every row, reporting whether the file deviates from the canonical
/// schema and needs to be rewritten (missing columns, non-canonical order,
/// missing ids, or vote cells that did not survive coercion verbatim).
fn parse_table(path: &Path) -> Result<(Vec<Restaurant>, bool)> {
    let malformed = |source: csv::Error| LunchError::MalformedStore {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::Reader::from_path(path).map_err(malformed)?;
    let headers = reader.headers().map_err(malformed)?.clone();

    let position = |name: &str| headers.iter().position(|h| h == name);
    let missing: Vec<&str> = CANONICAL_COLUMNS
        .iter()
        .copied()
        .filter(|c| position(c).is_none())
        .collect();
    if !missing.is_empty() {
        warn!(
            "store file {} is missing columns: {}; backfilling defaults",
            path.display(),
            missing.join(", ")
        );
    }

    let canonical_header = headers.iter().eq(CANONICAL_COLUMNS);
    let mut needs_rewrite = !canonical_header;

    let columns: Vec<Option<usize>> = CANONICAL_COLUMNS.iter().map(|c| position(c)).collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(malformed)?;
        let cell = |i: usize| columns[i].and_then(|j| record.get(j)).unwrap_or("");

        let id = match cell(0).parse::<Uuid>() {
            Ok(id) => id,
            Err(_) => {
                needs_rewrite = true;
                Uuid::new_v4()
            }
        };
        let photo = cell(5);
        let row = Restaurant {
            id,
            name: cell(1).to_string(),
            menu: cell(2).to_string(),
            distance: cell(3).to_string(),
            map_link: cell(4).to_string(),
            photo_url: (!photo.is_empty()).then(|| photo.to_string()),
            votes: coerce_votes(cell(6)),
        };
        if cell(6) != row.votes.to_string() {
            needs_rewrite = true;
        }
        rows.push(row);
    }

    Ok((rows, needs_rewrite))
}
