use super::{RestaurantCard, ViewMessage};
use crate::catalog::Catalog;
use crate::error::Result;
use crate::store::TableStore;
use uuid::Uuid;

/// Most entries the leaderboard selector will offer.
pub const LEADERBOARD_CAP: usize = 5;
/// Cards per leaderboard grid row.
pub const GRID_COLUMNS: usize = 3;
/// Leaderboard size when the user has not picked one.
pub const DEFAULT_BOARD_SIZE: usize = 3;

const EMPTY_TABLE_MESSAGE: &str =
    "The restaurant table is empty. Add restaurants on the admin page.";

/// Result of the "random recommendation" trigger.
#[derive(Debug, Clone)]
pub struct Recommendation {
    pub card: Option<RestaurantCard>,
    pub messages: Vec<ViewMessage>,
}

pub fn recommend<S: TableStore>(catalog: &Catalog<S>) -> Recommendation {
    match catalog.random_pick() {
        Ok(pick) => Recommendation {
            card: Some(pick.into()),
            messages: vec![ViewMessage::success(format!(
                "Today's random pick: {}",
                pick.name
            ))],
        },
        Err(_) => Recommendation {
            card: None,
            messages: vec![ViewMessage::warning(EMPTY_TABLE_MESSAGE)],
        },
    }
}

/// Bounds and current value of the leaderboard count selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountSelector {
    pub min: usize,
    pub max: usize,
    pub selected: usize,
}

/// The top-voted section: cards chunked [`GRID_COLUMNS`] per row.
#[derive(Debug, Clone)]
pub struct Leaderboard {
    /// None when the table is empty and the selector is hidden.
    pub selector: Option<CountSelector>,
    pub grid: Vec<Vec<RestaurantCard>>,
    pub messages: Vec<ViewMessage>,
}

pub fn leaderboard<S: TableStore>(catalog: &Catalog<S>, requested: usize) -> Leaderboard {
    if catalog.is_empty() {
        return Leaderboard {
            selector: None,
            grid: Vec::new(),
            messages: vec![ViewMessage::warning(EMPTY_TABLE_MESSAGE)],
        };
    }

    let max = LEADERBOARD_CAP.min(catalog.len());
    let selected = requested.clamp(1, max);
    let top = catalog.top_by_votes(selected);
    let grid = top
        .chunks(GRID_COLUMNS)
        .map(|chunk| chunk.iter().map(RestaurantCard::from).collect())
        .collect();

    Leaderboard {
        selector: Some(CountSelector {
            min: 1,
            max,
            selected,
        }),
        grid,
        messages: Vec::new(),
    }
}

#[derive(Debug, Clone)]
pub struct VoteOutcome {
    pub matched: bool,
    pub messages: Vec<ViewMessage>,
}

/// Cast a vote and persist. A vote against an id that no longer exists is a
/// silent no-op; the caller re-renders the page either way.
pub fn cast_vote<S: TableStore>(catalog: &mut Catalog<S>, id: Uuid) -> Result<VoteOutcome> {
    let name = catalog.find(id).map(|r| r.name.clone());
    let matched = catalog.increment_vote(id)?;
    let messages = match (matched, name) {
        (true, Some(name)) => vec![ViewMessage::success(format!("Vote recorded for {}!", name))],
        _ => Vec::new(),
    };
    Ok(VoteOutcome { matched, messages })
}

/// One bar of the results chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartBar {
    pub name: String,
    pub votes: u64,
}

/// Current results: a bar chart keyed by name in store order, and a
/// (name, votes) table sorted by votes descending.
#[derive(Debug, Clone)]
pub struct ResultsBoard {
    pub chart: Vec<ChartBar>,
    pub table: Vec<(String, u64)>,
    pub messages: Vec<ViewMessage>,
}

pub fn results<S: TableStore>(catalog: &Catalog<S>) -> ResultsBoard {
    if catalog.is_empty() {
        return ResultsBoard {
            chart: Vec::new(),
            table: Vec::new(),
            messages: vec![ViewMessage::info(EMPTY_TABLE_MESSAGE)],
        };
    }

    let chart = catalog
        .list()
        .iter()
        .map(|r| ChartBar {
            name: r.name.clone(),
            votes: r.votes,
        })
        .collect();
    let table = catalog
        .top_by_votes(catalog.len())
        .into_iter()
        .map(|r| (r.name, r.votes))
        .collect();

    ResultsBoard {
        chart,
        table,
        messages: Vec::new(),
    }
}

/// The full public page: leaderboard plus results. The random
/// recommendation is a separate trigger ([`recommend`]).
#[derive(Debug, Clone)]
pub struct VotingPage {
    pub leaderboard: Leaderboard,
    pub results: ResultsBoard,
}

pub fn page<S: TableStore>(catalog: &Catalog<S>, board_size: usize) -> VotingPage {
    VotingPage {
        leaderboard: leaderboard(catalog, board_size),
        results: results(catalog),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::MessageLevel;
    use crate::store::memory::fixtures::TableFixture;
    use crate::store::memory::InMemoryStore;

    fn catalog_of(names_votes: &[(&str, u64)]) -> Catalog<InMemoryStore> {
        let mut fixture = TableFixture::new();
        for (name, votes) in names_votes {
            fixture = fixture.with_restaurant(name, *votes);
        }
        Catalog::open(fixture.build()).unwrap()
    }

    #[test]
    fn recommend_returns_a_card_with_a_success_message() {
        let catalog = catalog_of(&[("Solo", 3)]);
        let rec = recommend(&catalog);
        assert_eq!(rec.card.unwrap().name, "Solo");
        assert_eq!(rec.messages[0].level, MessageLevel::Success);
    }

    #[test]
    fn recommend_passes_the_photo_through() {
        let store = TableFixture::new()
            .with_photo_restaurant("Pic", "https://img.example/pic.jpg")
            .build();
        let catalog = Catalog::open(store).unwrap();
        let card = recommend(&catalog).card.unwrap();
        assert_eq!(card.photo_url.as_deref(), Some("https://img.example/pic.jpg"));
    }

    #[test]
    fn recommend_on_empty_table_shows_empty_state() {
        let catalog = Catalog::open(InMemoryStore::new()).unwrap();
        let rec = recommend(&catalog);
        assert!(rec.card.is_none());
        assert_eq!(rec.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn leaderboard_clamps_requested_count() {
        let catalog = catalog_of(&[("A", 1), ("B", 2), ("C", 3)]);

        let board = leaderboard(&catalog, 0);
        assert_eq!(board.selector.unwrap().selected, 1);

        let board = leaderboard(&catalog, 99);
        assert_eq!(board.selector.unwrap().selected, 3);
    }

    #[test]
    fn leaderboard_selector_caps_at_five() {
        let catalog = catalog_of(&[
            ("A", 1),
            ("B", 2),
            ("C", 3),
            ("D", 4),
            ("E", 5),
            ("F", 6),
            ("G", 7),
        ]);
        let board = leaderboard(&catalog, 7);
        let selector = board.selector.unwrap();
        assert_eq!(selector.max, LEADERBOARD_CAP);
        assert_eq!(selector.selected, LEADERBOARD_CAP);
    }

    #[test]
    fn leaderboard_chunks_three_cards_per_row() {
        let catalog = catalog_of(&[("A", 5), ("B", 4), ("C", 3), ("D", 2), ("E", 1)]);
        let board = leaderboard(&catalog, 5);
        let row_sizes: Vec<usize> = board.grid.iter().map(|row| row.len()).collect();
        assert_eq!(row_sizes, vec![3, 2]);
    }

    #[test]
    fn leaderboard_orders_by_votes() {
        let catalog = catalog_of(&[("A", 10), ("B", 5), ("C", 15)]);
        let board = leaderboard(&catalog, 2);
        let names: Vec<&str> = board
            .grid
            .iter()
            .flatten()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["C", "A"]);
    }

    #[test]
    fn empty_leaderboard_hides_selector() {
        let catalog = Catalog::open(InMemoryStore::new()).unwrap();
        let board = leaderboard(&catalog, 3);
        assert!(board.selector.is_none());
        assert!(board.grid.is_empty());
        assert_eq!(board.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn cast_vote_acknowledges_success() {
        let mut catalog = catalog_of(&[("Target", 5)]);
        let id = catalog.list()[0].id;

        let outcome = cast_vote(&mut catalog, id).unwrap();
        assert!(outcome.matched);
        assert!(outcome.messages[0].content.contains("Target"));
        assert_eq!(catalog.list()[0].votes, 6);
    }

    #[test]
    fn cast_vote_on_unknown_id_is_silent() {
        let mut catalog = catalog_of(&[("Target", 5)]);
        let outcome = cast_vote(&mut catalog, uuid::Uuid::new_v4()).unwrap();
        assert!(!outcome.matched);
        assert!(outcome.messages.is_empty());
    }

    #[test]
    fn results_chart_keeps_store_order_and_table_sorts() {
        let catalog = catalog_of(&[("A", 10), ("B", 5), ("C", 15)]);
        let board = results(&catalog);

        let chart_names: Vec<&str> = board.chart.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(chart_names, vec!["A", "B", "C"]);

        assert_eq!(
            board.table,
            vec![
                ("C".to_string(), 15),
                ("A".to_string(), 10),
                ("B".to_string(), 5)
            ]
        );
    }

    #[test]
    fn results_on_empty_table_shows_message() {
        let catalog = Catalog::open(InMemoryStore::new()).unwrap();
        let board = results(&catalog);
        assert!(board.chart.is_empty());
        assert!(board.table.is_empty());
        assert!(!board.messages.is_empty());
    }
}
