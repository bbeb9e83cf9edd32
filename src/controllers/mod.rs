//! # Page Controllers
//!
//! Controllers orchestrate [`Catalog`](crate::catalog::Catalog) calls for the
//! two pages and return plain view-state structs. They never print, never
//! render, and never assume a terminal or a browser: the same view-state can
//! back a web page, a CLI, or an API response.
//!
//! - [`voting`]: public recommendation/leaderboard/results page
//! - [`admin`]: password-gated table editor

pub mod admin;
pub mod voting;

use crate::model::Restaurant;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A user-visible message attached to a view.
#[derive(Debug, Clone)]
pub struct ViewMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl ViewMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One restaurant as rendered on a card: everything the UI needs to display
/// it and to wire up the vote and map actions.
#[derive(Debug, Clone)]
pub struct RestaurantCard {
    pub id: Uuid,
    pub name: String,
    pub menu: String,
    pub distance: String,
    pub map_link: String,
    pub photo_url: Option<String>,
    pub votes: u64,
}

impl From<&Restaurant> for RestaurantCard {
    fn from(r: &Restaurant) -> Self {
        Self {
            id: r.id,
            name: r.name.clone(),
            menu: r.menu.clone(),
            distance: r.distance.clone(),
            map_link: r.map_link.clone(),
            photo_url: r.photo().map(str::to_string),
            votes: r.votes,
        }
    }
}
