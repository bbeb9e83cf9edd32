use super::ViewMessage;
use crate::auth::AdminAuth;
use crate::catalog::Catalog;
use crate::error::Result;
use crate::model::Restaurant;
use crate::store::TableStore;

/// How a column should be presented in the editor grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Number,
    /// Rendered as an image-preview field.
    Image,
    /// Rendered as a clickable link field.
    Link,
}

#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub key: &'static str,
    pub title: &'static str,
    pub kind: ColumnKind,
}

pub fn editor_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec { key: "id", title: "Id", kind: ColumnKind::Text },
        ColumnSpec { key: "name", title: "Restaurant", kind: ColumnKind::Text },
        ColumnSpec { key: "menu", title: "Menu", kind: ColumnKind::Text },
        ColumnSpec { key: "distance", title: "Distance", kind: ColumnKind::Text },
        ColumnSpec { key: "map_link", title: "Map link", kind: ColumnKind::Link },
        ColumnSpec { key: "photo_url", title: "Photo", kind: ColumnKind::Image },
        ColumnSpec { key: "votes", title: "Votes", kind: ColumnKind::Number },
    ]
}

/// The full table bound for editing, with per-column presentation hints.
/// Row add/remove is expressed by saving a replacement table.
#[derive(Debug, Clone)]
pub struct EditorGrid {
    pub columns: Vec<ColumnSpec>,
    pub rows: Vec<Restaurant>,
}

/// Outcome of the password gate.
///
/// `Unauthenticated` (no input yet) shows nothing further; `Rejected` carries
/// the error message; `Authenticated` carries the editor. There is no logout:
/// a new input runs the gate again.
#[derive(Debug, Clone)]
pub enum AdminGate {
    Unauthenticated,
    Rejected { messages: Vec<ViewMessage> },
    Authenticated {
        grid: EditorGrid,
        messages: Vec<ViewMessage>,
    },
}

pub fn authenticate<S: TableStore, A: AdminAuth>(
    catalog: &Catalog<S>,
    auth: &A,
    input: Option<&str>,
) -> AdminGate {
    match input {
        None => AdminGate::Unauthenticated,
        Some("") => AdminGate::Unauthenticated,
        Some(input) if auth.verify(input) => AdminGate::Authenticated {
            grid: EditorGrid {
                columns: editor_columns(),
                rows: catalog.list().to_vec(),
            },
            messages: vec![ViewMessage::success("Admin access granted.")],
        },
        Some(_) => AdminGate::Rejected {
            messages: vec![ViewMessage::error("Wrong password.")],
        },
    }
}

#[derive(Debug, Clone)]
pub struct SaveOutcome {
    pub saved: usize,
    pub messages: Vec<ViewMessage>,
}

/// Replace the whole table with the edited grid contents and persist.
pub fn save_table<S: TableStore>(
    catalog: &mut Catalog<S>,
    rows: Vec<Restaurant>,
) -> Result<SaveOutcome> {
    catalog.replace_all(rows)?;
    Ok(SaveOutcome {
        saved: catalog.len(),
        messages: vec![ViewMessage::success("Restaurant table saved.")],
    })
}
