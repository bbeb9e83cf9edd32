//! # Lunchvote Architecture
//!
//! Lunchvote is a **UI-agnostic voting library**. The CLI in `main.rs` is just
//! one client; the same core could back a web page or an API front end.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  CLI client (main.rs, args.rs, cli/)                       │
//! │  - Parses arguments, renders views, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr           │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Controllers (controllers/)                                │
//! │  - Voting page and admin page orchestration                │
//! │  - Return view-state structs, no I/O assumptions           │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Catalog service (catalog.rs)                              │
//! │  - In-memory restaurant table                              │
//! │  - list / random pick / top-by-votes / vote / replace      │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                          │
//! │  - Abstract TableStore trait                               │
//! │  - CsvStore (production), InMemoryStore (testing)          │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Execution model
//!
//! One interaction is one synchronous cycle: load the table, mutate it if
//! asked, save it, render. There is no locking and no background work;
//! concurrent writers race and the last save wins, which is acceptable for
//! the single-admin target usage.
//!
//! ## Row identity
//!
//! Every row carries a generated `Uuid`, persisted alongside the visible
//! columns. Votes and edits key on it, so two rows that happen to share a
//! name never mutate together.
//!
//! ## Module overview
//!
//! - [`catalog`]: the in-memory table and its query/mutation operations
//! - [`controllers`]: voting page and admin page view-state
//! - [`store`]: storage abstraction and implementations
//! - [`model`]: the `Restaurant` row, vote coercion, seed data
//! - [`auth`]: the admin password seam
//! - [`config`]: configuration management
//! - [`error`]: error types

pub mod auth;
pub mod catalog;
pub mod config;
pub mod controllers;
pub mod error;
pub mod model;
pub mod store;
