//! # rosterview
//!
//! A desktop client for a user-directory search API, built on egui.
//!
//! Rosterview provides live, incremental search over a user list with
//! infinite-scroll pagination: typing into the search box issues a fresh
//! query and replaces the results table, while scrolling to the bottom of
//! the results re-issues the current query and appends what comes back.
//! At most one request is ever in flight; a compare-and-swap gate arbitrates
//! between the input and scroll triggers.
//!
//! ## Architecture
//!
//! - [`search`] - the request gate, the input/scroll watchers and the HTTP
//!   search client
//! - [`state`] - application state and configuration
//! - [`models`] - wire types for the search endpoint
//! - [`ui`] - panels, the results table and the row template
//!
//! ## Example
//!
//! ```rust,no_run
//! use rosterview::search::{HttpBackend, SearchClient, SearchKind};
//! use rosterview::models::SearchQuery;
//! use std::sync::Arc;
//!
//! # fn main() -> anyhow::Result<()> {
//! let runtime = tokio::runtime::Runtime::new()?;
//! let backend = Arc::new(HttpBackend::new("http://localhost:8080")?);
//! let client = SearchClient::new(backend, runtime.handle().clone());
//!
//! // Fire-and-poll: the frame loop polls the handle until it settles.
//! let mut pending = client.dispatch(SearchQuery::new("ann"), SearchKind::Replace);
//! # let _ = pending.try_settle();
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod error;
pub mod models;
pub mod search;
pub mod state;
pub mod ui;

pub use app::RosterApp;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
