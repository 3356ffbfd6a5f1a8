// crates/restatlas-core/src/lib.rs

//! # restatlas-core
//!
//! In-memory client for the REST Countries directory.
//!
//! The crate fetches the full country collection once per session
//! (see [`fetch`]), keeps it as an immutable snapshot, and derives
//! filtered views from it with the pure [`filter::filter`] engine. Session
//! state (search term, continent choice, selection) lives in
//! [`session::Session`], which re-derives the view after every
//! mutation instead of patching it in place.

pub mod error;
pub mod fetch;
pub mod filter;
pub mod model;
pub mod session;
pub mod text;
// Raw wire mirror of the provider payload. Not part of the public API.
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::error::{AtlasError, Result};
pub use crate::fetch::{FetchStatus, COUNTRIES_API_URL};
pub use crate::filter::{filter, filter_indices, QueryState};
pub use crate::model::{find_country, Continent, Country, Currency};
pub use crate::session::{classify, Notice, Session};
