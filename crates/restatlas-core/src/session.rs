// crates/restatlas-core/src/session.rs

//! Session coordinator: query state, derived view, selection.
//!
//! [`Session`] owns the mutable state of one browsing session. The
//! fetched collection itself is immutable; every mutation of the query
//! re-derives the filtered view in full (see [`crate::filter`]), so
//! `filtered ⊆ collection` holds by construction. Nothing here is
//! global: a session is created from a snapshot, mutated through its
//! methods, and dropped at the end.

use crate::filter::{filter_indices, QueryState};
use crate::model::{Continent, Country};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::debug;

/// Advisory signal for the presentation layer. Not an error and never
/// alters session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A committed search matched nothing.
    NotFound { term: String },
}

/// Per-session state: the fetched snapshot, the active query, the
/// derived view, and at most one selected country.
#[derive(Debug, Clone)]
pub struct Session {
    countries: Vec<Country>,
    query: QueryState,
    /// Positions into `countries`, re-derived after every query change.
    filtered: Vec<usize>,
    /// Position of the selected country in `countries`, if any.
    selected: Option<usize>,
}

impl Session {
    /// Start a session over a fetched snapshot. The initial view is the
    /// whole collection (empty term, no continent).
    pub fn new(countries: Vec<Country>) -> Self {
        let mut session = Session {
            countries,
            query: QueryState::default(),
            filtered: Vec::new(),
            selected: None,
        };
        session.refilter();
        session
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    /// The current derived view, in collection order.
    pub fn filtered(&self) -> impl Iterator<Item = &Country> {
        self.filtered.iter().map(|&i| &self.countries[i])
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Update the search term and re-derive the view.
    ///
    /// This is the live-typing path: it never raises [`Notice`], even
    /// when the view becomes transiently empty. The advisory is gated
    /// on the commit gesture ([`Session::commit_search`]).
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.query.search_term = term.into();
        self.refilter();
    }

    /// Update the continent choice and re-derive the view.
    pub fn set_continent(&mut self, continent: Option<Continent>) {
        self.query.continent = continent;
        self.refilter();
    }

    /// The commit gesture (the user pressed Enter on the search box).
    ///
    /// Re-derives the view and, iff it is empty, returns
    /// [`Notice::NotFound`] carrying the committed term. One notice per
    /// commit; repeated typing without committing stays silent.
    pub fn commit_search(&mut self) -> Option<Notice> {
        self.refilter();
        if self.filtered.is_empty() {
            return Some(Notice::NotFound {
                term: self.query.search_term.clone(),
            });
        }
        None
    }

    /// Select the country at `view_pos` in the current filtered view.
    ///
    /// A pure forwarding contract: any position inside the view is
    /// valid by definition, out-of-range positions clear nothing and
    /// return `None`.
    pub fn select(&mut self, view_pos: usize) -> Option<&Country> {
        let idx = *self.filtered.get(view_pos)?;
        self.selected = Some(idx);
        Some(&self.countries[idx])
    }

    /// Select a country by cca3 code or name, for direct lookups that
    /// bypass the card list.
    pub fn select_named(&mut self, query: &str) -> Option<&Country> {
        let found = crate::model::find_country(&self.countries, query)?;
        let cca3 = found.cca3.clone();
        let idx = self.countries.iter().position(|c| c.cca3 == cca3)?;
        self.selected = Some(idx);
        Some(&self.countries[idx])
    }

    /// The currently selected country, if any.
    pub fn selected(&self) -> Option<&Country> {
        self.selected.map(|i| &self.countries[i])
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    fn refilter(&mut self) {
        self.filtered = filter_indices(&self.countries, &self.query);
        debug!(
            term = %self.query.search_term,
            continent = ?self.query.continent,
            matches = self.filtered.len(),
            "view re-derived"
        );
    }
}

/// Map a region string to its presentation style tag.
///
/// Total over the six known continents, with an empty tag for anything
/// else. Kept as a lookup table so totality is checkable at a glance;
/// the tag spellings match the stylesheet classes of the card grid.
pub fn classify(region: &str) -> &'static str {
    static STYLE_TAGS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
        HashMap::from([
            ("Asia", "asia"),
            ("Africa", "africa"),
            ("Americas", "america"),
            ("Antarctic", "antartida"),
            ("Europe", "europa"),
            ("Oceania", "oceania"),
        ])
    });
    STYLE_TAGS.get(region).copied().unwrap_or("")
}
