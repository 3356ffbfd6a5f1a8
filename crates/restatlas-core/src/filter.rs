// crates/restatlas-core/src/filter.rs

//! The filter engine.
//!
//! A pure function over `(collection, query state)`: no memoization,
//! no incremental patching. Callers re-run it after every state change
//! and replace the previous view wholesale, which keeps the derived
//! view consistent with the snapshot by construction.

use crate::model::{Continent, Country};
use crate::text::matches_query;

/// The active query: free-text name search plus optional continent.
///
/// Defaults to "match everything": empty term, no continent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    pub search_term: String,
    pub continent: Option<Continent>,
}

impl QueryState {
    pub fn new(search_term: impl Into<String>, continent: Option<Continent>) -> Self {
        QueryState {
            search_term: search_term.into(),
            continent,
        }
    }
}

/// Positions of the countries matching `query`, in collection order.
///
/// Name match first (case-insensitive substring on the common name,
/// empty term passes all), then continent (exact region equality,
/// `None` passes all). The result is a stable filter: surviving
/// elements keep their relative order, and identical inputs always
/// produce the identical sequence.
pub fn filter_indices(countries: &[Country], query: &QueryState) -> Vec<usize> {
    let continent = query.continent.map(|c| c.as_str());
    countries
        .iter()
        .enumerate()
        .filter(|(_, country)| matches_query(&country.common_name, &query.search_term))
        .filter(|(_, country)| continent.map_or(true, |region| country.region == region))
        .map(|(i, _)| i)
        .collect()
}

/// Borrowed view of the countries matching `query`, in collection order.
pub fn filter<'a>(countries: &'a [Country], query: &QueryState) -> Vec<&'a Country> {
    filter_indices(countries, query)
        .into_iter()
        .map(|i| &countries[i])
        .collect()
}
