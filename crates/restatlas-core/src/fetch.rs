// crates/restatlas-core/src/fetch.rs

//! One-shot loader for the country directory.
//!
//! The collection is fetched exactly once per session. There are no
//! retries and no re-fetch on query changes; a failed fetch leaves the
//! session running over an empty collection.

use crate::error::Result;
#[cfg(feature = "fetch")]
use crate::error::AtlasError;
use crate::model::Country;
use crate::raw::CountriesRaw;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// The fixed directory endpoint. No parameters, no auth, no paging.
pub const COUNTRIES_API_URL: &str = "https://restcountries.com/v3.1/all";

/// Observable outcome of the startup fetch.
///
/// `loading` starts `true` and flips to `false` exactly once, when the
/// request settles. On failure `error` carries the message and
/// `countries` stays empty; the session keeps running either way.
#[derive(Debug, Clone)]
pub struct FetchStatus {
    pub loading: bool,
    pub error: Option<String>,
    pub countries: Vec<Country>,
}

impl FetchStatus {
    /// State before the request settles.
    pub fn pending() -> Self {
        FetchStatus {
            loading: true,
            error: None,
            countries: Vec::new(),
        }
    }

    /// Settle the fetch with its result.
    pub fn settle(result: Result<Vec<Country>>) -> Self {
        match result {
            Ok(countries) => {
                debug!(count = countries.len(), "country directory loaded");
                FetchStatus {
                    loading: false,
                    error: None,
                    countries,
                }
            }
            Err(err) => {
                debug!(%err, "country directory fetch failed");
                FetchStatus {
                    loading: false,
                    error: Some(err.to_string()),
                    countries: Vec::new(),
                }
            }
        }
    }
}

/// Decode a v3.1 country array from raw bytes.
pub fn countries_from_slice(data: &[u8]) -> Result<Vec<Country>> {
    let raw: CountriesRaw = serde_json::from_slice(data)?;
    Ok(raw.into_iter().map(Country::from).collect())
}

/// Decode a v3.1 country array from any reader.
pub fn countries_from_reader<R: Read>(reader: R) -> Result<Vec<Country>> {
    let raw: CountriesRaw = serde_json::from_reader(reader)?;
    Ok(raw.into_iter().map(Country::from).collect())
}

/// Decode a local snapshot file. Useful for tests and offline runs.
pub fn countries_from_path(path: impl AsRef<Path>) -> Result<Vec<Country>> {
    let file = File::open(path.as_ref())?;
    countries_from_reader(BufReader::new(file))
}

/// Issue the single directory request of the session.
///
/// Non-2xx statuses and transport failures are both terminal; the
/// caller folds them into [`FetchStatus`] via [`FetchStatus::settle`].
#[cfg(feature = "fetch")]
pub fn fetch_countries(url: &str) -> Result<Vec<Country>> {
    debug!(%url, "fetching country directory");
    let response = reqwest::blocking::get(url)?;
    let status = response.status();
    if !status.is_success() {
        return Err(AtlasError::Http(status.as_u16()));
    }
    let body = response.bytes()?;
    countries_from_slice(&body)
}

/// Fetch the fixed endpoint and settle in one step.
#[cfg(feature = "fetch")]
pub fn fetch_directory() -> FetchStatus {
    FetchStatus::settle(fetch_countries(COUNTRIES_API_URL))
}
