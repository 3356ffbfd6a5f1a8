// crates/restatlas-core/src/raw.rs

use serde::Deserialize;
use std::collections::HashMap;

/// Raw name block as it comes from the provider:
/// { "common": "Peru", "official": "Republic of Peru", ... }
#[derive(Debug, Default, Deserialize)]
pub struct NameRaw {
    #[serde(default)]
    pub common: String,
    #[serde(default)]
    pub official: String,
}

/// Raw flag image block. The provider ships both raster and vector URLs.
#[derive(Debug, Default, Deserialize)]
pub struct FlagsRaw {
    #[serde(default)]
    pub png: String,
    #[serde(default)]
    pub svg: String,
    #[serde(default)]
    pub alt: Option<String>,
}

/// Raw currency entry, keyed by ISO code in the parent map:
/// { "PEN": { "name": "Peruvian sol", "symbol": "S/" } }
#[derive(Debug, Deserialize)]
pub struct CurrencyRaw {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
}

/// Raw country object from the REST Countries v3.1 payload.
///
/// Every field except `name` and `cca3` is defaulted so that sparse
/// entries (territories without a capital, currency-less regions)
/// decode instead of failing the whole array.
/// NOTE: this type mirrors the external payload; we do not expose it
/// from the public API.
#[derive(Debug, Deserialize)]
pub struct CountryRaw {
    pub name: NameRaw,
    #[serde(default)]
    pub capital: Vec<String>,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub subregion: Option<String>,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub area: f64,
    /// languages: { "spa": "Spanish", ... }
    #[serde(default)]
    pub languages: HashMap<String, String>,
    #[serde(default)]
    pub currencies: HashMap<String, CurrencyRaw>,
    #[serde(default)]
    pub timezones: Vec<String>,
    #[serde(default)]
    pub flags: FlagsRaw,
    /// Three-letter code, the stable identity of the record.
    pub cca3: String,
}

pub type CountriesRaw = Vec<CountryRaw>;
