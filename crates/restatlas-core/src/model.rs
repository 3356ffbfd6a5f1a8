// crates/restatlas-core/src/model.rs

use crate::raw::CountryRaw;
use crate::text::{equals_folded, fold_key};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// A currency as the directory reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub name: String,
    pub symbol: Option<String>,
}

/// One country record, cleaned up from the raw provider payload.
///
/// Records are immutable for the session: the collection is fetched
/// once and only read afterwards. `cca3` is the stable identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub common_name: String,
    pub official_name: String,
    /// First capital the provider lists, if any.
    pub capital: Option<String>,
    pub region: String,
    pub subregion: Option<String>,
    pub population: u64,
    /// Surface area in km².
    pub area: f64,
    /// (language code, language name), sorted by code.
    pub languages: Vec<(String, String)>,
    /// (currency code, currency), sorted by code.
    pub currencies: Vec<(String, Currency)>,
    pub timezones: Vec<String>,
    pub flag_png: String,
    pub flag_svg: String,
    pub flag_alt: Option<String>,
    /// Unique three-letter country code.
    pub cca3: String,
}

impl From<CountryRaw> for Country {
    fn from(raw: CountryRaw) -> Self {
        let mut languages: Vec<(String, String)> = raw.languages.into_iter().collect();
        languages.sort_by(|a, b| a.0.cmp(&b.0));

        let mut currencies: Vec<(String, Currency)> = raw
            .currencies
            .into_iter()
            .map(|(code, c)| {
                (
                    code,
                    Currency {
                        name: c.name,
                        symbol: c.symbol,
                    },
                )
            })
            .collect();
        currencies.sort_by(|a, b| a.0.cmp(&b.0));

        Country {
            common_name: raw.name.common,
            official_name: raw.name.official,
            capital: raw.capital.into_iter().next(),
            region: raw.region,
            subregion: raw.subregion,
            population: raw.population,
            area: raw.area,
            languages,
            currencies,
            timezones: raw.timezones,
            flag_png: raw.flags.png,
            flag_svg: raw.flags.svg,
            flag_alt: raw.flags.alt,
            cca3: raw.cca3,
        }
    }
}

impl Country {
    /// Language names in code order.
    pub fn language_names(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(|(_, name)| name.as_str())
    }

    /// Currency names in code order.
    pub fn currency_names(&self) -> impl Iterator<Item = &str> {
        self.currencies.iter().map(|(_, c)| c.name.as_str())
    }

    /// The labelled field list shown on the country detail card.
    ///
    /// Absent optional fields render as "-" instead of being dropped,
    /// so the card layout stays uniform.
    pub fn detail_lines(&self) -> Vec<String> {
        vec![
            format!("Capital: {}", self.capital.as_deref().unwrap_or("-")),
            format!("Region: {}", self.region),
            format!("Subregion: {}", self.subregion.as_deref().unwrap_or("-")),
            format!("Population: {}", format_population(self.population)),
            format!("Area (km²): {}", format_area(self.area)),
            format!("Languages: {}", join_names(self.language_names())),
            format!("Currencies: {}", join_names(self.currency_names())),
            format!("Timezones: {}", self.timezones.join(", ")),
        ]
    }
}

/// The closed set of continent values the directory uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Continent {
    Africa,
    Americas,
    Asia,
    Europe,
    Oceania,
    Antarctic,
}

impl Continent {
    pub const ALL: [Continent; 6] = [
        Continent::Africa,
        Continent::Americas,
        Continent::Asia,
        Continent::Europe,
        Continent::Oceania,
        Continent::Antarctic,
    ];

    /// Canonical provider spelling of the continent.
    pub fn as_str(&self) -> &'static str {
        match self {
            Continent::Africa => "Africa",
            Continent::Americas => "Americas",
            Continent::Asia => "Asia",
            Continent::Europe => "Europe",
            Continent::Oceania => "Oceania",
            Continent::Antarctic => "Antarctic",
        }
    }

    /// Case-insensitive parse of a continent name.
    pub fn parse(s: &str) -> Option<Continent> {
        static LOOKUP: Lazy<HashMap<String, Continent>> = Lazy::new(|| {
            Continent::ALL
                .iter()
                .map(|c| (c.as_str().to_ascii_lowercase(), *c))
                .collect()
        });
        LOOKUP.get(&s.trim().to_ascii_lowercase()).copied()
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Continent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Continent::parse(s).ok_or_else(|| format!("unknown continent: {s}"))
    }
}

/// Look up a single country by cca3 code or by name.
///
/// Codes match case-insensitively; names match accent- and
/// case-insensitively on the common or official name. Linear scan is
/// fine here, the directory holds ~250 entries.
pub fn find_country<'a>(countries: &'a [Country], query: &str) -> Option<&'a Country> {
    let query = query.trim();
    countries
        .iter()
        .find(|c| c.cca3.eq_ignore_ascii_case(query))
        .or_else(|| {
            let q = fold_key(query);
            countries.iter().find(|c| {
                fold_key(&c.common_name) == q || equals_folded(&c.official_name, query)
            })
        })
}

/// Groups an integer's digits with commas: 32971854 -> "32,971,854".
pub fn format_population(n: u64) -> String {
    group_digits(&n.to_string())
}

/// Groups the integer part of an area figure, keeping up to two
/// decimals when the value is not whole.
pub fn format_area(area: f64) -> String {
    let whole = area.trunc() as u64;
    let frac = area - area.trunc();
    if frac.abs() < 1e-9 {
        group_digits(&whole.to_string())
    } else {
        format!("{}{}", group_digits(&whole.to_string()), &format!("{frac:.2}")[1..])
    }
}

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::{CurrencyRaw, FlagsRaw, NameRaw};

    fn raw(common: &str, cca3: &str) -> CountryRaw {
        CountryRaw {
            name: NameRaw {
                common: common.to_string(),
                official: format!("Republic of {common}"),
            },
            capital: vec!["Lima".to_string()],
            region: "Americas".to_string(),
            subregion: Some("South America".to_string()),
            population: 32_971_854,
            area: 1_285_216.0,
            languages: HashMap::from([("spa".to_string(), "Spanish".to_string())]),
            currencies: HashMap::from([(
                "PEN".to_string(),
                CurrencyRaw {
                    name: "Peruvian sol".to_string(),
                    symbol: Some("S/".to_string()),
                },
            )]),
            timezones: vec!["UTC-05:00".to_string()],
            flags: FlagsRaw {
                png: "https://flagcdn.com/w320/pe.png".to_string(),
                svg: "https://flagcdn.com/pe.svg".to_string(),
                alt: None,
            },
            cca3: cca3.to_string(),
        }
    }

    #[test]
    fn conversion_keeps_core_fields() {
        let country = Country::from(raw("Peru", "PER"));
        assert_eq!(country.common_name, "Peru");
        assert_eq!(country.capital.as_deref(), Some("Lima"));
        assert_eq!(
            country.languages,
            vec![("spa".to_string(), "Spanish".to_string())]
        );
        assert_eq!(country.currencies[0].1.name, "Peruvian sol");
    }

    #[test]
    fn conversion_tolerates_sparse_entries() {
        let mut sparse = raw("Bouvet Island", "BVT");
        sparse.capital.clear();
        sparse.currencies.clear();
        sparse.languages.clear();
        sparse.subregion = None;

        let country = Country::from(sparse);
        assert_eq!(country.capital, None);
        assert!(country.currencies.is_empty());
        assert!(country.languages.is_empty());
    }

    #[test]
    fn languages_and_currencies_sorted_by_code() {
        let mut multi = raw("Switzerland", "CHE");
        multi.languages = HashMap::from([
            ("roh".to_string(), "Romansh".to_string()),
            ("deu".to_string(), "German".to_string()),
            ("fra".to_string(), "French".to_string()),
        ]);
        let country = Country::from(multi);
        let codes: Vec<&str> = country.languages.iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(codes, vec!["deu", "fra", "roh"]);
    }

    #[test]
    fn detail_lines_cover_all_fields() {
        let country = Country::from(raw("Peru", "PER"));
        let lines = country.detail_lines();
        assert_eq!(lines[0], "Capital: Lima");
        assert_eq!(lines[3], "Population: 32,971,854");
        assert_eq!(lines[4], "Area (km²): 1,285,216");
        assert_eq!(lines[5], "Languages: Spanish");
        assert_eq!(lines[7], "Timezones: UTC-05:00");
    }

    #[test]
    fn detail_lines_render_absent_fields_as_placeholder() {
        let mut sparse = raw("Bouvet Island", "BVT");
        sparse.capital.clear();
        sparse.subregion = None;
        let lines = Country::from(sparse).detail_lines();
        assert_eq!(lines[0], "Capital: -");
        assert_eq!(lines[2], "Subregion: -");
    }

    #[test]
    fn continent_parse_is_case_insensitive() {
        assert_eq!(Continent::parse("europe"), Some(Continent::Europe));
        assert_eq!(Continent::parse(" AMERICAS "), Some(Continent::Americas));
        assert_eq!(Continent::parse("Mars"), None);
    }

    #[test]
    fn continent_roundtrips_through_as_str() {
        for c in Continent::ALL {
            assert_eq!(Continent::parse(c.as_str()), Some(c));
        }
    }

    #[test]
    fn find_country_matches_code_and_folded_name() {
        let countries = vec![Country::from(raw("Perú", "PER"))];
        assert!(find_country(&countries, "per").is_some());
        assert!(find_country(&countries, "peru").is_some());
        assert!(find_country(&countries, "PERÚ").is_some());
        assert!(find_country(&countries, "France").is_none());
    }

    #[test]
    fn digit_grouping() {
        assert_eq!(format_population(0), "0");
        assert_eq!(format_population(999), "999");
        assert_eq!(format_population(1_000), "1,000");
        assert_eq!(format_population(32_971_854), "32,971,854");
        assert_eq!(format_area(1_285_216.0), "1,285,216");
        assert_eq!(format_area(452.35), "452.35");
    }
}
