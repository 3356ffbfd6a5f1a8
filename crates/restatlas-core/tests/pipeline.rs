//! End-to-end pipeline test: decode a provider payload, run a browsing
//! session over it, and read a detail card. No network involved.

use restatlas_core::{classify, fetch, Continent, FetchStatus, Notice, Session};

const SNAPSHOT: &str = r#"[
    {
        "name": { "common": "Peru", "official": "Republic of Peru" },
        "capital": ["Lima"],
        "region": "Americas",
        "subregion": "South America",
        "population": 32971854,
        "area": 1285216.0,
        "languages": { "spa": "Spanish" },
        "currencies": { "PEN": { "name": "Peruvian sol", "symbol": "S/" } },
        "timezones": ["UTC-05:00"],
        "flags": { "png": "https://flagcdn.com/w320/pe.png", "svg": "https://flagcdn.com/pe.svg" },
        "cca3": "PER"
    },
    {
        "name": { "common": "France", "official": "French Republic" },
        "capital": ["Paris"],
        "region": "Europe",
        "subregion": "Western Europe",
        "population": 67391582,
        "area": 551695.0,
        "languages": { "fra": "French" },
        "currencies": { "EUR": { "name": "Euro", "symbol": "€" } },
        "timezones": ["UTC-10:00", "UTC+01:00"],
        "flags": { "png": "https://flagcdn.com/w320/fr.png", "svg": "https://flagcdn.com/fr.svg" },
        "cca3": "FRA"
    },
    {
        "name": { "common": "Antarctica", "official": "Antarctica" },
        "region": "Antarctic",
        "area": 14000000.0,
        "timezones": ["UTC-03:00"],
        "flags": { "png": "", "svg": "" },
        "cca3": "ATA"
    }
]"#;

fn load() -> Session {
    let status = FetchStatus::settle(fetch::countries_from_slice(SNAPSHOT.as_bytes()));
    assert!(!status.loading);
    assert!(status.error.is_none());
    Session::new(status.countries)
}

#[test]
fn browse_search_and_select() {
    let mut session = load();
    assert_eq!(session.filtered_len(), 3);

    // Live typing narrows the view without raising the advisory.
    session.set_search_term("franc");
    assert_eq!(session.filtered_len(), 1);

    // Continent choice composes with the term.
    session.set_continent(Some(Continent::Europe));
    assert_eq!(session.commit_search(), None);

    // Card click on the single visible card.
    let selected = session.select(0).expect("one card visible");
    assert_eq!(selected.cca3, "FRA");
    assert_eq!(classify(&selected.region), "europa");

    let detail = session.selected().unwrap().detail_lines();
    assert!(detail.contains(&"Capital: Paris".to_string()));
    assert!(detail.contains(&"Population: 67,391,582".to_string()));
}

#[test]
fn committed_miss_warns_then_recovers() {
    let mut session = load();
    session.set_search_term("zz");
    assert_eq!(
        session.commit_search(),
        Some(Notice::NotFound {
            term: "zz".to_string()
        })
    );

    // Clearing the term restores the full directory, order preserved.
    session.set_search_term("");
    let codes: Vec<&str> = session.filtered().map(|c| c.cca3.as_str()).collect();
    assert_eq!(codes, vec!["PER", "FRA", "ATA"]);
}

#[test]
fn sparse_records_render_without_panicking() {
    let mut session = load();
    session.set_continent(Some(Continent::Antarctic));
    let antarctica = session.select(0).expect("antarctica visible");
    let detail = antarctica.detail_lines();
    assert!(detail.contains(&"Capital: -".to_string()));
    assert!(detail.contains(&"Currencies: ".to_string()));
}

#[test]
fn failed_fetch_leaves_a_working_empty_session() {
    let status = FetchStatus::settle(fetch::countries_from_slice(b"not json"));
    assert!(!status.loading);
    assert!(status.error.is_some());

    let mut session = Session::new(status.countries);
    assert_eq!(session.filtered_len(), 0);
    // Committing over an empty collection still only yields the advisory.
    session.set_search_term("peru");
    assert_eq!(
        session.commit_search(),
        Some(Notice::NotFound {
            term: "peru".to_string()
        })
    );
}
