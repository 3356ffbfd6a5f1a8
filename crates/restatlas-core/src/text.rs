// crates/restatlas-core/src/text.rs

//! Text matching helpers.
//!
//! Two regimes live here on purpose: the filter engine matches names
//! with plain case-insensitive `contains` ([`matches_query`]), while
//! exact-name lookup additionally folds accents via `deunicode`
//! ([`fold_key`]) so "Perú" is findable as "peru".

/// Case-insensitive substring match used by the filter engine.
///
/// An empty `term` matches every name.
pub fn matches_query(name: &str, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    name.to_lowercase().contains(&term.to_lowercase())
}

/// Convert a string into a folded key suitable for comparison:
/// transliterate Unicode to ASCII, then lowercase.
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Accent- and case-insensitive string equality.
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}
