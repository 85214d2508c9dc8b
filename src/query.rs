//! Display-term extraction from the search query syntax.
//!
//! The query language carries operators the user never wants to see
//! highlighted: boolean connectives, proximity distances, range
//! restrictions, exclusions. This module strips them in a fixed order and
//! keeps what the user actually typed as "what I'm looking for". It never
//! executes the query and never fails — a malformed query just yields
//! fewer terms.

use once_cell::sync::Lazy;
use regex::Regex;

/// Escape token the query producer emits for a literal plus sign.
const PLUS_ESCAPE: &str = "#plus#";

static INCLUSION_CLAUSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)in \([^)]+\)").expect("inclusion clause pattern"));
static RANGE_RESTRICTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[+-]\[[^\]]*\]").expect("range restriction pattern"));
static EXCLUDED_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-[a-zA-Z]+").expect("excluded word pattern"));
static EXCLUDED_PHRASE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"-"[^"]+""#).expect("excluded phrase pattern"));
static PROXIMITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"~[0-9]+").expect("proximity pattern"));
static PARENS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[()]").expect("parens pattern"));
static AND_CONNECTIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" AND ").expect("connective pattern"));
static QUOTED_PHRASE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""[^"]*""#).expect("quoted phrase pattern"));

/// Extract the words and phrases to highlight from a raw query string.
///
/// Phrases come first, then single words, each group in order of
/// appearance. Duplicates are preserved. The strip order below is
/// load-bearing: phrase extraction has to run after the range, exclusion
/// and proximity operators are gone, or their bracketed arguments would
/// leak into the terms.
///
/// Only the first quoted phrase is excised from the text before the word
/// split. With two or more quoted phrases the later ones are re-split into
/// individual words as well; long-standing behavior callers rely on.
pub fn extract_terms(query: &str) -> Vec<String> {
    // Everything before the first '=' is the search-mode prefix.
    let term_base = match query.find('=') {
        Some(i) => &query[i + 1..],
        None => query,
    };

    let stripped = term_base.replacen(PLUS_ESCAPE, "", 1);
    let stripped = INCLUSION_CLAUSE.replace_all(&stripped, "");
    let stripped = stripped.replacen("=>", " ", 1);
    let stripped = RANGE_RESTRICTION.replace_all(&stripped, "");
    let stripped = EXCLUDED_WORD.replace_all(&stripped, "");
    let stripped = EXCLUDED_PHRASE.replace_all(&stripped, "");
    let stripped = PROXIMITY.replace_all(&stripped, "");
    let stripped = PARENS.replace_all(&stripped, "");
    let stripped = AND_CONNECTIVE.replace_all(&stripped, " ");
    let stripped = stripped.replace('+', "");

    let mut terms = Vec::new();

    for m in QUOTED_PHRASE.find_iter(&stripped) {
        let quoted = m.as_str();
        terms.push(quoted[1..quoted.len() - 1].to_string());
    }

    // Any quotes still standing belong to later phrases (or are unbalanced
    // noise); they never become part of a word term.
    let remainder = QUOTED_PHRASE.replace(&stripped, "").replace('"', "");
    for word in remainder.split_whitespace() {
        terms.push(word.to_string());
    }

    terms
}
