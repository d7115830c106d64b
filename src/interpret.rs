//! Natural-language query interpretation.
//!
//! Translates a free-text query into a [`FilterSet`] by case-insensitive
//! keyword and pattern matching. The rules run in a fixed order and each
//! writes one key, so independent rules co-occur while later rules
//! overwrite the specific key they target: "at least N characters"
//! overwrites a `min_length` set by "longer than N", and "first vowel"
//! overwrites any character set by the two "containing" phrasings. That
//! sequential-overwrite order is contract.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::EngineError;
use crate::models::FilterSet;

static LONGER_THAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"longer than (\d+)").unwrap());
static SHORTER_THAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"shorter than (\d+)").unwrap());
static AT_LEAST: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"at least (\d+)").unwrap());
static THE_LETTER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"letter ([a-z])").unwrap());
static CONTAINING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"containing ([a-z])").unwrap());

fn captured_number(folded: &str, re: &Regex) -> Option<i64> {
    re.captures(folded)?.get(1)?.as_str().parse().ok()
}

fn captured_letter(folded: &str, re: &Regex) -> Option<String> {
    Some(re.captures(folded)?.get(1)?.as_str().to_string())
}

/// Resolves `query` to a [`FilterSet`].
///
/// Errors: [`EngineError::InvalidValue`] for an empty/whitespace query,
/// [`EngineError::InvalidQuery`] when no pattern matches, and
/// [`EngineError::ConflictingFilters`] when the produced constraints fail
/// the shared legality check (e.g. "longer than 10 but shorter than 5").
pub fn interpret(query: &str) -> Result<FilterSet, EngineError> {
    if query.trim().is_empty() {
        return Err(EngineError::InvalidValue(
            "query cannot be empty".to_string(),
        ));
    }

    let folded = query.to_lowercase();
    let mut filters = FilterSet::default();

    // Rule 1: palindrome flag
    if folded.contains("palindrome") || folded.contains("palindromic") {
        filters.is_palindrome = Some(true);
    }

    // Rule 2: word-count phrases, mutually exclusive in practice
    if folded.contains("single word") {
        filters.word_count = Some(1);
    } else if folded.contains("two word") || folded.contains("2 word") {
        filters.word_count = Some(2);
    } else if folded.contains("three word") || folded.contains("3 word") {
        filters.word_count = Some(3);
    }

    // Rule 3: "longer than N" is an exclusive bound, stored inclusive
    if folded.contains("longer than") {
        if let Some(n) = captured_number(&folded, &LONGER_THAN) {
            filters.min_length = Some(n + 1);
        }
    }

    // Rule 4: "shorter than N", same translation on the upper bound
    if folded.contains("shorter than") {
        if let Some(n) = captured_number(&folded, &SHORTER_THAN) {
            filters.max_length = Some(n - 1);
        }
    }

    // Rule 5: "at least N characters" is already inclusive and overwrites
    // whatever rule 3 set
    if folded.contains("at least") && folded.contains("character") {
        if let Some(n) = captured_number(&folded, &AT_LEAST) {
            filters.min_length = Some(n);
        }
    }

    // Rule 6: "containing/contains the letter X"
    if folded.contains("containing the letter") || folded.contains("contains the letter") {
        if let Some(c) = captured_letter(&folded, &THE_LETTER) {
            filters.contains_character = Some(c);
        }
    }

    // Rule 7: bare "strings containing X". Rule 6 takes precedence when
    // both phrasings match, since this capture would grab the "t" of
    // "the" in "strings containing the letter x".
    if folded.contains("strings containing") && filters.contains_character.is_none() {
        if let Some(c) = captured_letter(&folded, &CONTAINING) {
            filters.contains_character = Some(c);
        }
    }

    // Rule 8: "first vowel" always means 'a' and runs last
    if folded.contains("first vowel") {
        filters.contains_character = Some("a".to_string());
    }

    if filters.is_empty() {
        return Err(EngineError::InvalidQuery);
    }

    // Same legality check as the structured path, but a violation here
    // originates from query phrasing, so it surfaces as ConflictingFilters.
    filters
        .validate()
        .map_err(|_| EngineError::ConflictingFilters)?;

    Ok(filters)
}
