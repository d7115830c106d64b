//! Pure string analysis.
//!
//! [`analyze`] computes every structural property of a string in one pass
//! over a single case-folded copy, plus the SHA-256 content hash of the
//! original bytes. The hash doubles as the record identity, so analysis is
//! deterministic and side-effect free: the same input always produces the
//! same record id.

use std::collections::HashMap;

use sha2::{Digest, Sha256};

use crate::error::EngineError;
use crate::models::StringProperties;

/// Lowercase hex SHA-256 of the UTF-8 bytes of `value`, unmodified.
/// This is the record identity: case-distinct texts hash differently.
pub fn content_hash(value: &str) -> String {
    hex::encode(Sha256::digest(value.as_bytes()))
}

/// Analyzes `value` and returns its structural properties.
///
/// Rejects empty and whitespace-only input with
/// [`EngineError::InvalidValue`]. The algorithm is total otherwise.
pub fn analyze(value: &str) -> Result<StringProperties, EngineError> {
    if value.trim().is_empty() {
        return Err(EngineError::InvalidValue(
            "'value' must be a non-empty string".to_string(),
        ));
    }

    let folded = value.to_lowercase();
    let frequency = frequency_map(&folded);

    // Unique characters come from the same folded copy as the frequency
    // map, so the two views of the text cannot drift apart.
    let unique_characters = frequency.len() as i64;

    Ok(StringProperties {
        length: value.encode_utf16().count() as i64,
        is_palindrome: is_palindrome(&folded),
        unique_characters,
        word_count: word_count(value),
        sha256_hash: content_hash(value),
        character_frequency_map: frequency,
    })
}

/// Palindrome test over already case-folded text: strip all whitespace,
/// compare to the reversal.
fn is_palindrome(folded: &str) -> bool {
    let cleaned: Vec<char> = folded.chars().filter(|c| !c.is_whitespace()).collect();
    cleaned.iter().eq(cleaned.iter().rev())
}

/// Count of non-empty tokens delimited by runs of space, tab, newline,
/// or carriage return.
fn word_count(value: &str) -> i64 {
    value
        .split([' ', '\t', '\n', '\r'])
        .filter(|token| !token.is_empty())
        .count() as i64
}

/// Occurrence count per character of the case-folded text. Every
/// character counts, non-letters included.
fn frequency_map(folded: &str) -> HashMap<String, i64> {
    let mut map = HashMap::new();
    for c in folded.chars() {
        *map.entry(c.to_string()).or_insert(0) += 1;
    }
    map
}
