//! Filter legality checks and record matching.
//!
//! Both entry points share one legality check: structured query parameters
//! surface a violation as [`InvalidFilter`], while constraints produced by
//! the natural-language interpreter surface the same violation as
//! [`ConflictingFilters`]. The check itself returns a neutral
//! [`FilterViolation`] so the caller picks the error kind.
//!
//! [`InvalidFilter`]: crate::error::EngineError::InvalidFilter
//! [`ConflictingFilters`]: crate::error::EngineError::ConflictingFilters

use crate::models::{AnalyzedRecord, FilterSet};

/// A filter legality violation, carrying the offending constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterViolation(pub String);

impl FilterSet {
    /// Checks the legality constraints: non-negative length bounds,
    /// `min_length <= max_length` when both are present, `word_count >= 1`,
    /// and a single-character `contains_character`.
    pub fn validate(&self) -> Result<(), FilterViolation> {
        if let Some(min) = self.min_length {
            if min < 0 {
                return Err(FilterViolation("min_length must be non-negative".to_string()));
            }
        }
        if let Some(max) = self.max_length {
            if max < 0 {
                return Err(FilterViolation("max_length must be non-negative".to_string()));
            }
        }
        if let (Some(min), Some(max)) = (self.min_length, self.max_length) {
            if min > max {
                return Err(FilterViolation(
                    "min_length must not exceed max_length".to_string(),
                ));
            }
        }
        if let Some(wc) = self.word_count {
            if wc < 1 {
                return Err(FilterViolation("word_count must be at least 1".to_string()));
            }
        }
        if let Some(c) = &self.contains_character {
            if c.chars().count() != 1 {
                return Err(FilterViolation(
                    "contains_character must be a single character".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// True iff every present constraint holds for `record`. Absent
    /// constraints hold vacuously, so the empty set matches everything.
    pub fn matches(&self, record: &AnalyzedRecord) -> bool {
        if let Some(palindrome) = self.is_palindrome {
            if record.is_palindrome != palindrome {
                return false;
            }
        }
        if let Some(min) = self.min_length {
            if record.length < min {
                return false;
            }
        }
        if let Some(max) = self.max_length {
            if record.length > max {
                return false;
            }
        }
        if let Some(wc) = self.word_count {
            if record.word_count != wc {
                return false;
            }
        }
        if let Some(c) = &self.contains_character {
            // Substring containment over the original value: case-sensitive.
            if !record.value.contains(c.as_str()) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer;
    use crate::models::AnalyzedRecord;
    use chrono::Utc;

    fn record(value: &str) -> AnalyzedRecord {
        let props = analyzer::analyze(value).unwrap();
        AnalyzedRecord {
            id: props.sha256_hash.clone(),
            value: value.to_string(),
            length: props.length,
            is_palindrome: props.is_palindrome,
            unique_characters: props.unique_characters,
            word_count: props.word_count,
            sha256_hash: props.sha256_hash,
            character_frequency: props.character_frequency_map,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_set_matches_everything() {
        let filters = FilterSet::default();
        assert!(filters.validate().is_ok());
        assert!(filters.matches(&record("anything at all")));
    }

    #[test]
    fn test_all_constraints_conjoin() {
        let filters = FilterSet {
            is_palindrome: Some(true),
            min_length: Some(5),
            max_length: Some(10),
            word_count: Some(1),
            contains_character: Some("r".to_string()),
        };
        assert!(filters.matches(&record("racecar")));
        // Fails the palindrome leg only
        assert!(!filters.matches(&record("rowdier")));
        // Fails the length leg only
        assert!(!filters.matches(&record("rotator-rotator")));
    }

    #[test]
    fn test_contains_character_is_case_sensitive() {
        let filters = FilterSet {
            contains_character: Some("h".to_string()),
            ..Default::default()
        };
        assert!(filters.matches(&record("hello")));
        assert!(!filters.matches(&record("Hello")));
    }

    #[test]
    fn test_length_bounds_are_inclusive() {
        let filters = FilterSet {
            min_length: Some(5),
            max_length: Some(5),
            ..Default::default()
        };
        assert!(filters.matches(&record("hello")));
        assert!(!filters.matches(&record("ciao")));
        assert!(!filters.matches(&record("sextet")));
    }

    #[test]
    fn test_validate_rejects_illegal_sets() {
        let min_over_max = FilterSet {
            min_length: Some(5),
            max_length: Some(3),
            ..Default::default()
        };
        assert!(min_over_max.validate().is_err());

        let negative = FilterSet {
            min_length: Some(-1),
            ..Default::default()
        };
        assert!(negative.validate().is_err());

        let zero_words = FilterSet {
            word_count: Some(0),
            ..Default::default()
        };
        assert!(zero_words.validate().is_err());

        let multi_char = FilterSet {
            contains_character: Some("ab".to_string()),
            ..Default::default()
        };
        assert!(multi_char.validate().is_err());
    }
}
