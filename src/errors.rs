//! Error types for ladder extraction and validation, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code for documentation lookup.
//!
//! Extraction (`X001`-`X005`):
//!
//! - X001: `NoPattern` (No ladder pattern found in the puzzle text)
//! - X002: `MissingField` (Required record field absent or not a string)
//! - X003: `InvalidLadderField` (Explicit ladder field is not a list of strings)
//! - X004: `AnswerWordCount` (Answer has the wrong number of words for the matched rule)
//! - X005: `RegexError` (Regex engine failure while matching)
//!
//! Validation (`V001`-`V006`):
//!
//! - V001: `TooShort` (Ladder has fewer than two rungs)
//! - V002: `EmptyRung` (A rung has no letters after normalization)
//! - V003: `UnknownWord` (A rung is not in the dictionary)
//! - V004: `LengthMismatch` (Adjacent rungs have different lengths)
//! - V005: `InvalidTransition` (Adjacent rungs do not differ by exactly one letter)
//! - V006: `RepeatedPosition` (Strict mode: a letter position was changed twice)
//!
//! # Examples
//!
//! ```
//! use ladder_check::errors::ValidationError;
//!
//! let err = ValidationError::UnknownWord { index: 2, word: "QZXX".to_string() };
//! assert_eq!(err.to_string(), "QZXX is not a recognised English word");
//! assert_eq!(err.code(), "V003");
//! println!("{}", err.display_detailed());
//! ```

/// Failure to recover a ladder from a puzzle record.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("no ladder pattern found")]
    NoPattern,

    #[error("record field \"{field}\" is missing or not a string")]
    MissingField { field: String },

    #[error("ladder field \"{field}\" must be a list of strings")]
    InvalidLadderField { field: String },

    #[error("{rule} pattern expects {expected} answer word(s), found {found} in \"{answer}\"")]
    AnswerWordCount {
        rule: &'static str,
        expected: usize,
        found: usize,
        answer: String,
    },

    #[error("regex failure: {0}")]
    RegexError(#[from] fancy_regex::Error),
}

impl ExtractionError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ExtractionError::NoPattern => "X001",
            ExtractionError::MissingField { .. } => "X002",
            ExtractionError::InvalidLadderField { .. } => "X003",
            ExtractionError::AnswerWordCount { .. } => "X004",
            ExtractionError::RegexError(_) => "X005",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            ExtractionError::NoPattern => "No ladder pattern found in the puzzle text",
            ExtractionError::MissingField { .. } => "Required record field absent or not a string",
            ExtractionError::InvalidLadderField { .. } => "Explicit ladder field is not a list of strings",
            ExtractionError::AnswerWordCount { .. } => "Answer has the wrong number of words",
            ExtractionError::RegexError(_) => "Regex engine failure while matching",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            ExtractionError::NoPattern => "The record has no explicit ladder, and its text contains neither the two-blank form `WORD ____ ____ WORD` nor the one-blank form `WORD ____ WORD` (four capital letters either side of the blanks).",
            ExtractionError::MissingField { .. } => "Without an explicit ladder, both the puzzle text and the answer are needed to rebuild the ladder.",
            ExtractionError::InvalidLadderField { .. } => "The explicit ladder field was present but was not a JSON array whose elements are all strings.",
            ExtractionError::AnswerWordCount { .. } => "The two-blank form needs an answer of exactly two space-separated words; the one-blank form needs exactly one.",
            ExtractionError::RegexError(_) => "The regex engine gave up while matching the puzzle text (for example, the backtrack limit was hit).",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ExtractionError::NoPattern => Some("Example text: 'COLD ____ WARM' or 'COLD ? ? WARM'"),
            ExtractionError::MissingField { .. } => Some("Supply the ladder directly, or both the question text and the correct answer"),
            ExtractionError::InvalidLadderField { .. } => Some("Example: \"set\": [\"COLD\", \"CORD\", \"WORD\"]"),
            ExtractionError::AnswerWordCount { .. } => Some("Example answers: 'CORD' for one blank, 'CORD WORD' for two blanks"),
            ExtractionError::RegexError(_) => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Failure of a ladder to pass normalization, the dictionary, or the rung checks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("ladder has {len} rung(s); at least 2 are required")]
    TooShort { len: usize },

    #[error("rung {index} (\"{raw}\") has no letters")]
    EmptyRung { index: usize, raw: String },

    #[error("{word} is not a recognised English word")]
    UnknownWord { index: usize, word: String },

    #[error("invalid transition: {from} → {to} (lengths differ)")]
    LengthMismatch { from: String, to: String },

    #[error("invalid transition: {from} → {to}")]
    InvalidTransition {
        from: String,
        to: String,
        differences: usize,
    },

    #[error("repeated letter change at index {position}")]
    RepeatedPosition {
        position: usize,
        from: String,
        to: String,
    },
}

impl ValidationError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::TooShort { .. } => "V001",
            ValidationError::EmptyRung { .. } => "V002",
            ValidationError::UnknownWord { .. } => "V003",
            ValidationError::LengthMismatch { .. } => "V004",
            ValidationError::InvalidTransition { .. } => "V005",
            ValidationError::RepeatedPosition { .. } => "V006",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            ValidationError::TooShort { .. } => "Ladder has fewer than two rungs",
            ValidationError::EmptyRung { .. } => "A rung has no letters after normalization",
            ValidationError::UnknownWord { .. } => "A rung is not in the dictionary",
            ValidationError::LengthMismatch { .. } => "Adjacent rungs have different lengths",
            ValidationError::InvalidTransition { .. } => "Adjacent rungs do not differ by exactly one letter",
            ValidationError::RepeatedPosition { .. } => "A letter position was changed more than once",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            ValidationError::TooShort { .. } => "A ladder needs a start word and an end word at the very least.",
            ValidationError::EmptyRung { .. } => "Rungs are normalized by dropping every non-alphabetic character. A rung made only of digits, punctuation or blanks normalizes to nothing.",
            ValidationError::UnknownWord { .. } => "Every rung is lowercased and looked up in the dictionary. The first rung that is missing, in ladder order, is reported.",
            ValidationError::LengthMismatch { .. } => "Each step of a ladder changes one letter in place, so two adjacent rungs must have the same length.",
            ValidationError::InvalidTransition { .. } => "Each step of a ladder must change exactly one letter. Identical rungs or rungs differing in two or more places are rejected.",
            ValidationError::RepeatedPosition { .. } => "In strict mode every step must change a letter slot that no earlier step has changed.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ValidationError::TooShort { .. } => Some("Example ladder: COLD, CORD, WORD"),
            ValidationError::EmptyRung { .. } => Some("Remove the empty rung or replace it with a word"),
            ValidationError::UnknownWord { .. } => Some("Check the spelling, or add the word to the dictionary file"),
            ValidationError::LengthMismatch { .. } => None,
            ValidationError::InvalidTransition { .. } => Some("Adjacent rungs must differ in exactly one letter (e.g., COLD → CORD)"),
            ValidationError::RepeatedPosition { .. } => Some("Change a different letter slot in each step, or validate without --strict"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn sample_extraction_errors() -> Vec<ExtractionError> {
        vec![
            ExtractionError::NoPattern,
            ExtractionError::MissingField { field: "correct_answer".to_string() },
            ExtractionError::InvalidLadderField { field: "set".to_string() },
            ExtractionError::AnswerWordCount {
                rule: "two-blank",
                expected: 2,
                found: 1,
                answer: "CORD".to_string(),
            },
        ]
    }

    fn sample_validation_errors() -> Vec<ValidationError> {
        vec![
            ValidationError::TooShort { len: 1 },
            ValidationError::EmptyRung { index: 0, raw: "42".to_string() },
            ValidationError::UnknownWord { index: 1, word: "QZXX".to_string() },
            ValidationError::LengthMismatch { from: "COLD".to_string(), to: "COLDS".to_string() },
            ValidationError::InvalidTransition {
                from: "CORD".to_string(),
                to: "WARM".to_string(),
                differences: 3,
            },
            ValidationError::RepeatedPosition {
                position: 1,
                from: "CARD".to_string(),
                to: "CORD".to_string(),
            },
        ]
    }

    #[test]
    fn test_messages_match_expected_wording() {
        let err = ValidationError::UnknownWord { index: 3, word: "QZXX".to_string() };
        assert_eq!(err.to_string(), "QZXX is not a recognised English word");

        let err = ValidationError::InvalidTransition {
            from: "CORD".to_string(),
            to: "WARM".to_string(),
            differences: 3,
        };
        assert_eq!(err.to_string(), "invalid transition: CORD → WARM");

        let err = ValidationError::RepeatedPosition {
            position: 2,
            from: "CORD".to_string(),
            to: "COLD".to_string(),
        };
        assert_eq!(err.to_string(), "repeated letter change at index 2");

        assert_eq!(ExtractionError::NoPattern.to_string(), "no ladder pattern found");
    }

    #[test]
    fn test_all_error_codes_are_unique() {
        let mut codes = HashSet::new();
        for err in sample_extraction_errors() {
            assert!(codes.insert(err.code()), "Duplicate error code found: {}", err.code());
        }
        for err in sample_validation_errors() {
            assert!(codes.insert(err.code()), "Duplicate error code found: {}", err.code());
        }
        assert_eq!(codes.len(), 10);
    }

    #[test]
    fn test_error_code_format() {
        let codes = sample_extraction_errors()
            .iter()
            .map(ExtractionError::code)
            .chain(sample_validation_errors().iter().map(ValidationError::code))
            .collect::<Vec<_>>();

        for code in codes {
            assert_eq!(code.len(), 4, "Error code '{code}' should be 4 characters");
            assert!(code.starts_with("X0") || code.starts_with("V0"), "Unexpected prefix in '{code}'");
            assert!(code[1..].parse::<u16>().is_ok(), "Error code '{code}' should end with a number");
        }
    }

    #[test]
    fn test_display_detailed_includes_code_and_help() {
        for err in sample_validation_errors() {
            let detailed = err.display_detailed();
            assert!(detailed.contains(err.code()));
            assert!(detailed.contains(&err.to_string()));
            if let Some(help) = err.help() {
                assert!(detailed.contains(help));
            }
        }
    }

    #[test]
    fn test_help_text_is_not_the_message() {
        for err in sample_extraction_errors() {
            if let Some(help) = err.help() {
                assert!(help.len() > 10, "Help text for {err:?} should be substantial");
                assert_ne!(help, err.to_string());
            }
        }
    }

    #[test]
    fn test_answer_word_count_names_the_rule() {
        let err = ExtractionError::AnswerWordCount {
            rule: "two-blank",
            expected: 2,
            found: 3,
            answer: "A B C".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("two-blank"));
        assert!(msg.contains('2') && msg.contains('3'));
    }
}
