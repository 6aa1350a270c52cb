//! Generate error code documentation from the error enums themselves.
//!
//! Codes, descriptions, details and help text come from each enum's `code()`,
//! `description()`, `details()` and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use std::io;

use ladder_check::errors::{ExtractionError, ValidationError};
use ladder_check::pipeline::CheckError;
use ladder_check::word_list::DictionaryError;

/// Print one section entry per error, for any type with the documentation methods
macro_rules! generate_error_docs {
    ($errors:expr) => {
        for error in $errors {
            println!("### {}: {}\n", error.code(), error.description());
            println!("**Details:** {}\n", error.details());

            if let Some(help_text) = error.help() {
                println!("**How to fix:**");
                println!("```");
                println!("{help_text}");
                println!("```\n");
            }

            println!("**Example error message:**");
            println!("```");
            println!("{error}");
            println!("```\n");

            println!("**Detailed format:**");
            println!("```");
            println!("{}", error.display_detailed());
            println!("```\n");

            println!("---\n");
        }
    };
}

fn all_check_error_variants() -> Vec<CheckError> {
    vec![
        CheckError::Extraction(ExtractionError::NoPattern),
        CheckError::Validation(ValidationError::UnknownWord {
            index: 1,
            word: "QZXX".to_string(),
        }),
        CheckError::NotAnObject { found: "a string" },
    ]
}

fn all_extraction_error_variants() -> Vec<ExtractionError> {
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
        // RegexError--create by compiling an invalid regex
        ExtractionError::RegexError(
            fancy_regex::Regex::new("(?P<invalid").expect_err("pattern is deliberately invalid"),
        ),
    ]
}

fn all_validation_error_variants() -> Vec<ValidationError> {
    vec![
        ValidationError::TooShort { len: 1 },
        ValidationError::EmptyRung { index: 1, raw: "____".to_string() },
        ValidationError::UnknownWord { index: 2, word: "QZXX".to_string() },
        ValidationError::LengthMismatch { from: "CORE".to_string(), to: "CORED".to_string() },
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

fn all_dictionary_error_variants() -> Vec<DictionaryError> {
    vec![
        DictionaryError::Io {
            path: "data/words.txt".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        },
        DictionaryError::Missing { path: "data/words.txt".to_string() },
        DictionaryError::Empty,
    ]
}

fn main() {
    println!("# Error Code Reference\n");
    println!("**⚠️ This document is auto-generated from the source code. Do not edit manually.**\n");

    println!("## Table of Contents\n");
    println!("- [Record Errors (R001–R003)](#record-errors)");
    println!("- [Extraction Errors (X001–X005)](#extraction-errors)");
    println!("- [Validation Errors (V001–V006)](#validation-errors)");
    println!("- [Dictionary Errors (D001–D004)](#dictionary-errors)\n");

    println!("## Record Errors\n");
    println!("Top-level errors for one puzzle record. These wrap extraction and validation errors.\n");
    generate_error_docs!(all_check_error_variants());

    println!("## Extraction Errors\n");
    println!("Errors recovering the ladder from the record's fields.\n");
    generate_error_docs!(all_extraction_error_variants());

    println!("## Validation Errors\n");
    println!("Errors normalizing, looking up, or stepping between rungs.\n");
    generate_error_docs!(all_validation_error_variants());

    println!("## Dictionary Errors\n");
    println!("Errors loading or downloading the word list. D002 (download failure) is not shown; it wraps the HTTP client's error.\n");
    generate_error_docs!(all_dictionary_error_variants());

    println!("## Error Display Formats\n");
    println!("### Simple Format");
    println!("```");
    println!("Error: <message>");
    println!("```\n");
    println!("### Detailed Format (via `display_detailed()`)");
    println!("```");
    println!("<message> (<code>)");
    println!("<help text if available>");
    println!("```\n");
}
