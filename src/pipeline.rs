//! Checking whole puzzle records: extract the ladder, validate it, write it back.
//!
//! # Error Handling
//!
//! The pipeline uses [`CheckError`] with three variants:
//!
//! - R001: `Extraction` (Ladder could not be recovered (wraps [`ExtractionError`]))
//! - R002: `Validation` (Ladder failed validation (wraps [`ValidationError`]))
//! - R003: `NotAnObject` (Batch item is not a JSON object)
//!
//! # Examples
//!
//! ```
//! use std::collections::HashSet;
//! use ladder_check::pipeline::{check_record, CheckOptions};
//! use ladder_check::record::PuzzleRecord;
//!
//! let lexicon: HashSet<String> = ["cold", "cord", "word"].into_iter().map(String::from).collect();
//! let record: PuzzleRecord = serde_json::from_str(
//!     r#"{"question_text": "COLD ____ WORD", "correct_answer": "cord", "difficulty": "easy"}"#,
//! )?;
//!
//! let checked = check_record(&record, &CheckOptions::default(), &lexicon)?;
//! assert_eq!(checked.get("set"), Some(&serde_json::json!(["COLD", "CORD", "WORD"])));
//! assert_eq!(checked.get("difficulty"), record.get("difficulty"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use log::{debug, warn};
use rayon::prelude::*;
use serde_json::Value;

use crate::errors::{ExtractionError, ValidationError};
use crate::extractor;
use crate::record::{PuzzleRecord, RecordFields};
use crate::validator::{self, LadderMode};
use crate::word_list::Lexicon;

/// Everything about a check that is not the record or the dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckOptions {
    pub mode: LadderMode,
    pub fields: RecordFields,
}

/// Unified error type for checking one record.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Only produced for batch items; a single top-level value is checked by the caller.
    #[error("item is not a JSON object (found {found})")]
    NotAnObject { found: &'static str },
}

impl CheckError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            CheckError::Extraction(_) => "R001",
            CheckError::Validation(_) => "R002",
            CheckError::NotAnObject { .. } => "R003",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            CheckError::Extraction(_) => "Ladder could not be recovered from the record",
            CheckError::Validation(_) => "Ladder failed validation",
            CheckError::NotAnObject { .. } => "Item is not a JSON object",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            CheckError::Extraction(_) => "This wraps an underlying ExtractionError (see Extraction Errors section for specific error codes).",
            CheckError::Validation(_) => "This wraps an underlying ValidationError (see Validation Errors section for specific error codes).",
            CheckError::NotAnObject { .. } => "Each puzzle item must be a JSON object of named fields. Strings, numbers, arrays and null cannot be checked.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            CheckError::NotAnObject { .. } => Some("Example item: {\"question_text\": \"COLD ____ WARM\", \"correct_answer\": \"CORD\"}"),
            // wrapped errors have their own help
            _ => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            CheckError::Extraction(e) => format!("{}\n  caused by: {}", self.code(), e.display_detailed()),
            CheckError::Validation(e) => format!("{}\n  caused by: {}", self.code(), e.display_detailed()),
            CheckError::NotAnObject { .. } => {
                crate::errors::format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
            }
        }
    }
}

/// Check one record and return a new record carrying the normalized ladder.
///
/// The input record is not modified.
///
/// # Errors
///
/// Returns a [`CheckError`] if the ladder cannot be extracted or fails validation.
pub fn check_record<L>(record: &PuzzleRecord, options: &CheckOptions, lexicon: &L) -> Result<PuzzleRecord, CheckError>
where
    L: Lexicon + ?Sized,
{
    let raw = extractor::extract(record, &options.fields)?;
    let ladder = validator::validate(&raw, options.mode, lexicon)?;
    debug!("Accepted ladder {ladder}");
    Ok(record.with_ladder(&options.fields.ladder, ladder.rungs()))
}

/// Check a batch of JSON values independently, in parallel, keeping their order.
pub fn check_batch<L>(items: &[Value], options: &CheckOptions, lexicon: &L) -> Vec<Result<PuzzleRecord, CheckError>>
where
    L: Lexicon + Sync + ?Sized,
{
    items
        .par_iter()
        .enumerate()
        .map(|(index, item)| {
            let result = match item {
                Value::Object(fields) => check_record(&PuzzleRecord::new(fields.clone()), options, lexicon),
                other => Err(CheckError::NotAnObject { found: json_type_name(other) }),
            };
            if let Err(e) = &result {
                warn!("Item {index} rejected: {e}");
            }
            result
        })
        .collect()
}

/// Human-readable JSON type of `value`, for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
