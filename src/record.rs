//! Puzzle records as they arrive from the generator: a JSON object of named fields.
//!
//! The checker reads three fields (see [`RecordFields`]) and writes only the ladder
//! field back. Every other field passes through untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Default name of the explicit ladder field.
pub const DEFAULT_LADDER_FIELD: &str = "set";
/// Default name of the free-text puzzle description field.
pub const DEFAULT_TEXT_FIELD: &str = "question_text";
/// Default name of the answer field.
pub const DEFAULT_ANSWER_FIELD: &str = "correct_answer";

/// Names of the record fields the checker reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFields {
    /// Ordered list of rungs; read if present, always written on success.
    pub ladder: String,
    /// Free text holding a `WORD ____ WORD` style pattern.
    pub text: String,
    /// The word(s) that fill the blanks.
    pub answer: String,
}

impl Default for RecordFields {
    fn default() -> Self {
        RecordFields {
            ladder: DEFAULT_LADDER_FIELD.to_string(),
            text: DEFAULT_TEXT_FIELD.to_string(),
            answer: DEFAULT_ANSWER_FIELD.to_string(),
        }
    }
}

/// One puzzle item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PuzzleRecord {
    fields: Map<String, Value>,
}

impl PuzzleRecord {
    #[must_use]
    pub fn new(fields: Map<String, Value>) -> Self {
        PuzzleRecord { fields }
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// The value of `field` if it is present and a string.
    #[must_use]
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    /// Build a new record equal to this one with `field` set to `ladder`.
    #[must_use]
    pub fn with_ladder(&self, field: &str, ladder: &[String]) -> PuzzleRecord {
        let mut fields = self.fields.clone();
        let rungs = ladder.iter().cloned().map(Value::String).collect();
        fields.insert(field.to_string(), Value::Array(rungs));
        PuzzleRecord { fields }
    }

    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.fields
    }
}

impl TryFrom<Value> for PuzzleRecord {
    type Error = Value;

    /// Only JSON objects are records; anything else is handed back unchanged.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(PuzzleRecord { fields }),
            other => Err(other),
        }
    }
}

impl From<PuzzleRecord> for Value {
    fn from(record: PuzzleRecord) -> Self {
        Value::Object(record.fields)
    }
}
