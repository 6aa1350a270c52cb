//! Recovering the ordered rung list from a puzzle record.
//!
//! An explicit ladder field always wins. Without one, the record's text is matched
//! against the extraction rules in priority order (most specific first) and the
//! answer is spliced into the blanks. No dictionary checks happen here.

pub mod rules;

use std::sync::LazyLock;

use log::debug;
use serde_json::Value;

use crate::errors::ExtractionError;
use crate::record::{PuzzleRecord, RecordFields};

pub use rules::{BlankRule, ExtractionRule, RUNG_LETTERS};

/// Rungs as found in the record, before normalization.
pub type RawLadder = Vec<String>;

static DEFAULT_EXTRACTOR: LazyLock<Extractor> = LazyLock::new(Extractor::default);

/// An ordered list of extraction rules.
pub struct Extractor {
    rules: Vec<Box<dyn ExtractionRule>>,
}

impl Default for Extractor {
    /// The two-blank rule, then the one-blank rule.
    fn default() -> Self {
        Extractor::empty()
            .with_rule(BlankRule::two_blank())
            .with_rule(BlankRule::one_blank())
    }
}

impl Extractor {
    /// An extractor with no free-text rules; only explicit ladders are accepted.
    #[must_use]
    pub fn empty() -> Self {
        Extractor { rules: Vec::new() }
    }

    /// Append a rule, tried after every rule already present.
    #[must_use]
    pub fn with_rule(mut self, rule: impl ExtractionRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Names of the rules in the order they are tried.
    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.name())
    }

    /// Recover the raw ladder from `record`.
    ///
    /// # Errors
    ///
    /// - [`ExtractionError::InvalidLadderField`] if the ladder field is present but not
    ///   a list of strings.
    /// - [`ExtractionError::MissingField`] if there is no ladder and the text or answer
    ///   is missing.
    /// - [`ExtractionError::NoPattern`] if no rule matches the text.
    /// - Whatever the first matching rule reports about the answer.
    pub fn extract(&self, record: &PuzzleRecord, fields: &RecordFields) -> Result<RawLadder, ExtractionError> {
        match record.get(&fields.ladder) {
            None | Some(Value::Null) => {}
            Some(value) => return explicit_ladder(value, &fields.ladder),
        }

        let text = required_str(record, &fields.text)?;
        let answer = required_str(record, &fields.answer)?;

        for rule in &self.rules {
            if let Some(ladder) = rule.apply(text, answer)? {
                debug!("Recovered {} rungs with the {} rule", ladder.len(), rule.name());
                return Ok(ladder);
            }
        }

        Err(ExtractionError::NoPattern)
    }
}

/// Recover the raw ladder from `record` using the default rules.
///
/// # Errors
///
/// See [`Extractor::extract`].
pub fn extract(record: &PuzzleRecord, fields: &RecordFields) -> Result<RawLadder, ExtractionError> {
    DEFAULT_EXTRACTOR.extract(record, fields)
}

fn explicit_ladder(value: &Value, field: &str) -> Result<RawLadder, ExtractionError> {
    let invalid = || ExtractionError::InvalidLadderField { field: field.to_string() };

    value
        .as_array()
        .ok_or_else(invalid)?
        .iter()
        .map(|rung| rung.as_str().map(str::to_string).ok_or_else(invalid))
        .collect()
}

fn required_str<'a>(record: &'a PuzzleRecord, field: &str) -> Result<&'a str, ExtractionError> {
    record.get_str(field).ok_or_else(|| ExtractionError::MissingField { field: field.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> PuzzleRecord {
        PuzzleRecord::try_from(value).unwrap()
    }

    fn words(ladder: &[&str]) -> RawLadder {
        ladder.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_default_rule_order() {
        let names: Vec<_> = Extractor::default().rule_names().collect();
        assert_eq!(names, vec!["two-blank", "one-blank"]);
    }

    #[test]
    fn test_explicit_ladder_is_returned_as_is() {
        let rec = record(json!({
            "set": ["cold", " Cord ", "word"],
            "question_text": "SAND ____ SONG",
            "correct_answer": "SANG",
        }));

        let ladder = extract(&rec, &RecordFields::default()).unwrap();

        assert_eq!(ladder, words(&["cold", " Cord ", "word"]));
    }

    #[test]
    fn test_explicit_ladder_must_be_strings() {
        let fields = RecordFields::default();

        let err = extract(&record(json!({"set": "COLD CORD"})), &fields).unwrap_err();
        assert!(matches!(err, ExtractionError::InvalidLadderField { .. }));

        let err = extract(&record(json!({"set": ["COLD", 7]})), &fields).unwrap_err();
        assert!(matches!(err, ExtractionError::InvalidLadderField { .. }));
    }

    #[test]
    fn test_null_ladder_falls_back_to_text() {
        let rec = record(json!({
            "set": null,
            "question_text": "COLD ____ WARM",
            "correct_answer": "CORD",
        }));

        let ladder = extract(&rec, &RecordFields::default()).unwrap();

        assert_eq!(ladder, words(&["COLD", "CORD", "WARM"]));
    }

    #[test]
    fn test_two_blank_is_tried_first() {
        let rec = record(json!({
            "question_text": "COLD ____ ____ WARM",
            "correct_answer": "CORD WORD",
        }));

        let ladder = extract(&rec, &RecordFields::default()).unwrap();

        assert_eq!(ladder, words(&["COLD", "CORD", "WORD", "WARM"]));
    }

    #[test]
    fn test_two_blank_with_wrong_answer_count_does_not_fall_through() {
        let rec = record(json!({
            "question_text": "COLD ? ? WARM",
            "correct_answer": "CORD",
        }));

        let err = extract(&rec, &RecordFields::default()).unwrap_err();

        assert!(matches!(err, ExtractionError::AnswerWordCount { rule: "two-blank", .. }));
    }

    #[test]
    fn test_no_pattern() {
        let rec = record(json!({
            "question_text": "Rearrange the letters to make a word.",
            "correct_answer": "CORD",
        }));

        let err = extract(&rec, &RecordFields::default()).unwrap_err();

        assert!(matches!(err, ExtractionError::NoPattern));
        assert_eq!(err.to_string(), "no ladder pattern found");
    }

    #[test]
    fn test_missing_text_or_answer() {
        let fields = RecordFields::default();

        let err = extract(&record(json!({"correct_answer": "CORD"})), &fields).unwrap_err();
        assert!(matches!(err, ExtractionError::MissingField { ref field } if field == "question_text"));

        let err = extract(&record(json!({"question_text": "COLD ____ WARM"})), &fields).unwrap_err();
        assert!(matches!(err, ExtractionError::MissingField { ref field } if field == "correct_answer"));
    }

    #[test]
    fn test_custom_field_names() {
        let fields = RecordFields {
            ladder: "rungs".to_string(),
            text: "prompt".to_string(),
            answer: "solution".to_string(),
        };
        let rec = record(json!({"prompt": "LAMP ? LIMB", "solution": "LIMP"}));

        let ladder = extract(&rec, &fields).unwrap();

        assert_eq!(ladder, words(&["LAMP", "LIMP", "LIMB"]));
    }

    #[test]
    fn test_empty_extractor_needs_explicit_ladder() {
        let rec = record(json!({"question_text": "COLD ____ WARM", "correct_answer": "CORD"}));

        let err = Extractor::empty().extract(&rec, &RecordFields::default()).unwrap_err();

        assert!(matches!(err, ExtractionError::NoPattern));
    }

    struct ArrowRule;

    impl ExtractionRule for ArrowRule {
        fn name(&self) -> &'static str {
            "arrow"
        }

        fn apply(&self, text: &str, _answer: &str) -> Result<Option<Vec<String>>, ExtractionError> {
            Ok(text.contains("->").then(|| text.split("->").map(|w| w.trim().to_string()).collect()))
        }
    }

    #[test]
    fn test_custom_rule_is_tried_after_defaults() {
        let extractor = Extractor::default().with_rule(ArrowRule);
        let rec = record(json!({"question_text": "cold -> cord -> word", "correct_answer": ""}));

        let ladder = extractor.extract(&rec, &RecordFields::default()).unwrap();

        assert_eq!(ladder, words(&["cold", "cord", "word"]));
        assert_eq!(extractor.rule_names().last(), Some("arrow"));
    }
}
