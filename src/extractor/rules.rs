//! Extraction rules: each one recognises a blank pattern in puzzle text and rebuilds
//! the ladder from the matched end words plus the answer.

use fancy_regex::Regex;
use log::debug;

use crate::errors::ExtractionError;

/// Number of letters in the end words bracketing the blanks.
///
/// Fixed by the generator's puzzle template; a five-letter end word is not recognised.
pub const RUNG_LETTERS: usize = 4;

/// A blank is a run of underscores (never split into two blanks) or a single `?`.
const BLANK: &str = r"(?:(?>_+)|\?)";

/// A way of recovering a ladder from free text.
///
/// Rules are tried in order by [`super::Extractor`]; the first one whose pattern
/// matches decides the outcome, even if it then rejects the answer.
pub trait ExtractionRule: Send + Sync {
    /// Short name used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Returns `Ok(None)` if the text does not contain this rule's pattern.
    ///
    /// # Errors
    ///
    /// Returns an [`ExtractionError`] if the pattern matched but the answer does not
    /// fit it, or if the regex engine fails.
    fn apply(&self, text: &str, answer: &str) -> Result<Option<Vec<String>>, ExtractionError>;
}

/// `FIRST <blank> ... <blank> LAST`, with one answer word per blank.
#[derive(Debug)]
pub struct BlankRule {
    name: &'static str,
    blanks: usize,
    regex: Regex,
}

impl BlankRule {
    /// # Panics
    ///
    /// Panics if `blanks` is zero.
    #[must_use]
    pub fn new(name: &'static str, blanks: usize) -> BlankRule {
        assert!(blanks > 0, "a blank rule needs at least one blank");
        let regex = Regex::new(&blank_pattern(blanks)).expect("blank pattern is a valid regex");
        BlankRule { name, blanks, regex }
    }

    /// `WORD ____ ____ WORD` (or `WORD ? ? WORD`).
    #[must_use]
    pub fn two_blank() -> BlankRule {
        BlankRule::new("two-blank", 2)
    }

    /// `WORD ____ WORD` (or `WORD ? WORD`).
    #[must_use]
    pub fn one_blank() -> BlankRule {
        BlankRule::new("one-blank", 1)
    }
}

impl ExtractionRule for BlankRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn apply(&self, text: &str, answer: &str) -> Result<Option<Vec<String>>, ExtractionError> {
        let Some(cap) = self.regex.captures(text)? else {
            return Ok(None);
        };
        debug!("{} rule matched \"{}\"", self.name, &cap[0]);

        let fill: Vec<&str> = answer.split_whitespace().collect();
        if fill.len() != self.blanks {
            return Err(ExtractionError::AnswerWordCount {
                rule: self.name,
                expected: self.blanks,
                found: fill.len(),
                answer: answer.to_string(),
            });
        }

        let mut ladder = Vec::with_capacity(self.blanks + 2);
        ladder.push(cap[1].to_string());
        ladder.extend(fill.into_iter().map(str::to_string));
        ladder.push(cap[2].to_string());
        Ok(Some(ladder))
    }
}

/// Build the regex for `blanks` consecutive blanks between two end words.
///
/// End words are exactly [`RUNG_LETTERS`] capitals with no letter on either side.
fn blank_pattern(blanks: usize) -> String {
    let gaps = vec![BLANK; blanks].join(r"\s*");
    format!(
        r"(?<![A-Za-z])([A-Z]{{{RUNG_LETTERS}}})\s*{gaps}\s*([A-Z]{{{RUNG_LETTERS}}})(?![A-Za-z])"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(ladder: &[&str]) -> Vec<String> {
        ladder.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_blank_pattern_shape() {
        let pattern = blank_pattern(2);
        assert!(pattern.contains("[A-Z]{4}"));
        assert_eq!(pattern.matches(BLANK).count(), 2);
    }

    #[test]
    fn test_one_blank_underscores() {
        let rule = BlankRule::one_blank();
        let ladder = rule.apply("COLD ____ WARM", "CORD").unwrap();
        assert_eq!(ladder, Some(words(&["COLD", "CORD", "WARM"])));
    }

    #[test]
    fn test_one_blank_question_mark_without_spaces() {
        let rule = BlankRule::one_blank();
        let ladder = rule.apply("SAND?SONG", "SANG").unwrap();
        assert_eq!(ladder, Some(words(&["SAND", "SANG", "SONG"])));
    }

    #[test]
    fn test_one_blank_inside_longer_text() {
        let rule = BlankRule::one_blank();
        let text = "Change one letter at a time. LAMP ___ LIMB. What is the missing word?";
        let ladder = rule.apply(text, "LIMP").unwrap();
        assert_eq!(ladder, Some(words(&["LAMP", "LIMP", "LIMB"])));
    }

    #[test]
    fn test_two_blank_underscores() {
        let rule = BlankRule::two_blank();
        let ladder = rule.apply("COLD ____ ____ WARM", "CORD WORD").unwrap();
        assert_eq!(ladder, Some(words(&["COLD", "CORD", "WORD", "WARM"])));
    }

    #[test]
    fn test_two_blank_question_marks() {
        let rule = BlankRule::two_blank();
        let ladder = rule.apply("COLD ? ? WARM", "cord word").unwrap();
        assert_eq!(ladder, Some(words(&["COLD", "cord", "word", "WARM"])));
    }

    #[test]
    fn test_two_blank_does_not_split_an_underscore_run() {
        let rule = BlankRule::two_blank();
        assert_eq!(rule.apply("COLD ________ WARM", "CORD WORD").unwrap(), None);
    }

    #[test]
    fn test_one_blank_does_not_match_two_blanks() {
        let rule = BlankRule::one_blank();
        assert_eq!(rule.apply("COLD ____ ____ WARM", "CORD").unwrap(), None);
    }

    #[test]
    fn test_end_words_must_be_four_letters() {
        let rule = BlankRule::one_blank();
        assert_eq!(rule.apply("STONE ____ STORY", "STORE").unwrap(), None);
        assert_eq!(rule.apply("CAT ____ DOG", "COG").unwrap(), None);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let rule = BlankRule::one_blank();
        assert_eq!(rule.apply("cold ____ warm", "cord").unwrap(), None);
    }

    #[test]
    fn test_answer_word_count_mismatch() {
        let rule = BlankRule::two_blank();
        for answer in ["CORD", "CORD WORD WARD", ""] {
            let err = rule.apply("COLD ____ ____ WARM", answer).unwrap_err();
            assert!(
                matches!(err, ExtractionError::AnswerWordCount { expected: 2, .. }),
                "unexpected error for {answer:?}: {err:?}"
            );
        }
    }

    #[test]
    fn test_one_blank_rejects_two_word_answer() {
        let rule = BlankRule::one_blank();
        let err = rule.apply("COLD ____ WARM", "CORD WORD").unwrap_err();
        assert!(matches!(err, ExtractionError::AnswerWordCount { expected: 1, found: 2, .. }));
    }

    #[test]
    #[should_panic(expected = "at least one blank")]
    fn test_zero_blanks_panics() {
        let _ = BlankRule::new("none", 0);
    }
}
