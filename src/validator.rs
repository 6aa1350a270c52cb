//! The ladder validator: normalization, dictionary membership, and the
//! one-letter-change rule between adjacent rungs.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashSet;
//! use ladder_check::validator::{validate, LadderMode};
//!
//! let lexicon: HashSet<String> = ["cold", "cord", "word", "ward"]
//!     .into_iter()
//!     .map(String::from)
//!     .collect();
//!
//! let raw = vec!["cold".to_string(), "cord".to_string(), "word".to_string()];
//! let ladder = validate(&raw, LadderMode::Strict, &lexicon)?;
//! assert_eq!(ladder.rungs(), ["COLD", "CORD", "WORD"]);
//! # Ok::<(), ladder_check::errors::ValidationError>(())
//! ```

use std::collections::BTreeSet;
use std::fmt;

use log::debug;

use crate::errors::ValidationError;
use crate::rung_char::normalize_word;
use crate::word_list::{lookup_key, Lexicon};

/// Whether letter positions may be changed more than once along a ladder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LadderMode {
    /// Every step changes exactly one letter.
    #[default]
    Lenient,
    /// Additionally, every step changes a letter slot no earlier step changed.
    Strict,
}

/// A validated ladder of normalized (uppercase, letters-only) rungs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordLadder {
    rungs: Vec<String>,
}

impl WordLadder {
    #[must_use]
    pub fn rungs(&self) -> &[String] {
        &self.rungs
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rungs.len()
    }

    /// Always false: a validated ladder has at least two rungs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rungs.is_empty()
    }

    #[must_use]
    pub fn into_rungs(self) -> Vec<String> {
        self.rungs
    }
}

impl fmt::Display for WordLadder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rungs.join(" → "))
    }
}

/// Indices at which `a` and `b` differ, or `None` if their lengths differ.
///
/// Lengths are counted in characters, not bytes.
#[must_use]
pub fn changed_positions(a: &str, b: &str) -> Option<Vec<usize>> {
    if a.chars().count() != b.chars().count() {
        return None;
    }
    Some(
        a.chars()
            .zip(b.chars())
            .enumerate()
            .filter_map(|(i, (ca, cb))| (ca != cb).then_some(i))
            .collect(),
    )
}

/// The single index at which `a` and `b` differ.
///
/// `None` if the lengths differ, the words are identical, or they differ in more
/// than one place.
#[must_use]
pub fn one_letter_change(a: &str, b: &str) -> Option<usize> {
    match changed_positions(a, b)?.as_slice() {
        [i] => Some(*i),
        _ => None,
    }
}

/// Validate `raw` as a ladder under `mode`, checking words against `lexicon`.
///
/// Steps, each stopping at the first failure:
/// 1. normalize every rung (letters only, uppercase);
/// 2. look every rung up in the lexicon, in ladder order;
/// 3. check every adjacent pair for a single-letter change, tracking the
///    consumed positions in [`LadderMode::Strict`].
///
/// # Errors
///
/// Returns the [`ValidationError`] for the first rung or pair that fails.
pub fn validate<S, L>(raw: &[S], mode: LadderMode, lexicon: &L) -> Result<WordLadder, ValidationError>
where
    S: AsRef<str>,
    L: Lexicon + ?Sized,
{
    if raw.len() < 2 {
        return Err(ValidationError::TooShort { len: raw.len() });
    }

    let rungs = raw
        .iter()
        .enumerate()
        .map(|(index, rung)| {
            let word = normalize_word(rung.as_ref());
            if word.is_empty() {
                Err(ValidationError::EmptyRung { index, raw: rung.as_ref().to_string() })
            } else {
                Ok(word)
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    if let Some((index, word)) = rungs
        .iter()
        .enumerate()
        .find(|(_, word)| !lexicon.contains(&lookup_key(word)))
    {
        debug!("Rejecting ladder: {word} is not in the dictionary");
        return Err(ValidationError::UnknownWord { index, word: word.clone() });
    }

    check_transitions(&rungs, mode)?;

    Ok(WordLadder { rungs })
}

/// Scan adjacent pairs of normalized rungs.
fn check_transitions(rungs: &[String], mode: LadderMode) -> Result<(), ValidationError> {
    // positions not yet changed by an earlier step (strict mode only)
    let mut available: BTreeSet<usize> = (0..rungs[0].chars().count()).collect();

    for pair in rungs.windows(2) {
        let [from, to] = pair else { unreachable!() };

        let Some(positions) = changed_positions(from, to) else {
            return Err(ValidationError::LengthMismatch {
                from: from.clone(),
                to: to.clone(),
            });
        };

        let &[position] = positions.as_slice() else {
            return Err(ValidationError::InvalidTransition {
                from: from.clone(),
                to: to.clone(),
                differences: positions.len(),
            });
        };

        if mode == LadderMode::Strict && !available.remove(&position) {
            return Err(ValidationError::RepeatedPosition {
                position,
                from: from.clone(),
                to: to.clone(),
            });
        }
    }

    Ok(())
}
