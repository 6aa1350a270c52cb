//! Character classification and normalization for ladder rungs.

pub(crate) trait RungChar {
    /// Letters survive normalization; everything else is dropped.
    fn is_rung_letter(&self) -> bool;
}

impl RungChar for char {
    fn is_rung_letter(&self) -> bool {
        self.is_alphabetic()
    }
}

/// Normalize a rung: uppercase it, then drop every non-alphabetic character
/// (whitespace included).
///
/// Filtering happens after uppercasing because some uppercase expansions carry
/// combining marks (`ΐ` becomes `Ι` plus two accents). Normalizing an
/// already-normalized word is a no-op.
///
/// ```
/// use ladder_check::rung_char::normalize_word;
///
/// assert_eq!(normalize_word("  c-o-l-d! "), "COLD");
/// assert_eq!(normalize_word("COLD"), "COLD");
/// ```
#[must_use]
pub fn normalize_word(raw: &str) -> String {
    raw.chars()
        .flat_map(char::to_uppercase)
        .filter(RungChar::is_rung_letter)
        .collect()
}
