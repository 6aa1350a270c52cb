//! `word_list` — loading the dictionary that ladder rungs are checked against.
//!
//! The dictionary is built once per process and then only read. It is handed to the
//! validator as a [`Lexicon`], so tests can substitute a small in-memory word set.
//!
//! Accepted file format:
//! - One word per line, or `word;score` (the scored crossword-list format).
//! - Scored lines below `min_score` are skipped; unscored lines are always kept.
//! - Blank lines and lines starting with `#` are skipped.
//! - Words containing anything other than letters (spaces, hyphens, digits) are
//!   skipped, since they can never be a rung. The rest are stored in lookup form
//!   (see [`lookup_key`]), the same form rungs are looked up in.
//!
//! When the local file is missing, [`Dictionary::load_or_fetch`] downloads the list once
//! and caches it at the local path. The cached copy only appears once it is complete.

use std::collections::HashSet;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use log::{debug, info, warn};
use tempfile::NamedTempFile;
use ureq::config::Config;
use ureq::Agent;

use crate::rung_char::{normalize_word, RungChar};

/// Request timeout for fetching a remote word list.
const FETCH_TIMEOUT: Duration = Duration::from_secs(60);

/// Largest word list body accepted from a download.
const MAX_WORD_LIST_BYTES: u64 = 256 * 1024 * 1024;

/// The form a word is stored and looked up in: normalized, then lowercased.
///
/// Going through [`normalize_word`] on both sides keeps entries whose uppercase
/// form is longer than the original (`straße` → `STRASSE`) findable.
#[must_use]
pub fn lookup_key(word: &str) -> String {
    normalize_word(word).to_lowercase()
}

/// Read-only word-membership oracle.
///
/// Implementations receive words in [`lookup_key`] form.
pub trait Lexicon {
    fn contains(&self, word: &str) -> bool;
}

impl Lexicon for HashSet<String> {
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, word)
    }
}

impl<L: Lexicon + ?Sized> Lexicon for &L {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

/// Error raised while building a [`Dictionary`].
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to read word list from '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to fetch word list from {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("word list '{path}' does not exist and no download URL is configured")]
    Missing { path: String },

    #[error("word list contains no usable words")]
    Empty,
}

impl DictionaryError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            DictionaryError::Io { .. } => "D001",
            DictionaryError::Fetch { .. } => "D002",
            DictionaryError::Missing { .. } => "D003",
            DictionaryError::Empty => "D004",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            DictionaryError::Io { .. } => "Word list could not be read or cached",
            DictionaryError::Fetch { .. } => "Word list download failed",
            DictionaryError::Missing { .. } => "No local word list and no download URL",
            DictionaryError::Empty => "Word list has no usable words",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            DictionaryError::Io { .. } => "Reading the local word list, or writing the downloaded copy to the cache path, failed.",
            DictionaryError::Fetch { .. } => "The word list was not found locally and the HTTP request for it failed or returned a non-success status.",
            DictionaryError::Missing { .. } => "The dictionary path does not exist, and there is nowhere to download it from.",
            DictionaryError::Empty => "After skipping blank lines, comments, low-scoring entries and non-alphabetic entries, nothing was left.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            DictionaryError::Missing { .. } => Some("Pass --dictionary <PATH> or set LADDER_DICTIONARY_URL to download one"),
            DictionaryError::Empty => Some("Check the file format (one word per line, or word;score) and --min-score"),
            _ => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        crate::errors::format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// A processed, ready-to-use dictionary of lowercase words.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Parse a raw word list from an in-memory string.
    ///
    /// `min_score` only affects `word;score` lines. A scored line whose score does not
    /// parse is skipped.
    #[must_use]
    pub fn parse_from_str(contents: &str, min_score: Option<i32>) -> Dictionary {
        let words = contents
            .lines()
            .filter_map(|raw_line| {
                let line = raw_line.trim();
                if line.is_empty() || line.starts_with('#') {
                    return None;
                }

                let word_raw = match line.split_once(';') {
                    Some((word_raw, score_raw)) => {
                        let score: i32 = score_raw.trim().parse().ok()?;
                        if min_score.is_some_and(|min| score < min) {
                            return None;
                        }
                        word_raw
                    }
                    None => line,
                };

                let word = word_raw.trim();
                if word.is_empty() || !word.chars().all(|c| c.is_rung_letter()) {
                    None
                } else {
                    Some(lookup_key(word))
                }
            })
            .collect();

        Dictionary { words }
    }

    /// Read a word list from `path` and parse it.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Io`] if the file cannot be read and
    /// [`DictionaryError::Empty`] if nothing usable is in it.
    pub fn load_from_path<P: AsRef<Path>>(path: P, min_score: Option<i32>) -> Result<Dictionary, DictionaryError> {
        let path_ref = path.as_ref();
        let data = fs::read_to_string(path_ref).map_err(|source| DictionaryError::Io {
            path: path_ref.display().to_string(),
            source,
        })?;

        let dictionary = Self::parse_from_str(&data, min_score);
        info!("Loaded {} words from {}", dictionary.len(), path_ref.display());
        dictionary.non_empty()
    }

    /// Load the word list at `path`, downloading it from `url` first if the file does
    /// not exist yet. The downloaded text is written to `path` so later runs read it
    /// locally.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Missing`] if there is no file and no URL, plus the
    /// errors of [`Dictionary::load_from_path`] and of the download itself.
    pub fn load_or_fetch<P: AsRef<Path>>(
        path: P,
        url: Option<&str>,
        min_score: Option<i32>,
    ) -> Result<Dictionary, DictionaryError> {
        let path_ref = path.as_ref();
        if path_ref.exists() {
            return Self::load_from_path(path_ref, min_score);
        }

        let Some(url) = url else {
            return Err(DictionaryError::Missing {
                path: path_ref.display().to_string(),
            });
        };

        warn!("Word list {} not found; downloading from {url}", path_ref.display());
        let contents = fetch_word_list(url)?;
        cache_word_list(path_ref, &contents)?;

        let dictionary = Self::parse_from_str(&contents, min_score);
        info!("Fetched {} words from {url}", dictionary.len());
        dictionary.non_empty()
    }

    /// Number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn non_empty(self) -> Result<Dictionary, DictionaryError> {
        if self.is_empty() {
            Err(DictionaryError::Empty)
        } else {
            Ok(self)
        }
    }
}

impl Lexicon for Dictionary {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

impl FromIterator<String> for Dictionary {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Dictionary {
            words: iter.into_iter().map(|w| lookup_key(&w)).collect(),
        }
    }
}

fn fetch_word_list(url: &str) -> Result<String, DictionaryError> {
    let fetch_err = |source: ureq::Error| DictionaryError::Fetch {
        url: url.to_string(),
        source: Box::new(source),
    };

    let agent: Agent = Config::builder()
        .timeout_global(Some(FETCH_TIMEOUT))
        .build()
        .into();
    let mut response = agent.get(url).call().map_err(fetch_err)?;
    let body = response
        .body_mut()
        .with_config()
        .limit(MAX_WORD_LIST_BYTES)
        .read_to_string()
        .map_err(fetch_err)?;
    debug!("Downloaded {} bytes from {url}", body.len());
    Ok(body)
}

fn cache_word_list(path: &Path, contents: &str) -> Result<(), DictionaryError> {
    let io_err = |source: io::Error| DictionaryError::Io {
        path: path.display().to_string(),
        source,
    };

    let staged = stage_word_list(path, contents).map_err(io_err)?;
    staged.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}

/// Write `contents` to a temporary file in the directory of `path`.
///
/// Nothing exists at `path` until the returned file is persisted, and the rename
/// that persists it is atomic, so a concurrent reader sees either no list or the
/// whole list.
fn stage_word_list(path: &Path, contents: &str) -> io::Result<NamedTempFile> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(contents.as_bytes())?;
    staged.as_file().sync_all()?;
    Ok(staged)
}
