// src/core/types.rs
use crate::languages::{language_name, DEFAULT_ALLOWLIST};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// ISO 639-3 language code, e.g. "eng".
pub type LanguageCode = String;

/// Code reported when no reliable language can be identified.
pub const UNDETERMINED: &str = "und";

/// Inputs shorter than this (in characters) are not analysed.
pub const MIN_LENGTH: usize = 10;

/// Only this many leading characters of an input are analysed.
pub const MAX_LENGTH: usize = 2048;

/// Per-call detection options.
///
/// `only` and `ignore` act on language codes; for single-language scripts
/// they act on the script id, which doubles as the language code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Allowed languages. Empty means no restriction.
    pub only: HashSet<LanguageCode>,
    /// Excluded languages. Takes precedence over `only`.
    pub ignore: HashSet<LanguageCode>,
    pub min_length: usize,
    pub max_length: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            only: HashSet::new(),
            ignore: HashSet::new(),
            min_length: MIN_LENGTH,
            max_length: MAX_LENGTH,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options restricted to the curated [`DEFAULT_ALLOWLIST`], which gives
    /// better accuracy on short inputs.
    pub fn default_allowlist() -> Self {
        Self::default().with_only(DEFAULT_ALLOWLIST.iter().copied())
    }

    pub fn with_only<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.only.extend(codes.into_iter().map(Into::into));
        self
    }

    pub fn with_ignore<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore.extend(codes.into_iter().map(Into::into));
        self
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }
}

/// One ranked language guess.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub language: LanguageCode,
    /// In `[0, 1]`; 1.0 means certainty.
    pub confidence: f64,
}

impl Candidate {
    pub fn new(language: impl Into<String>, confidence: f64) -> Self {
        Self {
            language: language.into(),
            confidence,
        }
    }

    /// English name of the language, falling back to the code itself.
    pub fn name(&self) -> &str {
        language_name(&self.language).unwrap_or(self.language.as_str())
    }
}

/// Ranked detection outcome. Never empty, sorted by non-increasing
/// confidence, every confidence within `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectionResult(Vec<Candidate>);

impl DetectionResult {
    /// The `("und", 1.0)` outcome.
    pub fn undetermined() -> Self {
        Self::certain(UNDETERMINED)
    }

    /// A single language with confidence 1.0.
    pub fn certain(language: &str) -> Self {
        Self(vec![Candidate::new(language, 1.0)])
    }

    /// Builds a result from scored candidates, restoring the invariants:
    /// empty input becomes undetermined, confidences are clamped and the
    /// list is stably re-sorted by descending confidence.
    pub fn from_candidates(mut candidates: Vec<Candidate>) -> Self {
        if candidates.is_empty() {
            return Self::undetermined();
        }
        for candidate in candidates.iter_mut() {
            candidate.confidence = if candidate.confidence.is_finite() {
                candidate.confidence.clamp(0.0, 1.0)
            } else {
                0.0
            };
        }
        candidates.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        Self(candidates)
    }

    /// The best guess.
    pub fn top(&self) -> &Candidate {
        // Invariant: never empty.
        &self.0[0]
    }

    pub fn is_undetermined(&self) -> bool {
        self.0.len() == 1 && self.top().language == UNDETERMINED
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// A result always holds at least one candidate.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|c| c.language.as_str())
    }

    pub fn into_vec(self) -> Vec<Candidate> {
        self.0
    }
}

impl<'a> IntoIterator for &'a DetectionResult {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
