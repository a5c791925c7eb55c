// File: src/core/trigram.rs
use indexmap::IndexMap;
use std::iter;

/// ASCII punctuation and digits, treated as word separators.
const SEPARATORS: std::ops::RangeInclusive<char> = '\u{0021}'..='\u{0040}';
/// Not whitespace to `char::is_whitespace`, but treated as such.
const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Trigram counts of one input, most frequent first. The position of an
/// entry is its rank; equal counts keep first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrigramProfile {
    entries: Vec<(String, usize)>,
}

impl TrigramProfile {
    /// Sorts `(trigram, count)` pairs by descending count, stably.
    pub fn from_counts(mut entries: Vec<(String, usize)>) -> Self {
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        Self { entries }
    }

    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    /// `(rank, trigram)` pairs in rank order.
    pub fn ranked(&self) -> impl Iterator<Item = (usize, &str)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(rank, (trigram, _))| (rank, trigram.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Replaces ASCII punctuation and digits with spaces, collapses whitespace
/// runs into one space, trims and lower-cases.
pub fn clean(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars() {
        if c.is_whitespace() || c == BYTE_ORDER_MARK || SEPARATORS.contains(&c) {
            pending_space = !cleaned.is_empty();
            continue;
        }
        if pending_space {
            cleaned.push(' ');
            pending_space = false;
        }
        cleaned.push(c);
    }
    cleaned.to_lowercase()
}

/// Cleans `text` and counts its trigrams.
pub fn extract(text: &str) -> TrigramProfile {
    extract_cleaned(&clean(text))
}

/// Counts the trigrams of already cleaned text, padded with one space on
/// each side so word edges produce trigrams of their own.
pub fn extract_cleaned(cleaned: &str) -> TrigramProfile {
    let padded: Vec<char> = iter::once(' ')
        .chain(cleaned.chars())
        .chain(iter::once(' '))
        .collect();
    if padded.len() < 3 {
        return TrigramProfile::default();
    }

    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for window in padded.windows(3) {
        let trigram: String = window.iter().collect();
        *counts.entry(trigram).or_insert(0) += 1;
    }
    TrigramProfile::from_counts(counts.into_iter().collect())
}
