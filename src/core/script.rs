// File: src/core/script.rs
//! Writing-system classification.
//!
//! Each configured [`Script`] owns a [`ScriptMatcher`] that counts the
//! characters of a text belonging to it. The classifier picks the script
//! with the highest share of the text; scripts are tried in table order and
//! an exact tie keeps the earlier one, so table order is observable.

use crate::error::{DataError, DataResult};
use regex::Regex;
use std::fmt;
use std::ops::RangeInclusive;

/// Counts characters of a text that belong to one writing system.
pub trait ScriptMatcher: fmt::Debug + Send + Sync {
    fn count_matches(&self, text: &str) -> usize;
}

/// Matcher backed by a compiled single-character class, e.g. `[Ѐ-ӿ]`.
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    pattern: Regex,
}

impl RegexMatcher {
    pub fn new(pattern: Regex) -> Self {
        Self { pattern }
    }
}

impl ScriptMatcher for RegexMatcher {
    fn count_matches(&self, text: &str) -> usize {
        // Counted per character so a multi-char pattern still yields a char count.
        self.pattern
            .find_iter(text)
            .map(|m| m.as_str().chars().count())
            .sum()
    }
}

/// Matcher backed by an explicit table of Unicode ranges.
#[derive(Debug, Clone)]
pub struct RangeMatcher {
    ranges: Vec<RangeInclusive<char>>,
}

impl RangeMatcher {
    pub fn new(ranges: Vec<RangeInclusive<char>>) -> Self {
        Self { ranges }
    }

    pub fn contains(&self, c: char) -> bool {
        self.ranges.iter().any(|range| range.contains(&c))
    }
}

impl ScriptMatcher for RangeMatcher {
    fn count_matches(&self, text: &str) -> usize {
        text.chars().filter(|&c| self.contains(c)).count()
    }
}

/// A configured writing system.
///
/// For a single-language script the id is itself the language code that
/// detection reports, and no trigram analysis happens.
#[derive(Debug)]
pub struct Script {
    id: String,
    matcher: Box<dyn ScriptMatcher>,
    single_language: bool,
}

impl Script {
    pub fn new(id: impl Into<String>, matcher: Box<dyn ScriptMatcher>) -> Self {
        Self {
            id: id.into(),
            matcher,
            single_language: false,
        }
    }

    pub fn from_ranges(id: impl Into<String>, ranges: Vec<RangeInclusive<char>>) -> Self {
        Self::new(id, Box::new(RangeMatcher::new(ranges)))
    }

    /// Compiles `pattern`; fails with [`DataError::InvalidPattern`].
    pub fn from_pattern(id: impl Into<String>, pattern: &str) -> DataResult<Self> {
        let id = id.into();
        let regex = Regex::new(pattern).map_err(|source| DataError::InvalidPattern {
            script: id.clone(),
            source,
        })?;
        Ok(Self::new(id, Box::new(RegexMatcher::new(regex))))
    }

    /// Marks the script as written in exactly one language, whose code is
    /// the script id.
    pub fn single_language(mut self) -> Self {
        self.single_language = true;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_single_language(&self) -> bool {
        self.single_language
    }

    pub fn count_matches(&self, text: &str) -> usize {
        self.matcher.count_matches(text)
    }
}

/// Outcome of script classification.
#[derive(Debug, Clone, Copy)]
pub struct ScriptMatch<'a> {
    pub script: &'a Script,
    /// Share of the text's characters matched by the script, in `(0, 1]`.
    pub ratio: f64,
}

/// Ordered set of scripts.
#[derive(Debug)]
pub struct ScriptTable {
    scripts: Vec<Script>,
}

impl ScriptTable {
    pub fn new(scripts: Vec<Script>) -> DataResult<Self> {
        if scripts.iter().any(|script| script.id.is_empty()) {
            return Err(DataError::MissingField { field: "script id" });
        }
        Ok(Self { scripts })
    }

    pub fn get(&self, id: &str) -> Option<&Script> {
        self.scripts.iter().find(|script| script.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Script> {
        self.scripts.iter()
    }

    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }

    /// Picks the script with the strictly greatest match ratio. Returns
    /// `None` for empty text or when nothing matches.
    pub fn classify(&self, text: &str) -> Option<ScriptMatch<'_>> {
        let length = text.chars().count();
        if length == 0 {
            return None;
        }

        let mut best: Option<ScriptMatch<'_>> = None;
        for script in &self.scripts {
            let count = script.count_matches(text);
            if count == 0 {
                continue;
            }
            let ratio = count as f64 / length as f64;
            if best.map_or(true, |b| ratio > b.ratio) {
                best = Some(ScriptMatch { script, ratio });
            }
        }
        best
    }
}

impl Default for ScriptTable {
    /// Built-in table, most widely used scripts first. Multi-language
    /// scripts use ISO 15924 ids; single-language scripts use the ISO 639-3
    /// code of their language.
    fn default() -> Self {
        let scripts = vec![
            Script::from_ranges(
                "Latn",
                vec![
                    'A'..='Z',
                    'a'..='z',
                    '\u{00AA}'..='\u{00AA}',
                    '\u{00BA}'..='\u{00BA}',
                    '\u{00C0}'..='\u{00D6}',
                    '\u{00D8}'..='\u{00F6}',
                    '\u{00F8}'..='\u{024F}',
                    '\u{0250}'..='\u{02AF}',
                    '\u{1D00}'..='\u{1DBF}',
                    '\u{1E00}'..='\u{1EFF}',
                    '\u{2C60}'..='\u{2C7F}',
                    '\u{A720}'..='\u{A7FF}',
                    '\u{AB30}'..='\u{AB6F}',
                    '\u{FB00}'..='\u{FB06}',
                ],
            ),
            Script::from_ranges(
                "cmn",
                vec![
                    '\u{2E80}'..='\u{2EFF}',
                    '\u{2F00}'..='\u{2FDF}',
                    '\u{31C0}'..='\u{31EF}',
                    '\u{3400}'..='\u{4DBF}',
                    '\u{4E00}'..='\u{9FFF}',
                    '\u{20000}'..='\u{2A6DF}',
                ],
            )
            .single_language(),
            Script::from_ranges(
                "Arab",
                vec![
                    '\u{0600}'..='\u{06FF}',
                    '\u{0750}'..='\u{077F}',
                    '\u{0870}'..='\u{089F}',
                    '\u{08A0}'..='\u{08FF}',
                    '\u{FB50}'..='\u{FDFF}',
                    '\u{FE70}'..='\u{FEFF}',
                ],
            ),
            Script::from_ranges(
                "Deva",
                vec![
                    '\u{0900}'..='\u{097F}',
                    '\u{1CD0}'..='\u{1CFF}',
                    '\u{A8E0}'..='\u{A8FF}',
                    '\u{11B00}'..='\u{11B5F}',
                ],
            ),
            Script::from_ranges(
                "Cyrl",
                vec![
                    '\u{0400}'..='\u{04FF}',
                    '\u{0500}'..='\u{052F}',
                    '\u{1C80}'..='\u{1C8F}',
                    '\u{2DE0}'..='\u{2DFF}',
                    '\u{A640}'..='\u{A69F}',
                ],
            ),
            Script::from_ranges("Beng", vec!['\u{0980}'..='\u{09FF}']),
            Script::from_ranges(
                "jpn",
                vec![
                    '\u{3040}'..='\u{309F}',
                    '\u{30A0}'..='\u{30FF}',
                    '\u{31F0}'..='\u{31FF}',
                    '\u{1AFF0}'..='\u{1B16F}',
                ],
            )
            .single_language(),
            Script::from_ranges(
                "kor",
                vec![
                    '\u{1100}'..='\u{11FF}',
                    '\u{3130}'..='\u{318F}',
                    '\u{A960}'..='\u{A97F}',
                    '\u{AC00}'..='\u{D7AF}',
                    '\u{D7B0}'..='\u{D7FF}',
                ],
            )
            .single_language(),
            Script::from_ranges("Ethi", vec!['\u{1200}'..='\u{139F}', '\u{2D80}'..='\u{2DDF}']),
            Script::from_ranges("Hebr", vec!['\u{0590}'..='\u{05FF}']),
            Script::from_ranges("Mymr", vec!['\u{1000}'..='\u{109F}']),
            Script::from_ranges("ell", vec!['\u{0370}'..='\u{03FF}', '\u{1F00}'..='\u{1FFF}'])
                .single_language(),
            Script::from_ranges("kat", vec!['\u{10A0}'..='\u{10FF}']).single_language(),
            Script::from_ranges("hye", vec!['\u{0530}'..='\u{058F}']).single_language(),
            Script::from_ranges("tha", vec!['\u{0E00}'..='\u{0E7F}']).single_language(),
            Script::from_ranges("lao", vec!['\u{0E80}'..='\u{0EFF}']).single_language(),
            Script::from_ranges("khm", vec!['\u{1780}'..='\u{17FF}']).single_language(),
            Script::from_ranges("guj", vec!['\u{0A80}'..='\u{0AFF}']).single_language(),
            Script::from_ranges("pan", vec!['\u{0A00}'..='\u{0A7F}']).single_language(),
            Script::from_ranges("kan", vec!['\u{0C80}'..='\u{0CFF}']).single_language(),
            Script::from_ranges("mal", vec!['\u{0D00}'..='\u{0D7F}']).single_language(),
            Script::from_ranges("ory", vec!['\u{0B00}'..='\u{0B7F}']).single_language(),
            Script::from_ranges("sin", vec!['\u{0D80}'..='\u{0DFF}', '\u{111E0}'..='\u{111FF}'])
                .single_language(),
            Script::from_ranges("tam", vec!['\u{0B80}'..='\u{0BFF}', '\u{11FC0}'..='\u{11FFF}'])
                .single_language(),
            Script::from_ranges("tel", vec!['\u{0C00}'..='\u{0C7F}']).single_language(),
            Script::from_ranges("div", vec!['\u{0780}'..='\u{07BF}']).single_language(),
        ];
        Self { scripts }
    }
}
