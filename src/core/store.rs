// File: src/core/store.rs
use crate::error::{DataError, DataResult};
use indexmap::IndexMap;
use rustc_hash::FxHashMap;

/// Separator between trigrams in the packed model asset.
pub const TRIGRAM_DELIMITER: char = '|';

/// script id -> language code -> trigrams, most frequent first.
pub type RawModels = IndexMap<String, IndexMap<String, Vec<String>>>;

/// script id -> language code -> `|`-delimited trigrams, most frequent first.
/// This is the on-disk asset format.
pub type PackedModels = IndexMap<String, IndexMap<String, String>>;

/// Splits every packed trigram string into its ordered list.
/// Empty strings become empty lists and are rejected later by `build`.
pub fn unpack(packed: &PackedModels) -> RawModels {
    packed
        .iter()
        .map(|(script, languages)| {
            let languages = languages
                .iter()
                .map(|(language, trigrams)| {
                    let list = if trigrams.is_empty() {
                        Vec::new()
                    } else {
                        trigrams.split(TRIGRAM_DELIMITER).map(str::to_string).collect()
                    };
                    (language.clone(), list)
                })
                .collect();
            (script.clone(), languages)
        })
        .collect()
}

/// Maps each trigram of one language model to its rank (0 = most frequent).
/// Ranks are dense `0..len`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankTable {
    ranks: FxHashMap<String, usize>,
}

impl RankTable {
    /// Builds the table from an ordered trigram list. The list must be
    /// non-empty, hold only 3-character entries and contain no duplicates.
    pub fn from_ordered(script: &str, language: &str, trigrams: &[String]) -> DataResult<Self> {
        if trigrams.is_empty() {
            return Err(DataError::EmptyModel {
                script: script.to_string(),
                language: language.to_string(),
            });
        }

        let mut ranks = FxHashMap::default();
        ranks.reserve(trigrams.len());
        for (rank, trigram) in trigrams.iter().enumerate() {
            if trigram.chars().count() != 3 {
                return Err(DataError::MalformedTrigram {
                    script: script.to_string(),
                    language: language.to_string(),
                    trigram: trigram.clone(),
                    rank,
                });
            }
            if let Some(first) = ranks.insert(trigram.clone(), rank) {
                return Err(DataError::DuplicateTrigram {
                    script: script.to_string(),
                    language: language.to_string(),
                    trigram: trigram.clone(),
                    first,
                    second: rank,
                });
            }
        }
        Ok(Self { ranks })
    }

    /// O(1) rank lookup.
    pub fn rank(&self, trigram: &str) -> Option<usize> {
        self.ranks.get(trigram).copied()
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// The trigrams back in rank order.
    pub fn ordered_trigrams(&self) -> Vec<String> {
        let mut ordered = vec![String::new(); self.ranks.len()];
        for (trigram, &rank) in &self.ranks {
            ordered[rank] = trigram.clone();
        }
        ordered
    }
}

/// language code -> rank table, in asset order.
pub type LanguageModels = IndexMap<String, RankTable>;

/// Every language model, grouped by script. Immutable once built; share it
/// behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct LanguageModelStore {
    scripts: IndexMap<String, LanguageModels>,
    // Returned for unknown scripts.
    empty: LanguageModels,
}

impl LanguageModelStore {
    /// Validates the raw lists and builds a rank table per language.
    pub fn build(raw: &RawModels) -> DataResult<Self> {
        let mut scripts = IndexMap::with_capacity(raw.len());
        let mut language_count = 0usize;

        for (script, languages) in raw {
            if script.is_empty() {
                return Err(DataError::MissingField { field: "script id" });
            }
            let mut models = IndexMap::with_capacity(languages.len());
            for (language, trigrams) in languages {
                if language.is_empty() {
                    return Err(DataError::MissingField {
                        field: "language code",
                    });
                }
                models.insert(
                    language.clone(),
                    RankTable::from_ordered(script, language, trigrams)?,
                );
            }
            language_count += models.len();
            scripts.insert(script.clone(), models);
        }

        tracing::debug!(
            scripts = scripts.len(),
            languages = language_count,
            "built language model store"
        );
        Ok(Self {
            scripts,
            empty: LanguageModels::default(),
        })
    }

    /// Builds from the packed asset format.
    pub fn from_packed(packed: &PackedModels) -> DataResult<Self> {
        Self::build(&unpack(packed))
    }

    /// Models for a script; empty when the script is unknown.
    pub fn models_for(&self, script: &str) -> &LanguageModels {
        self.scripts.get(script).unwrap_or(&self.empty)
    }

    pub fn contains_script(&self, script: &str) -> bool {
        self.scripts.contains_key(script)
    }

    pub fn scripts(&self) -> impl Iterator<Item = &str> {
        self.scripts.keys().map(String::as_str)
    }

    /// Every language code in the store, in asset order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.scripts
            .values()
            .flat_map(|models| models.keys().map(String::as_str))
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }

    /// The ordered lists this store was built from.
    pub fn to_raw(&self) -> RawModels {
        self.scripts
            .iter()
            .map(|(script, models)| {
                let languages = models
                    .iter()
                    .map(|(language, table)| (language.clone(), table.ordered_trigrams()))
                    .collect();
                (script.clone(), languages)
            })
            .collect()
    }
}
