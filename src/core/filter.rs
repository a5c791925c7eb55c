// File: src/core/filter.rs
use crate::core::store::{LanguageModels, RankTable};
use std::collections::HashSet;

/// Whether `language` survives the allow/deny sets. `ignore` wins over `only`.
pub fn allow(language: &str, only: &HashSet<String>, ignore: &HashSet<String>) -> bool {
    if only.is_empty() && ignore.is_empty() {
        return true;
    }
    (only.is_empty() || only.contains(language)) && !ignore.contains(language)
}

/// The allowed subset of `models`, in their original order.
pub fn filter<'a>(
    models: &'a LanguageModels,
    only: &HashSet<String>,
    ignore: &HashSet<String>,
) -> Vec<(&'a str, &'a RankTable)> {
    models
        .iter()
        .filter(|(language, _)| allow(language, only, ignore))
        .map(|(language, table)| (language.as_str(), table))
        .collect()
}
