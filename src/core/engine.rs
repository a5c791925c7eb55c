use crate::core::distance::rank_all_candidates;
use crate::core::filter::{allow, filter};
use crate::core::normalize::normalize;
use crate::core::script::ScriptTable;
use crate::core::store::LanguageModelStore;
use crate::core::trigram::{clean, extract_cleaned};
use crate::core::types::{DetectionResult, Options};
use std::sync::Arc;

/// The detection façade: script classification, then trigram scoring
/// against the models of the detected script.
///
/// Holds only immutable shared state, so one detector (or many clones of
/// it) can serve any number of threads.
#[derive(Debug, Clone)]
pub struct Detector {
    store: Arc<LanguageModelStore>,
    scripts: Arc<ScriptTable>,
}

impl Detector {
    /// A detector over `store` using the built-in script table.
    pub fn new(store: LanguageModelStore) -> Self {
        Self::with_scripts(Arc::new(store), Arc::new(ScriptTable::default()))
    }

    pub fn with_scripts(store: Arc<LanguageModelStore>, scripts: Arc<ScriptTable>) -> Self {
        Self { store, scripts }
    }

    pub fn store(&self) -> &LanguageModelStore {
        &self.store
    }

    pub fn scripts(&self) -> &ScriptTable {
        &self.scripts
    }

    /// Ranked language guesses for `text`. Never fails and never returns an
    /// empty result; anything that cannot be judged is `("und", 1.0)`.
    pub fn detect(&self, text: &str, options: &Options) -> DetectionResult {
        // 1. Too short to judge
        let length = text.chars().count();
        if length == 0 || length < options.min_length {
            tracing::trace!(length, min_length = options.min_length, "input too short");
            return DetectionResult::undetermined();
        }

        // 2. Bound the work to a prefix
        let text = truncate_chars(text, options.max_length);

        // 3. Dominant script
        let Some(found) = self.scripts.classify(text) else {
            tracing::trace!("no script matched");
            return DetectionResult::undetermined();
        };
        let script = found.script;

        // 4. Single-language scripts need no trigram analysis
        if script.is_single_language() {
            tracing::trace!(script = script.id(), "single-language script");
            return if allow(script.id(), &options.only, &options.ignore) {
                DetectionResult::certain(script.id())
            } else {
                DetectionResult::undetermined()
            };
        }

        // 5. Nothing to compare against
        if !self.store.contains_script(script.id()) {
            tracing::trace!(script = script.id(), "no models for script");
            return DetectionResult::undetermined();
        }

        // 6. Score the surviving candidates
        let cleaned = clean(text);
        let profile = extract_cleaned(&cleaned);
        let candidates = filter(
            self.store.models_for(script.id()),
            &options.only,
            &options.ignore,
        );
        if candidates.is_empty() {
            tracing::trace!(script = script.id(), "all candidates filtered out");
        }
        let distances = rank_all_candidates(&profile, &candidates);
        normalize(text, &distances)
    }

    /// Code of the best guess, `"und"` when undetermined.
    pub fn detect_top(&self, text: &str, options: &Options) -> String {
        self.detect(text, options).top().language.clone()
    }

    /// Every code this detector can report: all modelled languages plus
    /// every single-language script, sorted and de-duplicated.
    pub fn supported_languages(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self
            .store
            .languages()
            .chain(
                self.scripts
                    .iter()
                    .filter(|script| script.is_single_language())
                    .map(|script| script.id()),
            )
            .collect();
        codes.sort_unstable();
        codes.dedup();
        codes
    }
}

/// The first `max` characters of `text`.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
