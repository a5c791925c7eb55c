// src/lib.rs

pub mod core;
pub mod error;
pub mod languages;
pub mod persistence;

pub use crate::core::engine::Detector;
pub use crate::core::script::{RangeMatcher, RegexMatcher, Script, ScriptMatcher, ScriptTable};
pub use crate::core::store::{LanguageModelStore, PackedModels, RankTable, RawModels};
pub use crate::core::types::{Candidate, DetectionResult, Options, UNDETERMINED};
pub use crate::error::{DataError, PersistenceError};
