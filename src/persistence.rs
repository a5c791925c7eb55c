// File: src/persistence.rs
use crate::core::store::{LanguageModelStore, PackedModels, RawModels};
use crate::error::PersistenceResult;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Reads the packed JSON model asset (script -> language -> `|`-delimited
/// trigrams) and builds a validated store. Key order in the file is kept.
pub fn load_models_json(path: &Path) -> PersistenceResult<LanguageModelStore> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let packed: PackedModels = serde_json::from_reader(reader)?;
    let store = LanguageModelStore::from_packed(&packed)?;
    tracing::debug!(path = %path.display(), "loaded model asset");
    Ok(store)
}

/// Writes the store's ordered trigram lists as a bincode snapshot.
/// The file is written to a temp file beside `path` and renamed into place,
/// so readers never see a partial snapshot.
pub fn save_snapshot(store: &LanguageModelStore, path: &Path) -> PersistenceResult<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let raw = store.to_raw();
    let mut temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file_mut());
        bincode::serialize_into(&mut writer, &raw)?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    tracing::debug!(path = %path.display(), "saved model snapshot");
    Ok(())
}

/// Reads a snapshot written by [`save_snapshot`], re-validating it.
pub fn load_snapshot(path: &Path) -> PersistenceResult<LanguageModelStore> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let raw: RawModels = bincode::deserialize_from(reader)?;
    let store = LanguageModelStore::build(&raw)?;
    tracing::debug!(path = %path.display(), "loaded model snapshot");
    Ok(store)
}

/// Prefers the snapshot; falls back to the JSON asset when the snapshot is
/// missing or unreadable.
pub fn load_snapshot_or_json(snapshot: &Path, json: &Path) -> PersistenceResult<LanguageModelStore> {
    match load_snapshot(snapshot) {
        Ok(store) => Ok(store),
        Err(e) => {
            tracing::warn!(
                snapshot = %snapshot.display(),
                error = %e,
                "snapshot unavailable, loading model asset"
            );
            load_models_json(json)
        }
    }
}
