//! Export of the built-in language index.

use std::path::{Path, PathBuf};

use crate::error::{GenError, GenResult};
use crate::language::INDEX_FILENAME;

/// The default `index.json`, embedded at build time.
pub const DEFAULT_INDEX: &str = include_str!("../assets/index.json");

/// Write the built-in `index.json` into `target_dir`, creating the directory
/// tree if needed. An existing index is overwritten.
pub fn export_index(target_dir: &Path) -> GenResult<PathBuf> {
    std::fs::create_dir_all(target_dir).map_err(|e| GenError::CreateDir {
        path: target_dir.to_path_buf(),
        source: e,
    })?;

    let path = target_dir.join(INDEX_FILENAME);
    std::fs::write(&path, DEFAULT_INDEX).map_err(|e| GenError::OutputWrite {
        path: path.clone(),
        source: e,
    })?;

    tracing::debug!(?path, "Exported default language index");
    Ok(path)
}
