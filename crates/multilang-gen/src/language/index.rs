//! Language index parsing (`index.json`).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GenError, GenResult};

/// File name of the language index inside a language directory.
pub const INDEX_FILENAME: &str = "index.json";

/// A supported language, as declared in `index.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    /// Language code, e.g. `en`. Unique within an index.
    pub code: String,

    /// Language name, e.g. `English`. Informational only; may be omitted.
    #[serde(default)]
    pub name: String,

    /// Text used for links pointing at this language's page.
    pub display_name: String,

    /// Data file name, relative to the language directory.
    pub file: String,
}

/// Load the ordered language list from `<lang_dir>/index.json`.
///
/// There is no fallback to the built-in index here; a missing file is an error.
pub fn load_language_index(lang_dir: &Path) -> GenResult<Vec<Language>> {
    let path = lang_dir.join(INDEX_FILENAME);
    if !path.is_file() {
        return Err(GenError::IndexMissing { path });
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| GenError::IndexRead {
        path: path.clone(),
        source: e,
    })?;
    let languages: Vec<Language> = serde_json::from_str(&contents).map_err(|e| {
        GenError::IndexParse {
            path: path.clone(),
            source: e,
        }
    })?;

    if languages.is_empty() {
        return Err(GenError::IndexEmpty { path });
    }

    tracing::debug!(?path, count = languages.len(), "Loaded language index");
    Ok(languages)
}
