//! Per-language JSON data files.

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{GenError, GenResult};

/// Arbitrary key/value data for one language, exposed to templates as `Data`.
pub type LanguageData = Map<String, Value>;

const SUPPORTED_EXTENSION: &str = "json";

/// Load the data file `file` from `lang_dir`.
///
/// The top-level value must be a JSON object. Missing keys are left for the
/// template to handle; nothing is defaulted here.
pub fn load_language_data(lang_dir: &Path, file: &str) -> GenResult<LanguageData> {
    let path = lang_dir.join(file);

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    if extension != SUPPORTED_EXTENSION {
        return Err(GenError::UnsupportedDataFormat {
            extension: if extension.is_empty() {
                "(none)".to_string()
            } else {
                format!(".{extension}")
            },
            path,
        });
    }

    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(GenError::DataMissing { path });
        }
        Err(e) => return Err(GenError::DataRead { path, source: e }),
    };

    let data: LanguageData =
        serde_json::from_str(&contents).map_err(|e| GenError::DataParse {
            path: path.clone(),
            source: e,
        })?;

    tracing::debug!(?path, keys = data.len(), "Loaded language data");
    Ok(data)
}
