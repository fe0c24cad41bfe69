//! # Generation Error Types
//!
//! Unified error handling for index loading, data loading, rendering and export.

use std::path::PathBuf;

use thiserror::Error;

/// Generation result type
pub type GenResult<T> = Result<T, GenError>;

/// Every way a `gen` or `export` invocation can fail.
#[derive(Debug, Error)]
pub enum GenError {
    #[error("language index not found at {}; run `multilang-gen export` to create one", .path.display())]
    IndexMissing { path: PathBuf },

    #[error("no languages found in {}", .path.display())]
    IndexEmpty { path: PathBuf },

    #[error("failed to read language index {}: {source}", .path.display())]
    IndexRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse language index {}: {source}", .path.display())]
    IndexParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("language data file not found: {}", .path.display())]
    DataMissing { path: PathBuf },

    #[error("failed to read language data {}: {source}", .path.display())]
    DataRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse language data {}: {source}", .path.display())]
    DataParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("unsupported language data format '{extension}' for {}; only .json is supported", .path.display())]
    UnsupportedDataFormat { path: PathBuf, extension: String },

    #[error("failed to read template {}: {source}", .path.display())]
    TemplateRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse template {}: {}", .path.display(), tera_chain(.source))]
    TemplateParse { path: PathBuf, source: tera::Error },

    #[error("failed to render template: {}", tera_chain(.source))]
    Render { source: tera::Error },

    #[error("failed to write {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to generate language '{code}': {source}")]
    Language {
        code: String,
        source: Box<GenError>,
    },
}

impl GenError {
    /// Attach the language code a per-language failure belongs to.
    pub fn for_language(code: impl Into<String>, source: GenError) -> Self {
        Self::Language {
            code: code.into(),
            source: Box::new(source),
        }
    }

    /// Language code carried by a per-language failure, if any.
    #[must_use]
    pub fn language_code(&self) -> Option<&str> {
        match self {
            GenError::Language { code, .. } => Some(code),
            _ => None,
        }
    }
}

/// Tera reports a generic top-level message and keeps the useful detail
/// (line, column, missing variable) in its source chain.
fn tera_chain(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
