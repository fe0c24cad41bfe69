//! multilang-gen library.
//!
//! Renders one HTML template into a page per language, using a language index
//! (`index.json`) and per-language JSON data files. Used by the
//! `multilang-gen` binary and available for integration testing.

pub mod error;
pub mod export;
pub mod generate;
pub mod language;
pub mod template_engine;

pub use error::{GenError, GenResult};
pub use export::{export_index, DEFAULT_INDEX};
pub use generate::{GenerateOptions, GeneratedPage, Generator, DEFAULT_OUTPUT_PATTERN};
pub use language::{load_language_data, load_language_index, Language, LanguageData};
