//! Language index and per-language data loading.
//!
//! A language directory holds an `index.json` manifest plus one JSON data file
//! per language. The index is the source of truth for which languages exist
//! and which file each one reads from.

mod data;
mod index;

pub use data::{load_language_data, LanguageData};
pub use index::{load_language_index, Language, INDEX_FILENAME};
