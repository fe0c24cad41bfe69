//! Page template engine.
//!
//! Uses Tera for runtime template rendering with HTML auto-escaping. Each page
//! template is compiled once and rendered once per language; the raw language
//! link markup is then spliced in through the `{__LANG_LINKS__}` placeholder.

mod data_paths;
mod engine;
mod links;
mod placeholder;

pub use engine::{PageContext, PageTemplate};
pub use links::{build_language_links, output_file_name, LANG_TOKEN};
pub use placeholder::{replace_language_links, LANG_LINKS_PLACEHOLDER};
