//! CLI configuration for generation defaults.
//!
//! Values here only fill in what the command line leaves out.

pub(crate) mod loader;

pub(crate) use loader::{expand_path, load_cli_config};

use serde::Deserialize;

/// Defaults read from `.multilang-gen.toml`.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub(crate) struct CliConfig {
    /// Output file name pattern, e.g. `"{lang}/index.html"`.
    pub output_pattern: Option<String>,

    /// Directory generated pages are written to. `~/` is expanded.
    pub output_dir: Option<String>,
}
