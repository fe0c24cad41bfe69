//! Config file discovery and loading for `.multilang-gen.toml`.
//!
//! Checks two locations in precedence order:
//! 1. `./.multilang-gen.toml` (project-local)
//! 2. `~/.config/multilang-gen.toml` (user-global)

use std::path::{Path, PathBuf};

use super::CliConfig;

const CONFIG_FILENAME: &str = ".multilang-gen.toml";
const GLOBAL_CONFIG_DIR: &str = ".config";
const GLOBAL_CONFIG_FILENAME: &str = "multilang-gen.toml";

/// Load CLI config from the first discovered location, or return defaults.
pub(crate) fn load_cli_config() -> CliConfig {
    match find_config_file(Path::new("."), home_dir().as_deref()) {
        Some(path) => read_cli_config(&path),
        None => CliConfig::default(),
    }
}

/// Parse the config at `path`, falling back to defaults on any failure.
fn read_cli_config(path: &Path) -> CliConfig {
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::debug!(?path, "Loaded CLI config");
                config
            }
            Err(e) => {
                tracing::warn!(?path, error = %e, "Failed to parse CLI config, using defaults");
                CliConfig::default()
            }
        },
        Err(e) => {
            tracing::warn!(?path, error = %e, "Failed to read CLI config, using defaults");
            CliConfig::default()
        }
    }
}

/// Search for a config file, project-local first.
fn find_config_file(project_dir: &Path, home: Option<&Path>) -> Option<PathBuf> {
    let local = project_dir.join(CONFIG_FILENAME);
    if local.is_file() {
        return Some(local);
    }

    let global = home?.join(GLOBAL_CONFIG_DIR).join(GLOBAL_CONFIG_FILENAME);
    global.is_file().then_some(global)
}

/// Expand a configured path, resolving `~/` to the home directory.
pub(crate) fn expand_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}
