//! `multilang-gen gen`: render a template once per language.

use std::path::PathBuf;

use multilang_gen::template_engine::LANG_TOKEN;
use multilang_gen::{GenResult, GenerateOptions, Generator, DEFAULT_OUTPUT_PATTERN};

use crate::cli_config::{expand_path, CliConfig};
use crate::output;

pub(crate) fn handle_gen_command(
    template: PathBuf,
    language_dir: PathBuf,
    output_pattern: Option<String>,
    output_dir: Option<PathBuf>,
    cli_config: &CliConfig,
) -> GenResult<()> {
    let options = resolve_options(template, language_dir, output_pattern, output_dir, cli_config);

    if !options.output_pattern.contains(LANG_TOKEN) {
        output::warning(format!(
            "Output pattern '{}' has no {LANG_TOKEN} token; every language will overwrite the same file.",
            options.output_pattern
        ));
    }

    let generator = Generator::prepare(options)?;

    let found: Vec<String> = generator
        .languages()
        .iter()
        .map(|lang| format!("{}({})", lang.display_name, lang.code))
        .collect();
    output::header(format!(
        "Found {} languages: {}",
        found.len(),
        found.join(", ")
    ));

    generator.run_with(|page| {
        output::item(format!(
            "Generated {} ({})",
            page.path.display(),
            page.display_name
        ));
    })?;

    output::success("Multilingual pages generated.");
    Ok(())
}

/// Command-line flags win over the config file, which wins over built-in defaults.
fn resolve_options(
    template: PathBuf,
    language_dir: PathBuf,
    output_pattern: Option<String>,
    output_dir: Option<PathBuf>,
    cli_config: &CliConfig,
) -> GenerateOptions {
    let pattern = output_pattern
        .or_else(|| cli_config.output_pattern.clone())
        .unwrap_or_else(|| DEFAULT_OUTPUT_PATTERN.to_string());
    let options = GenerateOptions::new(template, language_dir).with_output_pattern(pattern);

    match output_dir.or_else(|| cli_config.output_dir.as_deref().map(expand_path)) {
        Some(dir) => options.with_output_dir(dir),
        None => options,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(
        output_pattern: Option<&str>,
        output_dir: Option<&str>,
        config: &CliConfig,
    ) -> GenerateOptions {
        resolve_options(
            PathBuf::from("page.html"),
            PathBuf::from("langs"),
            output_pattern.map(str::to_string),
            output_dir.map(PathBuf::from),
            config,
        )
    }

    #[test]
    fn test_defaults_without_flags_or_config() {
        let options = resolve(None, None, &CliConfig::default());
        assert_eq!(options.output_pattern, "{lang}.html");
        assert!(options.output_dir.is_none());
    }

    #[test]
    fn test_config_fills_missing_flags() {
        let config = CliConfig {
            output_pattern: Some("{lang}/index.html".to_string()),
            output_dir: Some("dist".to_string()),
        };
        let options = resolve(None, None, &config);
        assert_eq!(options.output_pattern, "{lang}/index.html");
        assert_eq!(options.output_dir, Some(PathBuf::from("dist")));
    }

    #[test]
    fn test_flags_override_config() {
        let config = CliConfig {
            output_pattern: Some("{lang}/index.html".to_string()),
            output_dir: Some("dist".to_string()),
        };
        let options = resolve(Some("page-{lang}.html"), Some("public"), &config);
        assert_eq!(options.output_pattern, "page-{lang}.html");
        assert_eq!(options.output_dir, Some(PathBuf::from("public")));
    }
}
