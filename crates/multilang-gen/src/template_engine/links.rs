//! Language navigation links and output file naming.

use crate::language::Language;

/// Token in an output pattern that is replaced with the language code.
pub const LANG_TOKEN: &str = "{lang}";

/// Expand an output pattern for one language code.
///
/// ```
/// use multilang_gen::template_engine::output_file_name;
///
/// assert_eq!(output_file_name("{lang}.html", "en"), "en.html");
/// assert_eq!(output_file_name("{lang}/index.html", "zh"), "zh/index.html");
/// ```
pub fn output_file_name(pattern: &str, code: &str) -> String {
    pattern.replace(LANG_TOKEN, code)
}

/// Build the anchor markup linking `current` to every other language's page.
///
/// Links follow index order, are separated by a single space and carry no
/// surrounding whitespace. The markup is not escaped.
pub fn build_language_links(languages: &[Language], current: &Language, pattern: &str) -> String {
    languages
        .iter()
        .filter(|lang| lang.code != current.code)
        .map(|lang| {
            format!(
                r#"<a href="{}">{}</a>"#,
                output_file_name(pattern, &lang.code),
                lang.display_name
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}
