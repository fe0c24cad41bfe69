//! Tera-based page rendering with HTML auto-escaping.

use std::path::Path;

use serde::Serialize;
use tera::{Context, Tera};

use super::data_paths::DataPaths;
use crate::error::{GenError, GenResult};
use crate::language::{Language, LanguageData};

/// Values exposed to a page template for one language.
///
/// Field names are part of the template contract and keep their
/// capitalised spelling.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PageContext<'a> {
    /// Language code.
    pub language: &'a str,
    /// Language code again; older templates reference this name.
    pub lang_code: &'a str,
    /// Display name of the current language.
    pub lang_name: &'a str,
    /// The language's data file contents.
    pub data: &'a LanguageData,
    /// Links to every other language's page. Escaped unless the template
    /// opts out with `| safe`.
    pub lang_links: &'a str,
}

impl<'a> PageContext<'a> {
    pub fn new(language: &'a Language, data: &'a LanguageData, lang_links: &'a str) -> Self {
        Self {
            language: &language.code,
            lang_code: &language.code,
            lang_name: &language.display_name,
            data,
            lang_links,
        }
    }
}

/// A compiled page template, shared read-only across all languages.
#[derive(Debug)]
pub struct PageTemplate {
    tera: Tera,
    name: String,
    data_paths: DataPaths,
}

impl PageTemplate {
    /// Read and compile the template at `path`.
    pub fn load(path: &Path) -> GenResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| GenError::TemplateRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let template = Self::compile(path, &source)?;
        tracing::debug!(?path, "Compiled page template");
        Ok(template)
    }

    /// Compile template `source`, using `path` for naming and error reporting.
    pub fn compile(path: &Path, source: &str) -> GenResult<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "page".to_string());

        let mut tera = Tera::default();
        // Every suffix matches "", so escaping doesn't depend on the file extension
        tera.autoescape_on(vec![""]);
        tera.add_raw_template(&name, source)
            .map_err(|e| GenError::TemplateParse {
                path: path.to_path_buf(),
                source: e,
            })?;

        let data_paths = tera
            .get_template(&name)
            .map(|template| DataPaths::collect(&template.ast))
            .unwrap_or_default();

        Ok(Self {
            tera,
            name,
            data_paths,
        })
    }

    /// Render the template for one language.
    ///
    /// `Data` keys the template reads but the language lacks render as empty.
    pub fn render(&self, page: &PageContext<'_>) -> GenResult<String> {
        let mut data = page.data.clone();
        self.data_paths.fill_missing(&mut data);
        let page = PageContext {
            data: &data,
            ..*page
        };

        let context =
            Context::from_serialize(&page).map_err(|e| GenError::Render { source: e })?;
        self.tera
            .render(&self.name, &context)
            .map_err(|e| GenError::Render { source: e })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn language(code: &str, display_name: &str) -> Language {
        Language {
            code: code.to_string(),
            name: display_name.to_string(),
            display_name: display_name.to_string(),
            file: format!("{code}.json"),
        }
    }

    fn data(value: serde_json::Value) -> LanguageData {
        value.as_object().cloned().unwrap()
    }

    fn compile(source: &str) -> PageTemplate {
        PageTemplate::compile(Path::new("page.html"), source).unwrap()
    }

    #[test]
    fn test_render_exposes_all_fields() {
        let template = compile(
            "{{ Language }}|{{ LangCode }}|{{ LangName }}|{{ Data.title }}|{{ LangLinks | safe }}",
        );
        let lang = language("en", "English");
        let data = data(json!({ "title": "Welcome" }));
        let links = r#"<a href="zh.html">中文</a>"#;

        let out = template.render(&PageContext::new(&lang, &data, links)).unwrap();
        assert_eq!(out, r#"en|en|English|Welcome|<a href="zh.html">中文</a>"#);
    }

    #[test]
    fn test_data_values_are_escaped() {
        let template = compile("<p>{{ Data.someKey }}</p>");
        let lang = language("en", "English");
        let data = data(json!({ "someKey": "<script>alert(1)</script>" }));

        let out = template.render(&PageContext::new(&lang, &data, "")).unwrap();
        assert!(!out.contains("<script>"));
        assert!(out.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_escaping_ignores_file_extension() {
        let template = PageTemplate::compile(Path::new("page.tpl"), "{{ Data.v }}").unwrap();
        let lang = language("en", "English");
        let data = data(json!({ "v": "<b>" }));

        let out = template.render(&PageContext::new(&lang, &data, "")).unwrap();
        assert_eq!(out, "&lt;b&gt;");
    }

    #[test]
    fn test_lang_links_escaped_without_safe() {
        let template = compile("{{ LangLinks }}");
        let lang = language("en", "English");
        let data = LanguageData::new();

        let out = template
            .render(&PageContext::new(&lang, &data, r#"<a href="zh.html">中文</a>"#))
            .unwrap();
        assert!(out.starts_with("&lt;a href="));
    }

    #[test]
    fn test_placeholder_survives_rendering() {
        let template = compile("<nav>{__LANG_LINKS__}</nav>");
        let lang = language("en", "English");
        let data = LanguageData::new();

        let out = template.render(&PageContext::new(&lang, &data, "")).unwrap();
        assert_eq!(out, "<nav>{__LANG_LINKS__}</nav>");
    }

    #[test]
    fn test_absent_key_guarded_by_template() {
        let template =
            compile(r#"{% if Data.subtitle %}{{ Data.subtitle }}{% else %}none{% endif %}"#);
        let lang = language("en", "English");
        let data = LanguageData::new();

        let out = template.render(&PageContext::new(&lang, &data, "")).unwrap();
        assert_eq!(out, "none");
    }

    #[test]
    fn test_absent_key_renders_empty() {
        let template = compile("<h2>{{ Data.subtitle }}</h2>{{ Data.nav.about | upper }}");
        let lang = language("zh", "中文");
        let data = data(json!({ "title": "你好" }));

        let out = template.render(&PageContext::new(&lang, &data, "")).unwrap();
        assert_eq!(out, "<h2></h2>");
    }

    #[test]
    fn test_absent_key_falls_back_to_default_filter() {
        let template = compile(r#"{{ Data.subtitle | default(value="untranslated") }}"#);
        let lang = language("zh", "中文");
        let data = LanguageData::new();

        let out = template.render(&PageContext::new(&lang, &data, "")).unwrap();
        assert_eq!(out, "untranslated");
    }

    #[test]
    fn test_undefined_non_data_variable_is_render_error() {
        let template = compile("{{ Lang }}");
        let lang = language("en", "English");
        let data = LanguageData::new();

        let err = template
            .render(&PageContext::new(&lang, &data, ""))
            .unwrap_err();
        assert!(matches!(err, GenError::Render { .. }));
        assert!(err.to_string().contains("Lang"));
    }

    #[test]
    fn test_parse_error() {
        let err = PageTemplate::compile(Path::new("broken.html"), "{% for %}").unwrap_err();
        assert!(matches!(err, GenError::TemplateParse { .. }));
    }

    #[test]
    fn test_load_missing_template() {
        let dir = tempfile::tempdir().unwrap();
        let err = PageTemplate::load(&dir.path().join("nope.html")).unwrap_err();
        assert!(matches!(err, GenError::TemplateRead { .. }));
    }
}
