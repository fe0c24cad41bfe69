//! The generation pipeline: index → template → one page per language.
//!
//! ```text
//! <lang-dir>/index.json ──► Vec<Language> ─┐
//! <template-file>       ──► PageTemplate  ─┼─► render ─► {__LANG_LINKS__} ─► <output>
//! <lang-dir>/<file>     ──► LanguageData  ─┘
//! ```
//!
//! Languages are generated one at a time in index order. The first failure
//! aborts the run; pages already written are left in place.

use std::path::{Path, PathBuf};

use crate::error::{GenError, GenResult};
use crate::language::{load_language_data, load_language_index, Language};
use crate::template_engine::{
    build_language_links, output_file_name, replace_language_links, PageContext, PageTemplate,
};

/// Output pattern used when neither the command line nor the config sets one.
pub const DEFAULT_OUTPUT_PATTERN: &str = "{lang}.html";

/// Inputs for a generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Template file rendered for every language.
    pub template: PathBuf,
    /// Directory holding `index.json` and the data files.
    pub language_dir: PathBuf,
    /// Output file name pattern; `{lang}` is replaced with the language code.
    pub output_pattern: String,
    /// Directory the expanded pattern is resolved against. Links between
    /// pages use the expanded pattern alone.
    pub output_dir: Option<PathBuf>,
}

impl GenerateOptions {
    pub fn new(template: impl Into<PathBuf>, language_dir: impl Into<PathBuf>) -> Self {
        Self {
            template: template.into(),
            language_dir: language_dir.into(),
            output_pattern: DEFAULT_OUTPUT_PATTERN.to_string(),
            output_dir: None,
        }
    }

    #[must_use]
    pub fn with_output_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.output_pattern = pattern.into();
        self
    }

    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Where the page for `code` is written.
    pub fn output_path(&self, code: &str) -> PathBuf {
        let file = output_file_name(&self.output_pattern, code);
        match &self.output_dir {
            Some(dir) => dir.join(file),
            None => PathBuf::from(file),
        }
    }
}

/// A page written for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPage {
    pub code: String,
    pub display_name: String,
    pub path: PathBuf,
}

/// A prepared run: the index is loaded and the template compiled.
#[derive(Debug)]
pub struct Generator {
    options: GenerateOptions,
    languages: Vec<Language>,
    template: PageTemplate,
}

impl Generator {
    /// Load the language index and compile the template.
    ///
    /// Nothing is written until a language is generated, so failures here
    /// leave no output behind.
    pub fn prepare(options: GenerateOptions) -> GenResult<Self> {
        let languages = load_language_index(&options.language_dir)?;
        let template = PageTemplate::load(&options.template)?;
        Ok(Self {
            options,
            languages,
            template,
        })
    }

    /// Languages in index order.
    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    /// Generate every language in index order, stopping at the first failure.
    pub fn run(&self) -> GenResult<Vec<GeneratedPage>> {
        self.run_with(|_| {})
    }

    /// Like [`Generator::run`], calling `on_page` as soon as each page is written.
    pub fn run_with(
        &self,
        mut on_page: impl FnMut(&GeneratedPage),
    ) -> GenResult<Vec<GeneratedPage>> {
        self.languages
            .iter()
            .map(|lang| -> GenResult<GeneratedPage> {
                let page = self.generate_language(lang)?;
                on_page(&page);
                Ok(page)
            })
            .collect()
    }

    /// Render and write the page for `lang`.
    pub fn generate_language(&self, lang: &Language) -> GenResult<GeneratedPage> {
        self.write_page(lang)
            .map_err(|e| GenError::for_language(&lang.code, e))
    }

    fn write_page(&self, lang: &Language) -> GenResult<GeneratedPage> {
        let data = load_language_data(&self.options.language_dir, &lang.file)?;
        let links = build_language_links(&self.languages, lang, &self.options.output_pattern);

        let rendered = self
            .template
            .render(&PageContext::new(lang, &data, &links))?;
        let page = replace_language_links(&rendered, &links);

        let path = self.options.output_path(&lang.code);
        ensure_parent_dir(&path)?;
        std::fs::write(&path, page).map_err(|e| GenError::OutputWrite {
            path: path.clone(),
            source: e,
        })?;

        tracing::info!(code = %lang.code, path = %path.display(), "Generated page");
        Ok(GeneratedPage {
            code: lang.code.clone(),
            display_name: lang.display_name.clone(),
            path,
        })
    }
}

fn ensure_parent_dir(path: &Path) -> GenResult<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => {
            std::fs::create_dir_all(parent).map_err(|e| GenError::CreateDir {
                path: parent.to_path_buf(),
                source: e,
            })
        }
        _ => Ok(()),
    }
}
