//! Template engine for rendering site pages.

use std::fs;
use std::path::PathBuf;

use minijinja::{AutoEscape, Environment, ErrorKind};

/// The fixed set of values substituted into every page.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SiteContext {
    /// Site title
    pub title: String,
    /// Site description
    pub description: String,
    /// Site author
    pub author: String,
}

impl Default for SiteContext {
    fn default() -> Self {
        Self {
            title: "My Site".to_string(),
            description: "A site built with plank".to_string(),
            author: String::new(),
        }
    }
}

/// Template engine using minijinja.
///
/// Page sources are rendered as strings, but `{% include %}` and
/// `{% extends %}` names resolve against the configured search directories,
/// checked in order. Interpolated values are HTML-escaped for every render.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the given search directories.
    pub fn new(search_dirs: Vec<PathBuf>) -> Self {
        let mut env = Environment::new();

        // Page sources come through render_str, which minijinja would
        // otherwise leave unescaped.
        env.set_auto_escape_callback(|_| AutoEscape::Html);

        env.set_loader(move |name| {
            for dir in &search_dirs {
                let candidate = dir.join(name);
                if candidate.is_file() {
                    let source = fs::read_to_string(&candidate).map_err(|e| {
                        minijinja::Error::new(
                            ErrorKind::InvalidOperation,
                            format!("failed to read template {}: {}", candidate.display(), e),
                        )
                    })?;
                    return Ok(Some(source));
                }
            }
            Ok(None)
        });

        Self { env }
    }

    /// Render a template source with the site context.
    pub fn render_str(
        &self,
        source: &str,
        context: &SiteContext,
    ) -> Result<String, minijinja::Error> {
        self.env.render_str(source, context)
    }
}
