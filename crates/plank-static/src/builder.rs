//! Site builder.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use crate::templates::{SiteContext, TemplateEngine};

/// Configuration for building a site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Directories searched for `{% include %}` and `{% extends %}` targets
    pub template_dirs: Vec<PathBuf>,

    /// Output directory
    pub output_dir: PathBuf,

    /// Pages to build, in order
    pub pages: Vec<PageJob>,

    /// Values available to every template
    pub context: SiteContext,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            template_dirs: vec![PathBuf::from("src/templates"), PathBuf::from("src")],
            output_dir: PathBuf::from("dist"),
            pages: vec![
                PageJob::new("src/index.html", "index.html"),
                PageJob::new("src/about.html", "about.html"),
                PageJob::new("src/contact.html", "contact.html"),
            ],
            context: SiteContext::default(),
        }
    }
}

/// One page to build: a template file and where its output goes.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct PageJob {
    /// Path to the template source file
    pub input: PathBuf,

    /// Output path, relative to the output directory
    pub output: PathBuf,
}

impl PageJob {
    /// Create a job from an input path and an output path.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

/// Result of a build run.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of pages built
    pub built: usize,

    /// Number of pages that failed
    pub failed: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during a build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to read template: {0}")]
    ReadError(String),

    #[error("Failed to render template: {0}")]
    RenderError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),

    #[error("Failed to create output directory: {0}")]
    DirCreateError(String),
}

/// Site builder.
///
/// Builds each configured page in order. A page that fails to read, render,
/// or write is logged and skipped; the rest of the batch still runs. Only a
/// failure to create the output directory aborts the run.
pub struct SiteBuilder {
    config: BuildConfig,
    templates: TemplateEngine,
}

impl SiteBuilder {
    /// Create a new site builder.
    pub fn new(config: BuildConfig) -> Self {
        let templates = TemplateEngine::new(config.template_dirs.clone());

        Self { config, templates }
    }

    /// Build the site.
    pub fn run(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        // Ensure output directory exists
        fs::create_dir_all(&self.config.output_dir).map_err(|e| {
            BuildError::DirCreateError(format!(
                "{}: {}",
                self.config.output_dir.display(),
                e
            ))
        })?;

        let mut built = 0;
        let mut failed = 0;

        for page in &self.config.pages {
            match self.build_page(page) {
                Ok(output_path) => {
                    tracing::info!("✓ Built {}", output_path.display());
                    built += 1;
                }
                Err(e) => {
                    tracing::error!("✗ Error building {}: {}", page.input.display(), e);
                    failed += 1;
                }
            }
        }

        tracing::info!("Build completed!");

        let duration = start.elapsed();

        Ok(BuildResult {
            built,
            failed,
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Build a single page.
    fn build_page(&self, page: &PageJob) -> Result<PathBuf, BuildError> {
        let source = fs::read_to_string(&page.input)
            .map_err(|e| BuildError::ReadError(format!("{}: {}", page.input.display(), e)))?;

        let html = self
            .templates
            .render_str(&source, &self.config.context)
            .map_err(|e| BuildError::RenderError(e.to_string()))?;

        let output_path = self.config.output_dir.join(&page.output);

        fs::write(&output_path, html)
            .map_err(|e| BuildError::WriteError(format!("{}: {}", output_path.display(), e)))?;

        Ok(output_path)
    }
}
