//! Site build command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use plank_static::{BuildConfig, PageJob, SiteBuilder, SiteContext};
use serde::Deserialize;

/// Configuration file structure (site.toml).
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    site: SiteContext,
    #[serde(default)]
    templates: TemplatesConfig,
    #[serde(default)]
    build: BuildSettings,
    #[serde(default)]
    pages: Option<Vec<PageJob>>,
}

#[derive(Debug, Deserialize)]
struct TemplatesConfig {
    #[serde(default = "default_template_dirs")]
    dirs: Vec<String>,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            dirs: default_template_dirs(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct BuildSettings {
    #[serde(default = "default_output")]
    output: String,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            output: default_output(),
        }
    }
}

fn default_template_dirs() -> Vec<String> {
    vec!["src/templates".to_string(), "src".to_string()]
}
fn default_output() -> String {
    "dist".to_string()
}

/// Load configuration from site.toml if it exists.
/// Returns an error if the config file exists but is malformed.
fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

/// Run the build command.
pub async fn run(config_path: &Path, output: Option<PathBuf>) -> Result<()> {
    tracing::info!("Building site...");

    let file_config = load_config(config_path)?;

    let defaults = BuildConfig::default();

    let config = BuildConfig {
        template_dirs: file_config
            .templates
            .dirs
            .iter()
            .map(PathBuf::from)
            .collect(),
        output_dir: output.unwrap_or_else(|| PathBuf::from(&file_config.build.output)),
        pages: file_config.pages.unwrap_or(defaults.pages),
        context: file_config.site,
    };

    let result = SiteBuilder::new(config).run()?;

    tracing::info!(
        "Built {} pages ({} failed) in {}ms",
        result.built,
        result.failed,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: ConfigFile = toml::from_str("").unwrap();

        assert_eq!(config.site.title, "My Site");
        assert_eq!(config.build.output, "dist");
        assert_eq!(config.templates.dirs, vec!["src/templates", "src"]);
        assert!(config.pages.is_none());
    }

    #[test]
    fn parses_full_config() {
        let config: ConfigFile = toml::from_str(
            r#"
[site]
title = "Docs"
description = "Project docs"
author = "Team"

[templates]
dirs = ["layouts"]

[build]
output = "public"

[[pages]]
input = "src/index.html"
output = "index.html"

[[pages]]
input = "src/contact.html"
output = "contact.html"
"#,
        )
        .unwrap();

        assert_eq!(config.site.title, "Docs");
        assert_eq!(config.site.author, "Team");
        assert_eq!(config.templates.dirs, vec!["layouts"]);
        assert_eq!(config.build.output, "public");

        let pages = config.pages.unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].input, PathBuf::from("src/index.html"));
        assert_eq!(pages[1].output, PathBuf::from("contact.html"));
    }

    #[test]
    fn missing_config_file_is_ok() {
        let config = load_config(Path::new("does-not-exist.toml")).unwrap();

        assert_eq!(config.build.output, "dist");
    }

    #[test]
    fn malformed_config_file_is_an_error() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(&path, "[site\ntitle = ").unwrap();

        assert!(load_config(&path).is_err());
    }
}
