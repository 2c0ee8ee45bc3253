//! Initialize a site in the current directory.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(yes: bool) -> Result<()> {
    tracing::info!("Initializing plank site...");

    let templates_dir = Path::new("src/templates");
    if !templates_dir.exists() {
        fs::create_dir_all(templates_dir).context("Failed to create src/templates directory")?;
    }

    // Create default config
    let config_path = Path::new("site.toml");
    if !config_path.exists() || yes {
        fs::write(config_path, DEFAULT_CONFIG).context("Failed to write site.toml")?;
        tracing::info!("Created site.toml");
    }

    // Create shared layout
    let base_path = templates_dir.join("base.html");
    if !base_path.exists() || yes {
        fs::write(&base_path, DEFAULT_BASE).context("Failed to write base.html")?;
        tracing::info!("Created src/templates/base.html");
    }

    // Create the default pages
    for (name, body) in [
        ("index.html", DEFAULT_INDEX),
        ("about.html", DEFAULT_ABOUT),
        ("contact.html", DEFAULT_CONTACT),
    ] {
        let path = Path::new("src").join(name);
        if !path.exists() || yes {
            fs::write(&path, body).with_context(|| format!("Failed to write {}", name))?;
            tracing::info!("Created src/{}", name);
        }
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'plank build' to build the site.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Plank Configuration

[site]
# Values available as {{ title }}, {{ description }}, {{ author }}
title = "My Site"
description = "A site built with plank"
author = ""

[templates]
# Directories searched for includes and layouts, in order
dirs = ["src/templates", "src"]

[build]
# Output directory for built pages
output = "dist"

[[pages]]
input = "src/index.html"
output = "index.html"

[[pages]]
input = "src/about.html"
output = "about.html"

[[pages]]
input = "src/contact.html"
output = "contact.html"
"#;

const DEFAULT_BASE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <meta name="description" content="{{ description }}">
  <meta name="author" content="{{ author }}">
  <title>{% block page_title %}{{ title }}{% endblock %}</title>
</head>
<body>
  <header>
    <h1>{{ title }}</h1>
  </header>
  <main>
    {% block content %}{% endblock %}
  </main>
  <footer>
    <p>{{ author }}</p>
  </footer>
</body>
</html>
"#;

const DEFAULT_INDEX: &str = r#"{% extends "base.html" %}

{% block content %}
<p>{{ description }}</p>
<p>Welcome to your new site.</p>
{% endblock %}
"#;

const DEFAULT_ABOUT: &str = r#"{% extends "base.html" %}

{% block page_title %}About - {{ title }}{% endblock %}

{% block content %}
<h2>About</h2>
<p>{{ description }}</p>
{% endblock %}
"#;

const DEFAULT_CONTACT: &str = r#"{% extends "base.html" %}

{% block page_title %}Contact - {{ title }}{% endblock %}

{% block content %}
<h2>Contact</h2>
<p>Reach out to {{ author }}.</p>
{% endblock %}
"#;
