//! Static site builder for plank.
//!
//! Renders HTML templates with a fixed site context and writes the results
//! to a build directory, one page at a time.

pub mod builder;
pub mod templates;

pub use builder::{BuildConfig, BuildError, BuildResult, PageJob, SiteBuilder};
pub use templates::{SiteContext, TemplateEngine};
