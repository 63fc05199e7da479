//! Content loaders for reading crawler data from files.
//!
//! This module provides loaders that convert RON/TOML files into delve-core
//! values, and a factory that turns templates into live crawlers.

pub mod config;
pub mod factory;
pub mod templates;

pub use config::ConfigLoader;
pub use factory::{ContentFactory, CrawlerFactory};
pub use templates::{TemplateCatalog, TemplateLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
