//! Data-driven crawler content and loaders.
//!
//! This crate houses crawler templates and provides loaders for RON/TOML data files:
//! - Crawler templates (players, enemies, NPCs) via RON
//! - Game rules (growth curves) via TOML
//!
//! Templates are consumed by game setup to construct crawlers; they never
//! appear in crawler state. All loaders use delve-core types directly with
//! serde for RON/TOML deserialization.

pub mod template;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use template::CrawlerTemplate;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, CrawlerFactory, TemplateCatalog, TemplateLoader};
