//! Combatant model for the delve dungeon game.
//!
//! `delve-core` defines the canonical crawler rules: the [`Crawler`] capability
//! contract, the shared [`CrawlerBase`] that owns all stat arithmetic and
//! validation, and the [`CrawlerKind`] strategies that give each variant its
//! leveling curve and attack delivery. Combat drivers and renderers depend on
//! the types re-exported here.
pub mod combat;
pub mod config;
pub mod crawler;
pub mod error;

pub use config::RulesConfig;
pub use crawler::{
    Combatant, Crawler, CrawlerBase, CrawlerClass, CrawlerKind, CrawlerSpec, CrawlerStats,
    LevelGrowth, PlayerCrawler, PlayerKind, StatKind, TemplateCrawler, TemplateKind,
};
pub use error::{CrawlerError, CrawlerResult, ErrorKind, ErrorSeverity, GameError};
