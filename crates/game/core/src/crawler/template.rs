//! Data-driven crawlers (enemies and NPCs) whose curve comes from content.

use super::base::CrawlerBase;
use super::kind::{CrawlerClass, CrawlerKind};
use super::stats::{CrawlerStats, LevelGrowth};

/// Crawler built from a content template.
pub type TemplateCrawler = CrawlerBase<TemplateKind>;

/// Kind whose class and growth curve are supplied by content data.
///
/// Growth is the same at every level; attacks are delivered as given.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TemplateKind {
    class: CrawlerClass,
    growth: LevelGrowth,
}

impl TemplateKind {
    pub const fn new(class: CrawlerClass, growth: LevelGrowth) -> Self {
        Self { class, growth }
    }

    pub const fn enemy(growth: LevelGrowth) -> Self {
        Self::new(CrawlerClass::Enemy, growth)
    }

    pub const fn npc(growth: LevelGrowth) -> Self {
        Self::new(CrawlerClass::Npc, growth)
    }
}

impl CrawlerKind for TemplateKind {
    fn class(&self) -> CrawlerClass {
        self.class
    }

    fn growth(&self, _next_level: i32) -> LevelGrowth {
        self.growth
    }

    fn outgoing_damage(&self, _stats: &CrawlerStats, damage: i32) -> i32 {
        damage
    }
}
