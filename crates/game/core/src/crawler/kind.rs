//! Variant-specific behavior plugged into the shared crawler base.

use super::stats::{CrawlerStats, LevelGrowth};

/// Combatant kind (role in the dungeon).
///
/// The class is fixed at creation and tells drivers and renderers how to
/// treat the crawler.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CrawlerClass {
    /// Controlled by the player
    Player,
    /// Hostile monster
    Enemy,
    /// Non-player character (merchant, guide)
    Npc,
}

/// Strategy supplying the two extension points of a crawler.
///
/// [`CrawlerBase`](super::CrawlerBase) owns validation and state; a kind only
/// decides how much the crawler grows per level and what damage value its
/// attacks hand to the target.
pub trait CrawlerKind {
    /// The class reported for crawlers of this kind.
    fn class(&self) -> CrawlerClass;

    /// Increments applied when the crawler reaches `next_level`.
    fn growth(&self, next_level: i32) -> LevelGrowth;

    /// Damage actually delivered to the target when this crawler inflicts
    /// `damage`. The result is passed straight to the target's `take_damage`.
    fn outgoing_damage(&self, stats: &CrawlerStats, damage: i32) -> i32;
}
