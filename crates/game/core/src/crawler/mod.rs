//! Crawlers - every combatant in the dungeon (player, enemy or NPC).
//!
//! # Architecture
//!
//! ```text
//! [ Crawler (capability contract) ]
//!      ↑
//! [ Combatant (extension points: inflict_damage, level_up) ]
//!      ↑
//! [ CrawlerBase<K> (validation, stat state, shared formulas) ]
//!      ↑
//! [ CrawlerKind (PlayerKind, TemplateKind) ]
//! ```
//!
//! ## Principles
//!
//! 1. **Single owner of the rules**: all stat arithmetic lives in [`CrawlerBase`]
//! 2. **Thin variants**: a [`CrawlerKind`] only supplies its growth curve and
//!    how it composes outgoing damage
//! 3. **No partial mutation**: preconditions are checked before any state changes
//! 4. **Dead is terminal**: no operation brings a crawler back to life

pub mod base;
pub mod kind;
pub mod player;
pub mod stats;
pub mod template;

pub use base::CrawlerBase;
pub use kind::{CrawlerClass, CrawlerKind};
pub use player::{PlayerCrawler, PlayerKind};
pub use stats::{CrawlerSpec, CrawlerStats, LevelGrowth, StatKind};
pub use template::{TemplateCrawler, TemplateKind};

use crate::error::CrawlerResult;

/// Operations every combatant exposes, independent of its representation.
///
/// Any type satisfying this contract can be handled by a combat driver or a
/// renderer through `&mut dyn Crawler`.
pub trait Crawler {
    /// Apply incoming damage, mitigated by this crawler's defence.
    ///
    /// Fails with an illegal-state error if the crawler is already dead and
    /// with an invalid-argument error if `damage` is negative.
    fn take_damage(&mut self, damage: i32) -> CrawlerResult<()>;

    /// Restore health by `amount`, never exceeding the maximum.
    fn heal(&mut self, amount: i32) -> CrawlerResult<()>;

    /// Current health. Zero means dead.
    fn health(&self) -> i32;

    /// Upper bound on health. Only ever increases.
    fn max_health(&self) -> i32;

    fn defence(&self) -> i32;

    /// Base damage this crawler deals on a basic attack.
    fn attack_power(&self) -> i32;

    fn level(&self) -> i32;

    /// True iff current health is above zero.
    fn is_alive(&self) -> bool;

    /// Immutable identifier used for display.
    fn display_name(&self) -> &str;
}

/// A crawler that can attack and grow.
///
/// These are the variant-specific extension points; how they behave is
/// decided by the crawler's [`CrawlerKind`].
pub trait Combatant: Crawler {
    /// The kind of combatant this is.
    fn class(&self) -> CrawlerClass;

    /// Deliver `damage` from this crawler to `target`.
    ///
    /// The variant decides how the value is composed before the target's
    /// [`Crawler::take_damage`] is called. Errors raised by the target are
    /// returned unchanged.
    fn inflict_damage(&self, damage: i32, target: &mut dyn Crawler) -> CrawlerResult<()>;

    /// Advance one level.
    ///
    /// Level increases by exactly 1, max health, attack and defence grow by the
    /// variant's amounts, and health is restored to the new maximum.
    fn level_up(&mut self) -> CrawlerResult<()>;

    /// View this combatant as a plain damage target.
    fn as_crawler_mut(&mut self) -> &mut dyn Crawler;

    /// Basic attack: inflict this crawler's attack power on `target`.
    fn strike(&self, target: &mut dyn Crawler) -> CrawlerResult<()> {
        self.inflict_damage(self.attack_power(), target)
    }
}
