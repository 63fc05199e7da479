//! The crawler controlled by the player.

use super::base::CrawlerBase;
use super::kind::{CrawlerClass, CrawlerKind};
use super::stats::{CrawlerStats, LevelGrowth};
use crate::error::CrawlerResult;

/// Player crawler: shared base behavior with the player growth curve.
pub type PlayerCrawler = CrawlerBase<PlayerKind>;

/// Player specialization.
///
/// # Stat Scaling
///
/// Balanced growth for steady progression, per level:
/// - **Max Health**: +15
/// - **Attack Power**: +5
/// - **Defence Points**: +2
///
/// Leveling up restores health to the new maximum. Attacks are delivered as
/// given; held items are expected to modify the value in a later revision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerKind {
    growth: LevelGrowth,
}

impl PlayerKind {
    pub const GROWTH: LevelGrowth = LevelGrowth::new(15, 5, 2);

    pub const fn new() -> Self {
        Self::with_growth(Self::GROWTH)
    }

    /// Player with a configured growth curve (see [`RulesConfig`](crate::RulesConfig)).
    pub const fn with_growth(growth: LevelGrowth) -> Self {
        Self { growth }
    }
}

impl Default for PlayerKind {
    fn default() -> Self {
        Self::new()
    }
}

impl CrawlerKind for PlayerKind {
    fn class(&self) -> CrawlerClass {
        CrawlerClass::Player
    }

    fn growth(&self, _next_level: i32) -> LevelGrowth {
        self.growth
    }

    fn outgoing_damage(&self, _stats: &CrawlerStats, damage: i32) -> i32 {
        damage
    }
}

impl CrawlerBase<PlayerKind> {
    /// Create a player crawler with the default growth curve.
    ///
    /// Validation is entirely the base's; see [`CrawlerBase::with_kind`].
    pub fn new(
        name: impl Into<String>,
        max_health: i32,
        defence_points: i32,
        level: i32,
        attack_points: i32,
    ) -> CrawlerResult<Self> {
        Self::with_kind(
            name,
            max_health,
            defence_points,
            level,
            attack_points,
            PlayerKind::new(),
        )
    }
}
