use crate::combat::MINIMUM_DAMAGE;
use crate::crawler::{LevelGrowth, PlayerKind};

/// Game rules constants and tunable parameters for crawlers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RulesConfig {
    /// Stat increments a player crawler gains on each level-up.
    pub player_growth: LevelGrowth,
}

impl RulesConfig {
    // ===== compile-time constants =====
    /// Smallest damage any landed attack deals after defence.
    pub const MINIMUM_DAMAGE: i32 = MINIMUM_DAMAGE;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_PLAYER_GROWTH: LevelGrowth = PlayerKind::GROWTH;

    pub fn new() -> Self {
        Self {
            player_growth: Self::DEFAULT_PLAYER_GROWTH,
        }
    }

    pub fn with_player_growth(player_growth: LevelGrowth) -> Self {
        Self { player_growth }
    }

    /// Player kind carrying the configured growth curve.
    pub fn player_kind(&self) -> PlayerKind {
        PlayerKind::with_growth(self.player_growth)
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self::new()
    }
}
