//! Crawler stat values and growth increments.

/// Stat fields of a crawler, named in errors and logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum StatKind {
    MaxHealth,
    Attack,
    Defence,
    Level,
}

/// Mutable stat state owned by a crawler.
///
/// Only [`CrawlerBase`](super::CrawlerBase) produces these after validation,
/// so `0 <= current_health <= max_health` and every other stat is
/// non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrawlerStats {
    pub max_health: i32,
    pub current_health: i32,
    pub defence_points: i32,
    pub attack_points: i32,
    pub level: i32,
}

impl CrawlerStats {
    /// Create stats at full health.
    pub(crate) const fn at_full(
        max_health: i32,
        defence_points: i32,
        attack_points: i32,
        level: i32,
    ) -> Self {
        Self {
            max_health,
            current_health: max_health,
            defence_points,
            attack_points,
            level,
        }
    }

    pub const fn is_alive(&self) -> bool {
        self.current_health > 0
    }

    /// Stats after one level of `growth`, fully healed.
    ///
    /// Returns the first stat that would overflow instead of wrapping.
    pub fn grown(&self, growth: &LevelGrowth) -> Result<Self, StatKind> {
        let level = self.level.checked_add(1).ok_or(StatKind::Level)?;
        let max_health = grow(self.max_health, growth.max_health).ok_or(StatKind::MaxHealth)?;
        let attack_points = grow(self.attack_points, growth.attack).ok_or(StatKind::Attack)?;
        let defence_points = grow(self.defence_points, growth.defence).ok_or(StatKind::Defence)?;

        Ok(Self {
            max_health,
            current_health: max_health,
            defence_points,
            attack_points,
            level,
        })
    }
}

fn grow(value: i32, increment: u32) -> Option<i32> {
    i32::try_from(increment).ok().and_then(|inc| value.checked_add(inc))
}

/// Per-level stat increments of a growth curve.
///
/// Increments are unsigned, so leveling can never decrease a stat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelGrowth {
    pub max_health: u32,
    pub attack: u32,
    pub defence: u32,
}

impl LevelGrowth {
    pub const fn new(max_health: u32, attack: u32, defence: u32) -> Self {
        Self {
            max_health,
            attack,
            defence,
        }
    }

    /// A curve that only raises the level.
    pub const fn flat() -> Self {
        Self::new(0, 0, 0)
    }
}

/// Construction parameters for a crawler.
///
/// Supplied by game setup (content templates, dungeon generator). Values are
/// unvalidated until passed to [`CrawlerBase::from_spec`](super::CrawlerBase::from_spec).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrawlerSpec {
    pub name: String,
    pub max_health: i32,
    pub defence_points: i32,
    pub level: i32,
    pub attack_points: i32,
}

impl CrawlerSpec {
    /// Create a spec with the same argument order as crawler construction.
    pub fn new(
        name: impl Into<String>,
        max_health: i32,
        defence_points: i32,
        level: i32,
        attack_points: i32,
    ) -> Self {
        Self {
            name: name.into(),
            max_health,
            defence_points,
            level,
            attack_points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grown_applies_increments_and_heals() {
        let mut stats = CrawlerStats::at_full(100, 5, 10, 1);
        stats.current_health = 12;

        let next = stats.grown(&LevelGrowth::new(15, 5, 2)).unwrap();

        assert_eq!(next.level, 2);
        assert_eq!(next.max_health, 115);
        assert_eq!(next.attack_points, 15);
        assert_eq!(next.defence_points, 7);
        assert_eq!(next.current_health, 115);
    }

    #[test]
    fn grown_reports_overflowing_stat() {
        let stats = CrawlerStats::at_full(i32::MAX - 3, 0, 0, 0);
        assert_eq!(
            stats.grown(&LevelGrowth::new(4, 0, 0)),
            Err(StatKind::MaxHealth)
        );

        let stats = CrawlerStats::at_full(10, 0, 0, i32::MAX);
        assert_eq!(stats.grown(&LevelGrowth::flat()), Err(StatKind::Level));
    }

    #[test]
    fn increments_beyond_i32_overflow() {
        let stats = CrawlerStats::at_full(10, 0, 0, 0);
        assert_eq!(
            stats.grown(&LevelGrowth::new(0, u32::MAX, 0)),
            Err(StatKind::Attack)
        );
    }
}
