//! Shared crawler state and the rules every variant inherits.

use core::fmt;

use tracing::{debug, info};

use super::kind::{CrawlerClass, CrawlerKind};
use super::stats::{CrawlerSpec, CrawlerStats};
use super::{Combatant, Crawler};
use crate::combat::{apply_damage, apply_heal, mitigate_damage};
use crate::error::{CrawlerError, CrawlerResult};

/// A crawler: validated stat state plus the kind that specializes it.
///
/// All damage, healing and leveling arithmetic is implemented here once.
/// The kind `K` is consulted only for the growth curve and for composing
/// outgoing damage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrawlerBase<K> {
    name: String,
    stats: CrawlerStats,
    kind: K,
}

impl<K: CrawlerKind> CrawlerBase<K> {
    /// Create a crawler at full health.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error if `max_health <= 0`, any of
    /// `defence_points`, `attack_points`, `level` is negative, or `name` is
    /// empty. Checks run in that order.
    pub fn with_kind(
        name: impl Into<String>,
        max_health: i32,
        defence_points: i32,
        level: i32,
        attack_points: i32,
        kind: K,
    ) -> CrawlerResult<Self> {
        if max_health <= 0 {
            return Err(CrawlerError::NonPositiveMaxHealth(max_health));
        }
        if defence_points < 0 {
            return Err(CrawlerError::NegativeDefence(defence_points));
        }
        if attack_points < 0 {
            return Err(CrawlerError::NegativeAttack(attack_points));
        }
        if level < 0 {
            return Err(CrawlerError::NegativeLevel(level));
        }
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CrawlerError::MissingName);
        }

        Ok(Self {
            name,
            stats: CrawlerStats::at_full(max_health, defence_points, attack_points, level),
            kind,
        })
    }

    /// Create a crawler from a construction spec.
    pub fn from_spec(spec: CrawlerSpec, kind: K) -> CrawlerResult<Self> {
        let CrawlerSpec {
            name,
            max_health,
            defence_points,
            level,
            attack_points,
        } = spec;
        Self::with_kind(name, max_health, defence_points, level, attack_points, kind)
    }

    pub fn kind(&self) -> &K {
        &self.kind
    }

    /// Read-only view of the current stats.
    pub fn stats(&self) -> &CrawlerStats {
        &self.stats
    }

    fn ensure_alive(&self) -> CrawlerResult<()> {
        if self.stats.is_alive() {
            Ok(())
        } else {
            Err(CrawlerError::already_dead(&self.name))
        }
    }
}

impl<K: CrawlerKind> Crawler for CrawlerBase<K> {
    fn take_damage(&mut self, damage: i32) -> CrawlerResult<()> {
        self.ensure_alive()?;
        if damage < 0 {
            return Err(CrawlerError::NegativeDamage(damage));
        }

        let actual = mitigate_damage(damage, self.stats.defence_points);
        self.stats.current_health = apply_damage(self.stats.current_health, actual);

        debug!(
            target: "delve_core::crawler",
            crawler = %self.name,
            damage,
            actual,
            health = self.stats.current_health,
            "damage taken"
        );
        if !self.stats.is_alive() {
            info!(target: "delve_core::crawler", crawler = %self.name, "crawler died");
        }
        Ok(())
    }

    fn heal(&mut self, amount: i32) -> CrawlerResult<()> {
        if amount < 1 {
            return Err(CrawlerError::NonPositiveHeal(amount));
        }
        // Dead is terminal: healing must not resurrect.
        self.ensure_alive()?;

        self.stats.current_health =
            apply_heal(self.stats.current_health, amount, self.stats.max_health);

        debug!(
            target: "delve_core::crawler",
            crawler = %self.name,
            amount,
            health = self.stats.current_health,
            "healed"
        );
        Ok(())
    }

    fn health(&self) -> i32 {
        self.stats.current_health
    }

    fn max_health(&self) -> i32 {
        self.stats.max_health
    }

    fn defence(&self) -> i32 {
        self.stats.defence_points
    }

    fn attack_power(&self) -> i32 {
        self.stats.attack_points
    }

    fn level(&self) -> i32 {
        self.stats.level
    }

    fn is_alive(&self) -> bool {
        self.stats.is_alive()
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

impl<K: CrawlerKind> Combatant for CrawlerBase<K> {
    fn class(&self) -> CrawlerClass {
        self.kind.class()
    }

    fn inflict_damage(&self, damage: i32, target: &mut dyn Crawler) -> CrawlerResult<()> {
        self.ensure_alive()?;

        let delivered = self.kind.outgoing_damage(&self.stats, damage);
        debug!(
            target: "delve_core::crawler",
            attacker = %self.name,
            defender = target.display_name(),
            damage = delivered,
            "attack delivered"
        );
        target.take_damage(delivered)
    }

    fn level_up(&mut self) -> CrawlerResult<()> {
        self.ensure_alive()?;

        let growth = self.kind.growth(self.stats.level.saturating_add(1));
        self.stats = self
            .stats
            .grown(&growth)
            .map_err(|stat| CrawlerError::StatOverflow {
                name: self.name.clone(),
                stat,
            })?;

        info!(
            target: "delve_core::crawler",
            crawler = %self.name,
            level = self.stats.level,
            max_health = self.stats.max_health,
            attack = self.stats.attack_points,
            defence = self.stats.defence_points,
            "level up"
        );
        Ok(())
    }

    fn as_crawler_mut(&mut self) -> &mut dyn Crawler {
        self
    }
}

impl<K: CrawlerKind> fmt::Display for CrawlerBase<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{} Lv {}] HP {}/{} ATK {} DEF {}",
            self.name,
            self.kind.class(),
            self.stats.level,
            self.stats.current_health,
            self.stats.max_health,
            self.stats.attack_points,
            self.stats.defence_points,
        )
    }
}
