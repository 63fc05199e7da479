//! Turn-based duel between two combatants.

use delve_core::{Combatant, Crawler, CrawlerResult};
use tracing::info;

/// Which side won a duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Challenger,
    Defender,
}

/// Outcome of [`run_duel`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuelReport {
    /// Exchanges fought; each exchange is one strike per living side.
    pub rounds: u32,
    /// `None` when the round limit was reached with both sides standing.
    pub winner: Option<Side>,
}

/// Alternate basic attacks until one side dies or `max_rounds` pass.
///
/// The challenger strikes first each round. The driver checks aliveness
/// before every strike, so crawler errors only surface on a rules violation.
/// The winner levels up once.
pub fn run_duel(
    challenger: &mut dyn Combatant,
    defender: &mut dyn Combatant,
    max_rounds: u32,
) -> CrawlerResult<DuelReport> {
    let mut rounds = 0;
    let mut winner = None;

    while rounds < max_rounds {
        rounds += 1;

        challenger.strike(defender.as_crawler_mut())?;
        if !defender.is_alive() {
            winner = Some(Side::Challenger);
            break;
        }

        defender.strike(challenger.as_crawler_mut())?;
        if !challenger.is_alive() {
            winner = Some(Side::Defender);
            break;
        }

        info!(
            target: "delve_cli::duel",
            round = rounds,
            challenger_hp = challenger.health(),
            defender_hp = defender.health(),
            "round complete"
        );
    }

    match winner {
        Some(Side::Challenger) => challenger.level_up()?,
        Some(Side::Defender) => defender.level_up()?,
        None => {}
    }

    Ok(DuelReport { rounds, winner })
}

#[cfg(test)]
mod tests {
    use super::*;
    use delve_core::{LevelGrowth, PlayerCrawler, TemplateCrawler, TemplateKind};

    fn rat(max_health: i32, attack: i32) -> TemplateCrawler {
        TemplateCrawler::with_kind(
            "Rat",
            max_health,
            0,
            0,
            attack,
            TemplateKind::enemy(LevelGrowth::new(2, 1, 0)),
        )
        .unwrap()
    }

    #[test]
    fn stronger_challenger_wins_and_levels_up() {
        let mut hero = PlayerCrawler::new("Hero", 100, 5, 1, 10).unwrap();
        let mut rat = rat(25, 3);

        let report = run_duel(&mut hero, &mut rat, 100).unwrap();

        // 10 damage per strike: rat dies on the third strike.
        assert_eq!(
            report,
            DuelReport {
                rounds: 3,
                winner: Some(Side::Challenger)
            }
        );
        assert!(!rat.is_alive());
        // Two rat strikes at minimum damage, then a full heal on level-up.
        assert_eq!(hero.level(), 2);
        assert_eq!(hero.health(), 115);
    }

    #[test]
    fn defender_can_win() {
        let mut hero = PlayerCrawler::new("Hero", 10, 0, 0, 1).unwrap();
        let mut rat = rat(50, 6);

        let report = run_duel(&mut hero, &mut rat, 100).unwrap();

        assert_eq!(report.winner, Some(Side::Defender));
        assert_eq!(report.rounds, 2);
        assert_eq!(rat.level(), 1);
        assert_eq!(rat.health(), 52);
    }

    #[test]
    fn round_limit_ends_in_draw_without_level_up() {
        let mut a = rat(1_000, 1);
        let mut b = rat(1_000, 1);

        let report = run_duel(&mut a, &mut b, 5).unwrap();

        assert_eq!(
            report,
            DuelReport {
                rounds: 5,
                winner: None
            }
        );
        assert_eq!(a.health(), 995);
        assert_eq!(b.health(), 995);
        assert_eq!(a.level(), 0);
    }
}
