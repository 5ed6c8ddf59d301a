//! Fight driver: rounds, recovery, and the decision if nobody is stopped

use std::collections::BTreeMap;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use crate::bout::judging::{judge, Scorecard};
use crate::bout::narrative::{narrate, NarrativeContext};
use crate::bout::outcome::{FightOutcome, Method, RoundOutcome};
use crate::bout::phase::{PhaseResolver, StandardPhases};
use crate::bout::round::{recover_between_rounds, run_round};
use crate::bout::style::StyleContext;
use crate::core::config::{BoutConfig, RoundCount};
use crate::core::error::{BoutError, Result};
use crate::core::types::{Corner, FightClock, FighterId};
use crate::fighter::FighterSnapshot;

/// A validated pairing, ready to be simulated any number of times
///
/// Running a bout never touches the stored snapshots: each run works on
/// fresh copies with runtime state reset.
#[derive(Debug, Clone)]
pub struct Bout {
    fighters: [FighterSnapshot; 2],
    style: StyleContext,
    config: BoutConfig,
}

impl Bout {
    pub fn new(red: FighterSnapshot, blue: FighterSnapshot, config: BoutConfig) -> Result<Self> {
        if red.id == blue.id {
            return Err(BoutError::SameFighter(red.id));
        }
        config.validate().map_err(BoutError::InvalidConfig)?;

        let red = sanitize(red);
        let blue = sanitize(blue);
        let style = StyleContext::resolve(red.style, blue.style);

        Ok(Self {
            fighters: [red, blue],
            style,
            config,
        })
    }

    pub fn fighter(&self, corner: Corner) -> &FighterSnapshot {
        &self.fighters[corner.index()]
    }

    pub fn style(&self) -> &StyleContext {
        &self.style
    }

    pub fn config(&self) -> &BoutConfig {
        &self.config
    }

    /// Simulate with the production fight model and a generator seeded from `seed`
    pub fn run(&self, seed: u64) -> FightOutcome {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.run_with(&StandardPhases, &mut rng)
    }

    /// Simulate with a caller-supplied phase model and generator
    pub fn run_with<P: PhaseResolver>(&self, phases: &P, rng: &mut impl Rng) -> FightOutcome {
        let mut fighters = self.fighters.clone();
        for f in fighters.iter_mut() {
            f.reset_for_bout();
        }

        let scheduled = self.config.rounds.rounds();
        debug!(
            red = %fighters[0].name,
            blue = %fighters[1].name,
            rounds = scheduled,
            matchup = self.style.matchup.label(),
            "bout started"
        );

        let mut knockdowns: BTreeMap<_, u32> = fighters.iter().map(|f| (f.id, 0)).collect();
        let mut rounds: Vec<RoundOutcome> = Vec::with_capacity(scheduled as usize);

        for round in 1..=scheduled {
            let outcome = run_round(&mut fighters, &self.style, &self.config, round, phases, rng);
            for (id, count) in &outcome.knockdowns {
                *knockdowns.entry(*id).or_insert(0) += count;
            }

            let finish = match (outcome.winner, outcome.method, outcome.time) {
                (Some(winner), Some(method), Some(time)) => Some((winner, method, time)),
                _ => None,
            };
            rounds.push(outcome);

            if let Some((winner_id, method, time)) = finish {
                let winner = if winner_id == fighters[0].id {
                    Corner::Red
                } else {
                    Corner::Blue
                };
                return self.conclude(
                    &fighters, winner, method, round, time, rounds, knockdowns, None, rng,
                );
            }

            if round < scheduled {
                for f in fighters.iter_mut() {
                    recover_between_rounds(f, round);
                }
            }
        }

        let (winner, method, card) = judge(&fighters, rng);
        let time = FightClock(self.config.round_seconds());
        self.conclude(
            &fighters,
            winner,
            method,
            scheduled,
            time,
            rounds,
            knockdowns,
            Some(card),
            rng,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn conclude(
        &self,
        fighters: &[FighterSnapshot; 2],
        winner: Corner,
        method: Method,
        round_ended: u32,
        time_ended: FightClock,
        rounds: Vec<RoundOutcome>,
        knockdowns: BTreeMap<FighterId, u32>,
        scorecard: Option<Scorecard>,
        rng: &mut impl Rng,
    ) -> FightOutcome {
        let w = &fighters[winner.index()];
        let l = &fighters[winner.other().index()];

        let ctx = NarrativeContext {
            winner: &w.name,
            loser: &l.name,
            method,
            round: round_ended,
            matchup: self.style.matchup,
            knockdowns: NarrativeContext::knockdowns_in_order(
                [
                    (fighters[0].name.as_str(), fighters[0].id),
                    (fighters[1].name.as_str(), fighters[1].id),
                ],
                &knockdowns,
            ),
        };
        let narrative = narrate(&ctx, rng);

        debug!(
            winner = %w.name,
            method = method.label(),
            round = round_ended,
            time = %time_ended,
            "bout result"
        );

        FightOutcome {
            winner: w.id,
            loser: l.id,
            method,
            round_ended,
            time_ended,
            knockdowns,
            narrative,
            rounds,
            scorecard,
        }
    }
}

/// Force attributes into range, warning about what was out of it
fn sanitize(mut fighter: FighterSnapshot) -> FighterSnapshot {
    if let Err(err) = fighter.attributes.validate() {
        warn!(fighter = %fighter.name, %err, "clamping attributes");
        fighter.attributes = fighter.attributes.clamped();
    }
    fighter
}

/// Simulate one bout between two snapshots
///
/// `rounds` must be 3 or 5. The same snapshots and seed always produce the
/// same outcome.
pub fn simulate_bout(
    red: FighterSnapshot,
    blue: FighterSnapshot,
    rounds: u32,
    seed: u64,
) -> Result<FightOutcome> {
    let rounds = RoundCount::try_from(rounds)?;
    let bout = Bout::new(red, blue, BoutConfig::with_rounds(rounds))?;
    Ok(bout.run(seed))
}
