//! Round driver
//!
//! Each tick: decay -> phase selection -> phase -> finish check -> fatigue

use rand::Rng;
use tracing::{debug, trace};

use crate::bout::constants::*;
use crate::bout::finish;
use crate::bout::outcome::{
    BoutEvent, BoutEventType, FighterTick, Method, RoundOutcome, TickSnapshot,
};
use crate::bout::phase::{Exchange, Phase, PhaseResolver};
use crate::bout::style::StyleContext;
use crate::core::config::{BoutConfig, TraceMode};
use crate::core::types::{Corner, FightClock};
use crate::fighter::{FighterSnapshot, FightingStyle, Hook, HookContext};

/// Takedown chance from wrestling alone, before style and game-plan adjustments
pub fn base_takedown_probability(shooter: &FighterSnapshot, defender: &FighterSnapshot) -> f64 {
    let shoot = shooter.effective_wrestling() / 100.0 * TAKEDOWN_SHOOT_WEIGHT;
    let defense = defender.effective_wrestling() / 100.0 * TAKEDOWN_DEFENSE_WEIGHT;
    (shoot - defense + TAKEDOWN_BASE).clamp(TAKEDOWN_MIN, TAKEDOWN_MAX)
}

/// Per-corner takedown probabilities for this tick
///
/// A well-rounded fighter who is losing on the feet shoots more.
pub fn takedown_probabilities(fighters: &[FighterSnapshot; 2], style: &StyleContext) -> [f64; 2] {
    let [red, blue] = fighters;
    let mut td = [
        base_takedown_probability(red, blue) + style.takedown_delta_red,
        base_takedown_probability(blue, red) + style.takedown_delta_blue,
    ];

    if red.style == FightingStyle::WellRounded
        && red.state.standing_damage > blue.state.standing_damage
    {
        td[0] += TRAILING_WELL_ROUNDED_BONUS;
    }
    if blue.style == FightingStyle::WellRounded
        && blue.state.standing_damage > red.state.standing_damage
    {
        td[1] += TRAILING_WELL_ROUNDED_BONUS;
    }

    td
}

/// Phase chosen for a tick, and who shot if it was a fresh takedown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseChoice {
    pub phase: Phase,
    pub takedown_by: Option<Corner>,
}

/// Pick the phase for a tick
///
/// A fight left on the mat stays there while the stand-up roll exceeds the
/// style's stickiness. Otherwise a single draw splits the unit interval into
/// takedown, clinch and striking bands.
pub fn select_phase(
    on_ground: bool,
    td: [f64; 2],
    style: &StyleContext,
    rng: &mut impl Rng,
) -> PhaseChoice {
    if on_ground && rng.gen::<f64>() > style.ground_stickiness {
        return PhaseChoice {
            phase: Phase::Ground,
            takedown_by: None,
        };
    }

    let takedown = td[0].max(td[1]).clamp(0.0, 1.0);
    let clinch = style.clinch_chance.clamp(0.0, 1.0);
    let u = rng.gen::<f64>();

    if u < takedown {
        let shooter = if td[0] >= td[1] { Corner::Red } else { Corner::Blue };
        PhaseChoice {
            phase: Phase::Ground,
            takedown_by: Some(shooter),
        }
    } else if u < takedown + (1.0 - takedown) * clinch {
        PhaseChoice {
            phase: Phase::Clinch,
            takedown_by: None,
        }
    } else {
        PhaseChoice {
            phase: Phase::Striking,
            takedown_by: None,
        }
    }
}

/// Per-tick stamina cost
pub fn drain_stamina(fighter: &mut FighterSnapshot, rng: &mut impl Rng) {
    let base = rng.gen_range(DRAIN_MIN..DRAIN_MAX);
    let cardio_factor = 1.0 - fighter.attributes.cardio as f64 / DRAIN_CARDIO_DIVISOR;
    let ctx = HookContext::round(fighter.state.round);
    let factor = fighter.traits.apply(Hook::StaminaDrain, &ctx, cardio_factor);
    fighter.spend_stamina(base * factor);
}

/// Between-round recovery after `completed_round`
///
/// Low-cardio fighters are capped by a ceiling that drops each round.
pub fn recover_between_rounds(fighter: &mut FighterSnapshot, completed_round: u32) {
    let r = completed_round as f64;
    let ctx = HookContext::round(completed_round);
    let base = (RECOVERY_BASE - RECOVERY_PER_ROUND * r).max(RECOVERY_MIN);
    let recovery = fighter.traits.apply(Hook::RoundRecovery, &ctx, base);

    let cardio = fighter.attributes.cardio as f64;
    let ceiling = if cardio < LOW_CARDIO {
        let ceiling = 100.0 - r * (LOW_CARDIO - cardio) * LOW_CARDIO_CEILING_SLOPE;
        fighter.traits.apply(Hook::RecoveryCeiling, &ctx, ceiling)
    } else {
        100.0
    };

    fighter.recover_stamina(recovery, ceiling);
}

fn tick_snapshot(fighters: &[FighterSnapshot; 2], round: u32, tick: u32, phase: Phase) -> TickSnapshot {
    let capture = |me: &FighterSnapshot, opp: &FighterSnapshot| FighterTick {
        stamina: me.state.stamina,
        momentum: me.state.momentum,
        standing_damage: me.state.standing_damage,
        ground_damage: me.state.ground_damage,
        strike_threshold: finish::strike_threshold(me, opp.state.momentum),
        grapple_threshold: finish::grapple_threshold(me, opp.state.momentum),
    };
    let [red, blue] = fighters;
    TickSnapshot {
        round,
        tick,
        phase,
        fighters: [capture(red, blue), capture(blue, red)],
    }
}

/// Play one round; returns early on a finish
pub fn run_round<P: PhaseResolver>(
    fighters: &mut [FighterSnapshot; 2],
    style: &StyleContext,
    config: &BoutConfig,
    round: u32,
    phases: &P,
    rng: &mut impl Rng,
) -> RoundOutcome {
    let mut outcome = RoundOutcome::new(round);
    for f in fighters.iter_mut() {
        f.start_round(round);
    }

    let tracing_ticks = config.trace == TraceMode::Ticks;
    let mut on_ground = false;

    for tick in 1..=config.ticks_per_round {
        for f in fighters.iter_mut() {
            f.decay_tick();
        }

        let td = takedown_probabilities(fighters, style);
        let choice = select_phase(on_ground, td, style, rng);
        trace!(round, tick, phase = choice.phase.label(), "phase selected");

        let mut ex = Exchange::new(fighters, &mut outcome.events, style, round, tick);
        match choice.phase {
            Phase::Ground => {
                if let Some(shooter) = choice.takedown_by {
                    {
                        let (shot, sprawled) = ex.pair_mut(shooter);
                        shot.adjust_momentum(MOMENTUM_TAKEDOWN_GAIN);
                        sprawled.adjust_momentum(-MOMENTUM_TAKEDOWN_LOSS);
                    }
                    ex.log(
                        BoutEventType::Takedown {
                            by: ex.id(shooter),
                        },
                        format!(
                            "{} takes {} down",
                            ex.name(shooter),
                            ex.name(shooter.other())
                        ),
                    );
                }
                ex.on_ground = true;
                phases.ground(&mut ex, rng);
            }
            Phase::Clinch => {
                phases.clinch(&mut ex, rng);
                if ex.on_ground && !ex.is_over() {
                    phases.ground(&mut ex, rng);
                }
            }
            Phase::Striking => phases.striking(&mut ex, rng),
        }
        on_ground = ex.on_ground;
        let stoppage = ex.stoppage();

        let finish = stoppage
            .map(|s| (s.winner, s.method))
            .or_else(|| finish::evaluate(fighters));

        if let Some((winner, method)) = finish {
            let loser = winner.other();
            if stoppage.is_none() {
                let verb = match method {
                    Method::Submission => "submits",
                    _ => "finishes with strikes",
                };
                outcome.events.push(BoutEvent {
                    tick,
                    event_type: BoutEventType::Stoppage {
                        winner: fighters[winner.index()].id,
                        method,
                    },
                    description: format!(
                        "{} {} {}",
                        fighters[winner.index()].name,
                        verb,
                        fighters[loser.index()].name
                    ),
                });
            }

            let time = FightClock::from_ticks(tick, config.tick_seconds);
            debug!(
                round,
                %time,
                method = method.label(),
                winner = %fighters[winner.index()].name,
                "bout finished"
            );

            outcome.winner = Some(fighters[winner.index()].id);
            outcome.method = Some(method);
            outcome.time = Some(time);
            if tracing_ticks {
                outcome.trace.push(tick_snapshot(fighters, round, tick, choice.phase));
            }
            record_knockdowns(&mut outcome, fighters);
            return outcome;
        }

        for f in fighters.iter_mut() {
            drain_stamina(f, rng);
        }

        if tracing_ticks {
            outcome.trace.push(tick_snapshot(fighters, round, tick, choice.phase));
        }
    }

    record_knockdowns(&mut outcome, fighters);
    outcome
}

fn record_knockdowns(outcome: &mut RoundOutcome, fighters: &[FighterSnapshot; 2]) {
    for f in fighters {
        if f.state.round_knockdowns > 0 {
            outcome.knockdowns.insert(f.id, f.state.round_knockdowns);
        }
    }
}
