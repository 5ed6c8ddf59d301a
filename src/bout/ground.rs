//! Ground phase: top position, ground-and-pound and submission attempts

use rand::Rng;

use crate::bout::constants::*;
use crate::bout::outcome::BoutEventType;
use crate::bout::phase::Exchange;
use crate::core::types::Corner;
use crate::fighter::{FighterSnapshot, FightingStyle, Hook, HookContext};

pub fn resolve(ex: &mut Exchange<'_>, rng: &mut impl Rng) {
    let top = top_position(ex);

    if rng.gen::<f64>() < GROUND_POUND_CHANCE {
        ground_and_pound(ex, top, rng);
    }

    if rng.gen::<f64>() < submission_chance(ex.fighter(top)) {
        submission_attempt(ex, top, rng);
    }
}

/// Higher effective wrestling takes top position; ties go to red
pub fn top_position(ex: &Exchange<'_>) -> Corner {
    let red = ex.fighter(Corner::Red).effective_wrestling();
    let blue = ex.fighter(Corner::Blue).effective_wrestling();
    if red >= blue {
        Corner::Red
    } else {
        Corner::Blue
    }
}

pub fn submission_chance(attacker: &FighterSnapshot) -> f64 {
    if attacker.effective_grappling() > SUBMISSION_ELITE_GRAPPLING {
        SUBMISSION_CHANCE_ELITE
    } else {
        SUBMISSION_CHANCE
    }
}

/// Defender's chance to escape a submission attempt, in [0, 1]
pub fn escape_probability(defender: &FighterSnapshot) -> f64 {
    let skill =
        (defender.effective_grappling() * 0.7 + defender.effective_wrestling() * 0.3) / ESCAPE_DIVISOR;
    let mut escape = skill.max(ESCAPE_FLOOR);

    if defender.is_hurt() {
        escape *= ESCAPE_HURT_FACTOR;
    }
    let ctx = HookContext::round(defender.state.round);
    escape = defender.traits.apply(Hook::SubmissionEscape, &ctx, escape);
    if defender.style == FightingStyle::WellRounded {
        escape *= ESCAPE_WELL_ROUNDED_FACTOR;
    }

    escape.clamp(0.0, 1.0)
}

/// Multiplier on every ground strike and submission the defender absorbs
fn damage_taken(defender: &FighterSnapshot) -> f64 {
    let ctx = HookContext::round(defender.state.round);
    defender.traits.apply(Hook::GroundDamageTaken, &ctx, 1.0)
}

fn ground_and_pound(ex: &mut Exchange<'_>, top: Corner, rng: &mut impl Rng) {
    let (att, def) = ex.pair_mut(top);
    let ctx = att.hook_context(def);

    let base = rng.gen_range(GROUND_POUND_MIN..GROUND_POUND_MAX) * att.effective_striking() / 100.0;
    let damage = att.traits.apply(Hook::GroundPound, &ctx, base)
        * att.momentum_multiplier()
        * damage_taken(def);

    def.absorb_ground(damage * GROUND_POUND_GROUND_SHARE);
    def.absorb_standing(damage * GROUND_POUND_STANDING_SHARE);

    ex.log(
        BoutEventType::GroundAndPound {
            by: ex.id(top),
            damage,
        },
        format!("{} lands ground and pound", ex.name(top)),
    );
}

fn submission_attempt(ex: &mut Exchange<'_>, top: Corner, rng: &mut impl Rng) {
    let bottom = top.other();
    ex.log(
        BoutEventType::SubmissionAttempt { by: ex.id(top) },
        format!("{} attempts a submission", ex.name(top)),
    );

    let (att, def) = ex.pair_mut(top);
    let escape = escape_probability(def);
    let roll = rng.gen::<f64>();

    if roll < escape * 0.5 {
        def.adjust_momentum(MOMENTUM_ESCAPE_SWING);
        att.adjust_momentum(-MOMENTUM_ESCAPE_SWING);
        ex.log(
            BoutEventType::SubmissionEscape {
                by: ex.id(bottom),
                partial: false,
            },
            format!("{} escapes the submission cleanly", ex.name(bottom)),
        );
        return;
    }

    let partial = roll < escape;
    let mut damage = rng.gen_range(SUBMISSION_DAMAGE_MIN..SUBMISSION_DAMAGE_MAX);
    if partial {
        damage *= 0.5;
    }
    damage *= att.momentum_multiplier() * damage_taken(def);
    def.absorb_ground(damage);

    if partial {
        ex.log(
            BoutEventType::SubmissionEscape {
                by: ex.id(bottom),
                partial: true,
            },
            format!("{} partially escapes, still in danger", ex.name(bottom)),
        );
    } else {
        ex.log(
            BoutEventType::SubmissionLocked {
                by: ex.id(top),
                damage,
            },
            format!("{} locks in the submission", ex.name(top)),
        );
    }
}
