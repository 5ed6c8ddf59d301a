//! Clinch phase: short shots against the cage, and wrestlers dragging the
//! fight down

use rand::Rng;

use crate::bout::constants::*;
use crate::bout::outcome::BoutEventType;
use crate::bout::phase::Exchange;
use crate::bout::round::base_takedown_probability;
use crate::bout::striking::strike_damage;
use crate::core::types::Corner;
use crate::fighter::{FightingStyle, Hook};

pub fn resolve(ex: &mut Exchange<'_>, rng: &mut impl Rng) {
    for corner in [Corner::Red, Corner::Blue] {
        if rng.gen::<f64>() < CLINCH_STRIKE_CHANCE {
            clinch_strike(ex, corner, rng);
        }
    }

    if let Some(wrestler) = cage_wrestler(ex) {
        if rng.gen::<f64>() < CAGE_TAKEDOWN_CHANCE {
            cage_takedown(ex, wrestler, rng);
        }
    }
}

/// The wrestler who works for takedowns along the cage; red is checked first
fn cage_wrestler(ex: &Exchange<'_>) -> Option<Corner> {
    [Corner::Red, Corner::Blue]
        .into_iter()
        .find(|&c| ex.fighter(c).style == FightingStyle::Wrestler)
}

fn clinch_strike(ex: &mut Exchange<'_>, attacker: Corner, rng: &mut impl Rng) {
    let (att, def) = ex.pair_mut(attacker);
    let ctx = att.hook_context(def);
    let power = att.traits.apply(Hook::ClinchPower, &ctx, CLINCH_POWER);
    let damage = strike_damage(att, def, rng) * power * att.momentum_multiplier();

    def.absorb_standing(damage);
    def.absorb_scoring(damage * SCORING_SHARE_CLINCH);
}

fn cage_takedown(ex: &mut Exchange<'_>, wrestler: Corner, rng: &mut impl Rng) {
    let chance = {
        let shooter = ex.fighter(wrestler);
        let defender = ex.fighter(wrestler.other());
        (base_takedown_probability(shooter, defender) + CAGE_TAKEDOWN_BONUS).clamp(0.0, 1.0)
    };
    if rng.gen::<f64>() >= chance {
        return;
    }

    ex.fighter_mut(wrestler).adjust_momentum(MOMENTUM_TAKEDOWN_GAIN);
    ex.on_ground = true;
    ex.log(
        BoutEventType::Takedown {
            by: ex.id(wrestler),
        },
        format!(
            "{} drags {} down from the clinch",
            ex.name(wrestler),
            ex.name(wrestler.other())
        ),
    );
}
