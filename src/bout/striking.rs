//! Striking phase: one exchange on the feet
//!
//! The faster fighter throws first with a small accuracy bonus; the other
//! answers unless the first strike already ended the fight.

use rand::Rng;

use crate::bout::constants::*;
use crate::bout::outcome::{BoutEventType, Method};
use crate::bout::phase::Exchange;
use crate::core::types::Corner;
use crate::fighter::{FighterSnapshot, Hook};

pub fn resolve(ex: &mut Exchange<'_>, rng: &mut impl Rng) {
    let first = initiative(ex);
    throw(ex, first, true, rng);
    if ex.is_over() {
        return;
    }
    throw(ex, first.other(), false, rng);
}

/// Who strikes first this tick; ties go to red
pub fn initiative(ex: &Exchange<'_>) -> Corner {
    let red = ex.fighter(Corner::Red).initiative_speed();
    let blue = ex.fighter(Corner::Blue).initiative_speed();
    if red >= blue {
        Corner::Red
    } else {
        Corner::Blue
    }
}

/// Chance that `attacker` lands on `defender`, before the first-strike bonus
pub fn hit_probability(attacker: &FighterSnapshot, defender: &FighterSnapshot) -> f64 {
    let ctx = attacker.hook_context(defender);
    let raw = HIT_BASE + (attacker.effective_striking() - defender.speed()) / HIT_SKILL_DIVISOR;
    attacker
        .traits
        .apply(Hook::HitChance, &ctx, raw)
        .clamp(HIT_MIN, HIT_MAX)
}

/// Raw strike damage before momentum and trait multipliers
pub fn strike_damage(
    attacker: &FighterSnapshot,
    defender: &FighterSnapshot,
    rng: &mut impl Rng,
) -> f64 {
    let power = attacker.effective_striking() / 100.0;
    let chin_reduction = defender.chin() / 100.0;
    let base = rng.gen_range(STRIKE_DAMAGE_MIN..STRIKE_DAMAGE_MAX);
    (base * power * (1.2 - chin_reduction * 0.4)).max(0.0)
}

/// Knockdown chance for a landed strike; zero at or below the damage floor
pub fn knockdown_probability(damage: f64, defender_chin: f64) -> f64 {
    if damage <= KNOCKDOWN_DAMAGE_FLOOR {
        return 0.0;
    }
    ((damage - 10.0) / 100.0 * (1.0 - defender_chin / 120.0)).clamp(0.0, 1.0)
}

fn throw(ex: &mut Exchange<'_>, attacker: Corner, initiator: bool, rng: &mut impl Rng) {
    let defender = attacker.other();
    let (att, def) = ex.pair_mut(attacker);

    let mut hit = hit_probability(att, def);
    if initiator {
        hit = (hit + FIRST_STRIKE_BONUS).min(HIT_MAX);
    }
    if rng.gen::<f64>() >= hit {
        return;
    }

    let ctx = att.hook_context(def);
    let multiplier = att.momentum_multiplier() * att.traits.apply(Hook::StrikePower, &ctx, 1.0);
    let damage = strike_damage(att, def, rng) * multiplier;

    def.absorb_standing(damage);
    def.absorb_scoring(damage * SCORING_SHARE_STRIKE);
    att.state.strikes_landed_this_round += 1;
    att.adjust_momentum(MOMENTUM_STRIKE_SWING);
    def.adjust_momentum(-MOMENTUM_STRIKE_SWING);

    let flash_chance = att.traits.apply(Hook::FlashImpactChance, &ctx, 0.0);
    let knockdown_chance = knockdown_probability(damage, def.chin());

    ex.log(
        BoutEventType::StrikeLanded {
            by: ex.id(attacker),
            damage,
        },
        format!("{} lands strike ({:.1} dmg)", ex.name(attacker), damage),
    );

    if knockdown_chance > 0.0 && rng.gen::<f64>() < knockdown_chance {
        knockdown(ex, attacker, rng);
        if ex.is_over() {
            return;
        }
    }

    // Flat bonus impact; only rolled for fighters who carry the chance
    if flash_chance > 0.0 && rng.gen::<f64>() < flash_chance {
        ex.fighter_mut(defender).absorb_standing(FLASH_IMPACT_DAMAGE);
    }
}

fn knockdown(ex: &mut Exchange<'_>, attacker: Corner, rng: &mut impl Rng) {
    let defender = attacker.other();
    {
        let (att, def) = ex.pair_mut(attacker);
        def.record_knockdown();
        att.adjust_momentum(MOMENTUM_KNOCKDOWN_SWING);
        def.adjust_momentum(-MOMENTUM_KNOCKDOWN_SWING);
    }

    ex.log(
        BoutEventType::Knockdown {
            by: ex.id(attacker),
            victim: ex.id(defender),
        },
        format!(
            "{} scores a knockdown on {}!",
            ex.name(attacker),
            ex.name(defender)
        ),
    );

    if rng.gen::<f64>() < REFEREE_STOPPAGE_CHANCE {
        ex.stop(attacker, Method::StrikeStoppage);
        return;
    }

    if ex.fighter(defender).state.round_knockdowns >= KNOCKDOWNS_FOR_STOPPAGE {
        ex.stop(attacker, Method::StrikeStoppage);
    }
}
