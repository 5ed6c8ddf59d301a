//! Finish evaluator: cumulative-damage stoppages checked after every tick
//!
//! Thresholds belong to the fighter absorbing the damage; the opponent's
//! momentum only scales them.

use crate::bout::constants::*;
use crate::bout::outcome::Method;
use crate::core::types::Corner;
use crate::fighter::{FighterSnapshot, Hook, HookContext};

/// Scale a threshold by the opponent's momentum
pub fn momentum_adjusted(threshold: f64, opponent_momentum: f64) -> f64 {
    let adjusted = if opponent_momentum > MOMENTUM_FINISH_PIVOT {
        threshold * FINISH_EASIER_FACTOR
    } else if opponent_momentum < -MOMENTUM_FINISH_PIVOT {
        threshold * FINISH_HARDER_FACTOR
    } else {
        threshold
    };
    adjusted.max(0.0)
}

/// Standing damage at which `fighter` is stopped by strikes
pub fn strike_threshold(fighter: &FighterSnapshot, opponent_momentum: f64) -> f64 {
    let base = STRIKE_FINISH_BASE + (fighter.chin() - 50.0) * STRIKE_FINISH_CHIN_SLOPE;
    let ctx = HookContext::round(fighter.state.round);
    let threshold = fighter.traits.apply(Hook::StrikeFinishThreshold, &ctx, base);
    momentum_adjusted(threshold, opponent_momentum)
}

/// Ground damage at which `fighter` is submitted
pub fn grapple_threshold(fighter: &FighterSnapshot, opponent_momentum: f64) -> f64 {
    let ctx = HookContext::round(fighter.state.round);
    let threshold = fighter
        .traits
        .apply(Hook::GrappleFinishThreshold, &ctx, GRAPPLE_FINISH_BASE);
    momentum_adjusted(threshold, opponent_momentum)
}

pub fn is_finished_by_strikes(fighter: &FighterSnapshot, opponent: &FighterSnapshot) -> bool {
    fighter.state.standing_damage >= strike_threshold(fighter, opponent.state.momentum)
}

pub fn is_finished_by_grappling(fighter: &FighterSnapshot, opponent: &FighterSnapshot) -> bool {
    fighter.state.ground_damage >= grapple_threshold(fighter, opponent.state.momentum)
}

/// Winner and method if either fighter has crossed a threshold
///
/// Order: red stopped by strikes, blue stopped by strikes, red submitted,
/// blue submitted.
pub fn evaluate(fighters: &[FighterSnapshot; 2]) -> Option<(Corner, Method)> {
    let [red, blue] = fighters;

    if is_finished_by_strikes(red, blue) {
        return Some((Corner::Blue, Method::StrikeStoppage));
    }
    if is_finished_by_strikes(blue, red) {
        return Some((Corner::Red, Method::StrikeStoppage));
    }
    if is_finished_by_grappling(red, blue) {
        return Some((Corner::Blue, Method::Submission));
    }
    if is_finished_by_grappling(blue, red) {
        return Some((Corner::Red, Method::Submission));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::FighterId;
    use crate::fighter::{Attributes, FightingStyle, Trait, TraitSet};

    fn fighter(id: u128, chin: u32, traits: &[Trait]) -> FighterSnapshot {
        let attrs = Attributes {
            chin,
            ..Attributes::uniform(60)
        };
        FighterSnapshot::new(FighterId::from_u128(id), "F", attrs, FightingStyle::Striker)
            .with_traits(TraitSet::from_traits(traits.iter().copied()).unwrap())
    }

    #[test]
    fn test_base_threshold_at_chin_50() {
        assert!((strike_threshold(&fighter(1, 50, &[]), 0.0) - 68.0).abs() < 1e-9);
        assert!((grapple_threshold(&fighter(1, 50, &[]), 0.0) - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_iron_chin_threshold() {
        let t = strike_threshold(&fighter(1, 50, &[Trait::IronChin]), 0.0);
        assert!((t - 85.12).abs() < 1e-9);
    }

    #[test]
    fn test_submission_magnet_threshold() {
        let t = grapple_threshold(&fighter(1, 50, &[Trait::SubmissionMagnet]), 0.0);
        assert!((t - 55.0).abs() < 1e-9);
    }

    #[test]
    fn test_momentum_pivot_is_exclusive() {
        assert_eq!(momentum_adjusted(100.0, 0.5), 100.0);
        assert!((momentum_adjusted(100.0, 0.51) - 90.0).abs() < 1e-9);
        assert!((momentum_adjusted(100.0, -0.51) - 110.0).abs() < 1e-9);
        assert_eq!(momentum_adjusted(-5.0, 0.0), 0.0);
    }

    #[test]
    fn test_low_chin_threshold_never_negative() {
        let mut f = fighter(1, 1, &[]);
        f.weight_cut = crate::fighter::CutSeverity::Extreme;
        assert!(strike_threshold(&f, 1.0) >= 0.0);
    }

    #[test]
    fn test_threshold_monotonic_in_chin() {
        let traits = [Trait::ComebackKing, Trait::JourneymanHeart];
        let mut last = 0.0;
        for chin in 1..=100 {
            let t = strike_threshold(&fighter(1, chin, &traits), 0.0);
            assert!(t >= last);
            last = t;
        }
    }

    #[test]
    fn test_evaluation_order() {
        let mut red = fighter(1, 50, &[]);
        let mut blue = fighter(2, 50, &[]);
        assert_eq!(evaluate(&[red.clone(), blue.clone()]), None);

        red.absorb_ground(80.0);
        blue.absorb_standing(80.0);
        // Blue's strike stoppage is checked before red's submission
        assert_eq!(
            evaluate(&[red, blue]),
            Some((Corner::Red, Method::StrikeStoppage))
        );
    }
}
