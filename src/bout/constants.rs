//! Bout constants - all tunable values in one place
//!
//! These are calibration choices. Several interact (finish thresholds vs.
//! damage ranges vs. knockdown odds), so change them together or not at all.

// Time
pub const TICKS_PER_ROUND: u32 = 10;
pub const TICK_SECONDS: u32 = 30;

// Momentum
pub const MOMENTUM_DECAY_PER_TICK: f64 = 0.02;
pub const MOMENTUM_DAMAGE_SCALE: f64 = 0.2;
pub const MOMENTUM_STRIKE_SWING: f64 = 0.05;
pub const MOMENTUM_KNOCKDOWN_SWING: f64 = 0.30;
pub const MOMENTUM_TAKEDOWN_GAIN: f64 = 0.15;
pub const MOMENTUM_TAKEDOWN_LOSS: f64 = 0.05;
pub const MOMENTUM_ESCAPE_SWING: f64 = 0.10;
/// Opponent momentum beyond +/- this moves finish thresholds
pub const MOMENTUM_FINISH_PIVOT: f64 = 0.5;
pub const FINISH_EASIER_FACTOR: f64 = 0.90;
pub const FINISH_HARDER_FACTOR: f64 = 1.10;

// Hurt state
pub const HURT_TICKS: u32 = 2;
pub const HURT_SKILL_PENALTY: f64 = 0.75;

// Takedowns
pub const TAKEDOWN_SHOOT_WEIGHT: f64 = 0.20;
pub const TAKEDOWN_DEFENSE_WEIGHT: f64 = 0.12;
pub const TAKEDOWN_BASE: f64 = 0.04;
pub const TAKEDOWN_MIN: f64 = 0.02;
pub const TAKEDOWN_MAX: f64 = 0.35;
pub const TRAILING_WELL_ROUNDED_BONUS: f64 = 0.10;

// Striking
pub const HIT_BASE: f64 = 0.4;
pub const HIT_SKILL_DIVISOR: f64 = 200.0;
pub const HIT_MIN: f64 = 0.15;
pub const HIT_MAX: f64 = 0.85;
pub const FIRST_STRIKE_BONUS: f64 = 0.05;
pub const STRIKE_DAMAGE_MIN: f64 = 4.0;
pub const STRIKE_DAMAGE_MAX: f64 = 14.0;
pub const SCORING_SHARE_STRIKE: f64 = 0.5;
pub const KNOCKDOWN_DAMAGE_FLOOR: f64 = 12.0;
pub const REFEREE_STOPPAGE_CHANCE: f64 = 0.12;
pub const KNOCKDOWNS_FOR_STOPPAGE: u32 = 2;
pub const FLASH_IMPACT_DAMAGE: f64 = 25.0;

// Clinch
pub const CLINCH_STRIKE_CHANCE: f64 = 0.5;
pub const CLINCH_POWER: f64 = 0.6;
pub const SCORING_SHARE_CLINCH: f64 = 0.3;
pub const CAGE_TAKEDOWN_CHANCE: f64 = 0.40;
pub const CAGE_TAKEDOWN_BONUS: f64 = 0.10;

// Ground
pub const GROUND_POUND_CHANCE: f64 = 0.65;
pub const GROUND_POUND_MIN: f64 = 6.0;
pub const GROUND_POUND_MAX: f64 = 15.0;
pub const GROUND_POUND_GROUND_SHARE: f64 = 0.6;
pub const GROUND_POUND_STANDING_SHARE: f64 = 0.1;
pub const SUBMISSION_ELITE_GRAPPLING: f64 = 80.0;
pub const SUBMISSION_CHANCE_ELITE: f64 = 0.32;
pub const SUBMISSION_CHANCE: f64 = 0.22;
pub const ESCAPE_DIVISOR: f64 = 180.0;
pub const ESCAPE_FLOOR: f64 = 0.22;
pub const ESCAPE_HURT_FACTOR: f64 = 0.70;
pub const ESCAPE_WELL_ROUNDED_FACTOR: f64 = 1.15;
pub const SUBMISSION_DAMAGE_MIN: f64 = 25.0;
pub const SUBMISSION_DAMAGE_MAX: f64 = 40.0;

// Finishes
pub const STRIKE_FINISH_BASE: f64 = 68.0;
pub const STRIKE_FINISH_CHIN_SLOPE: f64 = 0.8;
pub const GRAPPLE_FINISH_BASE: f64 = 70.0;

// Fatigue
pub const DRAIN_MIN: f64 = 1.5;
pub const DRAIN_MAX: f64 = 3.5;
pub const DRAIN_CARDIO_DIVISOR: f64 = 150.0;
pub const RECOVERY_BASE: f64 = 15.0;
pub const RECOVERY_PER_ROUND: f64 = 2.0;
pub const RECOVERY_MIN: f64 = 3.0;
/// Below this cardio the between-round ceiling drops each round
pub const LOW_CARDIO: f64 = 60.0;
pub const LOW_CARDIO_CEILING_SLOPE: f64 = 0.3;

// Judging
pub const KNOCKDOWN_SCORE: f64 = 10.0;
pub const STANDING_SCORE_WEIGHT: f64 = 0.5;
pub const JUDGING_NOISE: f64 = 5.0;
pub const CLOSE_DECISION_MARGIN: f64 = 3.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_is_five_minutes() {
        assert_eq!(TICKS_PER_ROUND * TICK_SECONDS, 300);
    }

    #[test]
    fn test_probability_bounds_ordered() {
        assert!(HIT_MIN < HIT_BASE && HIT_BASE < HIT_MAX && HIT_MAX < 1.0);
        assert!(TAKEDOWN_MIN < TAKEDOWN_MAX);
        assert!(SUBMISSION_CHANCE < SUBMISSION_CHANCE_ELITE);
    }

    #[test]
    fn test_damage_ranges_positive() {
        assert!(STRIKE_DAMAGE_MIN > 0.0 && STRIKE_DAMAGE_MIN < STRIKE_DAMAGE_MAX);
        assert!(GROUND_POUND_MIN < GROUND_POUND_MAX);
        assert!(SUBMISSION_DAMAGE_MIN < SUBMISSION_DAMAGE_MAX);
    }
}
