//! Style matchups
//!
//! Computed once per bout from the two styles. Takedown deltas are
//! directional: a wrestler shooting on a striker is not the mirror of a
//! striker shooting on a wrestler.

use serde::{Deserialize, Serialize};

use crate::fighter::FightingStyle;

/// Descriptive label for the style pairing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StyleMatchup {
    #[default]
    Neutral,
    StrikingBattle,
    TakedownBattle,
    GrapplingClinic,
}

impl StyleMatchup {
    pub fn label(&self) -> &'static str {
        match self {
            StyleMatchup::Neutral => "",
            StyleMatchup::StrikingBattle => "striking battle",
            StyleMatchup::TakedownBattle => "takedown battle",
            StyleMatchup::GrapplingClinic => "grappling clinic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleContext {
    /// Added to the first-listed fighter's takedown probability
    pub takedown_delta_red: f64,
    /// Added to the second-listed fighter's takedown probability
    pub takedown_delta_blue: f64,
    pub clinch_chance: f64,
    /// A stand-up roll above this keeps the fight on the mat
    pub ground_stickiness: f64,
    pub matchup: StyleMatchup,
}

impl Default for StyleContext {
    /// Neutral context: no takedown adjustment, standard clinch rate
    fn default() -> Self {
        Self {
            takedown_delta_red: 0.0,
            takedown_delta_blue: 0.0,
            clinch_chance: 0.20,
            ground_stickiness: 1.0,
            matchup: StyleMatchup::Neutral,
        }
    }
}

/// Takedown adjustment when `shooter` shoots on `defender`
///
/// Pairs not listed (Well-Rounded shooting) are neutral.
pub fn takedown_delta(shooter: FightingStyle, defender: FightingStyle) -> f64 {
    use FightingStyle::*;

    match (shooter, defender) {
        (Wrestler, Striker) => 0.10,
        (Wrestler, Grappler) => 0.03,
        (Wrestler, Wrestler) => 0.05,
        (Wrestler, WellRounded) => 0.05,
        (Striker, Wrestler) => -0.08,
        (Striker, Grappler) => -0.04,
        (Striker, Striker) => -0.05,
        (Striker, WellRounded) => -0.02,
        (Grappler, Striker) => 0.08,
        (Grappler, Grappler) => 0.08,
        (Grappler, Wrestler) => 0.03,
        (Grappler, WellRounded) => 0.03,
        (WellRounded, _) => 0.0,
    }
}

impl StyleContext {
    pub fn resolve(red: FightingStyle, blue: FightingStyle) -> Self {
        use FightingStyle::*;

        let mut ctx = Self {
            takedown_delta_red: takedown_delta(red, blue),
            takedown_delta_blue: takedown_delta(blue, red),
            ..Self::default()
        };

        match (red, blue) {
            (Striker, Striker) => {
                ctx.clinch_chance = 0.10;
                ctx.matchup = StyleMatchup::StrikingBattle;
            }
            (Wrestler, Striker) | (Striker, Wrestler) => {
                ctx.clinch_chance = 0.30;
                ctx.matchup = StyleMatchup::TakedownBattle;
            }
            (Grappler, Grappler) => {
                ctx.ground_stickiness = 0.80;
                ctx.matchup = StyleMatchup::GrapplingClinic;
            }
            _ => {}
        }

        ctx
    }
}
