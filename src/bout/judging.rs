//! Judges' decision for bouts that go the distance

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bout::constants::*;
use crate::bout::outcome::Method;
use crate::core::types::Corner;
use crate::fighter::FighterSnapshot;

/// Aggregate scores, each fighter credited with the damage they dealt
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scorecard {
    pub red: f64,
    pub blue: f64,
}

impl Scorecard {
    pub fn margin(&self) -> f64 {
        (self.red - self.blue).abs()
    }

    /// Red only on a strictly higher score
    pub fn leader(&self) -> Corner {
        if self.red > self.blue {
            Corner::Red
        } else {
            Corner::Blue
        }
    }
}

/// Score before the subjective noise: the opponent's judging and standing
/// damage plus the knockdowns scored against them
pub fn raw_score(opponent: &FighterSnapshot) -> f64 {
    opponent.state.scoring_damage
        + opponent.state.standing_damage * STANDING_SCORE_WEIGHT
        + opponent.state.knockdowns as f64 * KNOCKDOWN_SCORE
}

pub fn judge(fighters: &[FighterSnapshot; 2], rng: &mut impl Rng) -> (Corner, Method, Scorecard) {
    let [red, blue] = fighters;

    let mut card = Scorecard {
        red: raw_score(blue),
        blue: raw_score(red),
    };
    card.red += rng.gen_range(-JUDGING_NOISE..=JUDGING_NOISE);
    card.blue += rng.gen_range(-JUDGING_NOISE..=JUDGING_NOISE);

    let winner = card.leader();
    let method = if card.margin() < CLOSE_DECISION_MARGIN {
        if rng.gen_bool(0.5) {
            Method::SplitDecision
        } else {
            Method::MajorityDecision
        }
    } else {
        Method::UnanimousDecision
    };

    debug!(
        red = card.red,
        blue = card.blue,
        method = method.label(),
        "judges' decision"
    );
    (winner, method, card)
}
