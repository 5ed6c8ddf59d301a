//! Bout resolution engine
//!
//! Fight driver -> round driver -> phase resolvers -> finish evaluator,
//! then judging and narration if nobody was stopped.

pub mod clinch;
pub mod constants;
pub mod fight;
pub mod finish;
pub mod ground;
pub mod judging;
pub mod narrative;
pub mod outcome;
pub mod phase;
pub mod round;
pub mod striking;
pub mod style;

pub use fight::{simulate_bout, Bout};
pub use judging::Scorecard;
pub use outcome::{
    BoutEvent, BoutEventType, FightOutcome, FighterTick, Method, RoundOutcome, TickSnapshot,
};
pub use phase::{Exchange, Phase, PhaseResolver, StandardPhases, Stoppage};
pub use style::{StyleContext, StyleMatchup};
