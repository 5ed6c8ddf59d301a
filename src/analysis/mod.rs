//! Many-seed analysis over a single pairing

pub mod matchup;

pub use matchup::{run_matchup, run_matchup_parallel, MatchupReport, MethodCounts};
