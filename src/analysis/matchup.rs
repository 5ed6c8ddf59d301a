use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::bout::{Bout, FightOutcome, Method};
use crate::core::types::{Corner, FighterId};

/// What a sweep keeps from each bout: winner, method, round ended
type BoutSummary = (FighterId, Method, u32);

/// How bouts in a sweep ended
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodCounts {
    pub strike_stoppage: usize,
    pub submission: usize,
    pub unanimous: usize,
    pub split: usize,
    pub majority: usize,
}

impl MethodCounts {
    pub fn record(&mut self, method: Method) {
        match method {
            Method::StrikeStoppage => self.strike_stoppage += 1,
            Method::Submission => self.submission += 1,
            Method::UnanimousDecision => self.unanimous += 1,
            Method::SplitDecision => self.split += 1,
            Method::MajorityDecision => self.majority += 1,
        }
    }

    pub fn finishes(&self) -> usize {
        self.strike_stoppage + self.submission
    }

    pub fn decisions(&self) -> usize {
        self.unanimous + self.split + self.majority
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupReport {
    pub red: FighterId,
    pub blue: FighterId,
    pub bouts: usize,
    pub red_wins: usize,
    pub blue_wins: usize,
    pub methods: MethodCounts,
    /// Mean round the bout ended in, decisions included
    pub avg_round_ended: f64,
}

impl MatchupReport {
    fn from_summaries(bout: &Bout, summaries: &[BoutSummary]) -> Self {
        let red = bout.fighter(Corner::Red).id;
        let blue = bout.fighter(Corner::Blue).id;

        let mut methods = MethodCounts::default();
        let mut red_wins = 0;
        let mut round_sum = 0u64;
        for &(winner, method, round_ended) in summaries {
            methods.record(method);
            if winner == red {
                red_wins += 1;
            }
            round_sum += round_ended as u64;
        }

        let bouts = summaries.len();
        let avg_round_ended = if bouts == 0 {
            0.0
        } else {
            round_sum as f64 / bouts as f64
        };

        Self {
            red,
            blue,
            bouts,
            red_wins,
            blue_wins: bouts - red_wins,
            methods,
            avg_round_ended,
        }
    }

    pub fn win_rate(&self, corner: Corner) -> f64 {
        if self.bouts == 0 {
            return 0.0;
        }
        let wins = match corner {
            Corner::Red => self.red_wins,
            Corner::Blue => self.blue_wins,
        };
        wins as f64 / self.bouts as f64
    }

    pub fn finish_rate(&self) -> f64 {
        if self.bouts == 0 {
            0.0
        } else {
            self.methods.finishes() as f64 / self.bouts as f64
        }
    }
}

/// Run `iterations` bouts on seeds `base_seed, base_seed + 1, ...`
pub fn run_matchup(bout: &Bout, base_seed: u64, iterations: usize) -> MatchupReport {
    run_matchup_with_parallelism(bout, base_seed, iterations, false)
}

/// Like [run_matchup] but spreads seeds across all cores via Rayon.
/// The report is identical to the sequential one.
pub fn run_matchup_parallel(bout: &Bout, base_seed: u64, iterations: usize) -> MatchupReport {
    run_matchup_with_parallelism(bout, base_seed, iterations, true)
}

fn run_matchup_with_parallelism(
    bout: &Bout,
    base_seed: u64,
    iterations: usize,
    parallel: bool,
) -> MatchupReport {
    // Event logs are dropped as soon as each bout finishes
    let run_one = |i: usize| summarize(&bout.run(base_seed.wrapping_add(i as u64)));

    let summaries: Vec<BoutSummary> = if parallel {
        (0..iterations).into_par_iter().map(run_one).collect()
    } else {
        (0..iterations).map(run_one).collect()
    };

    MatchupReport::from_summaries(bout, &summaries)
}

fn summarize(outcome: &FightOutcome) -> BoutSummary {
    (outcome.winner, outcome.method, outcome.round_ended)
}
