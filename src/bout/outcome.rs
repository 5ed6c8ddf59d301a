//! Bout results: methods, event log, round and fight outcomes

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bout::judging::Scorecard;
use crate::bout::phase::Phase;
use crate::core::types::{FightClock, FighterId};

/// How the bout ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    #[serde(rename = "KO/TKO")]
    StrikeStoppage,
    Submission,
    #[serde(rename = "Unanimous Decision")]
    UnanimousDecision,
    #[serde(rename = "Split Decision")]
    SplitDecision,
    #[serde(rename = "Majority Decision")]
    MajorityDecision,
}

impl Method {
    pub fn is_decision(&self) -> bool {
        matches!(
            self,
            Method::UnanimousDecision | Method::SplitDecision | Method::MajorityDecision
        )
    }

    pub fn is_finish(&self) -> bool {
        !self.is_decision()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Method::StrikeStoppage => "KO/TKO",
            Method::Submission => "Submission",
            Method::UnanimousDecision => "Unanimous Decision",
            Method::SplitDecision => "Split Decision",
            Method::MajorityDecision => "Majority Decision",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Log entry for bout events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoutEvent {
    /// 1-based tick within the round
    pub tick: u32,
    pub event_type: BoutEventType,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BoutEventType {
    StrikeLanded { by: FighterId, damage: f64 },
    Knockdown { by: FighterId, victim: FighterId },
    Takedown { by: FighterId },
    GroundAndPound { by: FighterId, damage: f64 },
    SubmissionAttempt { by: FighterId },
    SubmissionEscape { by: FighterId, partial: bool },
    SubmissionLocked { by: FighterId, damage: f64 },
    Stoppage { winner: FighterId, method: Method },
}

/// Fighter state captured at the end of a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FighterTick {
    pub stamina: f64,
    pub momentum: f64,
    pub standing_damage: f64,
    pub ground_damage: f64,
    pub strike_threshold: f64,
    pub grapple_threshold: f64,
}

/// One row of the per-tick trace, recorded when tracing is on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickSnapshot {
    pub round: u32,
    pub tick: u32,
    pub phase: Phase,
    /// Indexed by corner: red first
    pub fighters: [FighterTick; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub round: u32,
    pub winner: Option<FighterId>,
    pub method: Option<Method>,
    pub time: Option<FightClock>,
    pub events: Vec<BoutEvent>,
    /// Knockdowns suffered this round; fighters without one are absent
    pub knockdowns: BTreeMap<FighterId, u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trace: Vec<TickSnapshot>,
}

impl RoundOutcome {
    pub fn new(round: u32) -> Self {
        Self {
            round,
            winner: None,
            method: None,
            time: None,
            events: Vec::new(),
            knockdowns: BTreeMap::new(),
            trace: Vec::new(),
        }
    }

    pub fn is_finish(&self) -> bool {
        self.winner.is_some()
    }
}

/// Terminal record of a bout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FightOutcome {
    pub winner: FighterId,
    pub loser: FighterId,
    pub method: Method,
    pub round_ended: u32,
    pub time_ended: FightClock,
    /// Knockdowns suffered over the bout; both fighters present
    pub knockdowns: BTreeMap<FighterId, u32>,
    pub narrative: String,
    pub rounds: Vec<RoundOutcome>,
    /// Only when the bout went the distance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scorecard: Option<Scorecard>,
}

impl FightOutcome {
    pub fn knockdowns_of(&self, id: FighterId) -> u32 {
        self.knockdowns.get(&id).copied().unwrap_or(0)
    }
}
