//! Core type definitions used throughout the codebase

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for fighters
///
/// Opaque to the engine: only used to label outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FighterId(pub Uuid);

impl FighterId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Build a stable id from a caller-side integer key (e.g. a database row id)
    pub fn from_u128(key: u128) -> Self {
        Self(Uuid::from_u128(key))
    }
}

impl Default for FighterId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FighterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which side of the cage a fighter was listed on
///
/// The first-listed fighter (`Red`) wins initiative and position ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    Red,
    Blue,
}

impl Corner {
    pub fn other(self) -> Self {
        match self {
            Corner::Red => Corner::Blue,
            Corner::Blue => Corner::Red,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Corner::Red => 0,
            Corner::Blue => 1,
        }
    }
}

/// Elapsed time within a round, in simulated seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FightClock(pub u32);

impl FightClock {
    pub fn from_ticks(ticks: u32, tick_seconds: u32) -> Self {
        Self(ticks * tick_seconds)
    }

    pub fn minutes(&self) -> u32 {
        self.0 / 60
    }

    pub fn seconds(&self) -> u32 {
        self.0 % 60
    }
}

/// Formats as a cage clock, e.g. `2:30`
impl fmt::Display for FightClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.minutes(), self.seconds())
    }
}
