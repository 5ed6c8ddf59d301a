//! Bout configuration with documented defaults
//!
//! Numeric tunings of the fight model live in `bout::constants`; this module
//! only holds what a caller may legitimately choose per bout.

use serde::{Deserialize, Serialize};

use crate::bout::constants::{TICKS_PER_ROUND, TICK_SECONDS};
use crate::core::error::BoutError;

/// Scheduled length of a bout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum RoundCount {
    /// Three rounds
    #[default]
    Standard,
    /// Five rounds (title fights and main events)
    Championship,
}

impl RoundCount {
    pub fn rounds(self) -> u32 {
        match self {
            RoundCount::Standard => 3,
            RoundCount::Championship => 5,
        }
    }
}

impl TryFrom<u32> for RoundCount {
    type Error = BoutError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(RoundCount::Standard),
            5 => Ok(RoundCount::Championship),
            other => Err(BoutError::UnsupportedRounds(other)),
        }
    }
}

impl From<RoundCount> for u32 {
    fn from(value: RoundCount) -> Self {
        value.rounds()
    }
}

/// Whether the round driver records a per-tick state trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceMode {
    #[default]
    Off,
    /// One `TickSnapshot` per resolved tick
    Ticks,
}

/// Configuration for a single bout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoutConfig {
    /// Scheduled rounds (3 or 5)
    pub rounds: RoundCount,

    /// Ticks per round
    ///
    /// At the default (10) and 30-second ticks a round lasts five minutes.
    /// Fewer ticks means fewer exchanges, so fewer finishes.
    pub ticks_per_round: u32,

    /// Simulated seconds per tick
    ///
    /// Only affects reported finish times, never the fight model.
    pub tick_seconds: u32,

    /// Per-tick state capture for debugging and property tests
    pub trace: TraceMode,
}

impl Default for BoutConfig {
    fn default() -> Self {
        Self {
            rounds: RoundCount::Standard,
            ticks_per_round: TICKS_PER_ROUND,
            tick_seconds: TICK_SECONDS,
            trace: TraceMode::Off,
        }
    }
}

impl BoutConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rounds(rounds: RoundCount) -> Self {
        Self {
            rounds,
            ..Self::default()
        }
    }

    /// Length of a full round in simulated seconds
    pub fn round_seconds(&self) -> u32 {
        self.ticks_per_round.saturating_mul(self.tick_seconds)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.ticks_per_round == 0 {
            return Err("ticks_per_round must be positive".into());
        }

        if self.tick_seconds == 0 {
            return Err("tick_seconds must be positive".into());
        }

        let round_seconds = self
            .ticks_per_round
            .checked_mul(self.tick_seconds)
            .ok_or_else(|| "round length overflows".to_string())?;

        // A round longer than an hour is a units mistake, not a fight
        if round_seconds > 3600 {
            return Err(format!("round length ({round_seconds}s) exceeds one hour"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_is_five_minutes() {
        let config = BoutConfig::default();
        assert_eq!(config.round_seconds(), 300);
        assert_eq!(config.rounds.rounds(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_round_count_conversion() {
        assert_eq!(RoundCount::try_from(3).unwrap(), RoundCount::Standard);
        assert_eq!(RoundCount::try_from(5).unwrap(), RoundCount::Championship);
        assert!(matches!(
            RoundCount::try_from(4),
            Err(BoutError::UnsupportedRounds(4))
        ));
    }

    #[test]
    fn test_zero_ticks_rejected() {
        let config = BoutConfig {
            ticks_per_round: 0,
            ..BoutConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overflowing_round_length_rejected() {
        let config = BoutConfig {
            ticks_per_round: 100_000,
            tick_seconds: 100_000,
            ..BoutConfig::default()
        };
        assert_eq!(config.validate(), Err("round length overflows".to_string()));
        assert_eq!(config.round_seconds(), u32::MAX);
    }

    #[test]
    fn test_config_from_toml() {
        let config: BoutConfig = toml::from_str("rounds = 5\ntrace = \"ticks\"").unwrap();
        assert_eq!(config.rounds, RoundCount::Championship);
        assert_eq!(config.trace, TraceMode::Ticks);
        assert_eq!(config.ticks_per_round, 10);
    }

    #[test]
    fn test_config_rejects_unsupported_rounds() {
        let parsed: std::result::Result<BoutConfig, _> = toml::from_str("rounds = 4");
        assert!(parsed.is_err());
    }
}
