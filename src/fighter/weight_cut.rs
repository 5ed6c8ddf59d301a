//! Weight cut severity
//!
//! A hard cut to make the contracted weight leaves the fighter with less
//! stamina and a weaker chin on fight night.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::error::{BoutError, Result};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CutSeverity {
    #[default]
    Easy,
    Moderate,
    Severe,
    Extreme,
}

/// Fight-night penalties from a weight cut, added to the base values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CutPenalty {
    /// Added to starting stamina
    pub stamina: i32,
    /// Added to chin for every formula in the bout
    pub chin: i32,
}

impl CutSeverity {
    pub fn all() -> &'static [CutSeverity] {
        &[
            CutSeverity::Easy,
            CutSeverity::Moderate,
            CutSeverity::Severe,
            CutSeverity::Extreme,
        ]
    }

    /// Classify a cut from natural and contracted fighting weight
    ///
    /// Unknown weights, or a fighter already at or under the limit, is an
    /// easy cut.
    pub fn classify(natural_weight: Option<f64>, fighting_weight: Option<f64>) -> Self {
        let (natural, fighting) = match (natural_weight, fighting_weight) {
            (Some(n), Some(f)) if n > 0.0 && f > 0.0 => (n, f),
            _ => return CutSeverity::Easy,
        };
        if natural <= fighting {
            return CutSeverity::Easy;
        }

        let cut_pct = (natural - fighting) / natural * 100.0;
        if cut_pct < 5.0 {
            CutSeverity::Easy
        } else if cut_pct < 10.0 {
            CutSeverity::Moderate
        } else if cut_pct < 15.0 {
            CutSeverity::Severe
        } else {
            CutSeverity::Extreme
        }
    }

    pub fn penalty(&self) -> CutPenalty {
        match self {
            CutSeverity::Easy => CutPenalty { stamina: 0, chin: 0 },
            CutSeverity::Moderate => CutPenalty { stamina: -3, chin: -2 },
            CutSeverity::Severe => CutPenalty { stamina: -7, chin: -5 },
            CutSeverity::Extreme => CutPenalty { stamina: -12, chin: -8 },
        }
    }

    /// Probability of missing weight at the weigh-ins
    pub fn miss_weight_chance(&self) -> f64 {
        match self {
            CutSeverity::Easy => 0.0,
            CutSeverity::Moderate => 0.02,
            CutSeverity::Severe => 0.08,
            CutSeverity::Extreme => 0.20,
        }
    }

    /// Weigh-in roll, made by the caller with its own generator
    pub fn roll_missed_weight(&self, rng: &mut impl Rng) -> bool {
        rng.gen::<f64>() < self.miss_weight_chance()
    }

    pub fn label(&self) -> &'static str {
        match self {
            CutSeverity::Easy => "easy",
            CutSeverity::Moderate => "moderate",
            CutSeverity::Severe => "severe",
            CutSeverity::Extreme => "extreme",
        }
    }
}

impl fmt::Display for CutSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CutSeverity {
    type Err = BoutError;

    fn from_str(s: &str) -> Result<Self> {
        CutSeverity::all()
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BoutError::UnknownCutSeverity(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_classification_thresholds() {
        assert_eq!(CutSeverity::classify(Some(160.0), Some(155.0)), CutSeverity::Easy);
        assert_eq!(CutSeverity::classify(Some(170.0), Some(155.0)), CutSeverity::Moderate);
        assert_eq!(CutSeverity::classify(Some(175.0), Some(155.0)), CutSeverity::Severe);
        assert_eq!(CutSeverity::classify(Some(185.0), Some(155.0)), CutSeverity::Extreme);
    }

    #[test]
    fn test_boundary_is_inclusive_upward() {
        // Exactly 5% is already moderate
        assert_eq!(CutSeverity::classify(Some(200.0), Some(190.0)), CutSeverity::Moderate);
    }

    #[test]
    fn test_missing_or_reversed_weights_are_easy() {
        assert_eq!(CutSeverity::classify(None, Some(155.0)), CutSeverity::Easy);
        assert_eq!(CutSeverity::classify(Some(170.0), None), CutSeverity::Easy);
        assert_eq!(CutSeverity::classify(Some(150.0), Some(155.0)), CutSeverity::Easy);
        assert_eq!(CutSeverity::classify(Some(0.0), Some(155.0)), CutSeverity::Easy);
    }

    #[test]
    fn test_penalties_grow_with_severity() {
        let penalties: Vec<CutPenalty> = CutSeverity::all().iter().map(|c| c.penalty()).collect();
        assert_eq!(penalties[0], CutPenalty { stamina: 0, chin: 0 });
        assert_eq!(penalties[3], CutPenalty { stamina: -12, chin: -8 });
        for pair in penalties.windows(2) {
            assert!(pair[1].stamina < pair[0].stamina);
            assert!(pair[1].chin < pair[0].chin);
        }
    }

    #[test]
    fn test_easy_cut_never_misses() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        assert!((0..10_000).all(|_| !CutSeverity::Easy.roll_missed_weight(&mut rng)));
    }

    #[test]
    fn test_extreme_miss_rate_near_twenty_percent() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let misses = (0..10_000)
            .filter(|_| CutSeverity::Extreme.roll_missed_weight(&mut rng))
            .count();
        assert!((1500..2500).contains(&misses), "misses: {misses}");
    }

    #[test]
    fn test_parse_label() {
        assert_eq!("Severe".parse::<CutSeverity>().unwrap(), CutSeverity::Severe);
        assert!("brutal".parse::<CutSeverity>().is_err());
    }
}
