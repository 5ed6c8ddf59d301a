//! Permanent fighter traits
//!
//! Each trait is a row in a modifier table: `Trait::modify` maps a
//! `(trait, hook)` pair to an adjustment of the value being computed.
//! Formulas ask the fighter's `TraitSet` to fold all of its traits over a
//! base value, so adding a trait means adding rows, not branches in the
//! fight code.
//!
//! Fold order is the enum declaration order. It matters for hooks that mix
//! additive and multiplicative rows (finish threshold, skill ratings).

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::{BoutError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trait {
    IronChin,
    ComebackKing,
    JourneymanHeart,
    SlowStarter,
    VeteranIq,
    GasTank,
    PressureFighter,
    SubmissionMagnet,
    KnockoutArtist,
    FastHands,
    GroundAndPoundSpecialist,
    /// Career-layer trait (hype); no effect inside a bout
    MediaDarling,
}

/// A value a trait may adjust
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hook {
    /// Effective striking before the hurt penalty
    StrikingSkill,
    /// Effective grappling before the hurt penalty
    GrapplingSkill,
    /// Effective wrestling before the hurt penalty
    WrestlingSkill,
    /// Speed used to decide who strikes first
    InitiativeSpeed,
    /// Hit probability before clamping
    HitChance,
    /// Damage multiplier on a landed strike (attacker side)
    StrikePower,
    /// Damage multiplier on a clinch strike (attacker side)
    ClinchPower,
    /// Damage multiplier on ground-and-pound (top fighter)
    GroundPound,
    /// Standing damage needed for a strike stoppage (defender side)
    StrikeFinishThreshold,
    /// Ground damage needed for a submission (defender side)
    GrappleFinishThreshold,
    /// Submission escape probability (defender side)
    SubmissionEscape,
    /// Multiplier on ground damage received (defender side)
    GroundDamageTaken,
    /// Multiplier on per-tick stamina drain
    StaminaDrain,
    /// Stamina recovered between rounds
    RoundRecovery,
    /// Between-round stamina ceiling for low-cardio fighters
    RecoveryCeiling,
    /// Chance a landed strike carries a flat bonus impact
    FlashImpactChance,
}

/// Fight state a modifier may depend on
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HookContext {
    pub round: u32,
    pub opponent_stamina: f64,
    pub own_standing_damage: f64,
}

impl HookContext {
    pub fn round(round: u32) -> Self {
        Self {
            round,
            ..Self::default()
        }
    }
}

impl Trait {
    pub fn all() -> &'static [Trait] {
        &[
            Trait::IronChin,
            Trait::ComebackKing,
            Trait::JourneymanHeart,
            Trait::SlowStarter,
            Trait::VeteranIq,
            Trait::GasTank,
            Trait::PressureFighter,
            Trait::SubmissionMagnet,
            Trait::KnockoutArtist,
            Trait::FastHands,
            Trait::GroundAndPoundSpecialist,
            Trait::MediaDarling,
        ]
    }

    /// Apply this trait's row for `hook` to `value`
    pub fn modify(self, hook: Hook, ctx: &HookContext, value: f64) -> f64 {
        match (self, hook) {
            (Trait::SlowStarter, Hook::StrikingSkill | Hook::WrestlingSkill) => match ctx.round {
                1 => value * 0.85,
                r if r >= 3 => value * 1.08,
                _ => value,
            },
            (
                Trait::VeteranIq,
                Hook::StrikingSkill | Hook::GrapplingSkill | Hook::WrestlingSkill,
            ) if ctx.round >= 3 => value + 4.0,

            (Trait::FastHands, Hook::InitiativeSpeed) => value + 8.0,
            (Trait::FastHands, Hook::HitChance) => value + 0.08,

            (Trait::SlowStarter, Hook::StrikePower) if ctx.round >= 3 => value * 1.05,
            (Trait::PressureFighter, Hook::StrikePower) => {
                if ctx.opponent_stamina < 30.0 {
                    value * 1.25
                } else if ctx.opponent_stamina < 50.0 {
                    value * 1.15
                } else if ctx.opponent_stamina < 70.0 {
                    value * 1.05
                } else {
                    value
                }
            }
            (Trait::ComebackKing, Hook::StrikePower) if ctx.own_standing_damage > 25.0 => {
                value * 1.20
            }
            (Trait::SlowStarter, Hook::ClinchPower) if ctx.round == 1 => value * 0.85,
            (Trait::GroundAndPoundSpecialist, Hook::GroundPound) => value * 1.25,

            (Trait::IronChin, Hook::StrikeFinishThreshold) => (value + 8.0) * 1.12,
            (Trait::ComebackKing, Hook::StrikeFinishThreshold) => value + 5.0,
            (Trait::JourneymanHeart, Hook::StrikeFinishThreshold) => value.max(55.0) * 1.20,

            (Trait::SubmissionMagnet, Hook::GrappleFinishThreshold) => value.min(55.0),
            (Trait::SubmissionMagnet, Hook::SubmissionEscape) => value * 0.80,
            (Trait::SubmissionMagnet, Hook::GroundDamageTaken) => value * 1.20,

            (Trait::GasTank, Hook::StaminaDrain) => value * 0.55,
            (Trait::VeteranIq, Hook::StaminaDrain) if ctx.round >= 3 => value * 0.90,
            (Trait::GasTank, Hook::RoundRecovery) => value + 5.0,
            (Trait::GasTank, Hook::RecoveryCeiling) => 100.0,

            (Trait::KnockoutArtist, Hook::FlashImpactChance) => value.max(0.04),

            _ => value,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Trait::IronChin => "iron_chin",
            Trait::ComebackKing => "comeback_king",
            Trait::JourneymanHeart => "journeyman_heart",
            Trait::SlowStarter => "slow_starter",
            Trait::VeteranIq => "veteran_iq",
            Trait::GasTank => "gas_tank",
            Trait::PressureFighter => "pressure_fighter",
            Trait::SubmissionMagnet => "submission_magnet",
            Trait::KnockoutArtist => "knockout_artist",
            Trait::FastHands => "fast_hands",
            Trait::GroundAndPoundSpecialist => "ground_and_pound_specialist",
            Trait::MediaDarling => "media_darling",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Trait::IronChin => "Iron Chin",
            Trait::ComebackKing => "Comeback King",
            Trait::JourneymanHeart => "Journeyman Heart",
            Trait::SlowStarter => "Slow Starter",
            Trait::VeteranIq => "Veteran IQ",
            Trait::GasTank => "Gas Tank",
            Trait::PressureFighter => "Pressure Fighter",
            Trait::SubmissionMagnet => "Submission Magnet",
            Trait::KnockoutArtist => "Knockout Artist",
            Trait::FastHands => "Fast Hands",
            Trait::GroundAndPoundSpecialist => "Ground & Pound",
            Trait::MediaDarling => "Media Darling",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Trait::IronChin => "Absorbs punishment that would stop others.",
            Trait::ComebackKing => "Fights back hardest when hurt. Never truly out of it.",
            Trait::JourneymanHeart => "Never stops competing. Never gets counted out.",
            Trait::SlowStarter => "Needs time to warm up. Round 1 output is reduced.",
            Trait::VeteranIq => "Reads opponents better with experience.",
            Trait::GasTank => "Cardio barely decays. Dangerous in championship rounds.",
            Trait::PressureFighter => "Performs better when the opponent is tired.",
            Trait::SubmissionMagnet => "Something about their base leaves them vulnerable on the ground.",
            Trait::KnockoutArtist => "One punch can end it at any moment.",
            Trait::FastHands => "Striking speed that makes up for power deficits.",
            Trait::GroundAndPoundSpecialist => "Devastating once the fight hits the mat.",
            Trait::MediaDarling => "The cameras love them.",
        }
    }

    /// Traits that cannot sit on the same fighter
    pub fn contradicts(&self, other: Trait) -> bool {
        matches!(
            (self, other),
            (Trait::SlowStarter, Trait::FastHands) | (Trait::FastHands, Trait::SlowStarter)
        )
    }
}

impl fmt::Display for Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Trait {
    type Err = BoutError;

    /// Accepts keys (`iron_chin`) and labels (`Iron Chin`)
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s
            .trim()
            .to_ascii_lowercase()
            .replace('&', "and")
            .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("_");
        let normalized = if normalized == "ground_and_pound" {
            "ground_and_pound_specialist".to_string()
        } else {
            normalized
        };
        Trait::all()
            .iter()
            .copied()
            .find(|t| t.key() == normalized)
            .ok_or_else(|| BoutError::UnknownTrait(s.to_string()))
    }
}

/// A fighter's traits
///
/// Ordered, so folds are deterministic; refuses contradictory pairs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Trait>", into = "Vec<Trait>")]
pub struct TraitSet {
    traits: BTreeSet<Trait>,
}

impl TraitSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_traits<I>(traits: I) -> Result<Self>
    where
        I: IntoIterator<Item = Trait>,
    {
        let mut set = Self::new();
        for t in traits {
            set.insert(t)?;
        }
        Ok(set)
    }

    pub fn insert(&mut self, t: Trait) -> Result<()> {
        if let Some(existing) = self.traits.iter().find(|e| e.contradicts(t)) {
            return Err(BoutError::ConflictingTraits(
                existing.key().to_string(),
                t.key().to_string(),
            ));
        }
        self.traits.insert(t);
        Ok(())
    }

    pub fn contains(&self, t: Trait) -> bool {
        self.traits.contains(&t)
    }

    pub fn iter(&self) -> impl Iterator<Item = Trait> + '_ {
        self.traits.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.traits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }

    /// Fold every trait's row for `hook` over `base`
    pub fn apply(&self, hook: Hook, ctx: &HookContext, base: f64) -> f64 {
        self.traits
            .iter()
            .fold(base, |value, t| t.modify(hook, ctx, value))
    }
}

impl TryFrom<Vec<Trait>> for TraitSet {
    type Error = BoutError;

    fn try_from(value: Vec<Trait>) -> Result<Self> {
        Self::from_traits(value)
    }
}

impl From<TraitSet> for Vec<Trait> {
    fn from(value: TraitSet) -> Self {
        value.traits.into_iter().collect()
    }
}
