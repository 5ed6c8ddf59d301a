//! Fighter and bout cards loaded from TOML
//!
//! Cards are the hand-written form of a snapshot: labels instead of enums,
//! optional weights instead of a precomputed cut severity.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::config::BoutConfig;
use crate::core::error::Result;
use crate::core::types::FighterId;
use crate::fighter::attributes::{Attributes, FightingStyle};
use crate::fighter::snapshot::FighterSnapshot;
use crate::fighter::traits::{Trait, TraitSet};
use crate::fighter::weight_cut::CutSeverity;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FighterCard {
    /// Caller-side key; a random id is assigned when absent
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default = "default_style")]
    pub style: String,
    #[serde(default)]
    pub traits: Vec<String>,
    pub attributes: Attributes,
    /// Explicit severity wins over weights
    #[serde(default)]
    pub weight_cut: Option<String>,
    #[serde(default)]
    pub natural_weight: Option<f64>,
    #[serde(default)]
    pub fighting_weight: Option<f64>,
}

fn default_style() -> String {
    FightingStyle::WellRounded.label().to_string()
}

impl FighterCard {
    pub fn weight_cut(&self) -> Result<CutSeverity> {
        match &self.weight_cut {
            Some(label) => label.parse(),
            None => Ok(CutSeverity::classify(
                self.natural_weight,
                self.fighting_weight,
            )),
        }
    }

    /// Build a snapshot, rejecting anything malformed
    pub fn to_snapshot(&self) -> Result<FighterSnapshot> {
        self.attributes.validate()?;
        let style: FightingStyle = self.style.parse()?;
        let traits = self
            .traits
            .iter()
            .map(|t| t.parse::<Trait>())
            .collect::<Result<Vec<_>>>()?;
        let traits = TraitSet::from_traits(traits)?;
        let id = self
            .id
            .map(|key| FighterId::from_u128(key as u128))
            .unwrap_or_default();

        Ok(
            FighterSnapshot::new(id, self.name.clone(), self.attributes, style)
                .with_traits(traits)
                .with_weight_cut(self.weight_cut()?),
        )
    }
}

/// A scheduled bout: two cards plus bout settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoutCard {
    pub red: FighterCard,
    pub blue: FighterCard,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub config: BoutConfig,
}

impl BoutCard {
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn snapshots(&self) -> Result<(FighterSnapshot, FighterSnapshot)> {
        Ok((self.red.to_snapshot()?, self.blue.to_snapshot()?))
    }
}

/// Load a bout card from a TOML file
pub fn load_bout_card(path: impl AsRef<Path>) -> Result<BoutCard> {
    let contents = fs::read_to_string(path.as_ref())?;
    BoutCard::parse(&contents)
}
