//! Base attributes and fighting style

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::{BoutError, Result};

pub const ATTRIBUTE_MIN: u32 = 1;
pub const ATTRIBUTE_MAX: u32 = 100;

/// Base attributes on a 1-100 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attributes {
    pub striking: u32,
    pub grappling: u32,
    pub wrestling: u32,
    pub cardio: u32,
    pub chin: u32,
    pub speed: u32,
}

impl Default for Attributes {
    fn default() -> Self {
        Self::uniform(50)
    }
}

impl Attributes {
    /// Every attribute set to the same value
    pub fn uniform(value: u32) -> Self {
        Self {
            striking: value,
            grappling: value,
            wrestling: value,
            cardio: value,
            chin: value,
            speed: value,
        }
    }

    fn named(&self) -> [(&'static str, u32); 6] {
        [
            ("striking", self.striking),
            ("grappling", self.grappling),
            ("wrestling", self.wrestling),
            ("cardio", self.cardio),
            ("chin", self.chin),
            ("speed", self.speed),
        ]
    }

    /// Strict check used when loading fighter cards
    pub fn validate(&self) -> Result<()> {
        for (name, value) in self.named() {
            if !(ATTRIBUTE_MIN..=ATTRIBUTE_MAX).contains(&value) {
                return Err(BoutError::AttributeOutOfRange { name, value });
            }
        }
        Ok(())
    }

    /// Copy with every attribute forced into range
    pub fn clamped(&self) -> Self {
        let clamp = |v: u32| v.clamp(ATTRIBUTE_MIN, ATTRIBUTE_MAX);
        Self {
            striking: clamp(self.striking),
            grappling: clamp(self.grappling),
            wrestling: clamp(self.wrestling),
            cardio: clamp(self.cardio),
            chin: clamp(self.chin),
            speed: clamp(self.speed),
        }
    }
}

/// Fighting style, fixed for the bout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FightingStyle {
    Striker,
    Grappler,
    Wrestler,
    #[default]
    #[serde(rename = "Well-Rounded", alias = "WellRounded", alias = "well_rounded")]
    WellRounded,
}

impl FightingStyle {
    pub fn all() -> &'static [FightingStyle] {
        &[
            FightingStyle::Striker,
            FightingStyle::Grappler,
            FightingStyle::Wrestler,
            FightingStyle::WellRounded,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            FightingStyle::Striker => "Striker",
            FightingStyle::Grappler => "Grappler",
            FightingStyle::Wrestler => "Wrestler",
            FightingStyle::WellRounded => "Well-Rounded",
        }
    }
}

impl fmt::Display for FightingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FightingStyle {
    type Err = BoutError;

    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "striker" => Ok(FightingStyle::Striker),
            "grappler" => Ok(FightingStyle::Grappler),
            "wrestler" => Ok(FightingStyle::Wrestler),
            "wellrounded" => Ok(FightingStyle::WellRounded),
            _ => Err(BoutError::UnknownStyle(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_zero() {
        let attrs = Attributes {
            chin: 0,
            ..Attributes::default()
        };
        assert!(matches!(
            attrs.validate(),
            Err(BoutError::AttributeOutOfRange { name: "chin", value: 0 })
        ));
    }

    #[test]
    fn test_clamped_forces_range() {
        let attrs = Attributes {
            striking: 250,
            speed: 0,
            ..Attributes::default()
        };
        let clamped = attrs.clamped();
        assert_eq!(clamped.striking, 100);
        assert_eq!(clamped.speed, 1);
        assert!(clamped.validate().is_ok());
    }

    #[test]
    fn test_style_parsing() {
        assert_eq!("Well-Rounded".parse::<FightingStyle>().unwrap(), FightingStyle::WellRounded);
        assert_eq!("well_rounded".parse::<FightingStyle>().unwrap(), FightingStyle::WellRounded);
        assert_eq!("WRESTLER".parse::<FightingStyle>().unwrap(), FightingStyle::Wrestler);
        assert!("Kickboxer".parse::<FightingStyle>().is_err());
    }

    #[test]
    fn test_style_labels_round_trip() {
        for style in FightingStyle::all() {
            assert_eq!(style.label().parse::<FightingStyle>().unwrap(), *style);
        }
    }
}
