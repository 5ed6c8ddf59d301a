//! Bout Engine - deterministic, seeded simulation of a single MMA bout

pub mod analysis;
pub mod bout;
pub mod core;
pub mod fighter;

pub use crate::bout::{simulate_bout, Bout, FightOutcome, Method};
pub use crate::core::{BoutConfig, BoutError, Result};
pub use crate::fighter::{Attributes, FighterSnapshot, FightingStyle, Trait, TraitSet};
