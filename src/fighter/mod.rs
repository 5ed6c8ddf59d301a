//! Fighters as the engine sees them: attributes, style, traits and
//! fight-local runtime state

pub mod attributes;
pub mod card;
pub mod snapshot;
pub mod traits;
pub mod weight_cut;

pub use attributes::{Attributes, FightingStyle};
pub use card::{load_bout_card, BoutCard, FighterCard};
pub use snapshot::{FighterSnapshot, RuntimeState};
pub use traits::{Hook, HookContext, Trait, TraitSet};
pub use weight_cut::{CutPenalty, CutSeverity};
