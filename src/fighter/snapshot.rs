//! Fighter snapshot: attributes in, runtime state mutated by the bout
//!
//! A snapshot is built by the caller right before a bout and handed over by
//! value. Runtime state is reset when the bout starts, so a snapshot reused
//! across bouts never leaks damage or fatigue from a previous fight.

use serde::{Deserialize, Serialize};

use crate::bout::constants::{
    HURT_SKILL_PENALTY, HURT_TICKS, MOMENTUM_DAMAGE_SCALE, MOMENTUM_DECAY_PER_TICK,
};
use crate::core::types::FighterId;
use crate::fighter::attributes::{Attributes, FightingStyle};
use crate::fighter::traits::{Hook, HookContext, Trait, TraitSet};
use crate::fighter::weight_cut::CutSeverity;

/// Fight-local state, owned by the simulation for one bout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeState {
    /// 0.0 to 100.0
    pub stamina: f64,
    /// Drives strike stoppages
    pub standing_damage: f64,
    /// Drives submissions
    pub ground_damage: f64,
    /// Only read by the judges
    pub scoring_damage: f64,
    pub knockdowns: u32,
    pub round_knockdowns: u32,
    /// Hurt while positive
    pub hurt_ticks: u32,
    /// -1.0 to 1.0
    pub momentum: f64,
    pub round: u32,
    pub strikes_landed_this_round: u32,
}

impl Default for RuntimeState {
    fn default() -> Self {
        Self {
            stamina: 100.0,
            standing_damage: 0.0,
            ground_damage: 0.0,
            scoring_damage: 0.0,
            knockdowns: 0,
            round_knockdowns: 0,
            hurt_ticks: 0,
            momentum: 0.0,
            round: 1,
            strikes_landed_this_round: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FighterSnapshot {
    pub id: FighterId,
    pub name: String,
    pub attributes: Attributes,
    pub style: FightingStyle,
    pub traits: TraitSet,
    pub weight_cut: CutSeverity,
    #[serde(skip)]
    pub state: RuntimeState,
}

impl FighterSnapshot {
    pub fn new(
        id: FighterId,
        name: impl Into<String>,
        attributes: Attributes,
        style: FightingStyle,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            attributes,
            style,
            traits: TraitSet::new(),
            weight_cut: CutSeverity::Easy,
            state: RuntimeState::default(),
        }
    }

    pub fn with_traits(mut self, traits: TraitSet) -> Self {
        self.traits = traits;
        self
    }

    pub fn with_weight_cut(mut self, weight_cut: CutSeverity) -> Self {
        self.weight_cut = weight_cut;
        self
    }

    pub fn has(&self, t: Trait) -> bool {
        self.traits.contains(t)
    }

    /// Fresh state for a new bout, with weight cut penalties applied
    pub fn reset_for_bout(&mut self) {
        let penalty = self.weight_cut.penalty();
        self.state = RuntimeState {
            stamina: (100.0 + penalty.stamina as f64).clamp(0.0, 100.0),
            ..RuntimeState::default()
        };
    }

    /// Per-round resets; damage, stamina and momentum carry over
    pub fn start_round(&mut self, round: u32) {
        self.state.round = round;
        self.state.round_knockdowns = 0;
        self.state.hurt_ticks = 0;
        self.state.strikes_landed_this_round = 0;
    }

    /// Chin after the weight cut penalty
    pub fn chin(&self) -> f64 {
        (self.attributes.chin as i32 + self.weight_cut.penalty().chin).max(0) as f64
    }

    pub fn speed(&self) -> f64 {
        self.attributes.speed as f64
    }

    pub fn is_hurt(&self) -> bool {
        self.state.hurt_ticks > 0
    }

    fn hurt_penalty(&self) -> f64 {
        if self.is_hurt() {
            HURT_SKILL_PENALTY
        } else {
            1.0
        }
    }

    pub fn hook_context(&self, opponent: &FighterSnapshot) -> HookContext {
        HookContext {
            round: self.state.round,
            opponent_stamina: opponent.state.stamina,
            own_standing_damage: self.state.standing_damage,
        }
    }

    fn skill(&self, base: u32, stamina_floor: f64, hook: Hook) -> f64 {
        let stamina_factor = stamina_floor + (1.0 - stamina_floor) * (self.state.stamina / 100.0);
        let ctx = HookContext::round(self.state.round);
        self.traits.apply(hook, &ctx, base as f64 * stamina_factor) * self.hurt_penalty()
    }

    /// Striking after fatigue, traits and hurt state
    pub fn effective_striking(&self) -> f64 {
        self.skill(self.attributes.striking, 0.5, Hook::StrikingSkill)
    }

    pub fn effective_grappling(&self) -> f64 {
        self.skill(self.attributes.grappling, 0.6, Hook::GrapplingSkill)
    }

    pub fn effective_wrestling(&self) -> f64 {
        self.skill(self.attributes.wrestling, 0.6, Hook::WrestlingSkill)
    }

    pub fn initiative_speed(&self) -> f64 {
        let ctx = HookContext::round(self.state.round);
        self.traits.apply(Hook::InitiativeSpeed, &ctx, self.speed())
    }

    pub fn momentum_multiplier(&self) -> f64 {
        1.0 + self.state.momentum * MOMENTUM_DAMAGE_SCALE
    }

    pub fn adjust_momentum(&mut self, delta: f64) {
        self.state.momentum = (self.state.momentum + delta).clamp(-1.0, 1.0);
    }

    /// Start-of-tick decay: hurt countdown, and momentum toward zero
    pub fn decay_tick(&mut self) {
        self.state.hurt_ticks = self.state.hurt_ticks.saturating_sub(1);

        let m = self.state.momentum;
        self.state.momentum = if m > 0.0 {
            (m - MOMENTUM_DECAY_PER_TICK).max(0.0)
        } else if m < 0.0 {
            (m + MOMENTUM_DECAY_PER_TICK).min(0.0)
        } else {
            0.0
        };
    }

    pub fn absorb_standing(&mut self, amount: f64) {
        self.state.standing_damage += amount.max(0.0);
    }

    pub fn absorb_ground(&mut self, amount: f64) {
        self.state.ground_damage += amount.max(0.0);
    }

    pub fn absorb_scoring(&mut self, amount: f64) {
        self.state.scoring_damage += amount.max(0.0);
    }

    pub fn record_knockdown(&mut self) {
        self.state.knockdowns += 1;
        self.state.round_knockdowns += 1;
        self.state.hurt_ticks = HURT_TICKS;
    }

    pub fn spend_stamina(&mut self, amount: f64) {
        self.state.stamina = (self.state.stamina - amount.max(0.0)).clamp(0.0, 100.0);
    }

    pub fn recover_stamina(&mut self, amount: f64, ceiling: f64) {
        let recovered = (self.state.stamina + amount.max(0.0)).min(100.0);
        self.state.stamina = recovered.min(ceiling).clamp(0.0, 100.0);
    }
}
