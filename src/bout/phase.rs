//! Phase model: the tick-level seam between the round driver and the
//! striking, clinch and ground resolvers
//!
//! A resolver receives an `Exchange`: mutable access to both fighters, the
//! style context, the event log for the round, and a slot for an in-tick
//! stoppage. Resolvers never decide cumulative finishes; the finish
//! evaluator does that after the phase returns.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::bout::outcome::{BoutEvent, BoutEventType, Method};
use crate::bout::style::StyleContext;
use crate::bout::{clinch, ground, striking};
use crate::core::types::{Corner, FighterId};
use crate::fighter::FighterSnapshot;

/// Which sub-simulation governs a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Striking,
    Clinch,
    Ground,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Striking => "striking",
            Phase::Clinch => "clinch",
            Phase::Ground => "ground",
        }
    }
}

/// A stoppage decided inside a phase (referee stoppage, second knockdown)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stoppage {
    pub winner: Corner,
    pub method: Method,
}

/// Everything a phase resolver may read or change during one tick
pub struct Exchange<'a> {
    fighters: &'a mut [FighterSnapshot; 2],
    events: &'a mut Vec<BoutEvent>,
    pub style: &'a StyleContext,
    pub round: u32,
    /// 1-based tick within the round
    pub tick: u32,
    /// Set when the fight is on the mat at the end of the phase
    pub on_ground: bool,
    stoppage: Option<Stoppage>,
}

impl<'a> Exchange<'a> {
    pub fn new(
        fighters: &'a mut [FighterSnapshot; 2],
        events: &'a mut Vec<BoutEvent>,
        style: &'a StyleContext,
        round: u32,
        tick: u32,
    ) -> Self {
        Self {
            fighters,
            events,
            style,
            round,
            tick,
            on_ground: false,
            stoppage: None,
        }
    }

    pub fn fighter(&self, corner: Corner) -> &FighterSnapshot {
        &self.fighters[corner.index()]
    }

    pub fn fighter_mut(&mut self, corner: Corner) -> &mut FighterSnapshot {
        &mut self.fighters[corner.index()]
    }

    /// `(attacker, defender)` with `attacker` in the given corner
    pub fn pair_mut(&mut self, attacker: Corner) -> (&mut FighterSnapshot, &mut FighterSnapshot) {
        let [red, blue] = &mut *self.fighters;
        match attacker {
            Corner::Red => (red, blue),
            Corner::Blue => (blue, red),
        }
    }

    pub fn id(&self, corner: Corner) -> FighterId {
        self.fighter(corner).id
    }

    pub fn name(&self, corner: Corner) -> &str {
        &self.fighter(corner).name
    }

    pub fn log(&mut self, event_type: BoutEventType, description: String) {
        self.events.push(BoutEvent {
            tick: self.tick,
            event_type,
            description,
        });
    }

    /// End the bout inside this tick; the first stoppage wins
    pub fn stop(&mut self, winner: Corner, method: Method) {
        if self.stoppage.is_none() {
            self.stoppage = Some(Stoppage { winner, method });
            let event_type = BoutEventType::Stoppage {
                winner: self.id(winner),
                method,
            };
            self.log(event_type, format!("{} wins by {}", self.name(winner), method));
        }
    }

    pub fn stoppage(&self) -> Option<Stoppage> {
        self.stoppage
    }

    pub fn is_over(&self) -> bool {
        self.stoppage.is_some()
    }
}

/// Tick handlers for the three phases
///
/// The round driver picks the phase; implementations only resolve it.
/// Swapping the resolver is how tests inject deterministic damage.
pub trait PhaseResolver {
    fn striking(&self, ex: &mut Exchange<'_>, rng: &mut impl Rng);

    /// May set `ex.on_ground`, in which case the driver resolves a ground
    /// phase within the same tick
    fn clinch(&self, ex: &mut Exchange<'_>, rng: &mut impl Rng);

    fn ground(&self, ex: &mut Exchange<'_>, rng: &mut impl Rng);
}

/// The production fight model
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardPhases;

impl PhaseResolver for StandardPhases {
    fn striking(&self, ex: &mut Exchange<'_>, rng: &mut impl Rng) {
        striking::resolve(ex, rng);
    }

    fn clinch(&self, ex: &mut Exchange<'_>, rng: &mut impl Rng) {
        clinch::resolve(ex, rng);
    }

    fn ground(&self, ex: &mut Exchange<'_>, rng: &mut impl Rng) {
        ground::resolve(ex, rng);
    }
}
