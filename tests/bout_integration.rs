//! Bout engine integration tests

use bout_engine::bout::finish::strike_threshold;
use bout_engine::bout::*;
use bout_engine::core::config::{BoutConfig, RoundCount, TraceMode};
use bout_engine::core::error::BoutError;
use bout_engine::core::types::{Corner, FighterId};
use bout_engine::fighter::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn fighter(id: u128, name: &str, attributes: Attributes, style: FightingStyle) -> FighterSnapshot {
    FighterSnapshot::new(FighterId::from_u128(id), name, attributes, style)
}

fn chin_50(id: u128, name: &str) -> FighterSnapshot {
    let attributes = Attributes {
        chin: 50,
        ..Attributes::uniform(60)
    };
    fighter(id, name, attributes, FightingStyle::WellRounded)
}

/// Phase model that does nothing except inject standing damage into one
/// corner at one tick of round 1
struct InjectDamage {
    corner: Corner,
    tick: u32,
    damage: f64,
}

impl InjectDamage {
    fn apply(&self, ex: &mut Exchange<'_>) {
        if ex.round == 1 && ex.tick == self.tick {
            ex.fighter_mut(self.corner).absorb_standing(self.damage);
        }
    }
}

impl PhaseResolver for InjectDamage {
    fn striking(&self, ex: &mut Exchange<'_>, _rng: &mut impl Rng) {
        self.apply(ex);
    }

    fn clinch(&self, ex: &mut Exchange<'_>, _rng: &mut impl Rng) {
        self.apply(ex);
    }

    fn ground(&self, ex: &mut Exchange<'_>, _rng: &mut impl Rng) {
        self.apply(ex);
    }
}

/// Phase model where nothing ever lands
struct NoContact;

impl PhaseResolver for NoContact {
    fn striking(&self, _ex: &mut Exchange<'_>, _rng: &mut impl Rng) {}
    fn clinch(&self, _ex: &mut Exchange<'_>, _rng: &mut impl Rng) {}
    fn ground(&self, _ex: &mut Exchange<'_>, _rng: &mut impl Rng) {}
}

fn run_stub(blue: FighterSnapshot, stub: &impl PhaseResolver, seed: u64) -> FightOutcome {
    let bout = Bout::new(chin_50(1, "Red"), blue, BoutConfig::default()).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    bout.run_with(stub, &mut rng)
}

#[test]
fn test_same_seed_same_outcome() {
    let a = fighter(1, "A", Attributes::uniform(72), FightingStyle::Wrestler);
    let b = fighter(2, "B", Attributes::uniform(68), FightingStyle::Striker);

    for seed in [0, 1, 42, 9_999, u64::MAX] {
        let first = simulate_bout(a.clone(), b.clone(), 3, seed).unwrap();
        let second = simulate_bout(a.clone(), b.clone(), 3, seed).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_winner_and_loser_are_the_two_fighters() {
    let a = fighter(1, "A", Attributes::uniform(75), FightingStyle::Grappler);
    let b = fighter(2, "B", Attributes::uniform(75), FightingStyle::Striker);

    for seed in 0..200 {
        let outcome = simulate_bout(a.clone(), b.clone(), 3, seed).unwrap();
        assert_ne!(outcome.winner, outcome.loser);
        assert!(outcome.winner == a.id || outcome.winner == b.id);
        assert!(outcome.loser == a.id || outcome.loser == b.id);
    }
}

#[test]
fn test_68_damage_stops_chin_50_that_tick() {
    for tick in [1, 4, 10] {
        let stub = InjectDamage {
            corner: Corner::Blue,
            tick,
            damage: 68.0,
        };
        let outcome = run_stub(chin_50(2, "Blue"), &stub, 7);

        assert_eq!(outcome.method, Method::StrikeStoppage);
        assert_eq!(outcome.winner, FighterId::from_u128(1));
        assert_eq!(outcome.round_ended, 1);
        assert_eq!(outcome.time_ended.0, tick * 30);
    }
}

#[test]
fn test_just_under_threshold_goes_the_distance() {
    let stub = InjectDamage {
        corner: Corner::Blue,
        tick: 3,
        damage: 67.9,
    };
    let outcome = run_stub(chin_50(2, "Blue"), &stub, 7);
    assert!(outcome.method.is_decision());
    assert_eq!(outcome.round_ended, 3);
}

#[test]
fn test_iron_chin_needs_85_12() {
    let iron = chin_50(2, "Iron").with_traits(TraitSet::from_traits([Trait::IronChin]).unwrap());
    assert!((strike_threshold(&iron, 0.0) - 85.12).abs() < 1e-9);

    let survives = InjectDamage {
        corner: Corner::Blue,
        tick: 2,
        damage: 85.1,
    };
    let outcome = run_stub(iron.clone(), &survives, 11);
    assert!(outcome.method.is_decision());

    let stopped = InjectDamage {
        corner: Corner::Blue,
        tick: 2,
        damage: 85.13,
    };
    let outcome = run_stub(iron, &stopped, 11);
    assert_eq!(outcome.method, Method::StrikeStoppage);
    assert_eq!(outcome.time_ended.to_string(), "1:00");

    // The same 85.1 stops a fighter without the trait at once
    let outcome = run_stub(chin_50(2, "Plain"), &survives, 11);
    assert_eq!(outcome.method, Method::StrikeStoppage);
}

#[test]
fn test_no_finish_means_decision_in_round_three() {
    for seed in 0..50 {
        let outcome = run_stub(chin_50(2, "Blue"), &NoContact, seed);
        assert!(matches!(
            outcome.method,
            Method::UnanimousDecision | Method::SplitDecision | Method::MajorityDecision
        ));
        assert_eq!(outcome.round_ended, 3);
        assert_eq!(outcome.time_ended.to_string(), "5:00");
        assert_eq!(outcome.rounds.len(), 3);
        assert!(outcome.scorecard.is_some());
    }
}

#[test]
fn test_championship_decisions_end_in_round_five() {
    let a = fighter(1, "A", Attributes::uniform(55), FightingStyle::WellRounded);
    let b = fighter(2, "B", Attributes::uniform(55), FightingStyle::WellRounded);

    for seed in 0..100 {
        let outcome = simulate_bout(a.clone(), b.clone(), 5, seed).unwrap();
        if outcome.method.is_decision() {
            assert_eq!(outcome.round_ended, 5);
        } else {
            assert!(outcome.round_ended <= 5);
            assert!(outcome.time_ended.0 <= 300);
        }
    }
}

#[test]
fn test_mirrored_bouts_split_evenly() {
    let attributes = Attributes {
        striking: 70,
        grappling: 65,
        wrestling: 60,
        cardio: 72,
        chin: 66,
        speed: 68,
    };
    let traits = TraitSet::from_traits([Trait::PressureFighter]).unwrap();
    let a = fighter(1, "A", attributes, FightingStyle::WellRounded).with_traits(traits.clone());
    let b = fighter(2, "B", attributes, FightingStyle::WellRounded).with_traits(traits);

    let mut a_wins = 0;
    let seeds = 1_000;
    for seed in 0..seeds {
        let forward = simulate_bout(a.clone(), b.clone(), 3, seed).unwrap();
        let reverse = simulate_bout(b.clone(), a.clone(), 3, seed).unwrap();
        a_wins += (forward.winner == a.id) as u32 + (reverse.winner == a.id) as u32;
    }

    let rate = a_wins as f64 / (2 * seeds) as f64;
    assert!((0.45..=0.55).contains(&rate), "A win rate: {rate}");
}

#[test]
fn test_knockdown_tally_matches_rounds_and_events() {
    let a = fighter(1, "A", Attributes::uniform(90), FightingStyle::Striker);
    let b = fighter(
        2,
        "B",
        Attributes {
            chin: 20,
            ..Attributes::uniform(60)
        },
        FightingStyle::Striker,
    );

    for seed in 0..100 {
        let outcome = simulate_bout(a.clone(), b.clone(), 3, seed).unwrap();
        for id in [a.id, b.id] {
            let from_rounds: u32 = outcome
                .rounds
                .iter()
                .map(|r| r.knockdowns.get(&id).copied().unwrap_or(0))
                .sum();
            let from_events = outcome
                .rounds
                .iter()
                .flat_map(|r| &r.events)
                .filter(|e| matches!(e.event_type, BoutEventType::Knockdown { victim, .. } if victim == id))
                .count() as u32;
            assert_eq!(outcome.knockdowns_of(id), from_rounds);
            assert_eq!(from_rounds, from_events);
        }
        for round in &outcome.rounds {
            assert!(round.knockdowns.values().all(|&kd| kd > 0));
        }
    }
}

#[test]
fn test_extreme_weight_cut_starts_tired() {
    let red = fighter(1, "Red", Attributes::uniform(60), FightingStyle::Striker);
    let blue = fighter(2, "Blue", Attributes::uniform(60), FightingStyle::Striker)
        .with_weight_cut(CutSeverity::Extreme);
    let config = BoutConfig {
        trace: TraceMode::Ticks,
        ..BoutConfig::default()
    };
    let bout = Bout::new(red, blue, config).unwrap();
    let outcome = bout.run(3);

    let first = &outcome.rounds[0].trace[0];
    assert!(first.fighters[0].stamina > 95.0);
    assert!(first.fighters[1].stamina < 88.0);
}

#[test]
fn test_snapshots_are_not_mutated_by_running() {
    let red = fighter(1, "Red", Attributes::uniform(80), FightingStyle::Striker);
    let blue = fighter(2, "Blue", Attributes::uniform(50), FightingStyle::Striker);
    let bout = Bout::new(red, blue, BoutConfig::with_rounds(RoundCount::Championship)).unwrap();

    let _ = bout.run(1);
    assert_eq!(bout.fighter(Corner::Blue).state, RuntimeState::default());
    assert_eq!(bout.run(5), bout.run(5));
}

#[test]
fn test_oversized_round_is_an_error_not_a_panic() {
    let config = BoutConfig {
        ticks_per_round: 100_000,
        tick_seconds: 100_000,
        ..BoutConfig::default()
    };
    let result = Bout::new(chin_50(1, "Red"), chin_50(2, "Blue"), config);
    assert!(matches!(result, Err(BoutError::InvalidConfig(_))));
}

#[test]
fn test_sample_card_runs() {
    let card = load_bout_card("data/bouts/sample.toml").unwrap();
    let (red, blue) = card.snapshots().unwrap();
    assert_eq!(red.weight_cut, CutSeverity::Moderate);
    assert!(blue.has(Trait::KnockoutArtist));

    let bout = Bout::new(red, blue, card.config.clone()).unwrap();
    let outcome = bout.run(card.seed.unwrap_or(0));
    let json = serde_json::to_string(&outcome).unwrap();
    let back: FightOutcome = serde_json::from_str(&json).unwrap();
    assert_eq!(back, outcome);
}
