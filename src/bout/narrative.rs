//! Outcome narrator: one flavor string per bout
//!
//! Templates are keyed by method and picked with the bout's generator, so
//! the narrative is as reproducible as the result.

use std::collections::BTreeMap;

use rand::Rng;

use crate::bout::outcome::Method;
use crate::bout::style::StyleMatchup;
use crate::core::types::FighterId;

const STRIKE_STOPPAGE: &[&str] = &[
    "{winner} controlled the fight with sharp striking before putting {loser} away in round {round}. The finish came via brutal ground and pound after a knockdown.",
    "{winner} stalked {loser} from the opening bell, landing cleaner shots each exchange. A precise combination in round {round} ended matters emphatically.",
    "After a competitive start, {winner} found the range and began teeing off on {loser}. The referee stepped in to stop it in round {round}.",
];

const SUBMISSION: &[&str] = &[
    "{winner} dragged the fight to the mat early and worked methodically, securing the submission in round {round} after {loser} couldn't escape the hold.",
    "{loser} was competitive on the feet, but once {winner} got the takedown in round {round}, there was no escape from the submission attempt.",
    "{winner} showed world-class grappling, threading the needle for a slick submission in round {round} after neutralizing {loser}'s striking game.",
];

const UNANIMOUS: &[&str] = &[
    "{winner} outworked {loser} for the full {round} rounds, controlling range and landing the cleaner shots to take a clear decision.",
    "A technical battle that went the distance, with {winner} edging out {loser} on all three judges' scorecards over {round} rounds.",
];

const SPLIT: &[&str] = &[
    "{winner} and {loser} had a back-and-forth war that split the judges. Two of three scorecards favored {winner}'s output and aggression.",
    "Neither fighter was able to impose their will completely, and {winner} squeaked out a split decision after {round} competitive rounds.",
];

const MAJORITY: &[&str] = &[
    "{winner} did enough to claim a majority decision over {loser} after {round} rounds, with two judges scoring it in their favor.",
    "An even fight that could have gone either way. {winner} gets the nod on two scorecards with the third seeing it a draw.",
];

fn templates(method: Method) -> &'static [&'static str] {
    match method {
        Method::StrikeStoppage => STRIKE_STOPPAGE,
        Method::Submission => SUBMISSION,
        Method::UnanimousDecision => UNANIMOUS,
        Method::SplitDecision => SPLIT,
        Method::MajorityDecision => MAJORITY,
    }
}

/// What the narrator needs to know about a finished bout
pub struct NarrativeContext<'a> {
    pub winner: &'a str,
    pub loser: &'a str,
    pub method: Method,
    pub round: u32,
    pub matchup: StyleMatchup,
    /// Knockdowns suffered, in listing order
    pub knockdowns: Vec<(&'a str, u32)>,
}

impl<'a> NarrativeContext<'a> {
    /// Order knockdown counts by the given listing rather than by id
    pub fn knockdowns_in_order(
        names: [(&'a str, FighterId); 2],
        tally: &BTreeMap<FighterId, u32>,
    ) -> Vec<(&'a str, u32)> {
        names
            .into_iter()
            .map(|(name, id)| (name, tally.get(&id).copied().unwrap_or(0)))
            .collect()
    }
}

pub fn narrate(ctx: &NarrativeContext<'_>, rng: &mut impl Rng) -> String {
    let options = templates(ctx.method);
    let template = options[rng.gen_range(0..options.len())];

    let mut text = template
        .replace("{winner}", ctx.winner)
        .replace("{loser}", ctx.loser)
        .replace("{round}", &ctx.round.to_string());

    let knockdowns: Vec<String> = ctx
        .knockdowns
        .iter()
        .filter(|(_, count)| *count > 0)
        .map(|(name, count)| {
            let plural = if *count > 1 { "s" } else { "" };
            format!("{name} was knocked down {count} time{plural}")
        })
        .collect();
    if !knockdowns.is_empty() {
        text.push(' ');
        text.push_str(&knockdowns.join(". "));
        text.push('.');
    }

    match ctx.matchup {
        StyleMatchup::GrapplingClinic if ctx.method == Method::Submission => {
            text.push_str(" A true grappling clinic.");
        }
        StyleMatchup::StrikingBattle => {
            text.push_str(" It was a striking battle from start to finish.");
        }
        StyleMatchup::TakedownBattle => {
            text.push_str(" Cage pressure and takedowns defined this takedown battle.");
        }
        _ => {}
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn ctx(method: Method, matchup: StyleMatchup) -> NarrativeContext<'static> {
        NarrativeContext {
            winner: "Ana",
            loser: "Bea",
            method,
            round: 2,
            matchup,
            knockdowns: vec![("Ana", 0), ("Bea", 2)],
        }
    }

    #[test]
    fn test_placeholders_filled() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for method in [
            Method::StrikeStoppage,
            Method::Submission,
            Method::UnanimousDecision,
            Method::SplitDecision,
            Method::MajorityDecision,
        ] {
            let text = narrate(&ctx(method, StyleMatchup::Neutral), &mut rng);
            assert!(!text.contains('{'), "{text}");
            assert!(text.contains("Ana"));
        }
    }

    #[test]
    fn test_knockdown_sentence() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let text = narrate(&ctx(Method::StrikeStoppage, StyleMatchup::Neutral), &mut rng);
        assert!(text.ends_with(" Bea was knocked down 2 times."), "{text}");
        assert!(!text.contains("Ana was knocked down"));
    }

    #[test]
    fn test_grappling_clinic_only_for_submissions() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let sub = narrate(&ctx(Method::Submission, StyleMatchup::GrapplingClinic), &mut rng);
        assert!(sub.ends_with("A true grappling clinic."));

        let ko = narrate(&ctx(Method::StrikeStoppage, StyleMatchup::GrapplingClinic), &mut rng);
        assert!(!ko.contains("grappling clinic"));
    }

    #[test]
    fn test_same_seed_same_story() {
        let c = ctx(Method::SplitDecision, StyleMatchup::StrikingBattle);
        let a = narrate(&c, &mut ChaCha8Rng::seed_from_u64(42));
        let b = narrate(&c, &mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(a, b);
        assert!(a.ends_with("It was a striking battle from start to finish."));
    }
}
