use std::str::FromStr;

use super::{Choice, RpsError};

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum Outcome {
    Draw,
    Side1Wins,
    Side2Wins,
}

impl Outcome {
    pub const ALL: [Outcome; 3] = [Outcome::Side1Wins, Outcome::Draw, Outcome::Side2Wins];
}

/// The win/lose/draw relation, spelled out for every ordered pair.
pub fn resolve(side1: Choice, side2: Choice) -> Outcome {
    use Choice::*;

    match (side1, side2) {
        (Rock, Rock) | (Paper, Paper) | (Scissors, Scissors) => Outcome::Draw,
        (Paper, Rock) | (Rock, Scissors) | (Scissors, Paper) => Outcome::Side1Wins,
        (Rock, Paper) | (Scissors, Rock) | (Paper, Scissors) => Outcome::Side2Wins,
    }
}

/// The choice that beats `x`, read off the `resolve` table.
pub fn defeated_by(x: Choice) -> Result<Choice, RpsError> {
    Choice::ALL
        .into_iter()
        .find(|&other| resolve(other, x) == Outcome::Side1Wins)
        .ok_or_else(|| RpsError::InvalidChoice(format!("nothing beats {:?}", x)))
}

/// The choice that `x` beats, read off the `resolve` table.
pub fn defeats(x: Choice) -> Result<Choice, RpsError> {
    Choice::ALL
        .into_iter()
        .find(|&other| resolve(x, other) == Outcome::Side1Wins)
        .ok_or_else(|| RpsError::InvalidChoice(format!("{:?} beats nothing", x)))
}

/// Picks the choice for side 2 so that `resolve(known, choice) == desired`.
pub fn force(known: Choice, desired: Outcome) -> Result<Choice, RpsError> {
    match desired {
        Outcome::Draw => Ok(known),
        Outcome::Side1Wins => defeats(known),
        Outcome::Side2Wins => defeated_by(known),
    }
}

/// How the player wants a round to end, as written in the forced-mode input.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum DesiredResult {
    Lose,
    Draw,
    Win,
}

impl DesiredResult {
    pub fn from_directive(directive: &str) -> Result<DesiredResult, RpsError> {
        match directive.trim().to_ascii_uppercase().as_str() {
            "X" => Ok(DesiredResult::Lose),
            "Y" => Ok(DesiredResult::Draw),
            "Z" => Ok(DesiredResult::Win),
            _ => Err(RpsError::InvalidOutcome(directive.to_string())),
        }
    }

    /// The round outcome with the opponent as side 1 and the player as side 2.
    pub fn against_opponent(self) -> Outcome {
        match self {
            DesiredResult::Lose => Outcome::Side1Wins,
            DesiredResult::Draw => Outcome::Draw,
            DesiredResult::Win => Outcome::Side2Wins,
        }
    }
}

impl FromStr for DesiredResult {
    type Err = RpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DesiredResult::from_directive(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Choice::*;

    #[test]
    fn truth_table() {
        let table = [
            (Rock, Rock, Outcome::Draw),
            (Rock, Paper, Outcome::Side2Wins),
            (Rock, Scissors, Outcome::Side1Wins),
            (Paper, Rock, Outcome::Side1Wins),
            (Paper, Paper, Outcome::Draw),
            (Paper, Scissors, Outcome::Side2Wins),
            (Scissors, Rock, Outcome::Side2Wins),
            (Scissors, Paper, Outcome::Side1Wins),
            (Scissors, Scissors, Outcome::Draw),
        ];

        for (side1, side2, expected) in table {
            assert_eq!(resolve(side1, side2), expected, "{:?} vs {:?}", side1, side2);
        }
    }

    #[test]
    fn each_outcome_appears_three_times() {
        for outcome in Outcome::ALL {
            let count = Choice::ALL
                .iter()
                .flat_map(|&a| Choice::ALL.iter().map(move |&b| resolve(a, b)))
                .filter(|&o| o == outcome)
                .count();
            assert_eq!(count, 3, "{:?}", outcome);
        }
    }

    #[test]
    fn cycles() {
        assert_eq!(defeated_by(Rock), Ok(Paper));
        assert_eq!(defeated_by(Paper), Ok(Scissors));
        assert_eq!(defeated_by(Scissors), Ok(Rock));

        assert_eq!(defeats(Rock), Ok(Scissors));
        assert_eq!(defeats(Paper), Ok(Rock));
        assert_eq!(defeats(Scissors), Ok(Paper));
    }

    #[test]
    fn force_inverts_resolve() {
        for c in Choice::ALL {
            for o in Outcome::ALL {
                let picked = force(c, o).unwrap();
                assert_eq!(resolve(c, picked), o, "known {:?}, wanted {:?}", c, o);
            }
        }
    }

    #[test]
    fn directives() {
        assert_eq!(DesiredResult::from_directive("X"), Ok(DesiredResult::Lose));
        assert_eq!(DesiredResult::from_directive(" y"), Ok(DesiredResult::Draw));
        assert_eq!("z".parse::<DesiredResult>(), Ok(DesiredResult::Win));
        assert_eq!(
            DesiredResult::from_directive("A"),
            Err(RpsError::InvalidOutcome("A".to_string()))
        );
    }

    #[test]
    fn directive_outcomes_are_from_the_opponents_side() {
        assert_eq!(force(Rock, DesiredResult::Win.against_opponent()), Ok(Paper));
        assert_eq!(force(Paper, DesiredResult::Lose.against_opponent()), Ok(Rock));
        assert_eq!(force(Scissors, DesiredResult::Draw.against_opponent()), Ok(Scissors));
    }
}
