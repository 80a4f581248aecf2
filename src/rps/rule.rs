use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;

use super::{resolve, Choice, Outcome, RpsError};

const KEYS: [&str; 6] = ["ROCK", "PAPER", "SCISSORS", "DRAW", "WIN", "LOSS"];

/// Points for the shape played plus a bonus for how the round ended.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ScoreRule {
    pub rock: i32,
    pub paper: i32,
    pub scissors: i32,
    pub draw: i32,
    pub win: i32,
    pub loss: i32,
}

impl Default for ScoreRule {
    fn default() -> Self {
        ScoreRule {
            rock: 1,
            paper: 2,
            scissors: 3,
            draw: 3,
            win: 6,
            loss: 0,
        }
    }
}

impl ScoreRule {
    /// Builds a rule from a key/value table. Keys are case-insensitive; every
    /// one of ROCK, PAPER, SCISSORS, DRAW, WIN and LOSS must be present, and
    /// no two keys may be equal once case is ignored.
    pub fn from_map(raw: &HashMap<String, i32>) -> Result<ScoreRule, RpsError> {
        let mut values: HashMap<String, i32> = HashMap::new();

        for (key, value) in raw {
            let key = key.trim().to_ascii_uppercase();
            if !KEYS.contains(&key.as_str()) {
                log::warn!("ignoring unknown score rule key {:?}", key);
            }
            if values.insert(key.clone(), *value).is_some() {
                return Err(RpsError::DuplicateConfigKey(key));
            }
        }

        let get = |key: &'static str| {
            values
                .get(key)
                .copied()
                .ok_or(RpsError::MissingConfigKey(key))
        };

        Ok(ScoreRule {
            rock: get("ROCK")?,
            paper: get("PAPER")?,
            scissors: get("SCISSORS")?,
            draw: get("DRAW")?,
            win: get("WIN")?,
            loss: get("LOSS")?,
        })
    }

    pub fn from_json(s: &str) -> crate::Result<ScoreRule> {
        let values: HashMap<String, i32> =
            serde_json::from_str(s).context("score rule must be a JSON object of integers")?;
        Ok(ScoreRule::from_map(&values)?)
    }

    pub fn load(path: &Path) -> crate::Result<ScoreRule> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading score rule {}", path.display()))?;
        ScoreRule::from_json(&text)
            .with_context(|| format!("loading score rule {}", path.display()))
    }

    pub fn choice_value(&self, x: Choice) -> i32 {
        match x {
            Choice::Rock => self.rock,
            Choice::Paper => self.paper,
            Choice::Scissors => self.scissors,
        }
    }

    pub fn score(&self, side1: Choice, side2: Choice) -> Result<RoundScore, RpsError> {
        let (bonus1, bonus2) = match resolve(side1, side2) {
            Outcome::Draw => (self.draw, self.draw),
            Outcome::Side1Wins => (self.win, self.loss),
            Outcome::Side2Wins => (self.loss, self.win),
        };

        let score1 = bonus1
            .checked_add(self.choice_value(side1))
            .ok_or(RpsError::ScoreOverflow)?;
        let score2 = bonus2
            .checked_add(self.choice_value(side2))
            .ok_or(RpsError::ScoreOverflow)?;

        Ok(RoundScore {
            side1: score1,
            side2: score2,
        })
    }
}

#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub struct RoundScore {
    pub side1: i32,
    pub side2: i32,
}

impl RoundScore {
    pub fn checked_add(self, other: RoundScore) -> Result<RoundScore, RpsError> {
        match (
            self.side1.checked_add(other.side1),
            self.side2.checked_add(other.side2),
        ) {
            (Some(side1), Some(side2)) => Ok(RoundScore { side1, side2 }),
            _ => Err(RpsError::ScoreOverflow),
        }
    }
}
