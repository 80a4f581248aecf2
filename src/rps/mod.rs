//! Rock-paper-scissors round scoring.
//!
//! A round is two tokens. In direct mode both tokens name a [`Choice`]; in
//! forced mode the second token is a directive saying how the round should
//! end, and the player's choice is derived from the opponent's with
//! [`force`].

mod choice;
mod outcome;
mod round;
mod rule;

pub use choice::Choice;
pub use outcome::{defeated_by, defeats, force, resolve, DesiredResult, Outcome};
pub use round::{parse_round_line, round_pattern, score_rounds, Mode, OnError, Tally};
pub use rule::{RoundScore, ScoreRule};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RpsError {
    #[error("invalid symbol {0:?}: expected one of A, B, C, X, Y, Z")]
    InvalidSymbol(String),
    #[error("invalid choice: {0}")]
    InvalidChoice(String),
    #[error("invalid outcome directive {0:?}: expected one of X, Y, Z")]
    InvalidOutcome(String),
    #[error("score rule is missing required key {0}")]
    MissingConfigKey(&'static str),
    #[error("score rule key {0} is given more than once")]
    DuplicateConfigKey(String),
    #[error("score does not fit in an i32")]
    ScoreOverflow,
}
