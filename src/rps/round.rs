use anyhow::Context;
use regex::Regex;

use super::{force, Choice, DesiredResult, RoundScore, RpsError, ScoreRule};

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Mode {
    /// The second token is the player's choice.
    Direct,
    /// The second token says whether the player should lose, draw or win.
    Forced,
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub enum OnError {
    #[default]
    Abort,
    Skip,
}

#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Tally {
    /// Side 1 is the player, side 2 the opponent.
    pub score: RoundScore,
    pub rounds: usize,
    pub skipped: usize,
}

/// Splits an input line into its two tokens. Blank lines yield `None`.
pub fn parse_round_line<'a>(
    re: &Regex,
    line: &'a str,
) -> crate::Result<Option<(&'a str, &'a str)>> {
    if line.trim().is_empty() {
        return Ok(None);
    }

    let Some(captures) = re.captures(line) else {
        anyhow::bail!("expected two whitespace-separated tokens, got {:?}", line);
    };

    match (captures.name("first"), captures.name("second")) {
        (Some(first), Some(second)) => Ok(Some((first.as_str(), second.as_str()))),
        _ => anyhow::bail!("expected two whitespace-separated tokens, got {:?}", line),
    }
}

pub fn round_pattern() -> crate::Result<Regex> {
    Ok(Regex::new(r"^\s*(?P<first>\S+)\s+(?P<second>\S+)\s*$")?)
}

fn score_round(
    mode: Mode,
    rule: &ScoreRule,
    them: &str,
    token: &str,
) -> Result<RoundScore, RpsError> {
    let them: Choice = them.parse()?;

    let me = match mode {
        Mode::Direct => token.parse()?,
        Mode::Forced => {
            let desired: DesiredResult = token.parse()?;
            force(them, desired.against_opponent())?
        }
    };

    let score = rule.score(me, them)?;
    log::debug!("{:?} vs. {:?} = {} to {}", me, them, score.side1, score.side2);

    Ok(score)
}

/// Scores every round in `input` and sums the totals for both sides.
pub fn score_rounds(
    input: &str,
    mode: Mode,
    rule: &ScoreRule,
    on_error: OnError,
) -> crate::Result<Tally> {
    let re = round_pattern()?;
    let mut tally = Tally::default();

    for (index, line) in input.lines().enumerate() {
        let line_number = index + 1;

        let result = match parse_round_line(&re, line) {
            Ok(Some((them, token))) => score_round(mode, rule, them, token)
                .and_then(|score| tally.score.checked_add(score))
                .map(Some)
                .map_err(anyhow::Error::from),
            Ok(None) => Ok(None),
            Err(err) => Err(err),
        };

        match (result, on_error) {
            (Ok(Some(total)), _) => {
                tally.score = total;
                tally.rounds += 1;
            }
            (Ok(None), _) => {}
            (Err(err), OnError::Skip) => {
                log::warn!("skipping line {}: {:#}", line_number, err);
                tally.skipped += 1;
            }
            (Err(err), OnError::Abort) => {
                return Err(err).with_context(|| format!("line {}", line_number));
            }
        }
    }

    Ok(tally)
}
