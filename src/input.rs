use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;

use crate::rps::{OnError, ScoreRule};

/// Options shared by the rock-paper-scissors binaries.
#[derive(Args, Debug)]
pub struct RoundArgs {
    /// Puzzle input; read from stdin when omitted.
    #[arg(short, long)]
    pub input: Option<PathBuf>,
    /// JSON score rule with ROCK, PAPER, SCISSORS, DRAW, WIN and LOSS keys.
    #[arg(short, long)]
    pub rules: Option<PathBuf>,
    /// Log and skip rounds that fail to parse instead of stopping.
    #[arg(long)]
    pub skip_invalid: bool,
}

impl RoundArgs {
    pub fn score_rule(&self) -> crate::Result<ScoreRule> {
        match &self.rules {
            Some(path) => ScoreRule::load(path),
            None => Ok(ScoreRule::default()),
        }
    }

    pub fn on_error(&self) -> OnError {
        if self.skip_invalid {
            OnError::Skip
        } else {
            OnError::Abort
        }
    }
}

pub fn read_input(path: Option<&Path>) -> crate::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading puzzle input {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("reading puzzle input from stdin")?;
            Ok(buffer)
        }
    }
}

pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
