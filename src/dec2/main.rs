use aoc2022::input::{self, RoundArgs};
use aoc2022::rps::{score_rounds, Mode};
use aoc2022::Result;
use clap::Parser;

/// Scores a strategy guide where each line is the opponent's shape and yours.
#[derive(Parser, Debug)]
struct Cli {
    #[command(flatten)]
    args: RoundArgs,
}

fn main() -> Result<()> {
    input::init_logging();
    let cli = Cli::parse();

    let rule = cli.args.score_rule()?;
    let buffer = input::read_input(cli.args.input.as_deref())?;
    let tally = score_rounds(&buffer, Mode::Direct, &rule, cli.args.on_error())?;

    log::info!(
        "{} rounds scored, {} skipped; opponent scored {}",
        tally.rounds,
        tally.skipped,
        tally.score.side2
    );
    println!("Total score: {}", tally.score.side1);

    Ok(())
}
