use std::path::PathBuf;

use aoc2022::calories;
use aoc2022::input;
use aoc2022::Result;
use clap::Parser;

/// Totals blank-line-separated groups of calorie counts.
#[derive(Parser, Debug)]
struct Cli {
    /// Puzzle input; read from stdin when omitted.
    #[arg(short, long)]
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    input::init_logging();
    let cli = Cli::parse();

    let buffer = input::read_input(cli.input.as_deref())?;
    let totals = calories::group_totals(&buffer)?;

    println!("Highest total: {}", calories::highest_total(&totals)?);
    println!("Top three total: {}", calories::sum_of_top_three(&totals)?);

    Ok(())
}
