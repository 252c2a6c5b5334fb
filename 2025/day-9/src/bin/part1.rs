use std::path::PathBuf;

use clap::Parser;
use miette::*;

use aoc2025_day_9::part1;

/// Largest rectangle between any two red tiles.
#[derive(Debug, Parser)]
struct Args {
    /// Red tile list, one `x,y` per line.
    #[arg(default_value = "input1.txt")]
    input: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let args = Args::parse();

    let input = std::fs::read_to_string(&args.input)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read {}", args.input.display()))?;
    let result = part1::process(&input)?;
    println!("{result}");
    Ok(())
}
