use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;
use miette::*;

use aoc2025_day_9::part2::{self, Options};
use aoc2025_day_9::search::SearchOptions;

/// Largest rectangle between two red tiles that stays inside the polygon
/// they outline.
#[derive(Debug, Parser)]
struct Args {
    /// Red tile list in traversal order, one `x,y` per line.
    #[arg(default_value = "input2.txt")]
    input: PathBuf,

    /// Search threads [default: available parallelism]
    #[arg(short, long)]
    workers: Option<NonZeroUsize>,

    /// Show a progress bar while searching.
    #[arg(long)]
    progress: bool,

    /// Abort if the tiles do not outline a simple rectilinear polygon.
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let args = Args::parse();

    let mut search = SearchOptions::default();
    if let Some(workers) = args.workers {
        search.workers = workers;
    }
    search.progress = args.progress;
    let options = Options {
        search,
        strict: args.strict,
    };

    let input = std::fs::read_to_string(&args.input)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read {}", args.input.display()))?;
    let result = part2::process_with(&input, &options)?;
    println!("{result}");
    Ok(())
}
