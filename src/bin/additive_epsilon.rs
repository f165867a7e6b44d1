//! Additive epsilon indicator CLI.
//!
//! Reads a candidate front from stdin and a reference front from a file,
//! and prints the additive epsilon indicator of the candidate.
//!
//! ## Usage
//!
//! ```bash
//! additive-epsilon --reference front.txt --objectives 2 < population.txt
//! additive-epsilon --reference front.csv --objectives 3 --separator , --header-lines 1 < run.csv
//! ```

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use u_moeval::dominance::Direction;
use u_moeval::extract::Identity;
use u_moeval::indicator::{AdditiveEpsilon, QualityIndicator};
use u_moeval::io::{read_vectors, read_vectors_from_path, ReadOptions};

/// Additive epsilon indicator of a front read from stdin
#[derive(Parser, Debug)]
#[command(name = "additive-epsilon")]
#[command(about = "Compute the additive epsilon indicator of a front read from stdin")]
struct Args {
    /// File holding the reference front
    #[arg(long, short = 'r')]
    reference: PathBuf,

    /// Number of objectives per vector
    #[arg(long, short = 'n', value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    objectives: usize,

    /// Field separator
    #[arg(long, short = 's', default_value = " ")]
    separator: String,

    /// Lines to skip at the top of each input
    #[arg(long, default_value = "0")]
    header_lines: usize,

    /// Treat objectives as maximized
    #[arg(long)]
    maximize: bool,

    /// Enable debug logging
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let options = ReadOptions::new(args.objectives)
        .with_separator(args.separator.clone())
        .with_header_lines(args.header_lines);

    let reference = read_vectors_from_path(&args.reference, &options)
        .with_context(|| format!("reading reference front {}", args.reference.display()))?;
    debug!(points = reference.len(), "reference front loaded");

    let candidate = read_vectors(io::stdin().lock(), &options).context("reading candidate front from stdin")?;
    debug!(points = candidate.len(), "candidate front loaded");

    let direction = if args.maximize {
        Direction::Maximize
    } else {
        Direction::Minimize
    };
    let indicator = AdditiveEpsilon::new(direction);
    let value = indicator
        .evaluate(&candidate, &reference, &Identity)
        .with_context(|| format!("computing {}", indicator.name()))?;

    info!(
        candidate = candidate.len(),
        reference = reference.len(),
        "indicator computed"
    );
    println!("{value}");

    Ok(())
}
