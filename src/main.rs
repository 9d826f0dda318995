use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sagewiggle::{make_wiggles, EndMode, PileupSource, TrackWriter};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "sagewiggle",
    about = "Convert a pileup file into per-strand wiggle tracks of read start/end sites"
)]
struct Cli {
    /// Pileup file (default: standard input).
    #[arg(short = 'i', value_name = "PILEUP")]
    input: Option<PathBuf>,

    /// The forward and reverse wiggle files, in that order.
    #[arg(short = 'o', num_args = 2, required = true, value_names = ["FORWARD", "REVERSE"])]
    output: Vec<PathBuf>,

    /// Record the 3' end of the reads instead of the 5' end.
    #[arg(short = 'p')]
    three_prime: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let source = match cli.input {
        Some(path) => PileupSource::File(path),
        None => PileupSource::Stdin,
    };
    let name = source.sample_name();
    let mode = if cli.three_prime {
        EndMode::ThreePrime
    } else {
        EndMode::FivePrime
    };

    let reader = source
        .open()
        .with_context(|| format!("failed to open pileup input {source}"))?;

    let forward_path = &cli.output[0];
    let reverse_path = &cli.output[1];
    let mut forward = TrackWriter::new(BufWriter::new(File::create(forward_path).with_context(
        || format!("failed to create forward track {}", forward_path.display()),
    )?));
    let mut reverse = TrackWriter::new(BufWriter::new(File::create(reverse_path).with_context(
        || format!("failed to create reverse track {}", reverse_path.display()),
    )?));

    make_wiggles(reader, &mut forward, &mut reverse, &name, mode)
        .with_context(|| format!("pileup scan over {source} failed"))?;

    Ok(())
}
