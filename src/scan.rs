//! Single-pass pileup scan driving the two track writers.

use std::fmt;
use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::{debug, info};

use crate::pileup::{count_read_edges, EndMode, PileupRecord};
use crate::wiggle::TrackWriter;

/// Which output track an IO failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Track {
    /// The forward-strand wiggle track.
    Forward,
    /// The reverse-strand wiggle track.
    Reverse,
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Track::Forward => f.write_str("forward"),
            Track::Reverse => f.write_str("reverse"),
        }
    }
}

/// Errors raised by the pileup scan. All are fatal; the scan never retries.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The pileup input could not be read.
    #[error("failed to read pileup input")]
    Read(#[source] io::Error),
    /// One of the track outputs could not be written.
    #[error("failed to write {0} track")]
    Write(Track, #[source] io::Error),
}

/// Scan a pileup stream once and write per-strand read-edge counts into the
/// forward and reverse wiggle tracks.
///
/// Track headers derived from `name` are written up front, so empty input
/// still yields header-only tracks. Records are consumed strictly in stream
/// order; a chromosome section is opened in both tracks whenever the
/// chromosome differs from the previous record's, so input is expected to be
/// grouped by chromosome. A chromosome that reappears after a gap opens a
/// duplicate section, matching the sequential-scan semantics of the wiggle
/// format consumers this feeds.
///
/// The streams are caller-owned: this function flushes the writers but does
/// not close anything.
pub fn make_wiggles<R, F, V>(
    pileup: R,
    forward: &mut TrackWriter<F>,
    reverse: &mut TrackWriter<V>,
    name: &str,
    mode: EndMode,
) -> Result<(), ScanError>
where
    R: BufRead,
    F: Write,
    V: Write,
{
    let forward_name = format!("{name}_forward");
    let reverse_name = format!("{name}_reverse");
    forward
        .write_header(&forward_name, &forward_name)
        .map_err(|e| ScanError::Write(Track::Forward, e))?;
    reverse
        .write_header(&reverse_name, &reverse_name)
        .map_err(|e| ScanError::Write(Track::Reverse, e))?;

    // Last-seen chromosome, scoped to this scan invocation.
    let mut chromosome: Option<String> = None;
    let mut records = 0u64;
    let mut skipped = 0u64;

    for line in pileup.lines() {
        let line = line.map_err(ScanError::Read)?;
        let Some(record) = PileupRecord::parse(&line) else {
            skipped += 1;
            debug!(line = %line, "skipping short pileup line");
            continue;
        };
        records += 1;

        if chromosome.as_deref() != Some(record.chromosome) {
            chromosome = Some(record.chromosome.to_string());
            forward
                .write_chromosome(record.chromosome)
                .map_err(|e| ScanError::Write(Track::Forward, e))?;
            reverse
                .write_chromosome(record.chromosome)
                .map_err(|e| ScanError::Write(Track::Reverse, e))?;
        }

        let depths = count_read_edges(record.pileup, mode);
        if depths.forward > 0 {
            forward
                .write_position(record.position, depths.forward)
                .map_err(|e| ScanError::Write(Track::Forward, e))?;
        }
        if depths.reverse > 0 {
            reverse
                .write_position(record.position, depths.reverse)
                .map_err(|e| ScanError::Write(Track::Reverse, e))?;
        }
    }

    forward
        .flush()
        .map_err(|e| ScanError::Write(Track::Forward, e))?;
    reverse
        .flush()
        .map_err(|e| ScanError::Write(Track::Reverse, e))?;

    info!(records, skipped, "pileup scan complete");
    Ok(())
}
