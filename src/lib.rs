//! # Strand-oriented read-edge counting over pileup files
//!
//! `sagewiggle` scans a pileup file once, finds the `^` (read start) and `$`
//! (read end) markers in each record's alignment string, classifies them by
//! strand orientation, and writes two sparse variable-step wiggle tracks
//! (forward and reverse) suitable for genome browsers.
//!
//! The whole tool is one linear pass: per record, two transient counters are
//! computed from the marker string and flushed straight into the track
//! writers. Chromosome sections follow the input's grouping; nothing is
//! buffered or reordered.
//!
//! ## Usage Example
//!
//! ```
//! use sagewiggle::{make_wiggles, EndMode, TrackWriter};
//!
//! let pileup = "chr1\t100\tA\t3\t^F.^Fa,a$\t*\n";
//! let mut forward = TrackWriter::new(Vec::new());
//! let mut reverse = TrackWriter::new(Vec::new());
//! make_wiggles(pileup.as_bytes(), &mut forward, &mut reverse, "sample", EndMode::FivePrime)?;
//! # Ok::<(), sagewiggle::ScanError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod input;
pub mod pileup;
pub mod scan;
pub mod wiggle;

// Re-exports for convenience
pub use input::{PileupSource, DEFAULT_SAMPLE_NAME};
pub use pileup::{count_read_edges, EndMode, PileupRecord, StrandDepths};
pub use scan::{make_wiggles, ScanError, Track};
pub use wiggle::TrackWriter;
