//! Pileup input selection: a file path or standard input.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

/// Sample name used when no file name is available (piped standard input, or
/// a path without a usable stem).
pub const DEFAULT_SAMPLE_NAME: &str = "stdin";

/// Where the pileup lines come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PileupSource {
    /// Read from the given file path.
    File(PathBuf),
    /// Read from standard input.
    Stdin,
}

impl PileupSource {
    /// Sample name used in the track headers: the input file's base name
    /// with its extension stripped, or [`DEFAULT_SAMPLE_NAME`].
    pub fn sample_name(&self) -> String {
        match self {
            Self::File(path) => path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| DEFAULT_SAMPLE_NAME.to_string()),
            Self::Stdin => DEFAULT_SAMPLE_NAME.to_string(),
        }
    }

    /// Open the source as a buffered line reader.
    pub fn open(&self) -> io::Result<Box<dyn BufRead>> {
        match self {
            Self::File(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
            Self::Stdin => Ok(Box::new(BufReader::new(io::stdin()))),
        }
    }
}

impl std::fmt::Display for PileupSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdin => f.write_str("standard input"),
        }
    }
}
