//! Sparse variable-step wiggle track emission.

use std::io::{self, Write};

/// Append-only writer for one variable-step wiggle track.
///
/// The writer borrows no stream-lifecycle responsibility: the caller opens
/// the underlying stream and closes it after the scan finishes.
#[derive(Debug)]
pub struct TrackWriter<W: Write> {
    inner: W,
}

impl<W: Write> TrackWriter<W> {
    /// Wrap an already-open output stream.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Write the one-line track declaration.
    pub fn write_header(&mut self, name: &str, description: &str) -> io::Result<()> {
        writeln!(
            self.inner,
            "track type=wiggle_0 name={name} description={description} visibility=full"
        )
    }

    /// Open a new chromosome section.
    ///
    /// The caller suppresses repeat calls for consecutive same-chromosome
    /// records; this method itself keeps no chromosome state.
    pub fn write_chromosome(&mut self, chromosome: &str) -> io::Result<()> {
        writeln!(self.inner, "variableStep chrom={chromosome}")
    }

    /// Emit one position line. Callers must not call this with a zero count;
    /// zero-count positions are simply absent from the sparse track.
    pub fn write_position(&mut self, position: &str, count: u32) -> io::Result<()> {
        writeln!(self.inner, "{position}\t{count}")
    }

    /// Flush buffered output to the underlying stream.
    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    /// Unwrap the underlying stream (useful for inspecting test buffers).
    pub fn into_inner(self) -> W {
        self.inner
    }
}
