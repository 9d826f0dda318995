//! Pileup record splitting and read-edge marker classification.
//!
//! A pileup line carries, in column 4, a compact per-read marker string in
//! which `^` flags the start of a read (followed by one mapping-quality byte
//! and then the mapped base) and `$` flags the end of a read (preceded by the
//! mapped base). Base case encodes orientation: uppercase (or `.`) means the
//! read aligned to the forward strand, lowercase (or `,`) to the reverse.

/// Bases marking a forward-strand alignment after a `^` start marker.
const FORWARD_BASES: &[u8] = b".ACGTN";

/// Bases marking a reverse-strand alignment before a `$` end marker.
const REVERSE_BASES: &[u8] = b",acgtn";

/// Which end of a read is recorded as its signal position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndMode {
    /// Count the sequencing start: forward-mapped `^` markers and
    /// reverse-mapped `$` markers (default).
    FivePrime,
    /// Count the trailing edge: reverse-mapped `^` markers and
    /// forward-mapped `$` markers.
    ThreePrime,
}

/// The consumed columns of one pileup line.
///
/// Positions are 1-based and carried as text verbatim; the scanner never
/// interprets them numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PileupRecord<'a> {
    /// Chromosome name (column 0).
    pub chromosome: &'a str,
    /// Position text (column 1).
    pub position: &'a str,
    /// Per-read marker string (column 4).
    pub pileup: &'a str,
}

impl<'a> PileupRecord<'a> {
    /// Split a pileup line into the consumed columns.
    ///
    /// Returns `None` for lines with fewer than five whitespace-separated
    /// fields. Samtools 0.1.19 and higher emits zero-coverage positions with
    /// the trailing columns left out; such lines carry no reads and are
    /// skipped wholesale, without touching chromosome bookkeeping.
    pub fn parse(line: &'a str) -> Option<Self> {
        let mut fields = line.split_whitespace();
        let chromosome = fields.next()?;
        let position = fields.next()?;
        fields.next()?; // reference base, unused
        fields.next()?; // depth, unused
        let pileup = fields.next()?;
        Some(Self {
            chromosome,
            position,
            pileup,
        })
    }
}

/// Per-record strand counters. Computed fresh for every record, never
/// persisted across records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrandDepths {
    /// Read edges attributed to the forward strand.
    pub forward: u32,
    /// Read edges attributed to the reverse strand.
    pub reverse: u32,
}

/// Count forward- and reverse-oriented read edges in one pileup string.
///
/// Every `^` and `$` occurrence is classified independently over the whole
/// string. A marker whose companion base falls outside the string (a `^`
/// within two bytes of the end, or a `$` at index 0) is treated as not
/// forward-mapped / not reverse-mapped rather than as an error.
pub fn count_read_edges(pileup: &str, mode: EndMode) -> StrandDepths {
    let bytes = pileup.as_bytes();
    let mut depths = StrandDepths::default();

    for (i, &byte) in bytes.iter().enumerate() {
        match byte {
            b'^' => {
                // The byte after the mapping-quality byte is the mapped base.
                let forward_mapped = bytes
                    .get(i + 2)
                    .is_some_and(|base| FORWARD_BASES.contains(base));
                match mode {
                    EndMode::FivePrime if forward_mapped => depths.forward += 1,
                    EndMode::ThreePrime if !forward_mapped => depths.reverse += 1,
                    _ => {}
                }
            }
            b'$' => {
                let reverse_mapped = i
                    .checked_sub(1)
                    .and_then(|j| bytes.get(j))
                    .is_some_and(|base| REVERSE_BASES.contains(base));
                match mode {
                    EndMode::FivePrime if reverse_mapped => depths.reverse += 1,
                    EndMode::ThreePrime if !reverse_mapped => depths.forward += 1,
                    _ => {}
                }
            }
            _ => {}
        }
    }

    depths
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn parse_extracts_consumed_columns() {
        let record = PileupRecord::parse("chr1\t100\tA\t3\t^F.^Fa,a$\t*")
            .expect("five-column line should parse");
        assert_eq!(record.chromosome, "chr1");
        assert_eq!(record.position, "100");
        assert_eq!(record.pileup, "^F.^Fa,a$");
    }

    #[test]
    fn parse_skips_zero_coverage_lines() {
        assert_eq!(PileupRecord::parse("chr1\t100\tA\t0"), None);
        assert_eq!(PileupRecord::parse(""), None);
        assert_eq!(PileupRecord::parse("chr1"), None);
    }

    #[test]
    fn position_is_carried_as_text() {
        let record = PileupRecord::parse("chrX 007 A 1 . *").unwrap();
        assert_eq!(record.position, "007");
    }

    // The 5'/3' counting table.
    #[test_case("^F.", EndMode::FivePrime, 1, 0; "forward start counts in five prime")]
    #[test_case("^Fa", EndMode::FivePrime, 0, 0; "reverse start ignored in five prime")]
    #[test_case(",a$", EndMode::FivePrime, 0, 1; "reverse end counts in five prime")]
    #[test_case(".$", EndMode::FivePrime, 0, 0; "forward end ignored in five prime")]
    #[test_case("^F.", EndMode::ThreePrime, 0, 0; "forward start ignored in three prime")]
    #[test_case("^Fa", EndMode::ThreePrime, 0, 1; "reverse start counts in three prime")]
    #[test_case(",a$", EndMode::ThreePrime, 0, 0; "reverse end ignored in three prime")]
    #[test_case(".$", EndMode::ThreePrime, 1, 0; "forward end counts in three prime")]
    fn counting_table(pileup: &str, mode: EndMode, forward: u32, reverse: u32) {
        let depths = count_read_edges(pileup, mode);
        assert_eq!(depths, StrandDepths { forward, reverse });
    }

    #[test]
    fn markers_are_scanned_independently() {
        let depths = count_read_edges("^F.^Fa,a$", EndMode::FivePrime);
        assert_eq!(depths, StrandDepths { forward: 1, reverse: 1 });
    }

    #[test]
    fn no_markers_means_no_counts() {
        for mode in [EndMode::FivePrime, EndMode::ThreePrime] {
            assert_eq!(count_read_edges(",,..AaCg*", mode), StrandDepths::default());
        }
    }

    // Boundary policy: a truncated companion byte reads as "not mapped",
    // which is ignored in 5' mode and counted in 3' mode.
    #[test_case("^F", EndMode::FivePrime, 0, 0; "truncated start ignored in five prime")]
    #[test_case("^", EndMode::FivePrime, 0, 0; "bare caret ignored in five prime")]
    #[test_case("$", EndMode::FivePrime, 0, 0; "leading end ignored in five prime")]
    #[test_case("^F", EndMode::ThreePrime, 0, 1; "truncated start counts reverse in three prime")]
    #[test_case("$", EndMode::ThreePrime, 1, 0; "leading end counts forward in three prime")]
    fn boundary_markers_read_as_unmapped(pileup: &str, mode: EndMode, forward: u32, reverse: u32) {
        let depths = count_read_edges(pileup, mode);
        assert_eq!(depths, StrandDepths { forward, reverse });
    }
}
