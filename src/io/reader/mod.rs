/*! Dataset reading utilities

[LineReader] yields raw lines, the helpers in this module parse them into [Triple]s or [AlignmentPair]s.

Lines that do not parse are skipped (and logged at `debug` level), since malformed content is the concern of [crate::validation].
!*/
mod linereader;

use std::path::Path;

use log::debug;

use crate::error::Error;
use crate::types::{AlignmentPair, Triple};
pub use linereader::LineReader;

/// Read every line of the file at `src`.
pub fn read_lines(src: &Path) -> Result<Vec<String>, Error> {
    LineReader::new(src)?.collect()
}

/// Read triples from a tab separated file, skipping lines that have less than 3 fields.
pub fn read_triples(src: &Path) -> Result<Vec<Triple>, Error> {
    let mut triples = Vec::new();
    for (idx, line) in LineReader::new(src)?.enumerate() {
        let line = line?;
        match Triple::from_tsv(&line) {
            Some(t) => triples.push(t),
            None => debug!("{:?}: skipping line {}: {:?}", src, idx + 1, line),
        }
    }
    Ok(triples)
}

/// Read alignment pairs from a tab separated file, skipping lines that have less than 2 fields.
pub fn read_pairs(src: &Path) -> Result<Vec<AlignmentPair>, Error> {
    let mut pairs = Vec::new();
    for (idx, line) in LineReader::new(src)?.enumerate() {
        let line = line?;
        match AlignmentPair::from_tsv(&line) {
            Some(p) => pairs.push(p),
            None => debug!("{:?}: skipping line {}: {:?}", src, idx + 1, line),
        }
    }
    Ok(pairs)
}
