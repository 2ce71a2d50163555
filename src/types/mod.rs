/*! Dataset records

Knowledge graph triples and cross-graph alignment pairs, as found in OpenEA tab separated files.
!*/
mod alignment;
mod triple;

pub use alignment::AlignmentPair;
pub use triple::Triple;

/// Split a line into its tab separated fields.
///
/// Surrounding whitespace is trimmed first, so trailing newlines (or trailing tabs) never create an empty last field.
/// A blank line yields a single empty field.
#[inline]
pub fn fields(line: &str) -> Vec<&str> {
    line.trim().split('\t').collect()
}
