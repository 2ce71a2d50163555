/*! N-Triples conversion

Converts `<subject> <predicate> <object> .` lines into the tab separated triple format.

This is a plain text transform and not an RDF parser: terms are split on the first two spaces,
then stripped of their surrounding angle brackets and quotes. Datatypes, language tags and blank nodes
are carried over as-is (e.g. `"chat"@fr` becomes `chat"@fr`).
!*/
use std::path::Path;

use log::{debug, info, warn};
use serde::Serialize;

use crate::{
    error::Error,
    io::{LineReader, TsvWriter},
    types::Triple,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ConversionSummary {
    /// Triples written.
    pub converted: usize,
    /// Non-blank, non-comment lines that could not be split into 3 terms.
    pub skipped: usize,
}

/// Strip surrounding `<`/`>`, then surrounding `"`.
#[inline]
fn clean_term(term: &str) -> &str {
    term.trim_matches(|c: char| c == '<' || c == '>').trim_matches('"')
}

#[derive(Debug, PartialEq, Eq)]
enum Line {
    Triple(Triple),
    /// Blank line or comment.
    Ignored,
    Malformed,
}

fn parse_line(line: &str) -> Line {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Line::Ignored;
    }

    let line = line.strip_suffix(" .").unwrap_or(line);
    let mut terms = line.splitn(3, ' ');
    match (terms.next(), terms.next(), terms.next()) {
        (Some(s), Some(p), Some(o)) => {
            Line::Triple(Triple::new(clean_term(s), clean_term(p), clean_term(o)))
        }
        _ => Line::Malformed,
    }
}

/// Parse a single N-Triples line.
///
/// Returns [None] for blank lines, comments and lines with less than 3 terms.
pub fn parse_ntriples_line(line: &str) -> Option<Triple> {
    match parse_line(line) {
        Line::Triple(t) => Some(t),
        _ => None,
    }
}

/// Convert the N-Triples file at `src` into a tab separated triple file at `dst`.
pub fn convert_ntriples(src: &Path, dst: &Path) -> Result<ConversionSummary, Error> {
    if !src.exists() {
        return Err(Error::MissingInput(src.to_path_buf()));
    }

    info!("converting {:?} to {:?}", src, dst);
    let reader = LineReader::new(src)?;
    let mut writer = TsvWriter::create(dst)?;
    let mut summary = ConversionSummary::default();

    for (idx, line) in reader.enumerate() {
        let line = line?;
        match parse_line(&line) {
            Line::Triple(t) => {
                writer.write_single(&t)?;
                summary.converted += 1;
            }
            Line::Ignored => (),
            Line::Malformed => {
                debug!("line {}: {:?}", idx + 1, line);
                summary.skipped += 1;
            }
        }
    }
    writer.flush()?;

    if summary.skipped > 0 {
        warn!(
            "{} lines of {:?} did not hold 3 terms and were skipped",
            summary.skipped, src
        );
    }
    info!("conversion done");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iris() {
        let t = parse_ntriples_line(
            "<http://example.org/Apple> <http://example.org/type> <http://example.org/Company> .",
        )
        .unwrap();
        assert_eq!(
            t,
            Triple::new(
                "http://example.org/Apple",
                "http://example.org/type",
                "http://example.org/Company"
            )
        );
    }

    #[test]
    fn test_parse_literal() {
        let t = parse_ntriples_line("<http://a> <http://name> \"Douglas Adams\" .").unwrap();
        assert_eq!(t.object, "Douglas Adams");

        let t = parse_ntriples_line("<http://a> <http://name> \"chat\"@fr .").unwrap();
        assert_eq!(t.object, "chat\"@fr");
    }

    #[test]
    fn test_parse_ignored() {
        assert_eq!(parse_line(""), Line::Ignored);
        assert_eq!(parse_line("   "), Line::Ignored);
        assert_eq!(parse_line("# a comment"), Line::Ignored);
        assert_eq!(parse_line("<a> <b> ."), Line::Malformed);
        assert!(parse_ntriples_line("<a> <b> .").is_none());
    }

    #[test]
    fn test_parse_no_final_dot() {
        let t = parse_ntriples_line("<a> <b> <c>").unwrap();
        assert_eq!(t, Triple::new("a", "b", "c"));
    }

    #[test_log::test]
    fn test_convert_file() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("kg.nt");
        let dst = dir.path().join("rel_triples_1");
        std::fs::write(
            &src,
            "# header\n<e1> <p> <e2> .\n\n<e2> <name> \"Bob\" .\nbroken .\n",
        )
        .unwrap();

        let summary = convert_ntriples(&src, &dst).unwrap();
        assert_eq!(
            summary,
            ConversionSummary {
                converted: 2,
                skipped: 1
            }
        );
        assert_eq!(
            std::fs::read_to_string(&dst).unwrap(),
            "e1\tp\te2\ne2\tname\tBob\n"
        );
    }

    #[test]
    fn test_convert_missing() {
        let dir = tempfile::tempdir().unwrap();
        let res = convert_ntriples(&dir.path().join("nope.nt"), &dir.path().join("out"));
        assert!(matches!(res, Err(Error::MissingInput(_))));
    }
}
