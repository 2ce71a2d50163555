/*! Format checking

Dataset files are checked by **sampling**: only the first lines (10 by default) are inspected,
which is fast on large files but misses malformed lines further down.
A full scan is obtained by not providing any sample size.

Blank lines are skipped, but still count in line numbering. A file made of blank lines only is empty.
!*/
use std::fmt;

use serde::Serialize;

use crate::types::fields;

/// Number of lines inspected by default.
pub const DEFAULT_SAMPLE_SIZE: usize = 10;

/// Constraint on the number of tab separated fields of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRule {
    AtLeast(usize),
    Exactly(usize),
}

impl FieldRule {
    pub fn accepts(&self, nb_fields: usize) -> bool {
        match self {
            FieldRule::AtLeast(n) => nb_fields >= *n,
            FieldRule::Exactly(n) => nb_fields == *n,
        }
    }
}

impl fmt::Display for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldRule::AtLeast(n) => write!(f, "at least {n}"),
            FieldRule::Exactly(n) => write!(f, "exactly {n}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FormatOutcome {
    /// `inspected` lines out of `lines` were checked and matched.
    Valid { lines: usize, inspected: usize },
    /// The file has no lines, or only blank ones.
    Empty,
    /// First offending line, numbered from 1.
    Malformed {
        line_number: usize,
        content: String,
        found: usize,
    },
    Unreadable { reason: String },
}

/// Check the first `sample_size` lines (all of them if [None]) against `rule`.
pub fn check_lines<S: AsRef<str>>(
    lines: &[S],
    rule: FieldRule,
    sample_size: Option<usize>,
) -> FormatOutcome {
    if lines.iter().all(|line| line.as_ref().trim().is_empty()) {
        return FormatOutcome::Empty;
    }

    let inspected = sample_size.map_or(lines.len(), |n| n.min(lines.len()));
    for (idx, line) in lines[..inspected].iter().enumerate() {
        let line = line.as_ref().trim();
        if line.is_empty() {
            continue;
        }

        let found = fields(line).len();
        if !rule.accepts(found) {
            return FormatOutcome::Malformed {
                line_number: idx + 1,
                content: line.to_string(),
                found,
            };
        }
    }

    FormatOutcome::Valid {
        lines: lines.len(),
        inspected,
    }
}
