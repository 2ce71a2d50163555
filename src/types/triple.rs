use std::fmt;

use serde::{Deserialize, Serialize};

use super::fields;

/// A (subject, predicate, object) statement.
///
/// Subjects and objects are either entity identifiers or literal values, predicates are relation or attribute names.
/// No normalization is performed on any of the three.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    pub subject: String,
    pub predicate: String,
    pub object: String,
}

impl Triple {
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }

    /// Parse a `subject<TAB>predicate<TAB>object` line.
    ///
    /// Returns [None] when the line has less than 3 fields.
    /// Fields after the third one are ignored.
    pub fn from_tsv(line: &str) -> Option<Self> {
        match fields(line).as_slice() {
            [s, p, o, ..] => Some(Self::new(*s, *p, *o)),
            _ => None,
        }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.subject, self.predicate, self.object)
    }
}
