use std::fmt;

use serde::{Deserialize, Serialize};

use super::fields;

/// Identity link between an entity of the first knowledge graph and one of the second.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlignmentPair {
    pub kg1: String,
    pub kg2: String,
}

impl AlignmentPair {
    pub fn new(kg1: impl Into<String>, kg2: impl Into<String>) -> Self {
        Self {
            kg1: kg1.into(),
            kg2: kg2.into(),
        }
    }

    /// Parse a `kg1<TAB>kg2` line.
    ///
    /// This is lenient: any line with at least 2 fields is accepted and extra fields are dropped.
    /// Use [crate::validation] to check that a links file is strictly well formed.
    pub fn from_tsv(line: &str) -> Option<Self> {
        match fields(line).as_slice() {
            [kg1, kg2, ..] => Some(Self::new(*kg1, *kg2)),
            _ => None,
        }
    }
}

impl fmt::Display for AlignmentPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.kg1, self.kg2)
    }
}
