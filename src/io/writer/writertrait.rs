use crate::types::{AlignmentPair, Triple};

/// A record that can be written as a tab separated line.
pub trait TsvRecord {
    fn fields(&self) -> Vec<&str>;
}

impl TsvRecord for Triple {
    fn fields(&self) -> Vec<&str> {
        vec![
            self.subject.as_str(),
            self.predicate.as_str(),
            self.object.as_str(),
        ]
    }
}

impl TsvRecord for AlignmentPair {
    fn fields(&self) -> Vec<&str> {
        vec![self.kg1.as_str(), self.kg2.as_str()]
    }
}
