/*! Entity coverage

Cross-checks linked entities against the entities found in relation triples.

Unlike format checks, entity collection goes through **every** line of the files.
Coverage gaps are warnings and never fail a dataset.
!*/
use std::collections::BTreeSet;

use serde::Serialize;

use crate::types::fields;

/// Up to this many missing entities are listed in reports.
pub const MAX_LISTED: usize = 5;

pub type EntitySet = BTreeSet<String>;

/// Subjects and objects of all lines with at least 3 fields.
pub fn triple_entities<S: AsRef<str>>(lines: &[S]) -> EntitySet {
    let mut entities = EntitySet::new();
    for line in lines {
        if let [subject, _, object, ..] = fields(line.as_ref()).as_slice() {
            entities.insert(subject.to_string());
            entities.insert(object.to_string());
        }
    }
    entities
}

/// Entities of each side of a links file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LinkedEntities {
    pub kg1: EntitySet,
    pub kg2: EntitySet,
}

impl LinkedEntities {
    /// Collect entities of lines with exactly 2 fields.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut linked = Self::default();
        for line in lines {
            if let [kg1, kg2] = fields(line.as_ref()).as_slice() {
                linked.kg1.insert(kg1.to_string());
                linked.kg2.insert(kg2.to_string());
            }
        }
        linked
    }

    /// Set union of both sides.
    pub fn union(mut self, other: &LinkedEntities) -> Self {
        self.kg1.extend(other.kg1.iter().cloned());
        self.kg2.extend(other.kg2.iter().cloned());
        self
    }
}

/// Linked entities of one knowledge graph that are absent from its triples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Coverage {
    /// 1 or 2.
    pub kg: u8,
    pub nb_entities: usize,
    pub nb_linked: usize,
    /// Sorted.
    pub missing: Vec<String>,
}

impl Coverage {
    pub fn new(kg: u8, entities: &EntitySet, linked: &EntitySet) -> Self {
        Self {
            kg,
            nb_entities: entities.len(),
            nb_linked: linked.len(),
            missing: linked.difference(entities).cloned().collect(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Missing entities, when there are few enough of them to be listed.
    pub fn listed(&self) -> Option<&[String]> {
        if !self.missing.is_empty() && self.missing.len() <= MAX_LISTED {
            Some(&self.missing)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> EntitySet {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_triple_entities() {
        let lines = ["a\tp\tb", "", "b\tq\tc\textra", "short\tline"];
        assert_eq!(triple_entities(&lines), set(&["a", "b", "c"]));
    }

    #[test]
    fn test_linked_entities() {
        let lines = ["x1\ty1", "x2\ty2\tz", "x3\ty3", "x1\ty4"];
        let linked = LinkedEntities::from_lines(&lines);
        assert_eq!(linked.kg1, set(&["x1", "x3"]));
        assert_eq!(linked.kg2, set(&["y1", "y3", "y4"]));
    }

    #[test]
    fn test_union() {
        let a = LinkedEntities::from_lines(&["x1\ty1"]);
        let b = LinkedEntities::from_lines(&["x2\ty2", "x1\ty1"]);
        let u = a.union(&b);
        assert_eq!(u.kg1, set(&["x1", "x2"]));
        assert_eq!(u.kg2, set(&["y1", "y2"]));
    }

    #[test]
    fn test_coverage() {
        let entities = set(&["ent:A", "ent:B"]);
        let c = Coverage::new(1, &entities, &set(&["ent:A", "ent:X"]));
        assert!(!c.is_complete());
        assert_eq!(c.listed(), Some(&["ent:X".to_string()][..]));

        let c = Coverage::new(1, &entities, &set(&["ent:A"]));
        assert!(c.is_complete());
        assert_eq!(c.listed(), None);
    }

    #[test]
    fn test_coverage_too_many() {
        let linked = set(&["1", "2", "3", "4", "5", "6"]);
        let c = Coverage::new(2, &EntitySet::new(), &linked);
        assert_eq!(c.missing.len(), 6);
        assert_eq!(c.listed(), None);
    }
}
