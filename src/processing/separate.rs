/*! Relation/attribute separation

Splits a triple file into relation triples (entity to entity edges) and attribute triples (entity to literal).

The classification is a heuristic, and a knowingly imprecise one: a triple is an attribute triple when

- its predicate *contains* one of the [AttributeMarkers] (case sensitive substring, so `name` also matches `surname`), or
- its object does not look like an entity, that is it starts neither with `http://` nor with `ent:`.

Every other triple is a relation triple.
!*/
use std::path::Path;

use log::{debug, info};
use serde::Serialize;

use crate::{error::Error, io::reader::read_triples, types::Triple};

use super::split::write_records;

/// Object prefixes denoting an entity.
const ENTITY_PREFIXES: [&str; 2] = ["http://", "ent:"];

/// Predicate substrings that denote an attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeMarkers(Vec<String>);

impl AttributeMarkers {
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(markers.into_iter().map(Into::into).collect())
    }

    /// true if `predicate` contains any of the markers.
    pub fn matches(&self, predicate: &str) -> bool {
        self.0.iter().any(|marker| predicate.contains(marker.as_str()))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl Default for AttributeMarkers {
    fn default() -> Self {
        Self::new([
            "name",
            "label",
            "comment",
            "abstract",
            "birthDate",
            "deathDate",
            "population",
            "area",
            "rdfs:label",
            "rdfs:comment",
            "foaf:name",
        ])
    }
}

/// true if `object` does not start with any of the entity prefixes.
#[inline]
fn looks_like_literal(object: &str) -> bool {
    !ENTITY_PREFIXES
        .iter()
        .any(|prefix| object.starts_with(prefix))
}

pub fn is_attribute(triple: &Triple, markers: &AttributeMarkers) -> bool {
    markers.matches(&triple.predicate) || looks_like_literal(&triple.object)
}

/// Stable partition of `triples` into `(relations, attributes)`.
pub fn separate(triples: Vec<Triple>, markers: &AttributeMarkers) -> (Vec<Triple>, Vec<Triple>) {
    let (attributes, relations): (Vec<_>, Vec<_>) = triples
        .into_iter()
        .partition(|triple| is_attribute(triple, markers));
    (relations, attributes)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeparationSummary {
    pub relations: usize,
    pub attributes: usize,
}

/// Read triples from `src` and write them to `rel_dst` and `attr_dst`.
///
/// Lines of `src` with less than 3 fields are dropped.
pub fn separate_triples(
    src: &Path,
    rel_dst: &Path,
    attr_dst: &Path,
    markers: &AttributeMarkers,
) -> Result<SeparationSummary, Error> {
    if !src.exists() {
        return Err(Error::MissingInput(src.to_path_buf()));
    }

    info!("separating relations and attributes from {:?}", src);
    debug!("attribute markers: {:?}", markers.as_slice());
    let triples = read_triples(src)?;
    let (relations, attributes) = separate(triples, markers);

    debug!("writing {} relation triples to {:?}", relations.len(), rel_dst);
    write_records(rel_dst, &relations)?;
    debug!(
        "writing {} attribute triples to {:?}",
        attributes.len(),
        attr_dst
    );
    write_records(attr_dst, &attributes)?;

    info!("separation done");
    Ok(SeparationSummary {
        relations: relations.len(),
        attributes: attributes.len(),
    })
}
