/*! Dataset processing

One-shot transforms that produce OpenEA dataset files:

- [convert]: N-Triples to tab separated triples,
- [separate]: relation/attribute triple separation,
- [split]: train/valid/test alignment splitting,
- [config]: sample training configuration generation.
!*/
pub mod config;
pub mod convert;
pub mod separate;
pub mod split;

pub use config::{create_config, DatasetSize};
pub use convert::convert_ntriples;
pub use separate::{separate_triples, AttributeMarkers};
pub use split::{split_alignments, SplitRatios};
