//! # openea-prep
//!
//! Preparation and validation of knowledge graph datasets following the OpenEA on-disk layout.
//!
//! This crate can be used both as a command line tool and as a library:
//!
//! - [processing] converts N-Triples, separates relation from attribute triples,
//!   splits alignment links and generates sample training configurations,
//! - [validation] checks a dataset directory and returns a [validation::ValidationReport].
//!
//! ```no_run
//! use std::path::Path;
//! use openea_prep::validation;
//!
//! let report = validation::validate(Path::new("datasets/D_W_15K_V1"), validation::DEFAULT_SPLIT);
//! println!("{}", report);
//! assert!(report.passed());
//! ```
pub mod error;
pub mod io;
pub mod processing;
pub mod types;
pub mod validation;
