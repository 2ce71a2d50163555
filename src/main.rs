//! # openea-prep
//!
//! Preparation and validation of OpenEA entity alignment datasets.
//!
//! ```sh
//! openea-prep 0.1.0
//! OpenEA dataset preparation and validation tool.
//!
//! USAGE:
//!     openea-prep <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     convert          Convert a N-Triples file to OpenEA tab separated triples
//!     create-config    Create a sample training config file for a dataset
//!     help             Prints this message or the help of the given subcommand(s)
//!     separate         Separate triples into relations and attributes
//!     split            Split entity alignments into train/valid/test
//!     validate         Validate an OpenEA dataset directory
//! ```
//!
//! Logging is controlled with `RUST_LOG` (e.g. `RUST_LOG=info`).
use openea_prep::{
    error::Error,
    processing::{self, AttributeMarkers, SplitRatios},
    validation::Validator,
};
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::OpenEAPrep::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::OpenEAPrep::Convert(c) => {
            let dst = match c.dst {
                Some(dst) => dst,
                None => {
                    eprintln!("Error: --output required for conversion");
                    return Ok(());
                }
            };
            let summary = processing::convert_ntriples(&c.src, &dst)?;
            println!("Conversion complete: {}", dst.display());
            println!("  Converted: {}", summary.converted);
            if summary.skipped > 0 {
                println!("  Skipped (malformed): {}", summary.skipped);
            }
        }

        cli::OpenEAPrep::Split(s) => {
            let ratios = SplitRatios::new(s.train_ratio, s.valid_ratio)?;
            if ratios.train() + ratios.valid() > 1.0 {
                warn!("train and valid ratios sum above 1, test set will be empty");
            }
            let summary = processing::split_alignments(&s.src, &s.dst, &ratios, s.seed)?;
            println!("Split complete: {}", s.dst.display());
            println!("  Train: {} ({:.0}%)", summary.train, ratios.train() * 100.0);
            println!("  Valid: {} ({:.0}%)", summary.valid, ratios.valid() * 100.0);
            println!("  Test: {} ({:.0}%)", summary.test, ratios.test() * 100.0);
        }

        cli::OpenEAPrep::Separate(s) => {
            let (rel_dst, attr_dst) = match (s.rel_dst, s.attr_dst) {
                (Some(r), Some(a)) => (r, a),
                _ => {
                    eprintln!("Error: --rel-output and --attr-output required");
                    return Ok(());
                }
            };
            let markers = if s.markers.is_empty() {
                AttributeMarkers::default()
            } else {
                AttributeMarkers::new(s.markers)
            };
            let summary = processing::separate_triples(&s.src, &rel_dst, &attr_dst, &markers)?;
            println!("Separation complete:");
            println!("  Relations: {}", summary.relations);
            println!("  Attributes: {}", summary.attributes);
        }

        cli::OpenEAPrep::Validate(v) => {
            if !v.dataset.exists() {
                eprintln!(
                    "Error: Dataset path '{}' does not exist!",
                    v.dataset.display()
                );
                std::process::exit(1);
            }
            let validator = if v.full_scan {
                Validator::full_scan()
            } else {
                Validator::new(Some(v.sample_size))
            };
            let report = validator.validate(&v.dataset, &v.split_name);
            if v.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report);
            }
            if !report.passed() {
                std::process::exit(1);
            }
        }

        cli::OpenEAPrep::CreateConfig(c) => {
            let path = processing::create_config(&c.dataset, &c.method, c.size, &c.dst)?;
            println!("Created config file: {}", path.display());
        }
    };
    Ok(())
}
