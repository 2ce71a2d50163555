//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use openea_prep::{processing::DatasetSize, validation::DEFAULT_SPLIT};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "openea-prep",
    about = "OpenEA dataset preparation and validation tool."
)]
/// Holds every command that is callable by the `openea-prep` command.
pub enum OpenEAPrep {
    #[structopt(about = "Convert a N-Triples file to OpenEA tab separated triples")]
    Convert(Convert),
    #[structopt(about = "Split entity alignments into train/valid/test")]
    Split(Split),
    #[structopt(about = "Separate triples into relations and attributes")]
    Separate(Separate),
    #[structopt(about = "Validate an OpenEA dataset directory")]
    Validate(Validate),
    #[structopt(about = "Create a sample training config file for a dataset")]
    CreateConfig(CreateConfig),
}

#[derive(Debug, StructOpt)]
pub struct Convert {
    #[structopt(parse(from_os_str), help = "N-Triples file")]
    pub src: PathBuf,
    #[structopt(
        parse(from_os_str),
        short = "o",
        long = "output",
        help = "output triple file (e.g. rel_triples_1)"
    )]
    pub dst: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
/// Split command and parameters.
///
/// ```sh
/// openea-prep-split 0.1.0
/// Split entity alignments into train/valid/test
///
/// USAGE:
///     openea-prep split [OPTIONS] <src>
///
/// OPTIONS:
///         --output-dir <dst>             output directory for splits [default: 721_5fold/1]
///         --shuffle <seed>               shuffle pairs with this seed before splitting
///         --train-ratio <train-ratio>    training set ratio [default: 0.2]
///         --valid-ratio <valid-ratio>    validation set ratio [default: 0.1]
///
/// ARGS:
///     <src>    alignment file (one tab separated pair per line)
/// ```
pub struct Split {
    #[structopt(
        parse(from_os_str),
        help = "alignment file (one tab separated pair per line)"
    )]
    pub src: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "output-dir",
        help = "output directory for splits",
        default_value = DEFAULT_SPLIT
    )]
    pub dst: PathBuf,
    #[structopt(long = "train-ratio", help = "training set ratio", default_value = "0.2")]
    pub train_ratio: f64,
    #[structopt(long = "valid-ratio", help = "validation set ratio", default_value = "0.1")]
    pub valid_ratio: f64,
    #[structopt(
        long = "shuffle",
        help = "shuffle pairs with this seed before splitting. Input order is kept otherwise."
    )]
    pub seed: Option<u64>,
}

#[derive(Debug, StructOpt)]
pub struct Separate {
    #[structopt(parse(from_os_str), help = "tab separated triple file")]
    pub src: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "rel-output",
        help = "output file for relation triples"
    )]
    pub rel_dst: Option<PathBuf>,
    #[structopt(
        parse(from_os_str),
        long = "attr-output",
        help = "output file for attribute triples"
    )]
    pub attr_dst: Option<PathBuf>,
    #[structopt(
        long = "marker",
        number_of_values = 1,
        help = "predicate substring denoting an attribute. Repeatable, replaces the default list."
    )]
    pub markers: Vec<String>,
}

#[derive(Debug, StructOpt)]
/// Validate command and parameters.
///
/// Exits with a non-zero status when validation fails.
pub struct Validate {
    #[structopt(parse(from_os_str), help = "dataset root directory")]
    pub dataset: PathBuf,
    #[structopt(help = "split sub-directory", default_value = DEFAULT_SPLIT)]
    pub split_name: String,
    #[structopt(
        long = "sample-size",
        help = "number of leading lines whose format is checked",
        default_value = "10"
    )]
    pub sample_size: usize,
    #[structopt(
        long = "full-scan",
        help = "check the format of every line (overrides --sample-size)"
    )]
    pub full_scan: bool,
    #[structopt(long = "json", help = "print the report as JSON")]
    pub json: bool,
}

#[derive(Debug, StructOpt)]
pub struct CreateConfig {
    #[structopt(help = "dataset name (e.g. D_W_15K_V1)")]
    pub dataset: String,
    #[structopt(long = "method", help = "embedding method", default_value = "MTransE")]
    pub method: String,
    #[structopt(
        long = "size",
        help = "dataset size",
        default_value = "15K",
        possible_values = &DatasetSize::VARIANTS
    )]
    pub size: DatasetSize,
    #[structopt(
        parse(from_os_str),
        long = "output-dir",
        help = "where to write the config file",
        default_value = "."
    )]
    pub dst: PathBuf,
}
