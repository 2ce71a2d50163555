/*! OpenEA training configuration

Generates a sample `<method>_args_<dataset>.json` file, to be tweaked before training.
!*/
use std::{fmt, fs::File, io::Write, path::Path, path::PathBuf, str::FromStr};

use log::info;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::error::Error;

/// Dataset size class, which drives the batch size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DatasetSize {
    #[default]
    K15,
    K100,
}

impl DatasetSize {
    pub const VARIANTS: [&'static str; 2] = ["15K", "100K"];

    pub fn batch_size(&self) -> usize {
        match self {
            DatasetSize::K15 => 5000,
            DatasetSize::K100 => 20000,
        }
    }
}

impl FromStr for DatasetSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "15K" => Ok(Self::K15),
            "100K" => Ok(Self::K100),
            other => Err(Error::Custom(format!(
                "unknown dataset size {other:?}, expected one of {:?}",
                Self::VARIANTS
            ))),
        }
    }
}

impl fmt::Display for DatasetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSize::K15 => write!(f, "15K"),
            DatasetSize::K100 => write!(f, "100K"),
        }
    }
}

/// Training arguments, as read by OpenEA.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingConfig {
    pub training_data: String,
    pub output: String,
    pub dataset_division: String,

    pub embedding_module: String,
    pub alignment_module: String,
    pub search_module: String,

    pub dim: u32,
    pub init: String,
    pub ent_l2_norm: bool,
    pub rel_l2_norm: bool,
    pub loss_norm: String,

    pub learning_rate: f64,
    pub optimizer: String,
    pub max_epoch: u32,
    pub batch_size: usize,

    pub eval_metric: String,
    pub eval_norm: bool,
    pub eval_threads_num: u32,
    pub test_threads_num: u32,
    pub ordered: bool,

    pub neg_triple_num: u32,
    pub truncated_epsilon: f64,
}

impl TrainingConfig {
    pub fn sample(method: &str, size: DatasetSize) -> Self {
        Self {
            training_data: "../../datasets/".to_string(),
            output: "../../output/results/".to_string(),
            dataset_division: "721_5fold/1/".to_string(),

            embedding_module: method.to_string(),
            alignment_module: "mapping".to_string(),
            search_module: "greedy".to_string(),

            dim: 100,
            init: "unit".to_string(),
            ent_l2_norm: true,
            rel_l2_norm: true,
            loss_norm: "L2".to_string(),

            learning_rate: 0.01,
            optimizer: "Adagrad".to_string(),
            max_epoch: 2000,
            batch_size: size.batch_size(),

            eval_metric: "inner".to_string(),
            eval_norm: true,
            eval_threads_num: 4,
            test_threads_num: 4,
            ordered: true,

            neg_triple_num: 1,
            truncated_epsilon: 0.98,
        }
    }
}

/// `mtranse_args_MY_DATASET.json` for method `MTransE` and dataset `MY_DATASET`.
pub fn config_filename(dataset_name: &str, method: &str) -> String {
    format!("{}_args_{}.json", method.to_lowercase(), dataset_name)
}

/// Write a sample configuration in `dst_dir` and return its path.
pub fn create_config(
    dataset_name: &str,
    method: &str,
    size: DatasetSize,
    dst_dir: &Path,
) -> Result<PathBuf, Error> {
    let config = TrainingConfig::sample(method, size);
    let path = dst_dir.join(config_filename(dataset_name, method));

    info!("writing {} ({}) config to {:?}", method, size, path);
    let mut file = File::create(&path)?;
    let mut ser =
        serde_json::Serializer::with_formatter(&mut file, PrettyFormatter::with_indent(b"    "));
    config.serialize(&mut ser)?;
    writeln!(file)?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_from_str() {
        assert_eq!("15K".parse::<DatasetSize>().unwrap(), DatasetSize::K15);
        assert_eq!("100K".parse::<DatasetSize>().unwrap(), DatasetSize::K100);
        assert!("15k".parse::<DatasetSize>().is_err());
    }

    #[test]
    fn test_filename() {
        assert_eq!(
            config_filename("D_W_15K_V1", "BootEA"),
            "bootea_args_D_W_15K_V1.json"
        );
    }

    #[test]
    fn test_create_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = create_config("MY_DATASET", "MTransE", DatasetSize::K100, dir.path()).unwrap();
        assert_eq!(path, dir.path().join("mtranse_args_MY_DATASET.json"));

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\n    \"embedding_module\": \"MTransE\""));

        let config: TrainingConfig = serde_json::from_str(&content).unwrap();
        assert_eq!(config.batch_size, 20000);
        assert_eq!(config, TrainingConfig::sample("MTransE", DatasetSize::K100));
    }
}
