/*! splitting

Offline alignment splitting.

Alignment pairs are split **positionally**: the first `floor(total * train)` pairs go to the training set,
the next `floor(total * valid)` to the validation set and whatever remains to the test set.
Ratios do not have to sum to 1, and when they sum to more than 1 the test set is simply empty.

Input order is kept, and nothing is shuffled unless a seed is explicitly provided.
!*/
use std::path::Path;

use log::{debug, info};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use serde::Serialize;

use crate::{
    error::Error,
    io::{reader::read_pairs, TsvRecord, TsvWriter},
    types::AlignmentPair,
};

pub const TRAIN_LINKS: &str = "train_links";
pub const VALID_LINKS: &str = "valid_links";
pub const TEST_LINKS: &str = "test_links";

/// Training and validation ratios, both within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitRatios {
    train: f64,
    valid: f64,
}

impl SplitRatios {
    pub fn new(train: f64, valid: f64) -> Result<Self, Error> {
        for (name, value) in [("train ratio", train), ("valid ratio", valid)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidRatio { name, value });
            }
        }
        Ok(Self { train, valid })
    }

    pub fn train(&self) -> f64 {
        self.train
    }

    pub fn valid(&self) -> f64 {
        self.valid
    }

    /// What is left for the test set. Never negative.
    pub fn test(&self) -> f64 {
        (1.0 - self.train - self.valid).max(0.0)
    }
}

impl Default for SplitRatios {
    fn default() -> Self {
        Self {
            train: 0.2,
            valid: 0.1,
        }
    }
}

/// Three contiguous, ordered and disjoint views over the same sequence.
#[derive(Debug, PartialEq, Eq)]
pub struct Split<'a, T> {
    pub train: &'a [T],
    pub valid: &'a [T],
    pub test: &'a [T],
}

/// Slice `items` following `ratios`.
///
/// Bounds are clamped to the sequence length, so the concatenation of the three views is always `items`.
pub fn split_slice<'a, T>(items: &'a [T], ratios: &SplitRatios) -> Split<'a, T> {
    let total = items.len();
    let train_size = (total as f64 * ratios.train).floor() as usize;
    let valid_size = (total as f64 * ratios.valid).floor() as usize;

    let train_end = train_size.min(total);
    let valid_end = train_end.saturating_add(valid_size).min(total);

    Split {
        train: &items[..train_end],
        valid: &items[train_end..valid_end],
        test: &items[valid_end..],
    }
}

/// Shuffle `items` in place. The same `seed` always yields the same order.
pub fn shuffle<T>(items: &mut [T], seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    items.shuffle(&mut rng);
}

/// Number of pairs written in each split file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SplitSummary {
    pub train: usize,
    pub valid: usize,
    pub test: usize,
}

impl SplitSummary {
    pub fn total(&self) -> usize {
        self.train + self.valid + self.test
    }
}

fn write_links(dst: &Path, filename: &str, pairs: &[AlignmentPair]) -> Result<(), Error> {
    let path = dst.join(filename);
    debug!("writing {} pairs to {:?}", pairs.len(), path);
    write_records(&path, pairs)
}

/// Write `records` in a new tab separated file at `path`.
pub(crate) fn write_records<R: TsvRecord>(path: &Path, records: &[R]) -> Result<(), Error> {
    let mut writer = TsvWriter::create(path)?;
    writer.write(records)?;
    writer.flush()
}

/// Split the alignment file at `src` into `dst/{train,valid,test}_links`.
///
/// `dst` is created (with its parents) if it does not exist yet.
/// When `seed` is set, pairs are shuffled with it before splitting.
pub fn split_alignments(
    src: &Path,
    dst: &Path,
    ratios: &SplitRatios,
    seed: Option<u64>,
) -> Result<SplitSummary, Error> {
    if !src.exists() {
        return Err(Error::MissingInput(src.to_path_buf()));
    }

    info!("splitting alignments from {:?}", src);
    let mut pairs = read_pairs(src)?;
    debug!("read {} pairs", pairs.len());

    if let Some(seed) = seed {
        info!("shuffling pairs with seed {}", seed);
        shuffle(&mut pairs, seed);
    }

    let split = split_slice(&pairs, ratios);

    std::fs::create_dir_all(dst)?;
    write_links(dst, TRAIN_LINKS, split.train)?;
    write_links(dst, VALID_LINKS, split.valid)?;
    write_links(dst, TEST_LINKS, split.test)?;

    info!("splitting done");
    Ok(SplitSummary {
        train: split.train.len(),
        valid: split.valid.len(),
        test: split.test.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratios(train: f64, valid: f64) -> SplitRatios {
        SplitRatios::new(train, valid).unwrap()
    }

    #[test]
    fn test_sizes_and_order() {
        let grid = [0.0, 0.1, 0.2, 0.25, 0.3, 0.5, 0.7, 0.9, 1.0];
        for total in 0..60usize {
            let items: Vec<usize> = (0..total).collect();
            for &train in &grid {
                for &valid in grid.iter().filter(|v| train + **v <= 1.0) {
                    let s = split_slice(&items, &ratios(train, valid));
                    let train_size = (total as f64 * train).floor() as usize;
                    let valid_size = (total as f64 * valid).floor() as usize;

                    assert_eq!(s.train.len(), train_size);
                    assert_eq!(s.valid.len(), valid_size);
                    assert_eq!(s.test.len(), total - train_size - valid_size);

                    let joined: Vec<usize> = s
                        .train
                        .iter()
                        .chain(s.valid)
                        .chain(s.test)
                        .copied()
                        .collect();
                    assert_eq!(joined, items);
                }
            }
        }
    }

    #[test]
    fn test_empty() {
        let items: Vec<u8> = Vec::new();
        let s = split_slice(&items, &SplitRatios::default());
        assert!(s.train.is_empty());
        assert!(s.valid.is_empty());
        assert!(s.test.is_empty());
    }

    #[test]
    fn test_ratios_over_one() {
        let items: Vec<usize> = (0..10).collect();
        let s = split_slice(&items, &ratios(0.8, 0.5));
        assert_eq!(s.train, &items[..8]);
        assert_eq!(s.valid, &items[8..]);
        assert!(s.test.is_empty());

        let s = split_slice(&items, &ratios(1.0, 1.0));
        assert_eq!(s.train.len(), 10);
        assert!(s.valid.is_empty());
        assert!(s.test.is_empty());
    }

    #[test]
    fn test_default_ratios() {
        let items: Vec<usize> = (0..100).collect();
        let s = split_slice(&items, &SplitRatios::default());
        assert_eq!(s.train, &items[..20]);
        assert_eq!(s.valid, &items[20..30]);
        assert_eq!(s.test, &items[30..]);
    }

    #[test]
    fn test_invalid_ratios() {
        assert!(matches!(
            SplitRatios::new(-0.1, 0.1),
            Err(Error::InvalidRatio { name: "train ratio", .. })
        ));
        assert!(matches!(
            SplitRatios::new(0.1, 1.5),
            Err(Error::InvalidRatio { name: "valid ratio", .. })
        ));
        assert!(SplitRatios::new(f64::NAN, 0.1).is_err());
    }

    #[test]
    fn test_test_ratio() {
        assert!((ratios(0.7, 0.1).test() - 0.2).abs() < 1e-9);
        assert_eq!(ratios(0.7, 0.6).test(), 0.0);
    }

    #[test]
    fn test_shuffle_seeded() {
        let mut a: Vec<usize> = (0..50).collect();
        let mut b = a.clone();
        shuffle(&mut a, 42);
        shuffle(&mut b, 42);
        assert_eq!(a, b);

        let mut sorted = a.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }
}
