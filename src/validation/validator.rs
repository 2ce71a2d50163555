use std::{collections::HashMap, path::Path};

use log::{debug, info, warn};

use crate::io::reader::read_lines;

use super::{
    coverage::{triple_entities, Coverage, EntitySet, LinkedEntities},
    format::{check_lines, FormatOutcome, DEFAULT_SAMPLE_SIZE},
    layout::{DatasetFile, DatasetLayout},
    report::{FileCheck, FormatCheck, Statistics, ValidationReport},
};

/// Dataset validator.
///
/// Checks never abort the validation: every finding ends up in the returned [ValidationReport].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validator {
    sample_size: Option<usize>,
}

impl Default for Validator {
    fn default() -> Self {
        Self {
            sample_size: Some(DEFAULT_SAMPLE_SIZE),
        }
    }
}

impl Validator {
    /// `sample_size` is the number of leading lines whose format is checked. [None] checks every line.
    pub fn new(sample_size: Option<usize>) -> Self {
        Self { sample_size }
    }

    pub fn full_scan() -> Self {
        Self::new(None)
    }

    pub fn sample_size(&self) -> Option<usize> {
        self.sample_size
    }

    pub fn validate(&self, root: &Path, split_name: &str) -> ValidationReport {
        let layout = DatasetLayout::new(root, split_name);
        info!("validating {:?} (split {})", root, split_name);

        let files: Vec<FileCheck> = DatasetFile::ALL
            .iter()
            .map(|&file| {
                let path = layout.path(file);
                let present = path.exists();
                debug!("{:?}: present={}", path, present);
                FileCheck {
                    file,
                    path,
                    present,
                }
            })
            .collect();

        // each present file is read once, and its lines are used by every later check.
        let mut contents: HashMap<DatasetFile, Vec<String>> = HashMap::new();
        let mut formats = Vec::new();
        for check in files.iter().filter(|c| c.present) {
            let rule = check.file.field_rule();
            let outcome = match read_lines(&check.path) {
                Ok(lines) => {
                    let outcome = check_lines(&lines, rule, self.sample_size);
                    contents.insert(check.file, lines);
                    outcome
                }
                Err(e) => {
                    warn!("could not read {:?}: {}", check.path, e);
                    FormatOutcome::Unreadable {
                        reason: e.to_string(),
                    }
                }
            };
            formats.push(FormatCheck {
                file: check.file,
                rule,
                outcome,
            });
        }

        let lines_of = |file: DatasetFile| contents.get(&file).map_or(&[][..], Vec::as_slice);

        let kg1 = triple_entities(lines_of(DatasetFile::RelTriples1));
        let kg2 = triple_entities(lines_of(DatasetFile::RelTriples2));

        let train = LinkedEntities::from_lines(lines_of(DatasetFile::TrainLinks));
        let valid = LinkedEntities::from_lines(lines_of(DatasetFile::ValidLinks));
        let test = LinkedEntities::from_lines(lines_of(DatasetFile::TestLinks));
        let all = LinkedEntities::default()
            .union(&train)
            .union(&valid)
            .union(&test);

        let coverage = vec![
            Coverage::new(1, &kg1, &all.kg1),
            Coverage::new(2, &kg2, &all.kg2),
        ];
        for c in coverage.iter().filter(|c| !c.is_complete()) {
            warn!(
                "{} linked entities missing from KG{} triples",
                c.missing.len(),
                c.kg
            );
        }

        let statistics = statistics(&kg1, &kg2, [&train, &valid, &test], &all);

        let report = ValidationReport::new(
            root.to_path_buf(),
            split_name.to_string(),
            files,
            formats,
            coverage,
            statistics,
        );
        info!(
            "validation of {:?} {}",
            root,
            if report.passed() { "passed" } else { "failed" }
        );
        report
    }
}

fn statistics(
    kg1: &EntitySet,
    kg2: &EntitySet,
    [train, valid, test]: [&LinkedEntities; 3],
    all: &LinkedEntities,
) -> Statistics {
    Statistics {
        kg1_entities: kg1.len(),
        kg2_entities: kg2.len(),
        train_pairs: train.kg1.len(),
        valid_pairs: valid.kg1.len(),
        test_pairs: test.kg1.len(),
        total_pairs: all.kg1.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        assert_eq!(Validator::default().sample_size(), Some(10));
        assert_eq!(Validator::full_scan().sample_size(), None);
    }

    #[test_log::test]
    fn test_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        let report = Validator::default().validate(dir.path(), "721_5fold/1");

        assert!(!report.passed());
        assert!(report.formats.is_empty());
        assert!(report.files.iter().all(|c| !c.present));
        assert_eq!(report.statistics.total_pairs, 0);
        assert!(report.coverage.iter().all(Coverage::is_complete));
    }

    #[test]
    fn test_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        // a directory cannot be read as a file
        std::fs::create_dir(dir.path().join("rel_triples_1")).unwrap();

        let report = Validator::default().validate(dir.path(), "721_5fold/1");
        assert!(report.file(DatasetFile::RelTriples1).unwrap().present);
        assert!(matches!(
            report.format(DatasetFile::RelTriples1).unwrap().outcome,
            FormatOutcome::Unreadable { .. }
        ));
        assert!(!report.format(DatasetFile::RelTriples1).unwrap().passed());
        assert_eq!(report.statistics.kg1_entities, 0);
    }

    #[test]
    fn test_full_scan() {
        let dir = tempfile::tempdir().unwrap();
        let split = dir.path().join("s");
        std::fs::create_dir_all(&split).unwrap();

        let mut triples: String = (0..20).map(|i| format!("e{i}\tr\te{}\n", i + 1)).collect();
        triples.push_str("e20\tr\n");
        std::fs::write(dir.path().join("rel_triples_1"), &triples).unwrap();
        std::fs::write(dir.path().join("rel_triples_2"), &triples).unwrap();
        for f in ["train_links", "valid_links", "test_links"] {
            std::fs::write(split.join(f), "e1\te1\n").unwrap();
        }

        assert!(Validator::default().validate(dir.path(), "s").passed());

        let report = Validator::full_scan().validate(dir.path(), "s");
        assert!(!report.passed());
        assert!(matches!(
            report.format(DatasetFile::RelTriples1).unwrap().outcome,
            FormatOutcome::Malformed {
                line_number: 21,
                found: 2,
                ..
            }
        ));
    }
}
