/*! Validation report

[ValidationReport] aggregates the outcome of every check, along with dataset statistics.
It is built once by [super::Validator] and rendered by its [std::fmt::Display] implementation,
or serialized to JSON.
!*/
use std::{fmt, path::PathBuf};

use itertools::Itertools;
use serde::Serialize;

use super::{
    coverage::Coverage,
    format::{FieldRule, FormatOutcome},
    layout::DatasetFile,
};

const RULE: &str = "============================================================";
const SUBRULE: &str = "----------------------------------------";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileCheck {
    pub file: DatasetFile,
    pub path: PathBuf,
    pub present: bool,
}

impl FileCheck {
    /// Only a missing required file fails.
    pub fn passed(&self) -> bool {
        self.present || !self.file.is_required()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatCheck {
    pub file: DatasetFile,
    pub rule: FieldRule,
    pub outcome: FormatOutcome,
}

impl FormatCheck {
    /// Empty files are acceptable for triples, not for links.
    pub fn passed(&self) -> bool {
        match self.outcome {
            FormatOutcome::Valid { .. } => true,
            FormatOutcome::Empty => !self.file.is_links(),
            FormatOutcome::Malformed { .. } | FormatOutcome::Unreadable { .. } => false,
        }
    }
}

/// Dataset statistics, computed from actual file contents.
///
/// Pair counts are numbers of distinct KG1 entities, so that a KG1 entity linked twice counts once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Statistics {
    pub kg1_entities: usize,
    pub kg2_entities: usize,
    pub train_pairs: usize,
    pub valid_pairs: usize,
    pub test_pairs: usize,
    /// Distinct KG1 entities over all splits.
    pub total_pairs: usize,
}

impl Statistics {
    pub fn total_entities(&self) -> usize {
        self.kg1_entities + self.kg2_entities
    }

    /// Observed train/valid/test percentages. [None] when there is no pair at all.
    pub fn percentages(&self) -> Option<[f64; 3]> {
        if self.total_pairs == 0 {
            return None;
        }
        let total = self.total_pairs as f64;
        Some([
            self.train_pairs as f64 / total * 100.0,
            self.valid_pairs as f64 / total * 100.0,
            self.test_pairs as f64 / total * 100.0,
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub dataset: PathBuf,
    pub split_name: String,
    pub files: Vec<FileCheck>,
    pub formats: Vec<FormatCheck>,
    pub coverage: Vec<Coverage>,
    pub statistics: Statistics,
    passed: bool,
}

impl ValidationReport {
    pub fn new(
        dataset: PathBuf,
        split_name: String,
        files: Vec<FileCheck>,
        formats: Vec<FormatCheck>,
        coverage: Vec<Coverage>,
        statistics: Statistics,
    ) -> Self {
        let passed =
            files.iter().all(FileCheck::passed) && formats.iter().all(FormatCheck::passed);
        Self {
            dataset,
            split_name,
            files,
            formats,
            coverage,
            statistics,
            passed,
        }
    }

    /// Overall verdict: mandatory files exist and every present file is well formed.
    ///
    /// Coverage gaps and missing attribute triples are advisory and do not count.
    pub fn passed(&self) -> bool {
        self.passed
    }

    pub fn file(&self, file: DatasetFile) -> Option<&FileCheck> {
        self.files.iter().find(|c| c.file == file)
    }

    pub fn format(&self, file: DatasetFile) -> Option<&FormatCheck> {
        self.formats.iter().find(|c| c.file == file)
    }

    /// Non-fatal findings: absent optional files, empty triple files and coverage gaps.
    pub fn warnings(&self) -> Vec<String> {
        let absent = self
            .files
            .iter()
            .filter(|c| !c.present && !c.file.is_required())
            .map(|c| format!("{} not provided (optional)", c.file.description()));
        let empty = self
            .formats
            .iter()
            .filter(|c| c.outcome == FormatOutcome::Empty && c.passed())
            .map(|c| format!("{} is empty", c.file));
        let gaps = self.coverage.iter().filter(|c| !c.is_complete()).map(|c| {
            format!(
                "{} entities in links not found in KG{} triples",
                c.missing.len(),
                c.kg
            )
        });
        absent.chain(empty).chain(gaps).collect()
    }

    fn fmt_files(&self, f: &mut fmt::Formatter<'_>, links: bool) -> fmt::Result {
        for check in self.files.iter().filter(|c| c.file.is_links() == links) {
            match (check.present, check.file.is_required()) {
                (true, _) => writeln!(f, "✓ Found: {}", check.file.description())?,
                (false, true) => writeln!(
                    f,
                    "✗ Missing: {} at {}",
                    check.file.description(),
                    check.path.display()
                )?,
                (false, false) => writeln!(
                    f,
                    "ℹ {}: Not provided (optional)",
                    check.file.description()
                )?,
            }
        }
        Ok(())
    }

    fn fmt_format(check: &FormatCheck, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = check.file;
        match &check.outcome {
            FormatOutcome::Valid { lines, inspected } => {
                let scope = if inspected < lines {
                    format!("first {inspected} lines checked")
                } else {
                    "all lines checked".to_string()
                };
                writeln!(f, "✓ {name}: {lines} lines, valid format ({scope})")
            }
            FormatOutcome::Empty if check.passed() => writeln!(f, "⚠ Warning: {name} is empty"),
            FormatOutcome::Empty => writeln!(f, "✗ {name} is empty"),
            FormatOutcome::Malformed {
                line_number,
                content,
                found,
            } => {
                writeln!(
                    f,
                    "✗ {name} line {line_number}: Expected {} tab-separated values, got {found}",
                    check.rule
                )?;
                writeln!(f, "   Line content: {content}")
            }
            FormatOutcome::Unreadable { reason } => writeln!(f, "✗ Error reading {name}: {reason}"),
        }
    }

    fn fmt_coverage(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.coverage {
            writeln!(f, "✓ KG{} has {} unique entities", c.kg, c.nb_entities)?;
        }
        for c in &self.coverage {
            if c.is_complete() {
                writeln!(f, "✓ All linked entities exist in KG{} triples", c.kg)?;
                continue;
            }
            writeln!(
                f,
                "⚠ Warning: {} entities in links not found in KG{} triples",
                c.missing.len(),
                c.kg
            )?;
            if let Some(listed) = c.listed() {
                writeln!(f, "   Examples: {}", listed.iter().join(", "))?;
            }
        }
        Ok(())
    }

    fn fmt_statistics(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.statistics;
        writeln!(f, "Total entities: {}", s.total_entities())?;
        writeln!(f, "Training pairs: {}", s.train_pairs)?;
        writeln!(f, "Validation pairs: {}", s.valid_pairs)?;
        writeln!(f, "Test pairs: {}", s.test_pairs)?;
        writeln!(f, "Total alignment: {}", s.total_pairs)?;
        match s.percentages() {
            Some(p) => writeln!(
                f,
                "Split ratio: {}",
                p.iter().map(|r| format!("{r:.1}%")).join(" / ")
            ),
            None => writeln!(f, "Split ratio: n/a (no alignment pairs)"),
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "Validating OpenEA Dataset: {}", self.dataset.display())?;
        writeln!(f, "{RULE}")?;
        writeln!(f)?;

        writeln!(f, "1. Checking main data files...")?;
        writeln!(f, "{SUBRULE}")?;
        self.fmt_files(f, false)?;
        writeln!(f)?;

        writeln!(f, "2. Checking split files ({})...", self.split_name)?;
        writeln!(f, "{SUBRULE}")?;
        self.fmt_files(f, true)?;
        writeln!(f)?;

        writeln!(f, "3. Validating file formats...")?;
        writeln!(f, "{SUBRULE}")?;
        for check in &self.formats {
            Self::fmt_format(check, f)?;
        }
        writeln!(f)?;

        writeln!(f, "4. Checking entity coverage...")?;
        writeln!(f, "{SUBRULE}")?;
        self.fmt_coverage(f)?;
        writeln!(f)?;

        writeln!(f, "5. Dataset Statistics")?;
        writeln!(f, "{SUBRULE}")?;
        self.fmt_statistics(f)?;
        writeln!(f)?;

        let warnings = self.warnings();
        if !warnings.is_empty() {
            writeln!(f, "{} warning(s):", warnings.len())?;
            for warning in &warnings {
                writeln!(f, "  - {warning}")?;
            }
            writeln!(f)?;
        }

        writeln!(f, "{RULE}")?;
        if self.passed {
            writeln!(f, "Dataset validation PASSED")?;
        } else {
            writeln!(f, "Dataset validation FAILED")?;
            writeln!(f, "Please fix the issues above before using the dataset.")?;
        }
        write!(f, "{RULE}")
    }
}
