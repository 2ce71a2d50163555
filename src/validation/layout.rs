//! OpenEA dataset directory layout.
use std::{
    fmt,
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::processing::split::{TEST_LINKS, TRAIN_LINKS, VALID_LINKS};

use super::format::FieldRule;

/// Split sub-directory used when none is provided.
pub const DEFAULT_SPLIT: &str = "721_5fold/1";

/// Every file an OpenEA dataset may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum DatasetFile {
    #[serde(rename = "rel_triples_1")]
    RelTriples1,
    #[serde(rename = "rel_triples_2")]
    RelTriples2,
    #[serde(rename = "attr_triples_1")]
    AttrTriples1,
    #[serde(rename = "attr_triples_2")]
    AttrTriples2,
    #[serde(rename = "train_links")]
    TrainLinks,
    #[serde(rename = "valid_links")]
    ValidLinks,
    #[serde(rename = "test_links")]
    TestLinks,
}

impl DatasetFile {
    pub const ALL: [DatasetFile; 7] = [
        DatasetFile::RelTriples1,
        DatasetFile::RelTriples2,
        DatasetFile::AttrTriples1,
        DatasetFile::AttrTriples2,
        DatasetFile::TrainLinks,
        DatasetFile::ValidLinks,
        DatasetFile::TestLinks,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            DatasetFile::RelTriples1 => "rel_triples_1",
            DatasetFile::RelTriples2 => "rel_triples_2",
            DatasetFile::AttrTriples1 => "attr_triples_1",
            DatasetFile::AttrTriples2 => "attr_triples_2",
            DatasetFile::TrainLinks => TRAIN_LINKS,
            DatasetFile::ValidLinks => VALID_LINKS,
            DatasetFile::TestLinks => TEST_LINKS,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DatasetFile::RelTriples1 => "Relation triples KG1",
            DatasetFile::RelTriples2 => "Relation triples KG2",
            DatasetFile::AttrTriples1 => "Attribute triples KG1",
            DatasetFile::AttrTriples2 => "Attribute triples KG2",
            DatasetFile::TrainLinks => "Training links",
            DatasetFile::ValidLinks => "Validation links",
            DatasetFile::TestLinks => "Test links",
        }
    }

    /// Attribute triples are the only optional files.
    pub fn is_required(&self) -> bool {
        !matches!(self, DatasetFile::AttrTriples1 | DatasetFile::AttrTriples2)
    }

    /// true for the files living in the split sub-directory.
    pub fn is_links(&self) -> bool {
        matches!(
            self,
            DatasetFile::TrainLinks | DatasetFile::ValidLinks | DatasetFile::TestLinks
        )
    }

    /// Expected number of tab separated fields on each line.
    pub fn field_rule(&self) -> FieldRule {
        if self.is_links() {
            FieldRule::Exactly(2)
        } else {
            FieldRule::AtLeast(3)
        }
    }
}

impl fmt::Display for DatasetFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Resolves [DatasetFile]s against a dataset root and a split name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetLayout {
    root: PathBuf,
    split_name: String,
}

impl DatasetLayout {
    pub fn new(root: &Path, split_name: &str) -> Self {
        Self {
            root: root.to_path_buf(),
            split_name: split_name.to_string(),
        }
    }

    pub fn split_dir(&self) -> PathBuf {
        self.root.join(&self.split_name)
    }

    pub fn path(&self, file: DatasetFile) -> PathBuf {
        if file.is_links() {
            self.split_dir().join(file.file_name())
        } else {
            self.root.join(file.file_name())
        }
    }
}
