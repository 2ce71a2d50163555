/*! Dataset validation

Checks that a directory follows the OpenEA layout:

```text
<dataset_root>/
  rel_triples_1            (required)
  rel_triples_2            (required)
  attr_triples_1           (optional)
  attr_triples_2           (optional)
  <split_name>/
    train_links            (required)
    valid_links            (required)
    test_links             (required)
```

Validation goes through file existence, format checks (see [format]), entity coverage (see [coverage]) and statistics,
accumulating results in a [ValidationReport] instead of stopping at the first problem.
!*/
pub mod coverage;
pub mod format;
pub mod layout;
pub mod report;
mod validator;

use std::path::Path;

pub use format::{FieldRule, FormatOutcome, DEFAULT_SAMPLE_SIZE};
pub use layout::{DatasetFile, DatasetLayout, DEFAULT_SPLIT};
pub use report::{Statistics, ValidationReport};
pub use validator::Validator;

/// Validate the dataset at `root` with the default [Validator].
pub fn validate(root: &Path, split_name: &str) -> ValidationReport {
    Validator::default().validate(root, split_name)
}
