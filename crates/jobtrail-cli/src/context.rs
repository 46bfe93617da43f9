use std::path::{Path, PathBuf};

pub const TABULAR_FILE: &str = "applications.csv";
pub const RELATIONAL_FILE: &str = "applications.db";

/// Where the two physical stores live for this invocation.
pub struct StorePaths {
    pub tabular: PathBuf,
    pub relational: PathBuf,
}

impl StorePaths {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            tabular: data_dir.join(TABULAR_FILE),
            relational: data_dir.join(RELATIONAL_FILE),
        }
    }
}
