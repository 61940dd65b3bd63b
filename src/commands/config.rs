use std::path::PathBuf;

use crate::manifest::DEFAULT_MANIFEST_PATH;

/// Resolved inputs of a manifest generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory whose every entry is treated as a release asset
    pub assets_dir: PathBuf,
    /// Tag name, used verbatim in the manifest and the download URLs
    pub version: String,
    /// Repository in `owner/repo` form, used verbatim in the download URLs
    pub repository: String,
    /// Where the manifest is written
    pub output: PathBuf,
}

impl Config {
    pub fn new(
        assets_dir: PathBuf,
        version: String,
        repository: String,
        output: Option<PathBuf>,
    ) -> Self {
        Self {
            assets_dir,
            version,
            repository,
            output: output.unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST_PATH)),
        }
    }
}
