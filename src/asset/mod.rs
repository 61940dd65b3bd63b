//! Release asset validation.
//!
//! Only `.zip` archives can be published to the updater, and a release must
//! carry at least one of them. A single bad entry rejects the whole batch.

use std::path::{Path, PathBuf};

/// The only extension accepted for release assets (compared case-sensitively).
pub const ASSET_EXTENSION: &str = "zip";

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum AssetError {
    /// The assets directory contained no entries.
    #[error("No assets found in given directory")]
    NoAssets,

    /// One or more entries are not `.zip` archives.
    #[error("Only 'zip' assets are supported, found: {}", .0.join(", "))]
    UnsupportedType(Vec<String>),
}

/// Returns the base name of an asset path as it appears in the manifest.
pub fn asset_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

fn is_supported(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == ASSET_EXTENSION)
}

#[tracing::instrument]
pub fn validate_assets(paths: &[PathBuf]) -> Result<(), AssetError> {
    if paths.is_empty() {
        return Err(AssetError::NoAssets);
    }

    let rejected: Vec<String> = paths
        .iter()
        .filter(|p| !is_supported(p))
        .map(|p| asset_name(p))
        .collect();

    if !rejected.is_empty() {
        return Err(AssetError::UnsupportedType(rejected));
    }

    Ok(())
}
