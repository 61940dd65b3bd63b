//! Release manifest consumed by the plugin auto-updater.
//!
//! The manifest mirrors the subset of the GitHub release payload the updater
//! reads: a tag name and, for every asset, its name and download URL.

mod writer;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::asset::asset_name;

pub use writer::write_manifest;

/// Default manifest file name, relative to the working directory.
pub const DEFAULT_MANIFEST_PATH: &str = "current_version.json";

const GITHUB_URL: &str = "https://github.com";

/// A downloadable asset of a release
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct AssetEntry {
    pub browser_download_url: String,
    pub name: String,
}

/// Version descriptor written for a single release
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct ReleaseDescriptor {
    pub tag_name: String,
    pub assets: Vec<AssetEntry>,
}

/// Builds the public download URL of a release asset.
///
/// `repository` is used verbatim and is expected in `owner/repo` form.
pub fn download_url(repository: &str, tag_name: &str, name: &str) -> String {
    format!(
        "{}/{}/releases/download/{}/{}",
        GITHUB_URL, repository, tag_name, name
    )
}

impl ReleaseDescriptor {
    /// Builds a descriptor with one entry per asset, in the given order.
    ///
    /// The asset paths are expected to have passed
    /// [`validate_assets`](crate::asset::validate_assets).
    pub fn build(version: &str, assets: &[PathBuf], repository: &str) -> Self {
        ReleaseDescriptor {
            tag_name: version.to_string(),
            assets: assets
                .iter()
                .map(|path| {
                    let name = asset_name(path);
                    AssetEntry {
                        browser_download_url: download_url(repository, version, &name),
                        name,
                    }
                })
                .collect(),
        }
    }

    /// Compact JSON form of the manifest.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
