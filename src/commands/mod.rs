use anyhow::{Context, Result};
use log::{debug, info};

use crate::{
    asset::validate_assets,
    manifest::{ReleaseDescriptor, write_manifest},
    runtime::Runtime,
};

pub mod config;

pub use config::Config;

/// Generate the release manifest described by `config`.
///
/// Every entry of the assets directory is validated before anything is
/// written, so a rejected batch leaves the output file untouched.
#[tracing::instrument(skip(runtime))]
pub fn generate<R: Runtime>(runtime: &R, config: &Config) -> Result<ReleaseDescriptor> {
    let assets = runtime
        .read_dir(&config.assets_dir)
        .with_context(|| format!("Failed to list assets in {:?}", config.assets_dir))?;
    debug!("Found {} entries in {:?}", assets.len(), config.assets_dir);

    validate_assets(&assets)
        .with_context(|| format!("Invalid assets in {:?}", config.assets_dir))?;

    let descriptor = ReleaseDescriptor::build(&config.version, &assets, &config.repository);
    write_manifest(runtime, &descriptor, &config.output)?;

    info!(
        "Wrote manifest for {} ({} assets) to {:?}",
        descriptor.tag_name,
        descriptor.assets.len(),
        config.output
    );
    Ok(descriptor)
}
