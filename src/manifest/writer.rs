use anyhow::{Context, Result};
use log::{debug, warn};
use std::path::{Path, PathBuf};

use super::ReleaseDescriptor;
use crate::runtime::Runtime;

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

/// Write the manifest to `path`, replacing any previous content.
///
/// The JSON is written next to the target first and then renamed over it.
#[tracing::instrument(skip(runtime, descriptor))]
pub fn write_manifest<R: Runtime>(
    runtime: &R,
    descriptor: &ReleaseDescriptor,
    path: &Path,
) -> Result<()> {
    let json = descriptor.to_json()?;

    if runtime.exists(path) {
        debug!("Replacing existing manifest at {:?}", path);
    }

    let tmp = tmp_path(path);
    runtime
        .write(&tmp, json.as_bytes())
        .with_context(|| format!("Failed to write manifest to {:?}", path))?;

    if let Err(e) = runtime.rename(&tmp, path) {
        if let Err(cleanup) = runtime.remove_file(&tmp) {
            warn!("Failed to remove temporary file {:?}: {}", tmp, cleanup);
        }
        return Err(e.context(format!("Failed to write manifest to {:?}", path)));
    }

    debug!("Wrote {} bytes to {:?}", json.len(), path);
    Ok(())
}
