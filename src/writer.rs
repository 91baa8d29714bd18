// WHY: Output persistence with an explicit completion token
// Translation may only start from a PersistedOutput, which exists only after a synced write

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, info};

/// Proof that normalized text has been fully written and synced to disk
#[derive(Debug)]
pub struct PersistedOutput {
    path: PathBuf,
    bytes_written: u64,
}

impl PersistedOutput {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Read back the persisted text
    pub async fn read_back(&self) -> Result<String> {
        tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read persisted output {}", self.path.display()))
    }
}

/// Overwrite `path` with `text`, returning once the data is flushed and synced
pub async fn write_output(path: &Path, text: &str) -> Result<PersistedOutput> {
    write_synced(path, text).await?;
    info!("Wrote {} bytes to {}", text.len(), path.display());

    Ok(PersistedOutput {
        path: path.to_path_buf(),
        bytes_written: text.len() as u64,
    })
}

/// Sibling file that `replace_output` writes before renaming over the target
pub fn staging_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_default());
    name.push(".tmp");
    path.with_file_name(name)
}

/// Replace persisted output with `text`
///
/// The new text is synced to a staging file and renamed over the target, so a
/// failed write leaves the previous contents intact.
pub async fn replace_output(persisted: &PersistedOutput, text: &str) -> Result<PersistedOutput> {
    let target = persisted.path();
    let staging = staging_path(target);

    if let Err(e) = write_synced(&staging, text).await {
        if let Err(cleanup) = tokio::fs::remove_file(&staging).await {
            debug!("Could not remove staging file {}: {}", staging.display(), cleanup);
        }
        return Err(e);
    }

    tokio::fs::rename(&staging, target)
        .await
        .with_context(|| format!("Failed to move {} over {}", staging.display(), target.display()))?;

    info!("Replaced {} with {} bytes", target.display(), text.len());

    Ok(PersistedOutput {
        path: target.to_path_buf(),
        bytes_written: text.len() as u64,
    })
}

async fn write_synced(path: &Path, text: &str) -> Result<()> {
    debug!("Writing {} bytes to {}", text.len(), path.display());

    let file = tokio::fs::File::create(path)
        .await
        .with_context(|| format!("Failed to create output file {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(text.as_bytes())
        .await
        .with_context(|| format!("Failed to write output file {}", path.display()))?;
    writer.flush().await?;
    writer
        .into_inner()
        .sync_all()
        .await
        .with_context(|| format!("Failed to sync output file {}", path.display()))?;

    Ok(())
}
