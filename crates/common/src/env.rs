//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use std::path::{Path, PathBuf};

use tracing::info;

/// Ensure the directory holding a file-backed SQLite database exists.
///
/// Non-SQLite URLs and in-memory databases are left alone.
pub async fn ensure_env(database_url: &str) -> anyhow::Result<()> {
    let Some(dir) = sqlite_parent_dir(database_url) else { return Ok(()) };
    if tokio::fs::metadata(&dir).await.is_err() {
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", dir.display()))?;
        info!(dir = %dir.display(), "created database directory");
    }
    Ok(())
}

/// Parent directory of the file referenced by a `sqlite:` URL, if any.
pub fn sqlite_parent_dir(database_url: &str) -> Option<PathBuf> {
    let rest = database_url.strip_prefix("sqlite:")?;
    let rest = rest.strip_prefix("//").unwrap_or(rest);
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path == ":memory:" {
        return None;
    }
    let parent = Path::new(path).parent()?;
    if parent.as_os_str().is_empty() {
        return None;
    }
    Some(parent.to_path_buf())
}
