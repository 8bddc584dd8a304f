//! Writing rendered tables to disk.

use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Writes `contents` to `path`, replacing any previous content.
///
/// When `path` has a non-empty parent directory that does not exist yet, it
/// is created first (including intermediate directories). Errors from the
/// filesystem are returned unchanged.
pub fn write_markdown(path: impl AsRef<Path>, contents: &str) -> io::Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directory: {:?}", parent);
            fs::create_dir_all(parent)?;
        }
    }

    debug!("Writing {} bytes to {:?}", contents.len(), path);
    fs::write(path, contents)
}
