use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::{ChangelogError, Result};

/// Replace the contents of `path` with `text`.
///
/// The file is created or truncated first; if the write then fails the
/// partial file is left in place.
pub fn write_changelog(path: &Path, text: &str) -> Result<()> {
    let wrap = |source| ChangelogError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(wrap)?;
    file.write_all(text.as_bytes()).map_err(wrap)?;
    file.flush().map_err(wrap)?;

    info!(path = %path.display(), bytes = text.len(), "changelog written");
    Ok(())
}
