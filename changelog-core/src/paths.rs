//! Output path resolution.
//!
//! The changelog lands in the first non-empty of `MESON_DIST_ROOT`,
//! `MESON_SOURCE_ROOT`, or the directory holding the running executable.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ChangelogError, Result};

pub const CHANGELOG_FILE_NAME: &str = "ChangeLog";

/// Set by `meson dist` to the root of the source snapshot being packaged.
pub const DIST_ROOT_VAR: &str = "MESON_DIST_ROOT";

/// Set by meson for run targets and scripts to the project's source root.
pub const SOURCE_ROOT_VAR: &str = "MESON_SOURCE_ROOT";

/// Where the output directory came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootSource {
    DistRoot,
    SourceRoot,
    OwnDirectory,
}

/// Base directory named by the environment, if any.
///
/// Empty values count as unset.
pub fn env_root<F>(lookup: F) -> Option<(RootSource, PathBuf)>
where
    F: Fn(&str) -> Option<OsString>,
{
    [
        (RootSource::DistRoot, DIST_ROOT_VAR),
        (RootSource::SourceRoot, SOURCE_ROOT_VAR),
    ]
    .into_iter()
    .find_map(|(source, var)| {
        lookup(var)
            .filter(|v| !v.is_empty())
            .map(|v| (source, PathBuf::from(v)))
    })
}

/// Resolve `<base>/ChangeLog` from an environment lookup.
///
/// `own_dir` is only called when neither variable names a directory.
pub fn resolve_output_path<F, D>(lookup: F, own_dir: D) -> Result<PathBuf>
where
    F: Fn(&str) -> Option<OsString>,
    D: FnOnce() -> Result<PathBuf>,
{
    let (source, base) = match env_root(lookup) {
        Some(found) => found,
        None => (RootSource::OwnDirectory, own_dir()?),
    };
    debug!(?source, base = %base.display(), "resolved changelog directory");
    Ok(base.join(CHANGELOG_FILE_NAME))
}

/// Directory containing the running executable.
pub fn own_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(ChangelogError::OwnDirectory)?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        ChangelogError::OwnDirectory(std::io::Error::other(format!(
            "{} has no parent directory",
            exe.display()
        )))
    })
}

/// Resolve the output path against the real process environment.
pub fn output_path_from_env() -> Result<PathBuf> {
    resolve_output_path(|var| std::env::var_os(var), own_dir)
}
