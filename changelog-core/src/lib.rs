//! changelog-core: materialize a `ChangeLog` from git history at dist time.
//!
//! The output goes to `$MESON_DIST_ROOT/ChangeLog`, else
//! `$MESON_SOURCE_ROOT/ChangeLog`, else next to the running executable. The
//! content is the verbatim output of
//! `git log --no-color --find-renames --find-copies --name-status`.

pub mod error;
pub mod history;
pub mod paths;
pub mod writer;

use std::path::Path;

use tracing::debug;

pub use error::{ChangelogError, Result};
pub use history::{HistoryExtractor, LOG_ARGS};
pub use paths::{
    output_path_from_env, resolve_output_path, RootSource, CHANGELOG_FILE_NAME, DIST_ROOT_VAR,
    SOURCE_ROOT_VAR,
};
pub use writer::write_changelog;

/// Extract the full history and write it to `path`.
///
/// Extraction runs before the file is opened, so a failed extraction leaves
/// any existing changelog untouched.
pub fn generate(extractor: &HistoryExtractor, path: &Path) -> Result<()> {
    debug!(git = %extractor.program().display(), "generating changelog");
    let text = extractor.extract()?;
    write_changelog(path, &text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn failed_extraction_leaves_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join(CHANGELOG_FILE_NAME);
        fs::write(&p, "OLD-CONTENT").unwrap();

        let extractor = HistoryExtractor::with_program("/nonexistent/bin/git-does-not-exist");
        let err = generate(&extractor, &p).unwrap_err();

        assert!(matches!(err, ChangelogError::Extraction(_)));
        assert_eq!(fs::read_to_string(&p).unwrap(), "OLD-CONTENT");
    }

    #[test]
    fn failed_extraction_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join(CHANGELOG_FILE_NAME);

        let extractor = HistoryExtractor::with_program("/nonexistent/bin/git-does-not-exist");
        assert!(generate(&extractor, &p).is_err());
        assert!(!p.exists());
    }

    #[cfg(unix)]
    #[test]
    fn undecodable_history_is_extraction_error_and_writes_nothing() {
        let repo = tempfile::tempdir().unwrap();
        // `sh log --no-color ...` runs this script in place of git
        fs::write(
            repo.path().join("log"),
            "printf 'commit x\\n\\nA\\tcaf\\351\\n'\n",
        )
        .unwrap();
        let out = tempfile::tempdir().unwrap();
        let p = out.path().join(CHANGELOG_FILE_NAME);

        let extractor = HistoryExtractor::with_program("/bin/sh").in_dir(repo.path());
        let err = generate(&extractor, &p).unwrap_err();

        let ChangelogError::Extraction(msg) = &err else {
            panic!("expected extraction error, got {err:?}");
        };
        assert!(msg.contains("not valid UTF-8"), "{msg}");
        assert!(!p.exists());
    }
}
