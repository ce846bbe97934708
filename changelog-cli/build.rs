use std::path::{Path, PathBuf};
use std::process::Command;

/// Run git against the workspace checkout and return trimmed stdout on success.
fn git(repo_root: &Path, args: &[&str]) -> Option<String> {
    let output = Command::new("git")
        .arg("-C")
        .arg(repo_root)
        .args(args)
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Files whose change means HEAD may point at a different commit.
///
/// HEAD itself only changes on checkout; commits move the branch ref, which
/// is either a loose file or an entry in packed-refs.
fn head_watch_list(repo_root: &Path) -> Vec<PathBuf> {
    let mut refs = vec!["HEAD".to_string(), "packed-refs".to_string()];
    if let Some(branch_ref) = git(repo_root, &["symbolic-ref", "-q", "HEAD"]) {
        refs.push(branch_ref);
    }

    refs.iter()
        .filter_map(|r| git(repo_root, &["rev-parse", "--git-path", r]))
        .map(|p| {
            let p = PathBuf::from(p);
            if p.is_absolute() { p } else { repo_root.join(p) }
        })
        .collect()
}

fn main() {
    let manifest_dir =
        PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string()));
    let repo_root = manifest_dir.join("..");

    println!("cargo:rerun-if-changed=build.rs");
    for path in head_watch_list(&repo_root) {
        println!("cargo:rerun-if-changed={}", path.display());
    }

    let sha = git(&repo_root, &["rev-parse", "--short", "HEAD"])
        .unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=CHANGELOG_BUILD_SHA={sha}");
}
