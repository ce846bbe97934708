use anyhow::{Context, Result};
use changelog_core::{generate, output_path_from_env, HistoryExtractor};
use clap::Parser;
use tracing_subscriber::EnvFilter;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("CHANGELOG_BUILD_SHA"),
    ")"
);

/// Write the git history of the current tree to ChangeLog.
///
/// The file goes to $MESON_DIST_ROOT, else $MESON_SOURCE_ROOT, else the
/// directory holding this executable. Set RUST_LOG for diagnostics.
#[derive(Parser, Debug)]
#[command(name = "write-changelog", version, long_version = LONG_VERSION)]
struct Cli {}

fn main() -> Result<()> {
    Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let path = output_path_from_env().context("resolving changelog path")?;

    println!("Writing changelog to {}", path.display());

    let extractor = HistoryExtractor::locate()?;
    generate(&extractor, &path)
        .with_context(|| format!("generating {}", path.display()))?;

    Ok(())
}
