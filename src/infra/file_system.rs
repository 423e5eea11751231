use anyhow::{Context, bail};
use log::debug;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Resolves the destination path given on the command line.
///
/// A leading `~` is replaced with the user's home directory and the result
/// is made absolute against the current working directory.
pub fn normalise_target_path(target: &str) -> anyhow::Result<PathBuf> {
    if target.is_empty() {
        bail!("target file is required");
    }

    let expanded = if target.starts_with('~') {
        let home = dirs::home_dir().context("failed to get home directory")?;
        expand_home(target, &home)
    } else {
        PathBuf::from(target)
    };

    let absolute = std::path::absolute(&expanded)
        .with_context(|| format!("failed to get absolute path of {}", expanded.display()))?;
    debug!("Resolved target file {} to {}", target, absolute.display());
    Ok(absolute)
}

pub fn normalise_source_dir(source: &Path) -> anyhow::Result<PathBuf> {
    std::path::absolute(source)
        .with_context(|| format!("failed to get absolute path of {}", source.display()))
}

// Only the first `~` is replaced, so `~/a` and `~a` both keep their tail.
fn expand_home(target: &str, home: &Path) -> PathBuf {
    let rest = target.strip_prefix('~').unwrap_or(target);
    let mut expanded = OsString::from(home.as_os_str());
    expanded.push(rest);
    PathBuf::from(expanded)
}
