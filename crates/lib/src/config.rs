//! Configuration types and resolution.
//!
//! The validator has no config file: the only inputs are the root directory (current
//! directory, `SKILLCHECK_ROOT`, or `--root`) and the fixed list of search roots beneath it.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Search roots scanned for skill folders, relative to the root directory.
/// The empty entry is the root itself.
pub const SEARCH_ROOTS: &[&str] = &["", "skills", ".skills"];

/// File every skill folder must contain.
pub const SKILL_FILE: &str = "SKILL.md";

/// Environment variable overriding the root directory when no `--root` flag is given.
pub const ROOT_ENV: &str = "SKILLCHECK_ROOT";

/// Validator config: where to look and which subdirectories to scan.
#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute directory the search roots are resolved against.
    pub root: PathBuf,

    /// Search roots relative to `root`, in scan order.
    pub search_roots: Vec<PathBuf>,
}

impl Config {
    /// Config for `root` with the default search roots.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            search_roots: SEARCH_ROOTS.iter().map(PathBuf::from).collect(),
        }
    }

    /// Absolute path of a search root. The empty search root maps to `root` itself.
    pub fn search_root_path(&self, search_root: &Path) -> PathBuf {
        if search_root.as_os_str().is_empty() {
            self.root.clone()
        } else {
            self.root.join(search_root)
        }
    }
}

/// Resolve the root directory: `--root` flag, then SKILLCHECK_ROOT, then the current directory.
/// The current directory is read once here.
pub fn resolve_root(flag: Option<PathBuf>) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("reading current working directory")?;
    Ok(resolve_root_from(flag, std::env::var(ROOT_ENV).ok(), &cwd))
}

/// Pure part of [`resolve_root`]. Relative overrides are resolved against `cwd`;
/// an empty or whitespace-only env value is ignored.
pub fn resolve_root_from(flag: Option<PathBuf>, env: Option<String>, cwd: &Path) -> PathBuf {
    let chosen = flag
        .filter(|p| !p.as_os_str().is_empty())
        .or_else(|| {
            env.and_then(|s| {
                let t = s.trim();
                if t.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(t))
                }
            })
        });
    match chosen {
        Some(p) if p.is_absolute() => p,
        Some(p) => cwd.join(p),
        None => cwd.to_path_buf(),
    }
}
