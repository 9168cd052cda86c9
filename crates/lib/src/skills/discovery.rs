//! Find skill folders: immediate subdirectories of each search root that contain SKILL.md.
//! Missing search roots are skipped. Results are sorted by relative path and deduplicated
//! by canonical path, so a folder reachable through two roots (symlinks) is checked once.

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::{Config, SKILL_FILE};

/// A discovered SKILL.md file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCandidate {
    /// Canonical absolute path; identity for deduplication.
    pub path: PathBuf,
    /// Path as found under the root (e.g. `skills/git/SKILL.md`), used in messages.
    pub relative: PathBuf,
}

/// Fatal discovery outcome.
#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error(
        "No skills discovered under {}. Expected <name>/SKILL.md, skills/<name>/SKILL.md or .skills/<name>/SKILL.md.",
        .root.display()
    )]
    NoSkills { root: PathBuf },
}

/// Scan every search root in `config`. May return an empty list; see [`discover_required`].
pub fn discover(config: &Config) -> Vec<SkillCandidate> {
    let mut found = Vec::new();
    for search_root in &config.search_roots {
        let dir = config.search_root_path(search_root);
        found.extend(candidates_in(&dir, search_root));
    }
    dedupe(found)
}

/// Like [`discover`], but zero candidates is an error.
pub fn discover_required(config: &Config) -> Result<Vec<SkillCandidate>, DiscoveryError> {
    let found = discover(config);
    if found.is_empty() {
        return Err(DiscoveryError::NoSkills {
            root: config.root.clone(),
        });
    }
    log::debug!("discovered {} skill(s) under {}", found.len(), config.root.display());
    Ok(found)
}

fn candidates_in(dir: &Path, prefix: &Path) -> Vec<SkillCandidate> {
    let mut out = Vec::new();
    let read_dir = match std::fs::read_dir(dir) {
        Ok(d) => d,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("search root {} does not exist, skipping", dir.display());
            return out;
        }
        Err(e) => {
            log::warn!("cannot list search root {}: {}", dir.display(), e);
            return out;
        }
    };
    for entry in read_dir.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let skill_md = path.join(SKILL_FILE);
        if !skill_md.is_file() {
            continue;
        }
        let relative = prefix.join(entry.file_name()).join(SKILL_FILE);
        let canonical = std::fs::canonicalize(&skill_md).unwrap_or(skill_md);
        log::debug!("found {}", relative.display());
        out.push(SkillCandidate {
            path: canonical,
            relative,
        });
    }
    out
}

fn dedupe(mut found: Vec<SkillCandidate>) -> Vec<SkillCandidate> {
    found.sort_by(|a, b| a.relative.cmp(&b.relative));
    let mut seen = HashSet::new();
    found.retain(|c| {
        if seen.insert(c.path.clone()) {
            true
        } else {
            log::debug!(
                "{} is the same file as an earlier candidate, skipping",
                c.relative.display()
            );
            false
        }
    });
    found
}
