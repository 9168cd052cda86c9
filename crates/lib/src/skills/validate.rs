//! Validate discovered SKILL.md files and collect every issue.
//!
//! Nothing short-circuits: each file is read and checked independently, and an unreadable
//! file becomes an issue for that file rather than aborting the run.

use std::io;
use std::path::{Path, PathBuf};

use super::discovery::{self, DiscoveryError, SkillCandidate};
use super::frontmatter::{self, Field};
use crate::config::Config;

/// One problem with one SKILL.md file. Paths are relative to the root.
#[derive(Debug, thiserror::Error)]
pub enum SkillIssue {
    #[error("{} is missing required frontmatter field: {field}", .path.display())]
    MissingField { path: PathBuf, field: Field },

    #[error("{} could not be read: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SkillIssue {
    pub fn path(&self) -> &Path {
        match self {
            SkillIssue::MissingField { path, .. } | SkillIssue::Unreadable { path, .. } => path,
        }
    }
}

/// Outcome of validating every discovered skill.
#[derive(Debug, Default)]
pub struct ValidationReport {
    /// Number of SKILL.md files checked.
    pub validated: usize,
    /// All issues, in discovery order.
    pub issues: Vec<SkillIssue>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn summary(&self) -> String {
        format!("Validated {} skills.", self.validated)
    }
}

/// Read one SKILL.md and report each missing required field.
pub fn check_skill(candidate: &SkillCandidate) -> Vec<SkillIssue> {
    let content = match std::fs::read_to_string(&candidate.path) {
        Ok(c) => c,
        Err(source) => {
            return vec![SkillIssue::Unreadable {
                path: candidate.relative.clone(),
                source,
            }]
        }
    };
    frontmatter::missing_fields(&content)
        .into_iter()
        .map(|field| SkillIssue::MissingField {
            path: candidate.relative.clone(),
            field,
        })
        .collect()
}

/// Check every candidate; issues from all files are kept.
pub fn validate(candidates: &[SkillCandidate]) -> ValidationReport {
    let mut report = ValidationReport::default();
    for candidate in candidates {
        let issues = check_skill(candidate);
        if !issues.is_empty() {
            log::debug!("{}: {} issue(s)", candidate.relative.display(), issues.len());
        }
        report.issues.extend(issues);
        report.validated += 1;
    }
    log::info!(
        "validated {} skill(s), {} issue(s)",
        report.validated,
        report.issues.len()
    );
    report
}

/// Discover then validate. Zero discovered skills is returned as an error before any file is read.
pub fn run(config: &Config) -> Result<ValidationReport, DiscoveryError> {
    let candidates = discovery::discover_required(config)?;
    Ok(validate(&candidates))
}
