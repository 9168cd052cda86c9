//! Skills: find SKILL.md folders and check their frontmatter.
//!
//! A skill is a directory with a SKILL.md file, found directly under one of the search roots
//! (root, `skills/`, `.skills/`). Validation only checks that `name` and `description` keys
//! follow a `---` opener; see the frontmatter module for the exact rule.

mod discovery;
mod frontmatter;
mod validate;

pub use discovery::{discover, discover_required, DiscoveryError, SkillCandidate};
pub use frontmatter::{has_field, missing_fields, Field};
pub use validate::{check_skill, run, validate, SkillIssue, ValidationReport};
