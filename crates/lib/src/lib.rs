//! Skill validator core: discovery of SKILL.md folders and frontmatter checks,
//! used by the `skillcheck` CLI.

pub mod config;
pub mod skills;
