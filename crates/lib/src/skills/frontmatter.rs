//! Presence check for the required SKILL.md frontmatter keys.
//!
//! This is a pattern match, not a YAML parse. A key counts as present when a line of
//! exactly `---` appears somewhere before a line starting with `<key>:`. A closing `---`
//! is not required, and a key that only shows up in the body after the block still passes.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| field_pattern("name"));
static DESCRIPTION_RE: LazyLock<Regex> = LazyLock::new(|| field_pattern("description"));

// m: ^/$ per line, s: `.` spans newlines, R: treat \r\n as a line break.
fn field_pattern(key: &str) -> Regex {
    Regex::new(&format!(r"(?msR)^---$.*?^{}:", regex::escape(key))).expect("valid regex")
}

/// A frontmatter key every skill must declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Description,
}

impl Field {
    /// Required keys, in the order issues are reported.
    pub const REQUIRED: [Field; 2] = [Field::Name, Field::Description];

    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Description => "description",
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Field::Name => &NAME_RE,
            Field::Description => &DESCRIPTION_RE,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// True if `content` has a `---` line followed, anywhere later, by a line starting with `<field>:`.
pub fn has_field(content: &str, field: Field) -> bool {
    field.pattern().is_match(content)
}

/// Required fields absent from `content`, in [`Field::REQUIRED`] order.
pub fn missing_fields(content: &str) -> Vec<Field> {
    Field::REQUIRED
        .into_iter()
        .filter(|f| !has_field(content, *f))
        .collect()
}
