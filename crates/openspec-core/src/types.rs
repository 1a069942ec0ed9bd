use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// SlashCommandId
// ---------------------------------------------------------------------------

/// The five workflow commands OpenSpec installs into each assistant.
///
/// This is the single vocabulary every lookup keys on: body templates,
/// per-tool file paths, and per-tool frontmatter are all total over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlashCommandId {
    Proposal,
    Apply,
    Archive,
    Research,
    Audit,
}

impl SlashCommandId {
    pub const ALL: [SlashCommandId; 5] = [
        SlashCommandId::Proposal,
        SlashCommandId::Apply,
        SlashCommandId::Archive,
        SlashCommandId::Research,
        SlashCommandId::Audit,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn all() -> &'static [SlashCommandId] {
        &Self::ALL
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SlashCommandId::Proposal => "proposal",
            SlashCommandId::Apply => "apply",
            SlashCommandId::Archive => "archive",
            SlashCommandId::Research => "research",
            SlashCommandId::Audit => "audit",
        }
    }

    /// Title-cased identifier ("proposal" → "Proposal").
    ///
    /// Heading-style frontmatter derives its title from the identifier
    /// string at generation time rather than storing a literal, so generated
    /// files stay bit-identical with earlier releases.
    pub fn title(self) -> String {
        let s = self.as_str();
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().to_string() + chars.as_str(),
            None => String::new(),
        }
    }
}

impl fmt::Display for SlashCommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SlashCommandId {
    type Err = crate::error::OpenSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "proposal" => Ok(SlashCommandId::Proposal),
            "apply" => Ok(SlashCommandId::Apply),
            "archive" => Ok(SlashCommandId::Archive),
            "research" => Ok(SlashCommandId::Research),
            "audit" => Ok(SlashCommandId::Audit),
            _ => Err(crate::error::OpenSpecError::UnknownCommand(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
