use super::SlashCommandConfigurator;
use crate::templates;
use crate::types::SlashCommandId;

/// Roo Code. Same heading-style header as Cline, rooted at `.roo/commands/`.
pub struct RooCode;

impl SlashCommandConfigurator for RooCode {
    fn tool_id(&self) -> &'static str {
        "roocode"
    }

    fn relative_path(&self, id: SlashCommandId) -> &'static str {
        match id {
            SlashCommandId::Proposal => ".roo/commands/openspec-proposal.md",
            SlashCommandId::Apply => ".roo/commands/openspec-apply.md",
            SlashCommandId::Archive => ".roo/commands/openspec-archive.md",
            SlashCommandId::Research => ".roo/commands/openspec-research.md",
            SlashCommandId::Audit => ".roo/commands/openspec-audit.md",
        }
    }

    fn frontmatter(&self, id: SlashCommandId) -> Option<String> {
        Some(format!(
            "# OpenSpec: {}\n\n{}",
            id.title(),
            templates::summary(id)
        ))
    }
}
