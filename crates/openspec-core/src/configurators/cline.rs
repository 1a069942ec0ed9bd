use super::SlashCommandConfigurator;
use crate::templates;
use crate::types::SlashCommandId;

/// Cline. Workflow files headed by a markdown title line instead of a YAML
/// block; the title is derived from the command identifier.
pub struct Cline;

impl SlashCommandConfigurator for Cline {
    fn tool_id(&self) -> &'static str {
        "cline"
    }

    fn relative_path(&self, id: SlashCommandId) -> &'static str {
        match id {
            SlashCommandId::Proposal => ".clinerules/workflows/openspec-proposal.md",
            SlashCommandId::Apply => ".clinerules/workflows/openspec-apply.md",
            SlashCommandId::Archive => ".clinerules/workflows/openspec-archive.md",
            SlashCommandId::Research => ".clinerules/workflows/openspec-research.md",
            SlashCommandId::Audit => ".clinerules/workflows/openspec-audit.md",
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
