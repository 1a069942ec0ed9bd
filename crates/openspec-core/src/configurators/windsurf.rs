use super::SlashCommandConfigurator;
use crate::templates;
use crate::types::SlashCommandId;

/// Windsurf. Workflows directory, with a description + auto-execution header
/// derived from the shared command summary at generation time.
pub struct Windsurf;

impl SlashCommandConfigurator for Windsurf {
    fn tool_id(&self) -> &'static str {
        "windsurf"
    }

    fn relative_path(&self, id: SlashCommandId) -> &'static str {
        match id {
            SlashCommandId::Proposal => ".windsurf/workflows/openspec-proposal.md",
            SlashCommandId::Apply => ".windsurf/workflows/openspec-apply.md",
            SlashCommandId::Archive => ".windsurf/workflows/openspec-archive.md",
            SlashCommandId::Research => ".windsurf/workflows/openspec-research.md",
            SlashCommandId::Audit => ".windsurf/workflows/openspec-audit.md",
        }
    }

    fn frontmatter(&self, id: SlashCommandId) -> Option<String> {
        Some(format!(
            "---\ndescription: {}\nauto_execution_mode: 3\n---",
            templates::summary(id)
        ))
    }
}
