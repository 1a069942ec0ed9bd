use super::SlashCommandConfigurator;
use crate::types::SlashCommandId;

/// CoStrict. Nested `.cospec/openspec/commands/` directory with a minimal
/// description + argument-hint header.
pub struct Costrict;

impl SlashCommandConfigurator for Costrict {
    fn tool_id(&self) -> &'static str {
        "costrict"
    }

    fn relative_path(&self, id: SlashCommandId) -> &'static str {
        match id {
            SlashCommandId::Proposal => ".cospec/openspec/commands/openspec-proposal.md",
            SlashCommandId::Apply => ".cospec/openspec/commands/openspec-apply.md",
            SlashCommandId::Archive => ".cospec/openspec/commands/openspec-archive.md",
            SlashCommandId::Research => ".cospec/openspec/commands/openspec-research.md",
            SlashCommandId::Audit => ".cospec/openspec/commands/openspec-audit.md",
        }
    }

    fn frontmatter(&self, id: SlashCommandId) -> Option<String> {
        let frontmatter = match id {
            SlashCommandId::Proposal => {
                r#"---
description: "Scaffold a new OpenSpec change and validate strictly."
argument-hint: feature description or request
---"#
            }
            SlashCommandId::Apply => {
                r#"---
description: "Implement an approved OpenSpec change and keep tasks in sync."
argument-hint: change-id
---"#
            }
            SlashCommandId::Archive => {
                r#"---
description: "Archive a deployed OpenSpec change and update specs."
argument-hint: change-id
---"#
            }
            SlashCommandId::Research => {
                r#"---
description: "Research external dependencies and generate implementation guides."
argument-hint: dependency or topic
---"#
            }
            SlashCommandId::Audit => {
                r#"---
description: "Validate and augment specs against research findings."
argument-hint: spec or change-id
---"#
            }
        };
        Some(frontmatter.to_string())
    }
}
