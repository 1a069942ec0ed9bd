use super::SlashCommandConfigurator;
use crate::types::SlashCommandId;

/// Cursor. Flat `.cursor/commands/` directory with `openspec-` prefixed
/// filenames and a name/id/category/description header.
pub struct Cursor;

impl SlashCommandConfigurator for Cursor {
    fn tool_id(&self) -> &'static str {
        "cursor"
    }

    fn relative_path(&self, id: SlashCommandId) -> &'static str {
        match id {
            SlashCommandId::Proposal => ".cursor/commands/openspec-proposal.md",
            SlashCommandId::Apply => ".cursor/commands/openspec-apply.md",
            SlashCommandId::Archive => ".cursor/commands/openspec-archive.md",
            SlashCommandId::Research => ".cursor/commands/openspec-research.md",
            SlashCommandId::Audit => ".cursor/commands/openspec-audit.md",
        }
    }

    fn frontmatter(&self, id: SlashCommandId) -> Option<String> {
        let frontmatter = match id {
            SlashCommandId::Proposal => {
                r#"---
name: /openspec-proposal
id: openspec-proposal
category: OpenSpec
description: Scaffold a new OpenSpec change and validate strictly.
---"#
            }
            SlashCommandId::Apply => {
                r#"---
name: /openspec-apply
id: openspec-apply
category: OpenSpec
description: Implement an approved OpenSpec change and keep tasks in sync.
---"#
            }
            SlashCommandId::Archive => {
                r#"---
name: /openspec-archive
id: openspec-archive
category: OpenSpec
description: Archive a deployed OpenSpec change and update specs.
---"#
            }
            SlashCommandId::Research => {
                r#"---
name: /openspec-research
id: openspec-research
category: OpenSpec
description: Research external dependencies and generate implementation guides.
---"#
            }
            SlashCommandId::Audit => {
                r#"---
name: /openspec-audit
id: openspec-audit
category: OpenSpec
description: Validate and augment specs against research findings.
---"#
            }
        };
        Some(frontmatter.to_string())
    }
}
