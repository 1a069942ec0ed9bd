use super::SlashCommandConfigurator;
use crate::types::SlashCommandId;

/// Crush. Same header shape as Claude Code, rooted at `.crush/`.
pub struct Crush;

impl SlashCommandConfigurator for Crush {
    fn tool_id(&self) -> &'static str {
        "crush"
    }

    fn relative_path(&self, id: SlashCommandId) -> &'static str {
        match id {
            SlashCommandId::Proposal => ".crush/commands/openspec/proposal.md",
            SlashCommandId::Apply => ".crush/commands/openspec/apply.md",
            SlashCommandId::Archive => ".crush/commands/openspec/archive.md",
            SlashCommandId::Research => ".crush/commands/openspec/research.md",
            SlashCommandId::Audit => ".crush/commands/openspec/audit.md",
        }
    }

    fn frontmatter(&self, id: SlashCommandId) -> Option<String> {
        let frontmatter = match id {
            SlashCommandId::Proposal => {
                r#"---
name: OpenSpec: Proposal
description: Scaffold a new OpenSpec change and validate strictly.
category: OpenSpec
tags: [openspec, change]
---"#
            }
            SlashCommandId::Apply => {
                r#"---
name: OpenSpec: Apply
description: Implement an approved OpenSpec change and keep tasks in sync.
category: OpenSpec
tags: [openspec, apply]
---"#
            }
            SlashCommandId::Archive => {
                r#"---
name: OpenSpec: Archive
description: Archive a deployed OpenSpec change and update specs.
category: OpenSpec
tags: [openspec, archive]
---"#
            }
            SlashCommandId::Research => {
                r#"---
name: OpenSpec: Research
description: Research external dependencies and generate implementation guides.
category: OpenSpec
tags: [openspec, research]
---"#
            }
            SlashCommandId::Audit => {
                r#"---
name: OpenSpec: Audit
description: Validate and augment specs against research findings.
category: OpenSpec
tags: [openspec, audit]
---"#
            }
        };
        Some(frontmatter.to_string())
    }
}
