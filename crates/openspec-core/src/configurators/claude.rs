use super::SlashCommandConfigurator;
use crate::types::SlashCommandId;

/// Claude Code. Commands live under `.claude/commands/openspec/` and carry a
/// structured name/description/category/tags header.
pub struct Claude;

impl SlashCommandConfigurator for Claude {
    fn tool_id(&self) -> &'static str {
        "claude"
    }

    fn relative_path(&self, id: SlashCommandId) -> &'static str {
        match id {
            SlashCommandId::Proposal => ".claude/commands/openspec/proposal.md",
            SlashCommandId::Apply => ".claude/commands/openspec/apply.md",
            SlashCommandId::Archive => ".claude/commands/openspec/archive.md",
            SlashCommandId::Research => ".claude/commands/openspec/research.md",
            SlashCommandId::Audit => ".claude/commands/openspec/audit.md",
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
