use crate::output::{print_json, print_table};
use openspec_core::configurators;
use openspec_core::templates;
use openspec_core::types::SlashCommandId;
use std::path::Path;

use super::update::is_configured;

pub fn run(root: &Path, commands: bool, json: bool) -> anyhow::Result<()> {
    if commands {
        return run_commands(json);
    }

    if json {
        #[derive(serde::Serialize)]
        struct ToolEntry<'a> {
            tool_id: &'a str,
            directory: &'a str,
            available: bool,
            configured: bool,
        }

        let entries: Vec<ToolEntry> = configurators::all()
            .iter()
            .map(|tool| ToolEntry {
                tool_id: tool.tool_id(),
                directory: configurators::tool_root_dir(*tool),
                available: tool.is_available(),
                configured: is_configured(root, *tool),
            })
            .collect();
        return print_json(&entries);
    }

    let rows: Vec<Vec<String>> = configurators::all()
        .iter()
        .map(|tool| {
            vec![
                tool.tool_id().to_string(),
                configurators::tool_root_dir(*tool).to_string(),
                if is_configured(root, *tool) {
                    "yes".to_string()
                } else {
                    String::new()
                },
            ]
        })
        .collect();
    print_table(&["TOOL", "DIRECTORY", "CONFIGURED"], rows);

    Ok(())
}

fn run_commands(json: bool) -> anyhow::Result<()> {
    if json {
        #[derive(serde::Serialize)]
        struct CommandEntry {
            id: SlashCommandId,
            summary: &'static str,
        }

        let entries: Vec<CommandEntry> = SlashCommandId::all()
            .iter()
            .map(|id| CommandEntry {
                id: *id,
                summary: templates::summary(*id),
            })
            .collect();
        return print_json(&entries);
    }

    let rows: Vec<Vec<String>> = SlashCommandId::all()
        .iter()
        .map(|id| vec![id.to_string(), templates::summary(*id).to_string()])
        .collect();
    print_table(&["COMMAND", "SUMMARY"], rows);

    Ok(())
}
