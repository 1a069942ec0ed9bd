use crate::output::print_json;
use openspec_core::configurators;
use openspec_core::types::SlashCommandId;
use std::str::FromStr;

/// Print what `openspec init` would write for one (tool, command) pair,
/// without touching the filesystem.
pub fn run(command: &str, tool_id: &str, json: bool) -> anyhow::Result<()> {
    let id = SlashCommandId::from_str(command)?;
    let tool = configurators::get(tool_id)?;
    let file = configurators::generate(tool, id);

    if json {
        return print_json(&file);
    }

    println!("{}", file.content);
    Ok(())
}
