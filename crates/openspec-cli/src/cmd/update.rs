use openspec_core::configurators::{self, SlashCommandConfigurator};
use openspec_core::paths;
use std::path::Path;

use super::init::{write_instructions_md, write_root_agents_md, write_tool_commands};

/// Refresh managed scaffolding and regenerate slash commands for every tool
/// already configured in this project.
///
/// Requires an initialized project (`openspec/` must exist). Tools that were
/// never configured are left alone; configuring a new tool is `openspec init
/// --tool <id>`.
pub fn run(root: &Path) -> anyhow::Result<()> {
    if !paths::openspec_dir(root).is_dir() {
        anyhow::bail!(
            "not initialized: run 'openspec init' first (no openspec/ directory in {})",
            root.display()
        );
    }

    println!("Updating OpenSpec scaffolding in: {}", root.display());

    write_instructions_md(root)?;
    write_root_agents_md(root)?;

    let configured: Vec<&'static dyn SlashCommandConfigurator> = configurators::all()
        .iter()
        .copied()
        .filter(|tool| is_configured(root, *tool))
        .collect();

    if configured.is_empty() {
        println!("\nNo tools configured yet. Run: openspec init --tool <id>");
        return Ok(());
    }

    println!("\nRefreshing slash commands:");
    for tool in configured {
        write_tool_commands(root, tool)?;
    }

    println!("\nOpenSpec scaffolding updated.");

    Ok(())
}

/// A tool counts as configured once its command directory (`.claude`,
/// `.cursor`, …) exists in the project.
pub fn is_configured(root: &Path, tool: &dyn SlashCommandConfigurator) -> bool {
    root.join(configurators::tool_root_dir(tool)).is_dir()
}
