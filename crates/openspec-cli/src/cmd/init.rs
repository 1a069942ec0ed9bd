use anyhow::Context;
use openspec_core::configurators::{self, SlashCommandConfigurator};
use openspec_core::types::SlashCommandId;
use openspec_core::{io, paths};
use std::path::Path;

/// Marker that opens the managed OpenSpec block in the root AGENTS.md.
pub const OPENSPEC_SECTION_START: &str = "<!-- OPENSPEC:START -->";
/// Closing marker for the managed OpenSpec block.
pub const OPENSPEC_SECTION_END: &str = "<!-- OPENSPEC:END -->";

pub fn run(root: &Path, tools: &[String]) -> anyhow::Result<()> {
    // Resolve the selection up front so an unknown tool id fails before
    // anything is written.
    let selected: Vec<&'static dyn SlashCommandConfigurator> = if tools.is_empty() {
        configurators::available().collect()
    } else {
        tools
            .iter()
            .map(|id| configurators::get(id))
            .collect::<Result<_, _>>()?
    };

    println!("Initializing OpenSpec in: {}", root.display());

    io::ensure_dir(&paths::openspec_dir(root))
        .with_context(|| format!("failed to create {}", paths::OPENSPEC_DIR))?;

    let project_md = paths::project_md_path(root);
    if io::write_if_missing(&project_md, PROJECT_MD_CONTENT.as_bytes())? {
        println!("  created: {}", paths::PROJECT_MD);
    } else {
        println!("  exists:  {}", paths::PROJECT_MD);
    }

    write_instructions_md(root)?;
    write_root_agents_md(root)?;

    println!("\nConfiguring slash commands:");
    for tool in &selected {
        write_tool_commands(root, *tool)?;
    }

    println!("\nOpenSpec initialized successfully.");
    println!("Next: describe your project in openspec/project.md, then run /openspec-proposal in your assistant.");

    Ok(())
}

/// Write the five command files for one tool, printing "created:" or
/// "updated:" per file. Shared with `openspec update`.
pub fn write_tool_commands(root: &Path, tool: &dyn SlashCommandConfigurator) -> anyhow::Result<()> {
    for id in SlashCommandId::all() {
        let file = configurators::generate(tool, *id);
        let path = root.join(&file.relative_path);
        let existed = path.exists();
        io::atomic_write(&path, file.content.as_bytes())
            .with_context(|| format!("failed to write {}", file.relative_path))?;
        if existed {
            println!("  updated: {}", file.relative_path);
        } else {
            println!("  created: {}", file.relative_path);
        }
    }
    Ok(())
}

/// Write (or overwrite) `openspec/AGENTS.md`, the conventions file the
/// command bodies point assistants at.
///
/// Always overwrites: this is managed content, not user-editable config.
/// Called by both `openspec init` and `openspec update`.
pub fn write_instructions_md(root: &Path) -> anyhow::Result<()> {
    let path = paths::instructions_md_path(root);
    let existed = path.exists();
    io::atomic_write(&path, INSTRUCTIONS_MD_CONTENT.as_bytes())?;
    if existed {
        println!("  updated: {}", paths::INSTRUCTIONS_MD);
    } else {
        println!("  created: {}", paths::INSTRUCTIONS_MD);
    }
    Ok(())
}

/// Write or refresh the OpenSpec block in the root AGENTS.md.
///
/// - Creates AGENTS.md with markers if it doesn't exist.
/// - Replaces content between the markers if present.
/// - Appends with markers otherwise, leaving user content untouched.
pub fn write_root_agents_md(root: &Path) -> anyhow::Result<()> {
    let agents_path = paths::root_agents_md_path(root);
    let marked_section = build_openspec_marked_section();

    if !agents_path.exists() {
        let content = format!("{marked_section}\n");
        io::atomic_write(&agents_path, content.as_bytes())?;
        println!("  created: {}", paths::ROOT_AGENTS_MD);
        return Ok(());
    }

    let existing = std::fs::read_to_string(&agents_path)?;

    if existing.contains(OPENSPEC_SECTION_START) {
        if io::replace_between_markers(
            &agents_path,
            OPENSPEC_SECTION_START,
            OPENSPEC_SECTION_END,
            &marked_section,
        )? {
            println!("  updated: {} (OpenSpec block refreshed)", paths::ROOT_AGENTS_MD);
        } else {
            println!(
                "  warning: {} has an OPENSPEC:START marker but no OPENSPEC:END — skipped",
                paths::ROOT_AGENTS_MD
            );
        }
    } else {
        io::append_text(&agents_path, &format!("\n{marked_section}\n"))?;
        println!("  updated: {} (OpenSpec block added)", paths::ROOT_AGENTS_MD);
    }

    Ok(())
}

fn build_openspec_marked_section() -> String {
    format!("{OPENSPEC_SECTION_START}\n{OPENSPEC_SECTION_INNER}\n{OPENSPEC_SECTION_END}")
}

const OPENSPEC_SECTION_INNER: &str = r#"## OpenSpec

This project uses OpenSpec: changes are proposed as spec deltas before any
code is written, implemented against an approved proposal, and archived once
deployed.

- Read `openspec/project.md` before proposing work.
- Draft proposals under `openspec/changes/<change-id>/` and validate with
  `openspec validate <change-id> --strict`.
- Slash commands: `/openspec-proposal`, `/openspec-apply`,
  `/openspec-archive`, `/openspec-research`, `/openspec-audit`.
- Full conventions live in `openspec/AGENTS.md`."#;

const PROJECT_MD_CONTENT: &str = r#"# Project Context

## Purpose

[Describe what this project does and who it serves.]

## Tech Stack

- [Language and framework]
- [Key dependencies and services]

## Conventions

[Code style, testing expectations, review process. Anything a change
proposal should respect.]
"#;

const INSTRUCTIONS_MD_CONTENT: &str = r#"# OpenSpec Conventions

Instructions for AI assistants working in an OpenSpec project. The slash
commands installed by `openspec init` reference this file; run
`openspec update` to refresh it after upgrading.

## Workflow

Every change moves through three stages:

1. **Proposal** — scaffold `openspec/changes/<change-id>/` with
   `proposal.md`, `tasks.md`, and optional `design.md`, plus spec deltas
   under `specs/<capability>/spec.md`. Nothing is implemented yet.
2. **Apply** — implement an approved proposal task by task, keeping
   `tasks.md` checkboxes in sync with reality.
3. **Archive** — after deployment, `openspec archive <change-id> --yes`
   folds the deltas into the main specs and moves the change to
   `changes/archive/`.

`research` and `audit` are supporting commands: research gathers external
documentation into `changes/<change-id>/research/`, and audit validates the
spec deltas against those findings.

## Change IDs

Choose a unique, verb-led id (`add-rate-limiting`, `migrate-auth-tokens`).
The id names the change directory and is used by every follow-up command.

## Spec Deltas

Deltas live in `changes/<change-id>/specs/<capability>/spec.md`, one folder
per capability. Group edits under `## ADDED Requirements`,
`## MODIFIED Requirements`, or `## REMOVED Requirements`, and give every
requirement at least one `#### Scenario:` block.

## Validation

Run `openspec validate <change-id> --strict` before sharing a proposal and
after an audit pass. Use `openspec show <change-id> --json --deltas-only`
to inspect details when validation fails.

## Research Artifacts

Research produces three files in `changes/<change-id>/research/`:
`research.md` (implementation guide), `blastradius.md` (codebase impact),
and `footguns.md` (mistakes to avoid). Cite sources and record fetch
timestamps in all three.
"#;
