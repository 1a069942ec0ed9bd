//! Per-assistant slash command generation.
//!
//! Each supported assistant supplies two things: the project-relative path a
//! command file lives at, and the frontmatter (if any) prepended to it. The
//! body itself comes from [`crate::templates`] and is identical across
//! assistants, so assembly is one shared function rather than something a
//! variant can override.

mod claude;
mod cline;
mod codebuddy;
mod costrict;
mod crush;
mod cursor;
mod roocode;
mod windsurf;

pub use claude::Claude;
pub use cline::Cline;
pub use codebuddy::CodeBuddy;
pub use costrict::Costrict;
pub use crush::Crush;
pub use cursor::Cursor;
pub use roocode::RooCode;
pub use windsurf::Windsurf;

use crate::error::{OpenSpecError, Result};
use crate::templates;
use crate::types::SlashCommandId;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Contract
// ---------------------------------------------------------------------------

/// One supported assistant.
///
/// `relative_path` must be total over [`SlashCommandId`]: implementations
/// use an exhaustive `match`, so an unmapped command is a compile error, not
/// a runtime case. `frontmatter` defaults to `None`, which means "no header
/// block" (distinct from an empty string, which would still insert a
/// separator).
pub trait SlashCommandConfigurator: Sync {
    /// Stable identifier the CLI uses to select this tool.
    fn tool_id(&self) -> &'static str;

    /// Whether this tool is offered during configuration. Tools that report
    /// `false` stay in the registry but are hidden from selection.
    fn is_available(&self) -> bool {
        true
    }

    /// Project-relative path of the command file for `id`.
    fn relative_path(&self, id: SlashCommandId) -> &'static str;

    /// Tool-specific header prepended to the body, if the tool uses one.
    fn frontmatter(&self, _id: SlashCommandId) -> Option<String> {
        None
    }
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// A command file ready to be written beneath the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    pub relative_path: String,
    pub content: String,
}

/// Assemble the file for one (tool, command) pair.
///
/// Frontmatter, when present, is joined to the body by exactly one blank
/// line; without frontmatter the content is the body alone.
pub fn generate(tool: &dyn SlashCommandConfigurator, id: SlashCommandId) -> GeneratedFile {
    let body = templates::command_body(id);
    let content = match tool.frontmatter(id) {
        Some(frontmatter) => format!("{frontmatter}\n\n{body}"),
        None => body.to_string(),
    };
    GeneratedFile {
        relative_path: tool.relative_path(id).to_string(),
        content,
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Every known tool, in the order it is listed to the user.
pub const ALL_TOOLS: &[&dyn SlashCommandConfigurator] = &[
    &Claude,
    &Cline,
    &CodeBuddy,
    &Costrict,
    &Crush,
    &Cursor,
    &RooCode,
    &Windsurf,
];

pub fn all() -> &'static [&'static dyn SlashCommandConfigurator] {
    ALL_TOOLS
}

/// Tools that may be offered for configuration.
pub fn available() -> impl Iterator<Item = &'static dyn SlashCommandConfigurator> {
    ALL_TOOLS.iter().copied().filter(|t| t.is_available())
}

pub fn find(tool_id: &str) -> Option<&'static dyn SlashCommandConfigurator> {
    ALL_TOOLS.iter().copied().find(|t| t.tool_id() == tool_id)
}

pub fn get(tool_id: &str) -> Result<&'static dyn SlashCommandConfigurator> {
    find(tool_id).ok_or_else(|| OpenSpecError::UnknownTool(tool_id.to_string()))
}

/// Top-level directory a tool keeps its command files under (`.claude`,
/// `.cursor`, …). The CLI checks this directory to decide whether a tool is
/// already configured in a project.
pub fn tool_root_dir(tool: &dyn SlashCommandConfigurator) -> &'static str {
    let path = tool.relative_path(SlashCommandId::Proposal);
    path.split('/').next().unwrap_or(path)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
