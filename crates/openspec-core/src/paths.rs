use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const OPENSPEC_DIR: &str = "openspec";
pub const PROJECT_MD: &str = "openspec/project.md";
pub const INSTRUCTIONS_MD: &str = "openspec/AGENTS.md";
pub const ROOT_AGENTS_MD: &str = "AGENTS.md";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn openspec_dir(root: &Path) -> PathBuf {
    root.join(OPENSPEC_DIR)
}

pub fn project_md_path(root: &Path) -> PathBuf {
    root.join(PROJECT_MD)
}

pub fn instructions_md_path(root: &Path) -> PathBuf {
    root.join(INSTRUCTIONS_MD)
}

pub fn root_agents_md_path(root: &Path) -> PathBuf {
    root.join(ROOT_AGENTS_MD)
}
