use crate::error::Result;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Atomically write `data` to `path` using a tempfile in the same directory.
/// Generated command files are always replaced whole, never patched.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Create a directory and all parents, idempotent.
pub fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)?;
    Ok(())
}

/// Write a file only if it does not already exist. Returns true if written.
/// Used for user-editable scaffolding like `openspec/project.md`.
pub fn write_if_missing(path: &Path, data: &[u8]) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    atomic_write(path, data)?;
    Ok(true)
}

/// Replace content between `start_marker` and `end_marker` (inclusive).
///
/// Returns `true` if both markers were found and the file was rewritten,
/// `false` if either marker is missing (file unchanged). This is how the
/// managed OpenSpec block in `AGENTS.md` is refreshed without touching
/// user-authored content around it.
pub fn replace_between_markers(
    path: &Path,
    start_marker: &str,
    end_marker: &str,
    replacement: &str,
) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    let content = std::fs::read_to_string(path)?;
    let Some(start_pos) = content.find(start_marker) else {
        return Ok(false);
    };
    let search_from = start_pos + start_marker.len();
    let Some(end_offset) = content[search_from..].find(end_marker) else {
        return Ok(false);
    };
    let end_pos = search_from + end_offset + end_marker.len();

    let mut updated = String::with_capacity(content.len());
    updated.push_str(&content[..start_pos]);
    updated.push_str(replacement);
    updated.push_str(&content[end_pos..]);

    atomic_write(path, updated.as_bytes())?;
    Ok(true)
}

/// Append text to a file, creating it if it doesn't exist.
pub fn append_text(path: &Path, text: &str) -> Result<()> {
    let mut f = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    f.write_all(text.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn atomic_write_creates_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".claude/commands/openspec/proposal.md");
        atomic_write(&path, b"**Guardrails**").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "**Guardrails**");
    }

    #[test]
    fn atomic_write_replaces_existing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("apply.md");
        atomic_write(&path, b"old").unwrap();
        atomic_write(&path, b"new").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn write_if_missing_skips_existing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("project.md");
        std::fs::write(&path, b"user edits").unwrap();
        let written = write_if_missing(&path, b"scaffold").unwrap();
        assert!(!written);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "user edits");
    }

    #[test]
    fn replace_between_markers_preserves_surroundings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("AGENTS.md");
        std::fs::write(
            &path,
            "# Mine\n\n<!-- OPENSPEC:START -->\nstale\n<!-- OPENSPEC:END -->\n\n# Also mine\n",
        )
        .unwrap();

        let replaced = replace_between_markers(
            &path,
            "<!-- OPENSPEC:START -->",
            "<!-- OPENSPEC:END -->",
            "<!-- OPENSPEC:START -->\nfresh\n<!-- OPENSPEC:END -->",
        )
        .unwrap();

        assert!(replaced);
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# Mine\n"));
        assert!(content.contains("fresh"));
        assert!(!content.contains("stale"));
        assert!(content.ends_with("# Also mine\n"));
    }

    #[test]
    fn replace_between_markers_without_markers_is_noop() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("AGENTS.md");
        std::fs::write(&path, "no markers here\n").unwrap();
        let replaced =
            replace_between_markers(&path, "<!-- OPENSPEC:START -->", "<!-- OPENSPEC:END -->", "x")
                .unwrap();
        assert!(!replaced);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "no markers here\n");
    }
}
