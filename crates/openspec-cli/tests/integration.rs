use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn openspec(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("openspec").unwrap();
    cmd.current_dir(dir.path()).env("OPENSPEC_ROOT", dir.path());
    cmd
}

fn init_project(dir: &TempDir) {
    openspec(dir).arg("init").assert().success();
}

// ---------------------------------------------------------------------------
// openspec init
// ---------------------------------------------------------------------------

#[test]
fn init_creates_scaffolding_and_commands_for_all_tools() {
    let dir = TempDir::new().unwrap();
    openspec(&dir).arg("init").assert().success();

    assert!(dir.path().join("openspec").is_dir());
    assert!(dir.path().join("openspec/project.md").exists());
    assert!(dir.path().join("openspec/AGENTS.md").exists());
    assert!(dir.path().join("AGENTS.md").exists());

    assert!(dir.path().join(".claude/commands/openspec/proposal.md").exists());
    assert!(dir.path().join(".claude/commands/openspec/audit.md").exists());
    assert!(dir.path().join(".clinerules/workflows/openspec-apply.md").exists());
    assert!(dir.path().join(".codebuddy/commands/openspec/archive.md").exists());
    assert!(dir
        .path()
        .join(".cospec/openspec/commands/openspec-research.md")
        .exists());
    assert!(dir.path().join(".crush/commands/openspec/proposal.md").exists());
    assert!(dir.path().join(".cursor/commands/openspec-apply.md").exists());
    assert!(dir.path().join(".roo/commands/openspec-audit.md").exists());
    assert!(dir.path().join(".windsurf/workflows/openspec-archive.md").exists());
}

#[test]
fn init_with_tool_configures_only_that_tool() {
    let dir = TempDir::new().unwrap();
    openspec(&dir)
        .args(["init", "--tool", "claude"])
        .assert()
        .success();

    assert!(dir.path().join(".claude/commands/openspec/proposal.md").exists());
    assert!(!dir.path().join(".cursor").exists());
    assert!(!dir.path().join(".windsurf").exists());
}

#[test]
fn init_unknown_tool_fails_before_writing() {
    let dir = TempDir::new().unwrap();
    openspec(&dir)
        .args(["init", "--tool", "claude", "--tool", "emacs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown tool: emacs"));

    // Selection is resolved before anything touches the filesystem.
    assert!(!dir.path().join(".claude").exists());
    assert!(!dir.path().join("openspec").exists());
}

#[test]
fn init_is_idempotent() {
    let dir = TempDir::new().unwrap();
    openspec(&dir).arg("init").assert().success();
    openspec(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("updated:"));
}

#[test]
fn init_preserves_user_project_md() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    std::fs::write(dir.path().join("openspec/project.md"), "# Mine\n").unwrap();
    openspec(&dir).arg("init").assert().success();
    let content = std::fs::read_to_string(dir.path().join("openspec/project.md")).unwrap();
    assert_eq!(content, "# Mine\n");
}

#[test]
fn generated_claude_proposal_has_frontmatter_then_body() {
    let dir = TempDir::new().unwrap();
    openspec(&dir)
        .args(["init", "--tool", "claude"])
        .assert()
        .success();

    let content =
        std::fs::read_to_string(dir.path().join(".claude/commands/openspec/proposal.md")).unwrap();
    assert!(content.starts_with("---\nname: OpenSpec: Proposal\n"));
    assert!(content.contains("tags: [openspec, change]"));
    assert!(content.contains("---\n\n**Guardrails**"));
    assert!(content.contains("**Steps**"));
    assert!(content.contains("**Reference**"));
}

#[test]
fn generated_cline_archive_starts_with_heading_block() {
    let dir = TempDir::new().unwrap();
    openspec(&dir)
        .args(["init", "--tool", "cline"])
        .assert()
        .success();

    let content =
        std::fs::read_to_string(dir.path().join(".clinerules/workflows/openspec-archive.md"))
            .unwrap();
    assert!(content.starts_with(
        "# OpenSpec: Archive\n\nArchive a deployed OpenSpec change and update specs.\n\n**Guardrails**"
    ));
}

// ---------------------------------------------------------------------------
// AGENTS.md management
// ---------------------------------------------------------------------------

#[test]
fn init_appends_openspec_block_to_existing_agents_md() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("AGENTS.md"), "# Existing content\n").unwrap();
    init_project(&dir);

    let content = std::fs::read_to_string(dir.path().join("AGENTS.md")).unwrap();
    assert!(content.contains("# Existing content"));
    assert!(content.contains("<!-- OPENSPEC:START -->"));
    assert!(content.contains("## OpenSpec"));
}

#[test]
fn update_does_not_duplicate_openspec_block() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("AGENTS.md"), "# Existing content\n").unwrap();
    init_project(&dir);
    openspec(&dir).arg("update").assert().success();

    let content = std::fs::read_to_string(dir.path().join("AGENTS.md")).unwrap();
    assert!(content.contains("# Existing content"));
    assert_eq!(content.matches("<!-- OPENSPEC:START -->").count(), 1);
    assert_eq!(content.matches("<!-- OPENSPEC:END -->").count(), 1);
}

// ---------------------------------------------------------------------------
// openspec update
// ---------------------------------------------------------------------------

#[test]
fn update_requires_initialized_project() {
    let dir = TempDir::new().unwrap();
    openspec(&dir)
        .arg("update")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not initialized"));
}

#[test]
fn update_refreshes_only_configured_tools() {
    let dir = TempDir::new().unwrap();
    openspec(&dir)
        .args(["init", "--tool", "claude"])
        .assert()
        .success();

    // Stale hand-edited command file gets regenerated.
    let apply = dir.path().join(".claude/commands/openspec/apply.md");
    std::fs::write(&apply, "stale").unwrap();

    openspec(&dir).arg("update").assert().success();

    let content = std::fs::read_to_string(&apply).unwrap();
    assert!(content.contains("**Guardrails**"));
    assert!(!content.contains("stale"));

    // Tools that were never configured stay unconfigured.
    assert!(!dir.path().join(".cursor").exists());
    assert!(!dir.path().join(".roo").exists());
}

// ---------------------------------------------------------------------------
// openspec list
// ---------------------------------------------------------------------------

#[test]
fn list_shows_all_tools() {
    let dir = TempDir::new().unwrap();
    openspec(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("claude"))
        .stdout(predicate::str::contains("cursor"))
        .stdout(predicate::str::contains("windsurf"))
        .stdout(predicate::str::contains(".clinerules"));
}

#[test]
fn list_json_has_eight_tools() {
    let dir = TempDir::new().unwrap();
    let output = openspec(&dir).args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());

    let tools: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let tools = tools.as_array().unwrap();
    assert_eq!(tools.len(), 8);
    assert!(tools.iter().all(|t| t["available"] == true));
    assert!(tools.iter().any(|t| t["tool_id"] == "roocode" && t["directory"] == ".roo"));
}

#[test]
fn list_commands_shows_all_five() {
    let dir = TempDir::new().unwrap();
    openspec(&dir)
        .args(["list", "--commands"])
        .assert()
        .success()
        .stdout(predicate::str::contains("proposal"))
        .stdout(predicate::str::contains("archive"))
        .stdout(predicate::str::contains("Validate and augment specs"));
}

// ---------------------------------------------------------------------------
// openspec show
// ---------------------------------------------------------------------------

#[test]
fn show_prints_content_without_writing() {
    let dir = TempDir::new().unwrap();
    openspec(&dir)
        .args(["show", "archive", "--tool", "cline"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# OpenSpec: Archive"));

    assert!(!dir.path().join(".clinerules").exists());
    assert!(!dir.path().join("openspec").exists());
}

#[test]
fn show_json_includes_path_and_content() {
    let dir = TempDir::new().unwrap();
    let output = openspec(&dir)
        .args(["show", "archive", "--tool", "claude", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let file: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(file["relative_path"], ".claude/commands/openspec/archive.md");
    assert!(file["content"]
        .as_str()
        .unwrap()
        .contains("openspec archive <id> --yes"));
}

#[test]
fn show_unknown_command_fails() {
    let dir = TempDir::new().unwrap();
    openspec(&dir)
        .args(["show", "deploy", "--tool", "claude"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown slash command"));
}

#[test]
fn show_is_deterministic() {
    let dir = TempDir::new().unwrap();
    let a = openspec(&dir)
        .args(["show", "proposal", "--tool", "windsurf"])
        .output()
        .unwrap();
    let b = openspec(&dir)
        .args(["show", "proposal", "--tool", "windsurf"])
        .output()
        .unwrap();
    assert_eq!(a.stdout, b.stdout);
}
