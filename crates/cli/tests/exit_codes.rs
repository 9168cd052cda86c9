//! Integration test: run the built `skillcheck` binary against temp skill trees and check
//! output and exit status.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn temp_root() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("skillcheck-cli-test-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).expect("create temp root");
    dir
}

fn write_skill(root: &Path, rel_dir: &str, content: &str) {
    let dir = root.join(rel_dir);
    std::fs::create_dir_all(&dir).expect("create skill dir");
    std::fs::write(dir.join("SKILL.md"), content).expect("write SKILL.md");
}

fn skillcheck(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_skillcheck"))
        .args(args)
        .current_dir(cwd)
        .env_remove("SKILLCHECK_ROOT")
        .env_remove("RUST_LOG")
        .output()
        .expect("run skillcheck")
}

#[test]
fn valid_and_invalid_skill_exits_one() {
    let root = temp_root();
    write_skill(&root, "a", "---\nname: a\ndescription: valid\n---\n");
    write_skill(&root, "b", "---\nname: b\n---\n");

    let out = skillcheck(&root, &[]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    let expected = format!(
        "{} is missing required frontmatter field: description",
        Path::new("b").join("SKILL.md").display()
    );
    assert_eq!(stderr.lines().collect::<Vec<_>>(), vec![expected.as_str()]);
    assert!(out.stdout.is_empty());
    std::fs::remove_dir_all(&root).ok();
}

#[test]
fn no_skills_exits_one() {
    let root = temp_root();

    let out = skillcheck(&root, &[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("No skills discovered"));
    std::fs::remove_dir_all(&root).ok();
}

#[test]
fn one_valid_skill_exits_zero() {
    let root = temp_root();
    write_skill(&root, ".skills/solo", "---\nname: solo\ndescription: valid\n---\n");

    let out = skillcheck(&root, &[]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "Validated 1 skills.");
    std::fs::remove_dir_all(&root).ok();
}

#[test]
fn root_flag_overrides_cwd() {
    let root = temp_root();
    write_skill(&root, "skills/x", "---\nname: x\ndescription: valid\n---\n");
    let elsewhere = temp_root();

    let out = skillcheck(&elsewhere, &["--root", root.to_str().expect("utf-8 temp path"), "validate"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "Validated 1 skills.");
    std::fs::remove_dir_all(&root).ok();
    std::fs::remove_dir_all(&elsewhere).ok();
}

#[test]
fn list_prints_relative_paths() {
    let root = temp_root();
    write_skill(&root, "skills/alpha", "no frontmatter");
    write_skill(&root, "beta", "---\nname: beta\ndescription: d\n---\n");

    let out = skillcheck(&root, &["list"]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    let expected = vec![
        Path::new("beta").join("SKILL.md").display().to_string(),
        Path::new("skills").join("alpha").join("SKILL.md").display().to_string(),
    ];
    assert_eq!(stdout.lines().map(String::from).collect::<Vec<_>>(), expected);
    std::fs::remove_dir_all(&root).ok();
}
