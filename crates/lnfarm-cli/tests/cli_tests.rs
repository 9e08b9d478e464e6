use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn create_test_file(dir: &Path, rel_path: &str, content: &str) {
    let path = dir.join(rel_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// `lnfarm` running inside `dir` so no stray project config is picked up
fn lnfarm(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("lnfarm").unwrap();
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_output() {
    let tmp = TempDir::new().unwrap();
    lnfarm(tmp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Symlink Farm Maintainer"))
        .stdout(predicate::str::contains("--target"))
        .stdout(predicate::str::contains("--clean"))
        .stdout(predicate::str::contains("--show"));
}

#[test]
fn test_version_output() {
    let tmp = TempDir::new().unwrap();
    lnfarm(tmp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_clean_and_show_are_exclusive() {
    let tmp = TempDir::new().unwrap();
    lnfarm(tmp.path())
        .args(["-t", "t", "-c", "-s"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
#[cfg(unix)]
fn test_create_links_source_tree() {
    let tmp = TempDir::new().unwrap();
    create_test_file(tmp.path(), "srcA/dirX/f.txt", "f");

    lnfarm(tmp.path())
        .args(["--no-config", "-t", "t", "srcA"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created:   1"))
        .stderr(predicate::str::contains("category=\"created\""))
        .stderr(predicate::str::contains("category=\"directory-created\""));

    let target = tmp.path().join("t");
    assert!(!fs::symlink_metadata(target.join("dirX")).unwrap().is_symlink());
    let referent = fs::read_link(target.join("dirX/f.txt")).unwrap();
    assert!(referent.is_absolute());
    assert_eq!(fs::read_to_string(target.join("dirX/f.txt")).unwrap(), "f");
}

#[test]
#[cfg(unix)]
fn test_second_create_reports_satisfied() {
    let tmp = TempDir::new().unwrap();
    create_test_file(tmp.path(), "src/a.txt", "a");

    lnfarm(tmp.path())
        .args(["--no-config", "-t", "t", "src"])
        .assert()
        .success();
    lnfarm(tmp.path())
        .args(["--no-config", "-v", "-t", "t", "src"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created:   0"))
        .stdout(predicate::str::contains("Satisfied: 1"))
        .stderr(predicate::str::contains("already-satisfied"));
}

#[test]
#[cfg(unix)]
fn test_clean_removes_links_and_prunes() {
    let tmp = TempDir::new().unwrap();
    create_test_file(tmp.path(), "srcA/dirX/f.txt", "f");

    lnfarm(tmp.path())
        .args(["--no-config", "-t", "t", "srcA"])
        .assert()
        .success();
    lnfarm(tmp.path())
        .args(["--no-config", "-c", "-t", "t", "srcA"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed:   1"))
        .stdout(predicate::str::contains("Pruned:    1"));

    let target = tmp.path().join("t");
    assert!(target.is_dir());
    assert_eq!(fs::read_dir(&target).unwrap().count(), 0);
    assert!(tmp.path().join("srcA/dirX/f.txt").is_file());
}

#[test]
fn test_show_prints_plan_without_changes() {
    let tmp = TempDir::new().unwrap();
    create_test_file(tmp.path(), "src/a/b.txt", "b");

    lnfarm(tmp.path())
        .args(["--no-config", "-s", "-t", "t", "src"])
        .assert()
        .success()
        .stdout(predicate::str::contains(" -> "))
        .stdout(predicate::str::contains("b.txt"));

    assert!(!tmp.path().join("t").exists());
}

#[test]
fn test_target_is_file_fails() {
    let tmp = TempDir::new().unwrap();
    create_test_file(tmp.path(), "src/a.txt", "a");
    create_test_file(tmp.path(), "t", "not a directory");

    lnfarm(tmp.path())
        .args(["--no-config", "-t", "t", "src"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is not a directory"));
}

#[test]
fn test_missing_source_fails_without_links() {
    let tmp = TempDir::new().unwrap();
    create_test_file(tmp.path(), "good/a.txt", "a");

    lnfarm(tmp.path())
        .args(["--no-config", "-t", "t", "good", "missing"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does not exist"));

    assert!(!tmp.path().join("t").exists());
}

#[test]
#[cfg(unix)]
fn test_config_ignore_patterns() {
    let tmp = TempDir::new().unwrap();
    create_test_file(tmp.path(), "src/.git/HEAD", "ref");
    create_test_file(tmp.path(), "src/bashrc", "rc");
    create_test_file(tmp.path(), "farm.toml", "ignore = [\".git/\"]\n");

    lnfarm(tmp.path())
        .args(["--config", "farm.toml", "-t", "t", "src"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created:   1"));

    assert!(tmp.path().join("t/bashrc").exists());
    assert!(!tmp.path().join("t/.git").exists());
}

#[test]
fn test_invalid_config_fails() {
    let tmp = TempDir::new().unwrap();
    create_test_file(tmp.path(), "src/a.txt", "a");
    create_test_file(tmp.path(), ".lnfarm.toml", "overwrite = true\n");

    lnfarm(tmp.path())
        .args(["-t", "t", "src"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to load configuration"));

    assert!(!tmp.path().join("t").exists());
}

#[test]
#[cfg(unix)]
fn test_leaf_symlink_is_never_used_as_parent() {
    let tmp = TempDir::new().unwrap();
    let outside = tmp.path().join("outside");
    fs::create_dir_all(&outside).unwrap();
    fs::create_dir_all(tmp.path().join("treeA")).unwrap();
    std::os::unix::fs::symlink(&outside, tmp.path().join("treeA/a")).unwrap();
    create_test_file(tmp.path(), "treeB/a/b.txt", "b");

    lnfarm(tmp.path())
        .args(["--no-config", "-t", "t", "treeA", "treeB"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created:   1"))
        .stdout(predicate::str::contains("Foreign:   1"));

    assert_eq!(fs::read_dir(&outside).unwrap().count(), 0);
}
