//! Exit code integration tests for the `pagelinks` binary.
//!
//! | Code | Meaning                                   |
//! |------|-------------------------------------------|
//! |  0   | Success                                   |
//! |  1   | Syntax or usage error                     |
//! |  3   | Errors selecting input files, dirs        |
//! | 11   | Error in file I/O                         |

use assert_cmd::Command;
use std::fs;
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

fn pagelinks() -> Command {
    Command::cargo_bin("pagelinks").expect("pagelinks binary must be available")
}

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent");
    }
    fs::write(path, b"<html>").expect("write file");
}

// ============================================================================
// Code 0: success
// ============================================================================

#[test]
fn version_exits_zero() {
    pagelinks().arg("--version").assert().code(0);
}

#[test]
fn help_exits_zero() {
    pagelinks().arg("--help").assert().code(0);
}

#[test]
fn empty_tree_exits_zero() {
    let temp = tempfile::tempdir().expect("tempdir");
    pagelinks().current_dir(temp.path()).assert().code(0);
}

// ============================================================================
// Code 1: syntax or usage error
// ============================================================================

#[test]
fn unknown_option_exits_one() {
    let assert = pagelinks()
        .arg("--definitely-invalid-option")
        .assert()
        .code(1);
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).expect("stderr UTF-8");
    assert!(stderr.contains("syntax or usage error (code 1)"));
}

#[test]
fn surplus_operand_exits_one() {
    pagelinks().args(["first", "second"]).assert().code(1);
}

// ============================================================================
// Code 3: errors selecting input files, dirs
// ============================================================================

#[test]
fn missing_root_exits_three() {
    let assert = pagelinks()
        .arg("/nonexistent/path/for/pagelinks")
        .assert()
        .code(3);
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).expect("stderr UTF-8");
    assert!(stderr.contains("pagelinks error:"));
    assert!(stderr.contains("(code 3)"));
}

// ============================================================================
// Code 11: error in file I/O
// ============================================================================

#[test]
fn unopenable_output_exits_eleven() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();
    touch(&root.join("demo/index.html"));

    // A directory cannot be opened for appending, regardless of privileges.
    fs::create_dir(root.join("occupied")).expect("create occupied path");

    let assert = pagelinks()
        .current_dir(root)
        .args(["--output", "occupied"])
        .assert()
        .code(11);
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).expect("stderr UTF-8");
    assert!(stderr.contains("failed to append links"));
    assert!(stderr.contains("(code 11)"));
}

#[cfg(unix)]
#[test]
fn unwritable_output_directory_exits_eleven() {
    // Permission checks do not apply to the super-user; skip there.
    if permission_checks_bypassed() {
        return;
    }

    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();
    touch(&root.join("demo/index.html"));

    let readonly = root.join("readonly");
    fs::create_dir(&readonly).expect("create readonly dir");
    fs::set_permissions(&readonly, fs::Permissions::from_mode(0o555))
        .expect("make dir read-only");

    pagelinks()
        .current_dir(root)
        .args(["--output", "readonly/README.md"])
        .assert()
        .code(11);

    fs::set_permissions(&readonly, fs::Permissions::from_mode(0o755))
        .expect("restore permissions");
}

#[cfg(unix)]
fn permission_checks_bypassed() -> bool {
    // A write into a fresh 0o555 directory succeeding means permission
    // checks do not apply to this process.
    let probe = tempfile::tempdir().expect("probe tempdir");
    fs::set_permissions(probe.path(), fs::Permissions::from_mode(0o555)).expect("probe perms");
    let bypassed = fs::write(probe.path().join("probe"), b"x").is_ok();
    let _ = fs::set_permissions(probe.path(), fs::Permissions::from_mode(0o755));
    bypassed
}
