//! End-to-end tests driving the `pagelinks` binary against temporary trees.

use assert_cmd::Command;
use std::fs;
use std::path::Path;

const BASE: &str = "https://joeiddon.github.io/fields/";

fn pagelinks() -> Command {
    Command::cargo_bin("pagelinks").expect("pagelinks binary must be available")
}

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent");
    }
    fs::write(path, b"<html>").expect("write file");
}

#[test]
fn bare_invocation_appends_links_for_working_directory() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();
    touch(&root.join("a/index.html"));
    touch(&root.join("a/b/index.html"));
    touch(&root.join(".hidden/index.html"));
    touch(&root.join("c/notindex.html"));

    pagelinks().current_dir(root).assert().success();

    let content = fs::read_to_string(root.join("README.md")).expect("read README");
    assert_eq!(
        content,
        format!("{BASE}a/b/index.html\n\n{BASE}a/index.html\n\n")
    );
}

#[test]
fn single_top_level_page_produces_two_lines() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();
    touch(&root.join("index.html"));

    pagelinks().current_dir(root).assert().success();

    let content = fs::read_to_string(root.join("README.md")).expect("read README");
    assert_eq!(content, format!("{BASE}index.html\n\n"));
}

#[test]
fn rerunning_doubles_the_appended_lines() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();
    touch(&root.join("demo/index.html"));

    pagelinks().current_dir(root).assert().success();
    let first = fs::read_to_string(root.join("README.md")).expect("read README");

    pagelinks().current_dir(root).assert().success();
    let second = fs::read_to_string(root.join("README.md")).expect("read README");

    assert_eq!(second, first.repeat(2));
}

#[test]
fn empty_tree_appends_nothing() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();

    pagelinks().current_dir(root).assert().success();

    assert!(!root.join("README.md").exists());
}

#[test]
fn existing_readme_content_is_preserved() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();
    touch(&root.join("demo/index.html"));
    fs::write(root.join("README.md"), "# Simulations\n").expect("seed README");

    pagelinks().current_dir(root).assert().success();

    let content = fs::read_to_string(root.join("README.md")).expect("read README");
    assert_eq!(content, format!("# Simulations\n{BASE}demo/index.html\n\n"));
}

#[test]
fn explicit_root_output_and_base_url_are_honoured() {
    let temp = tempfile::tempdir().expect("tempdir");
    let tree = temp.path().join("tree");
    touch(&tree.join("one/index.html"));
    let output = temp.path().join("LINKS.md");

    pagelinks()
        .current_dir(temp.path())
        .args([
            "--base-url",
            "https://example.net/demos/",
            "--output",
            "LINKS.md",
            "tree",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&output).expect("read output");
    assert_eq!(content, "https://example.net/demos/one/index.html\n\n");
}

#[test]
fn dry_run_prints_to_stdout_without_touching_output() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();
    touch(&root.join("demo/index.html"));

    pagelinks()
        .current_dir(root)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(format!("{BASE}demo/index.html\n\n"));

    assert!(!root.join("README.md").exists());
}

#[test]
fn verbose_run_reports_discovered_pages_on_stderr() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();
    touch(&root.join("demo/index.html"));

    let assert = pagelinks()
        .current_dir(root)
        .args(["--dry-run", "-v"])
        .assert()
        .success();
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).expect("stderr UTF-8");
    assert!(stderr.contains("demo/index.html"));
    assert!(stderr.contains("found 1 pages"));
}
