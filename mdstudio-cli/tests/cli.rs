use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

const CONFIG: &str = "site_title: Test Site\ncontent: content\noutput: dist\n";

fn write_doc(dir: &std::path::Path, slug: &str, raw: &str) {
    let content = dir.join("content");
    fs::create_dir_all(&content).unwrap();
    fs::write(content.join(format!("{}.md", slug)), raw).unwrap();
}

#[test]
fn init_scaffolds_project() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    #[allow(deprecated)]
    Command::cargo_bin("mdstudio")?
        .current_dir(dir.path())
        .args(["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mdstudio initialized"));

    assert!(dir.path().join("mdstudio.yml").exists());
    assert!(dir.path().join("content/welcome.md").exists());
    Ok(())
}

#[test]
fn list_json_is_sorted_by_title() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("mdstudio.yml"), CONFIG)?;
    write_doc(dir.path(), "zeta", "---\ntitle: Alpha\n---\n\nBody\n");
    write_doc(dir.path(), "alpha", "---\ntitle: Zulu\n---\n\nBody\n");

    #[allow(deprecated)]
    let assert = Command::cargo_bin("mdstudio")?
        .current_dir(dir.path())
        .args(["list", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    let value: Value = serde_json::from_str(&stdout)?;
    let arr = value.as_array().expect("json array");
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["slug"], "zeta");
    assert_eq!(arr[0]["title"], "Alpha");
    assert_eq!(arr[1]["slug"], "alpha");
    Ok(())
}

#[test]
fn write_then_read_round_trips() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("mdstudio.yml"), CONFIG)?;
    let raw = "---\ntitle: Note\n---\n\n# Note\n\nHello.\n";

    #[allow(deprecated)]
    Command::cargo_bin("mdstudio")?
        .current_dir(dir.path())
        .args(["write", "my-note"])
        .write_stdin(raw)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote my-note"));

    #[allow(deprecated)]
    Command::cargo_bin("mdstudio")?
        .current_dir(dir.path())
        .args(["read", "my-note"])
        .assert()
        .success()
        .stdout(predicate::eq(raw));
    Ok(())
}

#[test]
fn write_sanitizes_slug() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("mdstudio.yml"), CONFIG)?;

    #[allow(deprecated)]
    Command::cargo_bin("mdstudio")?
        .current_dir(dir.path())
        .args(["write", "My Note!"])
        .write_stdin("Body\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote MyNote"));

    assert!(dir.path().join("content/MyNote.md").exists());
    Ok(())
}

#[test]
fn write_rejects_empty_slug() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("mdstudio.yml"), CONFIG)?;

    #[allow(deprecated)]
    Command::cargo_bin("mdstudio")?
        .current_dir(dir.path())
        .args(["write", "***"])
        .write_stdin("Body\n")
        .assert()
        .failure();
    Ok(())
}

#[test]
fn delete_reports_missing_document() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("mdstudio.yml"), CONFIG)?;

    #[allow(deprecated)]
    Command::cargo_bin("mdstudio")?
        .current_dir(dir.path())
        .args(["delete", "ghost"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not found: ghost"));
    Ok(())
}

#[test]
fn rewrite_convert_docs_numbers_sections() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("doc.md");
    fs::write(&input, "# Hi\n## A\n## B\n")?;

    #[allow(deprecated)]
    let assert = Command::cargo_bin("mdstudio")?
        .current_dir(dir.path())
        .args(["rewrite", "convert-docs", "doc.md"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    assert!(stdout.contains("## Table of Contents"));
    assert!(stdout.contains("## 1. A"));
    assert!(stdout.contains("## 2. B"));
    assert!(stdout.contains("theme: docs"));
    Ok(())
}

#[test]
fn rewrite_unknown_rule_fails() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    #[allow(deprecated)]
    Command::cargo_bin("mdstudio")?
        .current_dir(dir.path())
        .args(["rewrite", "frobnicate"])
        .write_stdin("# Doc\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("frobnicate"));
    Ok(())
}

#[test]
fn rewrite_write_to_persists_result() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("mdstudio.yml"), CONFIG)?;

    #[allow(deprecated)]
    Command::cargo_bin("mdstudio")?
        .current_dir(dir.path())
        .args(["rewrite", "normalize", "--write-to", "clean"])
        .write_stdin("#  Title\n\n\n\n\nBody   \n")
        .assert()
        .success();

    let stored = fs::read_to_string(dir.path().join("content/clean.md"))?;
    assert!(!stored.contains("\n\n\n"));
    assert!(stored.ends_with('\n'));
    Ok(())
}

#[test]
fn index_emits_valid_json() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("mdstudio.yml"), CONFIG)?;
    write_doc(
        dir.path(),
        "guide",
        "---\ntitle: Guide\ntags: [rust, notes]\n---\n\n# Guide\n\nSome `code` here.\n",
    );

    #[allow(deprecated)]
    let assert = Command::cargo_bin("mdstudio")?
        .current_dir(dir.path())
        .args(["index", "--pretty"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    let value: Value = serde_json::from_str(&stdout)?;
    let arr = value.as_array().expect("json array");
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["slug"], "guide");
    assert_eq!(arr[0]["tags"], serde_json::json!(["rust", "notes"]));
    assert!(arr[0]["text"].as_str().unwrap().contains("code"));
    Ok(())
}

#[test]
fn export_writes_site_tree() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("mdstudio.yml"), CONFIG)?;
    write_doc(
        dir.path(),
        "hello",
        "---\ntitle: Hello\n---\n\n# Hello\n\nWorld.\n",
    );

    #[allow(deprecated)]
    Command::cargo_bin("mdstudio")?
        .current_dir(dir.path())
        .args(["export"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 4 file(s)"));

    let dist = dir.path().join("dist");
    assert!(dist.join("assets/style.css").exists());
    assert!(dist.join("index.html").exists());
    assert!(dist.join("search-index.json").exists());

    let page = fs::read_to_string(dist.join("site/hello/index.html"))?;
    assert!(page.contains("<h1>Hello</h1>"));

    let home = fs::read_to_string(dist.join("index.html"))?;
    assert!(home.contains("Test Site"));
    assert!(home.contains("site/hello/"));
    Ok(())
}
