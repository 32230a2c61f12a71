use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const EXPORT: &str = r#"<!DOCTYPE NETSCAPE-Bookmark-file-1>
<META HTTP-EQUIV="Content-Type" CONTENT="text/html; charset=UTF-8">
<TITLE>Bookmarks</TITLE>
<H1>Bookmarks</H1>
<DL><p>
<DT><H3 ADD_DATE="1">Work</H3>
<DL><p>
<DT><A HREF="https://example.com" ADD_DATE="2000000000000000">Example</A>
<DT><A HREF="https://example.com" ADD_DATE="2000000000000000">Example</A>
</DL><p>
<DT><H3 ADD_DATE="1">ラベルなし</H3>
<DL><p>
<DT><A HREF="https://docs.example" ADD_DATE="1609459200999999">Docs</A>
</DL><p>
</DL><p>
"#;

fn markport(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("markport").unwrap();
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join("config-home"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_help() {
    let dir = tempdir().unwrap();
    markport(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_default_invocation_converts_configured_paths() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("GoogleBookmarks.html"), EXPORT).unwrap();

    markport(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Converted 2 bookmark(s)"));

    let json: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(dir.path().join("intermediate.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(json.as_array().unwrap().len(), 2);
    assert_eq!(json[0]["tags"], serde_json::json!(["Work"]));
    assert_eq!(json[0]["createDate"], 2_000_000_000);
    assert_eq!(json[1]["tags"], serde_json::json!([]));
    assert_eq!(json[1]["createDate"], 1_609_459_200);

    let html = fs::read_to_string(dir.path().join("Raindrop-out.html")).unwrap();
    assert_eq!(html.matches("<DT><A ").count(), 2);
    assert!(html.contains("TAGS=\"Work\">Example</A>"));
    assert!(html.contains(">main</H3>"));
}

#[test]
fn test_convert_with_flag_overrides() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("export.html"), EXPORT).unwrap();

    markport(dir.path())
        .args([
            "convert",
            "--input",
            "export.html",
            "--intermediate",
            "mid.json",
            "--output",
            "out.html",
            "--collection",
            "Imported",
            "--ignore-label",
            "Work",
        ])
        .assert()
        .success();

    let html = fs::read_to_string(dir.path().join("out.html")).unwrap();
    assert!(html.contains(">Imported</H3>"));
    assert!(html.contains("TAGS=\"ラベルなし\">Docs</A>"));
    assert!(html.contains("TAGS=\"\">Example</A>"));
    assert!(dir.path().join("mid.json").exists());
}

#[test]
fn test_missing_input_fails_with_nonzero_exit() {
    let dir = tempdir().unwrap();

    markport(dir.path())
        .args(["convert", "--input", "missing.html"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("I/O error"));

    assert!(!dir.path().join("intermediate.json").exists());
    assert!(!dir.path().join("Raindrop-out.html").exists());
}

#[test]
fn test_structural_error_fails_and_writes_nothing() {
    let dir = tempdir().unwrap();
    let broken = EXPORT.replace(
        "<A HREF=\"https://docs.example\" ADD_DATE=\"1609459200999999\">",
        "<A HREF=\"https://docs.example\">",
    );
    fs::write(dir.path().join("GoogleBookmarks.html"), broken).unwrap();

    markport(dir.path())
        .arg("convert")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ADD_DATE"));

    assert!(!dir.path().join("intermediate.json").exists());
    assert!(!dir.path().join("Raindrop-out.html").exists());
}

#[test]
fn test_orphan_nested_list_fails() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("GoogleBookmarks.html"),
        "<DL><p><DT><DL><p><DT><A HREF=\"https://example.com\" ADD_DATE=\"1\">x</A></DL></DL>",
    )
    .unwrap();

    markport(dir.path())
        .arg("convert")
        .assert()
        .failure()
        .stderr(predicate::str::contains("before any label heading"));
}

#[test]
fn test_inspect_json() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("GoogleBookmarks.html"), EXPORT).unwrap();

    let output = markport(dir.path())
        .args(["inspect", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["href"], "https://example.com");
    assert_eq!(json[1]["title"], "Docs");
}

#[test]
fn test_inspect_plain_without_color() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("GoogleBookmarks.html"), EXPORT).unwrap();

    markport(dir.path())
        .args(["inspect", "--nc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Example"))
        .stdout(predicate::str::contains("# Work"));
}

#[test]
fn test_render_from_intermediate() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("saved.json"),
        r#"[{"title": "Saved", "href": "https://saved.example", "createDate": 7, "tags": ["a", "b"]}]"#,
    )
    .unwrap();

    markport(dir.path())
        .args([
            "render",
            "--intermediate",
            "saved.json",
            "--output",
            "rendered.html",
        ])
        .assert()
        .success();

    let html = fs::read_to_string(dir.path().join("rendered.html")).unwrap();
    assert!(html.contains(
        "<DT><A HREF=\"https://saved.example\" ADD_DATE=\"7\" LAST_MODIFIED=\"7\" TAGS=\"a,b\">Saved</A>"
    ));
}

#[test]
fn test_config_file_and_show() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("markport.toml");
    fs::write(&config_path, "collection = \"FromToml\"\n").unwrap();

    markport(dir.path())
        .args(["--config", config_path.to_str().unwrap(), "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("collection: FromToml"));
}

#[test]
fn test_invalid_config_file_fails() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("broken.yml");
    fs::write(&config_path, "invalid: yaml: content:").unwrap();

    markport(dir.path())
        .args(["--config", config_path.to_str().unwrap(), "config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("YAML error"));
}

#[test]
fn test_config_save_rejects_unknown_extension() {
    let dir = tempdir().unwrap();

    markport(dir.path())
        .args(["config", "--save", "markport.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));

    assert!(!dir.path().join("markport.json").exists());
}
