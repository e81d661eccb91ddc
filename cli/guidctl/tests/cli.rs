//! End-to-end tests for the `guid` binary.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

const FIXED: &str = "01234567-89ab-cdef-1032-547698badcfe";

fn guid(config: &Path, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_guid"))
        .arg("--config")
        .arg(config)
        .args(args)
        .env_remove("GUID_SHOW_LOWERCASE")
        .env_remove("GUID_SHOW_UPPERCASE")
        .env_remove("GUID_SHOW_SNIPPETS")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn guid");

    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(stdin.as_bytes())
        .expect("write stdin");

    child.wait_with_output().expect("wait for guid")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn parse_renders_struct_form() {
    let dir = tempfile::tempdir().unwrap();
    let out = guid(
        &dir.path().join("settings.json"),
        &["parse", &format!("{{{}}}", FIXED.to_uppercase()), "--format", "x"],
        "",
    );
    assert!(out.status.success());
    assert_eq!(
        stdout(&out).trim_end(),
        "{0x01234567, 0x89ab, 0xcdef, {0x10, 0x32, 0x54, 0x76, 0x98, 0xba, 0xdc, 0xfe}}"
    );
}

#[test]
fn parse_failure_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let out = guid(&dir.path().join("settings.json"), &["parse", "not-a-guid"], "");
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("Invalid GUID"));
}

#[test]
fn new_generates_requested_count() {
    let dir = tempfile::tempdir().unwrap();
    let out = guid(
        &dir.path().join("settings.json"),
        &["new", "--count", "3", "--upper"],
        "",
    );
    assert!(out.status.success());
    let text = stdout(&out);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    for line in lines {
        assert_eq!(line.len(), 36);
        assert_eq!(line, line.to_uppercase());
    }
}

#[test]
fn insert_with_pick_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("ids.txt");
    fs::write(&file, "a=;b=;").unwrap();

    let out = guid(
        &dir.path().join("settings.json"),
        &[
            "insert",
            "--file",
            file.to_str().unwrap(),
            "--at",
            "2",
            "--at",
            "5",
            "--pick",
            "1",
            "--unique",
        ],
        "",
    );
    assert!(out.status.success());

    let edited = fs::read_to_string(&file).unwrap();
    let first = &edited[2..38];
    let second = &edited[41..77];
    assert_eq!(&edited[..2], "a=");
    assert_eq!(&edited[38..41], ";b=");
    assert_ne!(first, second);
}

#[test]
fn insert_prompt_cancel_leaves_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("ids.txt");
    fs::write(&file, "keep").unwrap();

    let out = guid(
        &dir.path().join("settings.json"),
        &["insert", "--file", file.to_str().unwrap()],
        "\n",
    );
    assert!(out.status.success());
    assert_eq!(fs::read_to_string(&file).unwrap(), "keep");
}

#[test]
fn insert_prompt_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let out = guid(&dir.path().join("settings.json"), &["insert"], "2\n");
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.starts_with('{') && text.ends_with('}'));
    assert_eq!(text.len(), 38);
}

#[test]
fn config_set_changes_pick_list() {
    let dir = tempfile::tempdir().unwrap();
    let settings = dir.path().join("settings.json");

    let out = guid(&settings, &["config", "set", "--snippets", "false"], "");
    assert!(out.status.success());

    let out = guid(&settings, &["list", "--output", "json"], "");
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    let rows = value["data"].as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|row| row["has_placeholder"] == false));
}

#[test]
fn config_set_without_flags_fails() {
    let dir = tempfile::tempdir().unwrap();
    let settings = dir.path().join("settings.json");

    let out = guid(&settings, &["config", "set"], "");
    assert_eq!(out.status.code(), Some(1));
    assert!(!settings.exists());
}

#[test]
fn insert_rejects_point_of_wrong_shape() {
    let dir = tempfile::tempdir().unwrap();
    let settings = dir.path().join("settings.json");

    let out = guid(&settings, &["insert", "--at", "1:3", "--pick", "1"], "");
    assert!(!out.status.success());
    assert!(stdout(&out).is_empty());

    let out = guid(&settings, &["insert", "--select", "5", "--pick", "1"], "");
    assert!(!out.status.success());
    assert!(stdout(&out).is_empty());
}
