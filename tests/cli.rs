//! End-to-end tests for the edudesk binary.
//!
//! Each test points `HOME` at a fresh temporary directory so the config file
//! and snapshot database start empty.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn edudesk(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("edudesk").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("EDUDESK_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn json(home: &TempDir, args: &[&str]) -> serde_json::Value {
    let output = edudesk(home)
        .args(["--output", "json"])
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_help() {
    let home = TempDir::new().unwrap();
    edudesk(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("focus timer"));
}

#[test]
fn test_direct_messages_share_one_conversation() {
    let home = TempDir::new().unwrap();

    let first = json(
        &home,
        &["chat", "send", "--from", "t1", "--name", "Ms. Reed", "--role", "teacher", "--to", "s1", "hi"],
    );
    let reply = json(
        &home,
        &["chat", "send", "--from", "s1", "--name", "Ana", "--to", "t1", "hello"],
    );
    assert_eq!(first["conversation_id"], reply["conversation_id"]);

    let inbox = json(&home, &["chat", "inbox", "--user", "s1"]);
    assert_eq!(inbox["count"], 1);
    assert_eq!(inbox["unread"], 2);
    assert_eq!(inbox["items"][0]["last_message"]["content"], "hello");

    let thread = json(&home, &["chat", "thread", "--between", "t1", "s1"]);
    assert_eq!(thread["count"], 2);
}

#[test]
fn test_group_flow() {
    let home = TempDir::new().unwrap();

    let group = json(&home, &["chat", "group", "--name", "Class 7B", "--members", "t1,s1,s2"]);
    let id = group["id"].as_str().unwrap().to_string();
    assert_eq!(group["kind"], "group");

    json(
        &home,
        &["chat", "send", "--from", "t1", "--name", "Ms. Reed", "--conversation", &id, "Quiz Friday"],
    );

    let inbox = json(&home, &["chat", "inbox", "--user", "s2"]);
    assert_eq!(inbox["unread"], 1);

    edudesk(&home)
        .args(["chat", "read", "--conversation", &id, "--user", "s2"])
        .assert()
        .success();

    let inbox = json(&home, &["chat", "inbox", "--user", "s2"]);
    assert_eq!(inbox["unread"], 0);
}

#[test]
fn test_send_to_unknown_conversation_fails() {
    let home = TempDir::new().unwrap();
    edudesk(&home)
        .args(["chat", "send", "--from", "s1", "--name", "Ana", "--conversation", "missing", "hi"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Not found: Conversation missing"));
}

#[test]
fn test_edit_and_delete() {
    let home = TempDir::new().unwrap();
    let sent = json(
        &home,
        &["chat", "send", "--from", "t1", "--name", "R", "--to", "s1", "typo"],
    );
    let id = sent["id"].as_str().unwrap().to_string();

    let edited = json(&home, &["chat", "edit", &id, "fixed"]);
    assert_eq!(edited["content"], "fixed");
    assert_eq!(edited["timestamp"], sent["timestamp"]);

    edudesk(&home).args(["chat", "delete", &id]).assert().success();
    edudesk(&home).args(["chat", "delete", &id]).assert().code(3);
}

#[test]
fn test_focus_status_defaults() {
    let home = TempDir::new().unwrap();
    let status = json(&home, &["focus", "status"]);
    assert_eq!(status["kind"], "focus");
    assert_eq!(status["state"], "idle");
    assert_eq!(status["remaining_seconds"], 1500);
    assert_eq!(status["cycle"], 1);
}

#[test]
fn test_focus_config_changes_interval() {
    let home = TempDir::new().unwrap();
    edudesk(&home)
        .args(["focus", "config", "--focus", "50", "--break", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("50 minutes"));

    let status = json(&home, &["focus", "status"]);
    assert_eq!(status["remaining_seconds"], 3000);
    assert!(home.path().join(".edudesk").join("config.yaml").exists());
}

#[test]
fn test_focus_stats_and_history_empty() {
    let home = TempDir::new().unwrap();
    let stats = json(&home, &["focus", "stats"]);
    assert_eq!(stats["today_cycles"], 0);
    assert_eq!(stats["week"]["focus_sessions"], 0);

    let history = json(&home, &["focus", "history"]);
    assert_eq!(history["count"], 0);
}

#[test]
fn test_focus_clear_requires_force() {
    let home = TempDir::new().unwrap();
    edudesk(&home)
        .args(["focus", "clear"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));

    edudesk(&home)
        .args(["focus", "clear", "--force"])
        .assert()
        .success();
}

#[test]
fn test_bad_config_is_reported() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".edudesk");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.yaml"), "focus: [1, 2]").unwrap();

    edudesk(&home)
        .args(["focus", "status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_completions() {
    let home = TempDir::new().unwrap();
    edudesk(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("edudesk"));
}
