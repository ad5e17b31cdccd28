use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn standup(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("standup").unwrap();
    cmd.env("STANDUP_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("STANDUP_LOG");
    cmd
}

fn run(home: &TempDir, args: &[&str]) {
    standup(home).args(args).assert().success();
}

#[test]
fn test_start_add_and_export_markdown() {
    let home = tempfile::tempdir().unwrap();

    standup(&home)
        .args(["-d", "2025-01-06", "start"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Started entry for 2025-01-06"));

    run(&home, &["-d", "2025-01-06", "add", "today", "**Ship**", "release"]);
    run(&home, &["-d", "2025-01-06", "add", "today", "write", "notes"]);
    run(&home, &["-d", "2025-01-06", "indent", "today", "2"]);

    standup(&home)
        .args(["-d", "2025-01-06", "export", "--format", "markdown", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "**Today**\n- **Ship** release\n\t- write notes",
        ));
}

#[test]
fn test_plain_is_default_export_format() {
    let home = tempfile::tempdir().unwrap();

    run(&home, &["-d", "2025-01-06", "start"]);
    run(&home, &["-d", "2025-01-06", "add", "p", "[PR](http://x)"]);

    standup(&home)
        .args(["-d", "2025-01-06", "export", "-p"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Previously\n- PR (http://x)"));

    run(&home, &["config", "export-format", "slack-markup"]);

    standup(&home)
        .args(["-d", "2025-01-06", "export", "-p"])
        .assert()
        .success()
        .stdout(predicate::str::contains("*Previously*\n* <http://x|PR>"));
}

#[test]
fn test_start_copies_previous_today() {
    let home = tempfile::tempdir().unwrap();

    run(&home, &["-d", "2025-01-03", "start"]);
    run(&home, &["-d", "2025-01-03", "add", "today", "fix", "login"]);

    standup(&home)
        .args(["-d", "2025-01-06", "start"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Copied 1 task(s) from 2025-01-03"));

    standup(&home)
        .args(["-d", "2025-01-06", "export", "-p"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Previously\n- fix login\n\nToday"));
}

#[test]
fn test_copy_previous_can_be_turned_off() {
    let home = tempfile::tempdir().unwrap();

    run(&home, &["config", "copy-previous", "false"]);
    run(&home, &["-d", "2025-01-03", "start"]);
    run(&home, &["-d", "2025-01-03", "add", "today", "fix", "login"]);
    run(&home, &["-d", "2025-01-06", "start"]);

    standup(&home)
        .args(["-d", "2025-01-06", "export", "-p"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fix login").not());
}

#[test]
fn test_rm_removes_nested_items() {
    let home = tempfile::tempdir().unwrap();

    run(&home, &["-d", "2025-01-06", "start"]);
    run(&home, &["-d", "2025-01-06", "add", "today", "parent"]);
    run(&home, &["-d", "2025-01-06", "add", "today", "child"]);
    run(&home, &["-d", "2025-01-06", "add", "today", "sibling"]);
    run(&home, &["-d", "2025-01-06", "indent", "today", "2"]);
    run(&home, &["-d", "2025-01-06", "rm", "today", "1"]);

    standup(&home)
        .args(["-d", "2025-01-06", "export", "-p"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Today\n- sibling"))
        .stdout(predicate::str::contains("child").not());
}

#[test]
fn test_list_and_drop() {
    let home = tempfile::tempdir().unwrap();

    run(&home, &["-d", "2025-01-03", "start"]);
    run(&home, &["-d", "2025-01-06", "start"]);

    standup(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-01-06"))
        .stdout(predicate::str::contains("2025-01-03"));

    run(&home, &["drop", "2025-01-03"]);

    standup(&home)
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-01-03").not());
}

#[test]
fn test_errors_exit_nonzero() {
    let home = tempfile::tempdir().unwrap();

    standup(&home)
        .args(["-d", "2025-01-06", "export", "-p"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("2025-01-06"));

    run(&home, &["-d", "2025-01-06", "start"]);

    standup(&home)
        .args(["-d", "2025-01-06", "indent", "today", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No item 4"));
}

#[test]
fn test_outdent_and_after() {
    let home = tempfile::tempdir().unwrap();

    run(&home, &["-d", "2025-01-06", "start"]);
    run(&home, &["-d", "2025-01-06", "add", "today", "one"]);
    run(&home, &["-d", "2025-01-06", "add", "today", "two"]);
    run(&home, &["-d", "2025-01-06", "indent", "today", "2"]);
    run(&home, &["-d", "2025-01-06", "after", "today", "2", "three"]);
    run(&home, &["-d", "2025-01-06", "outdent", "today", "2"]);

    standup(&home)
        .args(["-d", "2025-01-06", "export", "-p"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Today\n- one\n    - three\n- two"));
}

#[test]
fn test_set_replaces_item_text() {
    let home = tempfile::tempdir().unwrap();

    run(&home, &["-d", "2025-01-06", "start"]);
    run(&home, &["-d", "2025-01-06", "add", "today", "draft"]);

    standup(&home)
        .args(["-d", "2025-01-06", "set", "today", "1", "ship", "the", "release"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ship the release"));

    standup(&home)
        .args(["-d", "2025-01-06", "export", "-p"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Today\n- ship the release"))
        .stdout(predicate::str::contains("draft").not());
}
