use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn promptstash(temp_dir: &TempDir) -> Command {
    let db_path = temp_dir.path().join("promptstash.db");
    let mut cmd = Command::cargo_bin("promptstash").unwrap();
    cmd.env("PROMPTSTASH_DB_URL", db_path.to_str().unwrap());
    cmd
}

#[test]
fn given_no_args_when_run_then_lists_nothing() {
    let temp_dir = tempfile::tempdir().unwrap();

    promptstash(&temp_dir)
        .assert()
        .success()
        .stderr(predicate::str::contains("Found 0 entries"));
}

#[test]
fn given_add_when_search_then_entry_listed() {
    let temp_dir = tempfile::tempdir().unwrap();

    promptstash(&temp_dir)
        .args([
            "add",
            "-p",
            "Explain lifetimes",
            "-t",
            "rust,cli",
            "-c",
            "Code",
            "-m",
            "Claude",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Added entry"));

    promptstash(&temp_dir)
        .args(["search", "lifetimes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Explain lifetimes"))
        .stderr(predicate::str::contains("Found 1 entries"));
}

#[test]
fn given_blank_add_when_search_then_nothing_stored() {
    let temp_dir = tempfile::tempdir().unwrap();

    promptstash(&temp_dir).arg("add").assert().success();

    promptstash(&temp_dir)
        .arg("search")
        .assert()
        .success()
        .stderr(predicate::str::contains("Found 0 entries"));
}

#[test]
fn given_unknown_category_when_add_then_usage_error() {
    let temp_dir = tempfile::tempdir().unwrap();

    promptstash(&temp_dir)
        .args(["add", "-p", "something", "-c", "Gardening"])
        .assert()
        .failure();
}

#[test]
fn given_entries_when_search_json_then_valid_json() {
    let temp_dir = tempfile::tempdir().unwrap();

    promptstash(&temp_dir)
        .args(["add", "-p", "A watercolor fox", "-c", "Image", "-m", "Midjourney"])
        .assert()
        .success();

    let output = promptstash(&temp_dir)
        .args(["search", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = parsed.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["prompt"], "A watercolor fox");
    assert_eq!(entries[0]["category"], "Image");
    assert_eq!(entries[0]["ai_model"], "Midjourney");
}

#[test]
fn given_entries_when_stats_then_counts_shown() {
    let temp_dir = tempfile::tempdir().unwrap();

    promptstash(&temp_dir)
        .args(["add", "-p", "one", "-c", "Code", "-m", "Claude"])
        .assert()
        .success();
    promptstash(&temp_dir)
        .args(["add", "-p", "two", "-c", "Code", "-m", "ChatGPT"])
        .assert()
        .success();

    promptstash(&temp_dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Code").and(predicate::str::contains("2")));
}

#[test]
fn given_entries_when_export_to_stdout_then_csv_header() {
    let temp_dir = tempfile::tempdir().unwrap();

    promptstash(&temp_dir)
        .args(["add", "-p", "Explain lifetimes", "-l", "https://example.com"])
        .assert()
        .success();

    promptstash(&temp_dir)
        .args(["export", "-o", "-"])
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("id,prompt,link,tags,category,ai_model,date_added")
                .and(predicate::str::contains("Explain lifetimes")),
        );
}

#[test]
fn given_entries_when_export_to_file_then_file_written() {
    let temp_dir = tempfile::tempdir().unwrap();

    promptstash(&temp_dir)
        .args(["add", "-p", "Explain lifetimes"])
        .assert()
        .success();

    let out_path = temp_dir.path().join("out.csv");
    promptstash(&temp_dir)
        .args(["export", "-o", out_path.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Exported 1 entries"));

    let contents = std::fs::read_to_string(&out_path).unwrap();
    assert!(contents.starts_with("id,prompt,link,tags,category,ai_model,date_added"));
    assert!(contents.contains("Explain lifetimes"));
}

#[test]
fn given_filtered_export_when_no_match_then_header_only() {
    let temp_dir = tempfile::tempdir().unwrap();

    promptstash(&temp_dir)
        .args(["add", "-p", "Explain lifetimes"])
        .assert()
        .success();

    promptstash(&temp_dir)
        .args(["export", "nosuchterm", "-o", "-"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Explain lifetimes").not());
}
