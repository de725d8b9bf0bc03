use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use std::fs;

const T0: &str = "2026-03-01T09:00:00Z";

/// Helper to create a temporary database and set it as the data location
fn setup_test_env() -> (TempDir, std::sync::MutexGuard<'static, ()>) {
    let guard = test_env::lock_test_env();
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");

    let config_dir = temp_dir.path().join(".srl");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("rc"), format!("data.location={}\n", db_path.display())).unwrap();

    std::env::set_var("HOME", temp_dir.path().to_str().unwrap());
    (temp_dir, guard)
}

fn srl(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("srl").unwrap();
    cmd.env("HOME", temp_dir.path()).env("TZ", "UTC");
    cmd
}

fn add_request(temp_dir: &TempDir, category: &str, title: &str) {
    srl(temp_dir)
        .args(["--now", T0, "add", category, title])
        .assert()
        .success();
}

#[test]
fn test_pipeline_unknown_category_falls_back_to_government() {
    let (temp_dir, _guard) = setup_test_env();
    srl(&temp_dir)
        .args(["pipeline", "spaceflight"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(government)"))
        .stdout(predicate::str::contains("awaiting_authority"));
}

#[test]
fn test_pipeline_json_lists_stages_in_order() {
    let (temp_dir, _guard) = setup_test_env();
    let output = srl(&temp_dir).args(["pipeline", "translation", "--json"]).output().unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let keys: Vec<&str> = json["stages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["key"].as_str().unwrap())
        .collect();
    assert_eq!(keys, vec!["submitted", "quote_sent", "in_progress", "review", "completed"]);
}

#[test]
fn test_pipeline_arabic_labels() {
    let (temp_dir, _guard) = setup_test_env();
    srl(&temp_dir)
        .args(["--locale", "ar", "pipeline", "personal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("مكتمل"));
}

#[test]
fn test_categories_lists_all_five() {
    let (temp_dir, _guard) = setup_test_env();
    let assert = srl(&temp_dir).args(["categories"]).assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    for name in ["government", "business", "personal", "legal", "translation"] {
        assert!(stdout.contains(name), "missing {} in:\n{}", name, stdout);
    }
}

#[test]
fn test_add_starts_at_first_stage() {
    let (temp_dir, _guard) = setup_test_env();
    srl(&temp_dir)
        .args(["--now", T0, "add", "legal", "Power", "of", "attorney"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created request 1 (SR-20260301-0001): Power of attorney"));

    let output = srl(&temp_dir).args(["--now", T0, "show", "1", "--json"]).output().unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "submitted");
    assert_eq!(json["category"], "legal");
    assert_eq!(json["history"].as_array().unwrap().len(), 1);
}

#[test]
fn test_add_unknown_category_suggests() {
    let (temp_dir, _guard) = setup_test_env();
    srl(&temp_dir)
        .args(["add", "goverment", "Visa"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Did you mean: government?"));
}

#[test]
fn test_show_evaluates_sla_as_of_now() {
    let (temp_dir, _guard) = setup_test_env();
    add_request(&temp_dir, "translation", "Birth certificate");

    // 18h into a 24h budget: 75%, past the 70% warning
    let output = srl(&temp_dir)
        .args(["--now", "2026-03-02T03:00:00Z", "show", "1", "--json"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["sla"]["status"], "at_risk");
    assert_eq!(json["sla"]["hours_elapsed"], 18.0);
    assert_eq!(json["sla_label"], "Remaining: 6h");
    assert_eq!(json["reference"], "SR-20260301-0001");
}

#[test]
fn test_show_breached_badge() {
    let (temp_dir, _guard) = setup_test_env();
    add_request(&temp_dir, "translation", "Contract");

    srl(&temp_dir)
        .args(["--now", "2026-03-02T11:30:00Z", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Overdue: 3h"))
        .stdout(predicate::str::contains("History"));
}

#[test]
fn test_advance_walks_pipeline_and_stops_at_last_stage() {
    let (temp_dir, _guard) = setup_test_env();
    add_request(&temp_dir, "personal", "Passport renewal");

    for expected in ["Documents Pending", "In Progress", "Completed"] {
        srl(&temp_dir)
            .args(["--now", T0, "advance", "1"])
            .assert()
            .success()
            .stdout(predicate::str::contains(expected));
    }

    srl(&temp_dir)
        .args(["advance", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already at the last stage"));
}

#[test]
fn test_back_at_first_stage_fails() {
    let (temp_dir, _guard) = setup_test_env();
    add_request(&temp_dir, "business", "Trade license");

    srl(&temp_dir)
        .args(["back", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already at the first stage"));
}

#[test]
fn test_advance_from_terminal_status_explains() {
    let (temp_dir, _guard) = setup_test_env();
    add_request(&temp_dir, "business", "Trade license");
    srl(&temp_dir).args(["move", "1", "cancelled"]).assert().success();

    srl(&temp_dir)
        .args(["advance", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not part of the business pipeline"));
}

#[test]
fn test_move_rejects_status_outside_pipeline() {
    let (temp_dir, _guard) = setup_test_env();
    add_request(&temp_dir, "personal", "ID card");

    srl(&temp_dir)
        .args(["move", "1", "quote_sent"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not part of the personal pipeline"));
}

#[test]
fn test_completion_freezes_sla_clock() {
    let (temp_dir, _guard) = setup_test_env();
    add_request(&temp_dir, "translation", "Diploma");

    srl(&temp_dir)
        .args(["--now", "2026-03-01T19:00:00Z", "move", "1", "completed", "--note", "delivered"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SLA clock stopped"));

    // A week later the evaluation still reflects the 10h it took
    let output = srl(&temp_dir)
        .args(["--now", "2026-03-08T09:00:00Z", "show", "1", "--json"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["sla"]["hours_elapsed"], 10.0);
    assert_eq!(json["sla"]["status"], "on_track");
    assert_eq!(json["history"][1]["note"], "delivered");
}

#[test]
fn test_list_hides_closed_unless_all() {
    let (temp_dir, _guard) = setup_test_env();
    add_request(&temp_dir, "government", "Visa");
    add_request(&temp_dir, "legal", "Notary");
    srl(&temp_dir).args(["move", "2", "rejected"]).assert().success();

    srl(&temp_dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Visa"))
        .stdout(predicate::str::contains("Notary").not());

    srl(&temp_dir)
        .args(["list", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Notary"));

    srl(&temp_dir)
        .args(["list", "--status", "rejected"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Notary"))
        .stdout(predicate::str::contains("Visa").not());
}

#[test]
fn test_list_empty() {
    let (temp_dir, _guard) = setup_test_env();
    srl(&temp_dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No requests found."));
}

#[test]
fn test_history_records_transitions() {
    let (temp_dir, _guard) = setup_test_env();
    add_request(&temp_dir, "government", "Residency");
    srl(&temp_dir).args(["--now", "2026-03-01T10:00:00Z", "adv", "1"]).assert().success();
    srl(&temp_dir).args(["--now", "2026-03-01T11:00:00Z", "1", "back"]).assert().success();

    let output = srl(&temp_dir).args(["history", "1", "--json"]).output().unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let events = json.as_array().unwrap();
    assert_eq!(events.len(), 3);
    assert_eq!(events[0]["from_status"], serde_json::Value::Null);
    assert_eq!(events[1]["to_status"], "documents_pending");
    assert_eq!(events[2]["to_status"], "submitted");
}

#[test]
fn test_rename_and_delete() {
    let (temp_dir, _guard) = setup_test_env();
    add_request(&temp_dir, "personal", "Old title");

    srl(&temp_dir)
        .args(["rename", "1", "New", "title"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Renamed request 1: New title"));

    srl(&temp_dir)
        .args(["delete", "1", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted request 1"));

    srl(&temp_dir)
        .args(["show", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_delete_prompt_can_be_declined() {
    let (temp_dir, _guard) = setup_test_env();
    add_request(&temp_dir, "personal", "Keep me");

    srl(&temp_dir)
        .args(["delete", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled."));

    srl(&temp_dir).args(["show", "1"]).assert().success();
}

#[test]
fn test_invalid_request_id() {
    let (temp_dir, _guard) = setup_test_env();
    srl(&temp_dir)
        .args(["show", "abc"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error:"))
        .stderr(predicate::str::contains("Invalid request ID"));
}

#[test]
fn test_targets_override_changes_evaluation() {
    let (temp_dir, _guard) = setup_test_env();
    add_request(&temp_dir, "government", "Work permit");

    srl(&temp_dir)
        .args(["targets", "set", "government", "1d", "--warning", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SLA target for government: 24h (warning at 50%)"));

    // 12h of 24h is exactly 50%: inclusive threshold
    let output = srl(&temp_dir)
        .args(["--now", "2026-03-01T21:00:00Z", "show", "1", "--json"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["target_hours"], 24.0);
    assert_eq!(json["sla"]["status"], "at_risk");

    srl(&temp_dir)
        .args(["targets", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom"));

    srl(&temp_dir)
        .args(["targets", "remove", "government"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default 72h applies"));
}

#[test]
fn test_targets_reject_invalid_values() {
    let (temp_dir, _guard) = setup_test_env();
    srl(&temp_dir)
        .args(["targets", "set", "legal", "0"])
        .assert()
        .failure()
        .code(1);

    srl(&temp_dir)
        .args(["targets", "set", "legal", "24", "--warning", "150"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_report_summarizes_open_requests() {
    let (temp_dir, _guard) = setup_test_env();
    add_request(&temp_dir, "translation", "Late one");
    add_request(&temp_dir, "government", "Fresh one");

    srl(&temp_dir)
        .args(["--now", "2026-03-02T12:00:00Z", "report"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SRL DASHBOARD"))
        .stdout(predicate::str::contains("OPEN REQUESTS: 2"))
        .stdout(predicate::str::contains("ATTENTION NEEDED"))
        .stdout(predicate::str::contains("Late one"))
        .stdout(predicate::str::contains("Overdue: 3h"));
}

#[test]
fn test_ambiguous_abbreviation() {
    let (temp_dir, _guard) = setup_test_env();
    srl(&temp_dir)
        .args(["a"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Ambiguous command"));
}

#[test]
fn test_invalid_config_is_user_error() {
    let (temp_dir, _guard) = setup_test_env();
    fs::write(temp_dir.path().join(".srl").join("rc"), "sla.hours=sometimes\n").unwrap();
    srl(&temp_dir)
        .args(["pipeline"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn test_out_of_range_times_are_user_errors() {
    let (temp_dir, _guard) = setup_test_env();
    srl(&temp_dir)
        .args(["--now", "-10000000000", "list"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Time out of range"));

    srl(&temp_dir)
        .args(["sla", "--start", "-inf", "--target", "24"])
        .assert()
        .failure()
        .code(1);

    srl(&temp_dir)
        .args(["sla", "--start", "now", "--target", "1e400"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("out of range"));
}
