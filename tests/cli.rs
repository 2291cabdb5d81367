use std::io::Write;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::{Builder, NamedTempFile};

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("contract-auditr").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn clause_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut f = Builder::new().suffix(suffix).tempfile().unwrap();
    f.write_all(content.as_bytes()).unwrap();
    f
}

#[test]
fn demo_json_report_trips_default_gate() {
    cmd()
        .args(["--demo", "--report", "json"])
        .assert()
        .code(1)
        .stdout(contains("\"aggregate_risk_score\": 80"))
        .stdout(contains("\"flagged_count\": 3"))
        .stdout(contains("\"risk_level\": \"CRITICAL\""));
}

#[test]
fn demo_quiet_summary_with_gate_disabled() {
    cmd()
        .args(["--demo", "--quiet", "--fail-on", "none"])
        .assert()
        .success()
        .stdout(contains("Vendor_Service_Agreement_v4.pdf"))
        .stdout(contains("80/100"));
}

#[test]
fn demo_terminal_lists_critical_findings() {
    cmd()
        .args(["--demo", "--fail-on", "none"])
        .assert()
        .success()
        .stdout(contains("Clause CL-09: Immediate payment terms rejected."))
        .stdout(contains("Clause CL-01: One-sided indemnification detected."));
}

#[test]
fn list_policies() {
    cmd()
        .arg("--list-policies")
        .assert()
        .success()
        .stdout(contains("RISK-001"))
        .stdout(contains("Net 45 or Net 60"));
}

#[test]
fn explain_unknown_policy_fails() {
    cmd()
        .args(["--explain", "RISK-999"])
        .assert()
        .failure()
        .stderr(contains("unsupported policy id: RISK-999"));
}

#[test]
fn unmatched_document_reports_zero() {
    let f = clause_file(
        ".json",
        r#"{"document": "nda.pdf", "clauses": [
            {"id": "CL-01", "label": "Onboarding", "text": "Standard onboarding procedures apply."}
        ]}"#,
    );

    cmd()
        .arg(f.path())
        .args(["--report", "json"])
        .assert()
        .success()
        .stdout(contains("\"document_name\": \"nda.pdf\""))
        .stdout(contains("\"aggregate_risk_score\": 0"))
        .stdout(contains("\"findings\": []"))
        .stdout(contains("CL-01"));
}

#[test]
fn compliant_text_document_passes() {
    let f = clause_file(
        ".txt",
        "[CL-01] Indemnification\nEach party shall provide mutual indemnification.\n\n\
         [CL-02] Governing Law\nThe governing law is the State of Delaware.\n",
    );

    cmd()
        .arg(f.path())
        .args(["--report", "json", "--name", "Reseller MSA"])
        .assert()
        .success()
        .stdout(contains("\"document_name\": \"Reseller MSA\""))
        .stdout(contains("\"flagged_count\": 1"));
}

#[test]
fn empty_document_rejected_when_clauses_required() {
    let f = clause_file(".toml", "document = \"blank.pdf\"\n");

    cmd()
        .arg(f.path())
        .arg("--require-clauses")
        .assert()
        .failure()
        .stderr(contains("contains no clauses"));
}
