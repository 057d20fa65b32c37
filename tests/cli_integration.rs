//! Integration tests that run the CLI binary.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_moltcha"));
    cmd.env_remove("MOLTCHA_MAX_SKIP");
    cmd
}

/// Spawn the command with `input` piped to stdin and wait for it.
fn run_with_stdin(mut cmd: Command, input: &str) -> Output {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("binary not found - run cargo build first");
    child
        .stdin
        .as_mut()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("write to stdin");
    child.wait_with_output().expect("wait on child")
}

#[test]
fn cli_help_succeeds_and_outputs_usage() {
    let output = bin()
        .arg("--help")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("solve"), "expected subcommands in usage text");
    assert!(stdout.contains("batch"));
    assert!(stdout.contains("EXAMPLES"));
}

#[test]
fn cli_version_succeeds() {
    let output = bin()
        .arg("--version")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("moltcha"));
}

#[test]
fn solve_prints_the_two_decimal_answer() {
    // Run from a temp dir so dotenv() won't load a .env from the project root
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin()
        .arg("solve")
        .arg("oNe HuNdReD m^i^n^u^s f!o!r!t!y")
        .current_dir(tmp.path())
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(String::from_utf8_lossy(&output.stdout), "60.00\n");
}

#[test]
fn solve_reads_the_challenge_from_stdin() {
    let mut cmd = bin();
    cmd.arg("solve").arg("-");
    let output = run_with_stdin(cmd, "three slows by ten\n");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(String::from_utf8_lossy(&output.stdout), "-7.00\n");
}

#[test]
fn solve_unsolvable_exits_with_error() {
    let output = bin()
        .arg("solve")
        .arg("the quick brown fox")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(!output.status.success(), "expected failure for unsolvable text");
    assert!(String::from_utf8_lossy(&output.stdout).is_empty(), "no guessed answer");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("could not solve"),
        "expected solve failure message, got: {}",
        stderr
    );
}

#[test]
fn solve_emits_the_verification_payload() {
    let output = bin()
        .args(["solve", "--json", "--code", "abc123", "twelve plus thirteen"])
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let payload: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is one JSON object");
    assert_eq!(
        payload,
        serde_json::json!({"verification_code": "abc123", "answer": "25.00"})
    );
}

#[test]
fn solve_json_without_code_wraps_the_answer() {
    let output = bin()
        .args(["solve", "--json", "six times seven"])
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    let payload: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is one JSON object");
    assert_eq!(payload, serde_json::json!({"answer": "42.00"}));
}

#[test]
fn solve_envelope_extracts_and_answers_the_challenge() {
    let resp = r#"{
        "success": true,
        "post": {
            "id": "p1",
            "verification": {
                "verification_code": "k3y",
                "challenge_text": "t!e!n slows by t,h,r,e,e"
            }
        }
    }"#;
    let mut cmd = bin();
    cmd.args(["solve", "--envelope", "-"]);
    let output = run_with_stdin(cmd, resp);

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let payload: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is one JSON object");
    assert_eq!(
        payload,
        serde_json::json!({"verification_code": "k3y", "answer": "7.00"})
    );
}

#[test]
fn solve_envelope_without_challenge_exits_with_error() {
    let mut cmd = bin();
    cmd.args(["solve", "--envelope", "-"]);
    let output = run_with_stdin(cmd, r#"{"success": true, "post": {"id": "p1"}}"#);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("no verification challenge"),
        "expected missing-challenge message, got: {}",
        stderr
    );
}

#[test]
fn solve_code_flag_requires_json() {
    let output = bin()
        .args(["solve", "--code", "abc123", "twelve plus thirteen"])
        .output()
        .expect("binary not found - run cargo build first");

    assert!(!output.status.success(), "--code without --json should be rejected");
}

#[test]
fn max_skip_flag_tightens_the_noise_budget() {
    let shattered = "t.w.e.l.v.e plus two";
    let output = bin()
        .args(["solve", shattered])
        .output()
        .expect("binary not found - run cargo build first");
    assert!(output.status.success(), "default budget covers single-char gaps");
    assert_eq!(String::from_utf8_lossy(&output.stdout), "14.00\n");

    let output = bin()
        .args(["solve", "--max-skip", "0", shattered])
        .output()
        .expect("binary not found - run cargo build first");
    assert!(!output.status.success(), "a zero budget cannot cross the gaps");
}

#[test]
fn max_skip_env_var_is_honored() {
    let output = bin()
        .env("MOLTCHA_MAX_SKIP", "0")
        .args(["solve", "t.w.e.l.v.e plus two"])
        .output()
        .expect("binary not found - run cargo build first");

    assert!(!output.status.success(), "MOLTCHA_MAX_SKIP=0 should break shattered words");
}

#[test]
fn batch_prints_one_line_per_challenge() {
    let mut cmd = bin();
    cmd.arg("batch");
    let input = "twelve plus thirteen\nno arithmetic here\nfive divided by zero\n20 slows by 5\n";
    let output = run_with_stdin(cmd, input);

    assert!(
        output.status.success(),
        "batch always exits 0, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "25.00\nunsolvable\nunsolvable\n15.00\n"
    );
}

#[test]
fn vocab_lists_the_builtin_table() {
    let output = bin()
        .arg("vocab")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Number words:"));
    assert!(stdout.contains("twenty"));
    assert!(stdout.contains("Operator phrases:"));
    assert!(stdout.contains("divided by"));
    assert!(stdout.contains("left-affects-right"));
    assert!(stdout.contains("accumulate"));
}

#[test]
fn completions_generates_a_script() {
    let output = bin()
        .args(["completions", "bash"])
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    assert!(!output.stdout.is_empty());
}
