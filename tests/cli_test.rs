use anyhow::Result;
use httpmock::prelude::*;
use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::TempDir;

fn sum_report() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sum-report"));
    cmd.env_remove("TARGET_URL").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_file_source_with_single_dash_flags() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let dir = temp_dir.path();

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/status");
        then.status(200);
    });

    std::fs::write(dir.join("numbers.json"), "[10, 20, -5]")?;
    std::fs::write(
        dir.join("test.env"),
        format!("TARGET_URL={}\n", server.url("/status")),
    )?;

    let output = sum_report()
        .current_dir(dir)
        .args([
            "-source",
            "numbers.json",
            "-output",
            "result.txt",
            "-log",
            "run.log",
            "-config",
            "test.env",
        ])
        .output()?;

    assert!(output.status.success(), "{:?}", output);
    api_mock.assert();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Result saved to: result.txt"));

    let result = std::fs::read_to_string(dir.join("result.txt"))?;
    assert_eq!(result, "Numbers: [10 20 -5]\nSum: 25\nHTTP status: 200\n");

    let log = std::fs::read_to_string(dir.join("run.log"))?;
    assert!(log.contains("Program started"));
    assert!(log.contains("Numbers: [10 20 -5]"));
    assert!(log.contains("Sum: 25"));
    assert!(log.contains("response status: 200"));
    assert!(log.contains("Program finished successfully"));
    Ok(())
}

#[test]
fn test_cli_reads_stdin() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET);
        then.status(204);
    });
    std::fs::write(dir.join(".env"), format!("TARGET_URL={}\n", server.base_url())).unwrap();

    let mut child = sum_report()
        .current_dir(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"[1, 1, 1]\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success(), "{:?}", output);
    assert!(String::from_utf8_lossy(&output.stdout).contains("Enter a JSON array of integers"));

    let result = std::fs::read_to_string(dir.join("output.txt")).unwrap();
    assert_eq!(result, "Numbers: [1 1 1]\nSum: 3\nHTTP status: 204\n");
    assert!(dir.join("app.log").exists());
}

#[test]
fn test_cli_missing_target_url() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    std::fs::write(dir.join(".env"), "OTHER=1\n").unwrap();

    let output = sum_report()
        .current_dir(dir)
        .args(["--source", "unused.json"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("TARGET_URL"));
    assert!(!dir.join("app.log").exists());
    assert!(!dir.join("output.txt").exists());
}

#[test]
fn test_cli_missing_env_file() {
    let temp_dir = TempDir::new().unwrap();

    let output = sum_report()
        .current_dir(temp_dir.path())
        .args(["-config", "does-not-exist.env"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(!temp_dir.path().join("app.log").exists());
}

#[test]
fn test_cli_unreachable_url_logs_error() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    std::fs::write(dir.join("numbers.json"), "[2]").unwrap();
    std::fs::write(
        dir.join(".env"),
        format!("TARGET_URL=http://127.0.0.1:{}/\n", port),
    )
    .unwrap();

    let output = sum_report()
        .current_dir(dir)
        .args(["-source", "numbers.json"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(!dir.join("output.txt").exists());

    let log = std::fs::read_to_string(dir.join("app.log")).unwrap();
    assert!(log.contains("Sum: 2"));
    assert!(log.contains("ERROR"));
    assert!(log.contains("HTTP status: 0"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("HTTP status: 0"));
}

#[test]
fn test_cli_stdin_without_newline_fails() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200);
    });
    std::fs::write(dir.join(".env"), format!("TARGET_URL={}\n", server.base_url())).unwrap();

    let mut child = sum_report()
        .current_dir(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"[1, 2]").unwrap();
    let output = child.wait_with_output().unwrap();

    assert_eq!(output.status.code(), Some(3));
    api_mock.assert_hits(0);
    assert!(!dir.join("output.txt").exists());
}

#[test]
fn test_cli_process_environment_wins_over_env_file() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/from-process");
        then.status(200);
    });

    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    std::fs::write(dir.join("numbers.json"), "[5]").unwrap();
    std::fs::write(
        dir.join(".env"),
        format!("# unreachable on purpose\nTARGET_URL=http://127.0.0.1:{}/\n", port),
    )
    .unwrap();

    let output = sum_report()
        .current_dir(dir)
        .env("TARGET_URL", server.url("/from-process"))
        .args(["-source", "numbers.json"])
        .output()
        .unwrap();

    assert!(output.status.success(), "{:?}", output);
    api_mock.assert();
    let result = std::fs::read_to_string(dir.join("output.txt")).unwrap();
    assert_eq!(result, "Numbers: [5]\nSum: 5\nHTTP status: 200\n");
}
