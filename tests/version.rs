//! Integration test: Verify binary prints correct version

use std::process::Command;

#[test]
fn binary_prints_version() {
    // --version exits before the TUI takes over the terminal
    let output = Command::new(env!("CARGO_BIN_EXE_calpanel"))
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(
        stdout.contains("0.1.0"),
        "Expected output to contain version '0.1.0', but got: {}",
        stdout
    );
}

#[test]
fn binary_rejects_invalid_date() {
    let output = Command::new(env!("CARGO_BIN_EXE_calpanel"))
        .args(["--value", "2024-02-30"])
        .output()
        .expect("Failed to execute binary");

    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(
        stderr.contains("2024-02-30"),
        "Expected error to name the rejected input, but got: {}",
        stderr
    );
}
