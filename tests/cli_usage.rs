use std::process::Command;

#[test]
fn test_help_lists_flags_and_exits_zero() {
    let bin = env!("CARGO_BIN_EXE_treesvg");

    let output = Command::new(bin).arg("--help").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--input", "--path", "--output", "--no-title", "--theme", "--depth"] {
        assert!(
            stdout.contains(flag),
            "help output should mention {}; got:\n{}",
            flag,
            stdout
        );
    }
}

#[test]
fn test_missing_source_is_a_usage_error() {
    let bin = env!("CARGO_BIN_EXE_treesvg");

    let output = Command::new(bin).output().unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Usage") || stderr.contains("usage"),
        "expected usage text on stderr; got:\n{}",
        stderr
    );
}
