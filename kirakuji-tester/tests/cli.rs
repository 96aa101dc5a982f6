use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "kirakuji-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_list_scenarios_writes_output() {
    let exe = env!("CARGO_BIN_EXE_kirakuji-tester");
    let output_path = temp_path("list");
    let status = Command::new(exe)
        .args(["--list-scenarios", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("Available scenarios"));
    assert!(content.contains("draw-only"));
}

#[test]
fn cli_runs_validation_offline_with_json_report() {
    let exe = env!("CARGO_BIN_EXE_kirakuji-tester");
    let output_path = temp_path("validation");
    let status = Command::new(exe)
        .env_remove("KIRAKUJI_API_BASE")
        .args([
            "--scenarios",
            "validation",
            "--iterations",
            "2",
            "--report",
            "json",
            "--output",
        ])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    let value: serde_json::Value = serde_json::from_str(&content).expect("json report");
    assert_eq!(value[0]["scenario_name"], "validation");
    assert_eq!(value[0]["passed"], true);
    assert_eq!(value[0]["iterations_run"], 2);
}

#[test]
fn cli_fails_network_scenario_without_api_base() {
    let exe = env!("CARGO_BIN_EXE_kirakuji-tester");
    let output_path = temp_path("missing-base");
    let output = Command::new(exe)
        .env_remove("KIRAKUJI_API_BASE")
        .args(["--scenarios", "draw-only", "--report", "markdown", "--output"])
        .arg(&output_path)
        .output()
        .expect("run cli");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("KIRAKUJI_API_BASE"));
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("❌ draw-only"));
}
