use assert_cmd::Command;
use regex::Regex;
use std::fs;

fn write_profiles(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("profiles.json");
    fs::write(
        &path,
        r#"[
            {"id": "1", "name": "Ada", "stack": {"languages": ["rust", "c"], "frameworks": ["axum"]}},
            {"id": "2", "name": "Lin", "stack": {"tools": ["docker"]}, "likeCount": 4},
            {"id": "3", "name": ""}
        ]"#,
    )
    .unwrap();
    path
}

#[test]
fn test_layout_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let profiles = write_profiles(&dir);

    let output = Command::cargo_bin("devgalaxy")
        .unwrap()
        .args(["layout", "--json", "--seed", "3", "--profiles"])
        .arg(&profiles)
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["mode"], "orbital");
    assert_eq!(doc["statistics"]["planetCount"], 3);
    assert_eq!(doc["statistics"]["techStackTotal"], 3);
    assert_eq!(doc["planets"][2]["ownerLabel"], "3");
    assert_eq!(doc["planets"][1]["color"], "#8b5cf6");
}

#[test]
fn test_layout_table_output() {
    let dir = tempfile::tempdir().unwrap();
    let profiles = write_profiles(&dir);

    let output = Command::cargo_bin("devgalaxy")
        .unwrap()
        .args(["layout", "--max-planets", "2", "--profiles"])
        .arg(&profiles)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let planets = Regex::new(r"Planets\s*\|\s*2").unwrap();
    assert!(planets.is_match(&stdout), "stdout was:\n{}", stdout);
    assert!(stdout.contains("Ada"));
}

#[test]
fn test_layout_missing_file_fails() {
    Command::cargo_bin("devgalaxy")
        .unwrap()
        .args(["layout", "--profiles", "nope/profiles.json"])
        .assert()
        .failure();
}

#[test]
fn test_transition_logs_phases_in_order() {
    let output = Command::cargo_bin("devgalaxy")
        .unwrap()
        .args(["transition", "--from", "home", "--to", "galaxy"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let melt = stdout.find("melt").unwrap();
    let swap = stdout.find("swap content home -> galaxy").unwrap();
    let reform = stdout.find("reform").unwrap();
    let complete = stdout.find("complete").unwrap();
    assert!(melt < swap && swap < reform && reform < complete);
    assert!(stdout.contains("transitioning = false"));
}
