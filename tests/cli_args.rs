//! Tests for CLI argument parsing against the real binary.

use std::process::Command;

fn pet_gallery_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pet-gallery"))
}

#[test]
fn test_help_lists_options() {
    let output = pet_gallery_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--animal"));
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--log-level"));
}

#[test]
fn test_version_flag() {
    let output = pet_gallery_cmd()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_invalid_animal_exits_with_error() {
    let output = pet_gallery_cmd()
        .arg("--animal")
        .arg("hamster")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("hamster"));
}

#[test]
fn test_invalid_config_exits_before_touching_terminal() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[gallery]\npage_size = 0\n").unwrap();

    let output = pet_gallery_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to load config"));
}
