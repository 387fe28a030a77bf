//! Integration tests for the transcribe flow
//!
//! End-to-end transcription needs a real API key and an audio fixture, so
//! those tests are ignored by default.
//! Run with: cargo test --test transcribe_integration -- --ignored

use std::process::Command;

#[test]
fn test_missing_file_reports_error() {
    let output = Command::new("cargo")
        .args(["run", "--", "nonexistent.wav", "--no-progress"])
        .output()
        .expect("Failed to run command");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("not found") || stderr.contains("No such file"),
        "Expected 'not found' error, got: {}",
        stderr
    );
}

#[test]
fn test_unsupported_format_reports_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("notes.xyz");
    std::fs::write(&path, b"test").unwrap();

    let output = Command::new("cargo")
        .args(["run", "--", "--no-progress"])
        .arg(&path)
        .output()
        .expect("Failed to run command");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unsupported format"),
        "Expected unsupported-format error, got: {}",
        stderr
    );
}

#[test]
fn test_missing_api_key_reports_error() {
    // Point the config lookup at an empty home so no stored api_key leaks in
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let audio = dir.path().join("note.wav");
    std::fs::write(&audio, b"RIFF").unwrap();

    let output = Command::new("cargo")
        .args(["run", "--", "--no-progress"])
        .arg(&audio)
        .env_remove("OPENAI_API_KEY")
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("config"))
        .output()
        .expect("Failed to run command");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("OPENAI_API_KEY"),
        "Expected missing-credential error, got: {}",
        stderr
    );
}

#[test]
#[ignore] // Requires OPENAI_API_KEY and a test audio file at tests/fixtures/test.wav
fn test_transcribe_audio_file() {
    let output = Command::new("cargo")
        .args(["run", "--", "tests/fixtures/test.wav", "--no-progress"])
        .output()
        .expect("Failed to run command");

    assert!(output.status.success(), "Command failed: {:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Transcription"),
        "No transcription output: {}",
        stdout
    );
}

#[test]
#[ignore] // Requires OPENAI_API_KEY and a test audio file at tests/fixtures/test.wav
fn test_transcribe_with_output_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("result.txt");

    let output = Command::new("cargo")
        .args(["run", "--", "tests/fixtures/test.wav", "--no-progress", "-o"])
        .arg(&output_path)
        .output()
        .expect("Failed to run command");

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(output_path.exists());

    let saved = std::fs::read_to_string(&output_path).unwrap();
    for line in saved.lines() {
        assert!(
            line.ends_with(['.', '!', '?']),
            "saved line {:?} lacks terminal punctuation",
            line
        );
    }
}
