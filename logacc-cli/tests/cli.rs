use assert_cmd::prelude::*;
use assert_fs::prelude::*;
// Add methods on commands
use predicates::prelude::*; // Used for writing assertions
use std::process::Command; // Run programs

fn log_file(contents: &str) -> Result<assert_fs::NamedTempFile, Box<dyn std::error::Error>> {
    let file = assert_fs::NamedTempFile::new("predictions.log")?;
    file.write_str(contents)?;
    Ok(file)
}

#[test]
fn half_correct_report() -> Result<(), Box<dyn std::error::Error>> {
    let file = log_file(
        "Current batch: 0\n - image 0: Prediction=1. Label=1\n - image 1: Prediction=0. Label=1\n",
    )?;

    let mut cmd = Command::cargo_bin("logacc")?;
    cmd.arg(file.path());
    cmd.assert().success().stdout(
        "Total Predictions: 2\nCorrect Predictions: 1\nAccuracy: 50.00%\n",
    );
    Ok(())
}

#[test]
fn all_correct_report() -> Result<(), Box<dyn std::error::Error>> {
    let file = log_file("Prediction=2. Label=2\nPrediction=2. Label=2\nPrediction=2. Label=2\n")?;

    let mut cmd = Command::cargo_bin("logacc")?;
    cmd.arg(file.path());
    cmd.assert().success().stdout(
        "Total Predictions: 3\nCorrect Predictions: 3\nAccuracy: 100.00%\n",
    );
    Ok(())
}

#[test]
fn none_correct_report() -> Result<(), Box<dyn std::error::Error>> {
    let file = log_file(
        "a Prediction=1. Label=0\nb Prediction=2. Label=0\nc Prediction=3. Label=0\nd Prediction=4. Label=0\n",
    )?;

    let mut cmd = Command::cargo_bin("logacc")?;
    cmd.arg(file.path());
    cmd.assert().success().stdout(
        "Total Predictions: 4\nCorrect Predictions: 0\nAccuracy: 0.00%\n",
    );
    Ok(())
}

#[test]
fn unmatched_lines_do_not_shift_pairs() -> Result<(), Box<dyn std::error::Error>> {
    let file = log_file(
        "Prediction=5. Label=5\nPrediction=5 Label=6\nnoise\nPrediction=6. Label=6\nPrediction=7.Label=7\n",
    )?;

    let mut cmd = Command::cargo_bin("logacc")?;
    cmd.arg(file.path());
    cmd.assert().success().stdout(
        "Total Predictions: 2\nCorrect Predictions: 2\nAccuracy: 100.00%\n",
    );
    Ok(())
}

#[test]
fn repeated_runs_are_identical() -> Result<(), Box<dyn std::error::Error>> {
    let file = log_file("Prediction=3. Label=1\nPrediction=1. Label=1\nPrediction=4. Label=4\n")?;

    let first = Command::cargo_bin("logacc")?.arg(file.path()).output()?;
    let second = Command::cargo_bin("logacc")?.arg(file.path()).output()?;
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(
        String::from_utf8(first.stdout)?,
        "Total Predictions: 3\nCorrect Predictions: 2\nAccuracy: 66.67%\n"
    );
    Ok(())
}

#[test]
fn no_predictions_warns_and_fails() -> Result<(), Box<dyn std::error::Error>> {
    let file = log_file("Current batch: 0\nnothing matched here\n")?;

    let mut cmd = Command::cargo_bin("logacc")?;
    cmd.arg(file.path());
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Warning: No predictions found in the log file.",
        ))
        .stdout(predicate::str::contains("Total Predictions").not());
    Ok(())
}

#[test]
fn missing_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    let missing = dir.child("missing.log");

    let mut cmd = Command::cargo_bin("logacc")?;
    cmd.arg(missing.path());
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("Error: File '"))
        .stdout(predicate::str::contains("missing.log' not found."));
    Ok(())
}

#[test]
fn directory_is_read_error() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;

    let mut cmd = Command::cargo_bin("logacc")?;
    cmd.arg(dir.path());
    cmd.assert()
        .code(1)
        .stdout(predicate::str::starts_with("Error while reading the file:"));
    Ok(())
}

#[test]
fn two_arguments_print_usage() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    let first = dir.child("first.log");
    let second = dir.child("second.log");

    let mut cmd = Command::cargo_bin("logacc")?;
    cmd.arg(first.path()).arg(second.path());
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: logacc <LOG_FILE>"))
        .stdout(predicate::str::contains("not found").not());
    Ok(())
}

#[test]
fn no_arguments_print_usage() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("logacc")?;
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: logacc <LOG_FILE>"));
    Ok(())
}

#[test]
fn empty_path_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("logacc")?;
    cmd.arg("");
    cmd.assert()
        .code(1)
        .stdout("Error: File '' not found.\n");
    Ok(())
}

#[test]
fn diagnostics_stay_off_by_default() -> Result<(), Box<dyn std::error::Error>> {
    let file = log_file("Prediction=1. Label=1\n")?;

    let mut cmd = Command::cargo_bin("logacc")?;
    cmd.env_remove("RUST_LOG").arg(file.path());
    cmd.assert()
        .success()
        .stdout("Total Predictions: 1\nCorrect Predictions: 1\nAccuracy: 100.00%\n")
        .stderr("");
    Ok(())
}

#[test]
fn lone_carriage_return_log() -> Result<(), Box<dyn std::error::Error>> {
    let file = log_file("Prediction=1. Label=1\rPrediction=2. Label=3\rPrediction=4.\rLabel=4\r")?;

    let mut cmd = Command::cargo_bin("logacc")?;
    cmd.arg(file.path());
    cmd.assert().success().stdout(
        "Total Predictions: 2\nCorrect Predictions: 1\nAccuracy: 50.00%\n",
    );
    Ok(())
}

#[test]
fn values_wider_than_64_bits() -> Result<(), Box<dyn std::error::Error>> {
    let file = log_file("Prediction=99999999999999999999. Label=99999999999999999999\n")?;

    let mut cmd = Command::cargo_bin("logacc")?;
    cmd.arg(file.path());
    cmd.assert().success().stdout(
        "Total Predictions: 1\nCorrect Predictions: 1\nAccuracy: 100.00%\n",
    );
    Ok(())
}
