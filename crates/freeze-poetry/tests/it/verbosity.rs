use crate::common::{fixture_project, freeze_poetry_command};

#[test]
fn quiet_suppresses_progress() {
    let project = fixture_project("sell");

    let output = freeze_poetry_command()
        .args(["--quiet", "freeze", "--prod"])
        .arg(project.path())
        .output()
        .expect("Failed to execute freeze-poetry");

    assert!(output.status.success());
    assert!(
        output.stderr.is_empty(),
        "Expected no output with --quiet, got: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(project.path().join("requirements.txt").is_file());
}

#[test]
fn verbose_reports_missing_hash_metadata() {
    let project = fixture_project("sell");

    let output = freeze_poetry_command()
        .args(["-v", "freeze", "--prod"])
        .arg(project.path())
        .output()
        .expect("Failed to execute freeze-poetry");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success());
    assert!(
        stderr.contains("debug: No file metadata for `sell-local`"),
        "Expected a missing-metadata diagnostic, got: {stderr}"
    );
    assert!(stderr.contains("debug: 4 requirements"), "{stderr}");
}

#[test]
fn quiet_still_reports_errors() {
    let project = tempfile::TempDir::new().unwrap();
    fs_err::write(project.path().join("poetry.lock"), "not = [valid").unwrap();

    let output = freeze_poetry_command()
        .args(["-q", "freeze"])
        .arg(project.path())
        .output()
        .expect("Failed to execute freeze-poetry");

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("error:"));
}
