//! Integration tests for `sync-version`.

use crate::common::{fixture_project, freeze_poetry_command};

const RAW_PACKAGE_JSON: &str = r#"{
  "name": "sell",
  "version": "0.3.2",
  "private": true,
  "scripts": {
    "build": "webpack --mode production"
  },
  "devDependencies": {
    "prettier": "^2.0.5"
  }
}
"#;

/// Run `sync-version` with an empty `PATH` so only a project-local prettier is found.
fn sync_version(root: &std::path::Path, extra: &[&str]) -> std::process::Output {
    freeze_poetry_command()
        .arg("sync-version")
        .args(extra)
        .arg(root)
        .env("PATH", "")
        .output()
        .expect("Failed to execute freeze-poetry")
}

#[test]
fn prints_version_and_updates_package_json() {
    let project = fixture_project("sell");

    let output = sync_version(project.path(), &[]);
    assert!(
        output.status.success(),
        "sync-version failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(String::from_utf8_lossy(&output.stdout), "0.3.2\n");
    assert_eq!(
        fs_err::read_to_string(project.path().join("package.json")).unwrap(),
        RAW_PACKAGE_JSON
    );
}

#[test]
fn matching_versions_leave_package_json_alone() {
    let project = fixture_project("sell");
    let package_json = project.path().join("package.json");
    let compact = r#"{"name":"sell","version":"0.3.2"}"#;
    fs_err::write(&package_json, compact).unwrap();

    let output = sync_version(project.path(), &["--quiet"]);
    assert!(output.status.success());
    // The version is still printed in quiet mode.
    assert_eq!(String::from_utf8_lossy(&output.stdout), "0.3.2\n");
    assert!(output.stderr.is_empty());
    assert_eq!(fs_err::read_to_string(&package_json).unwrap(), compact);
}

#[test]
fn missing_pyproject_version_is_an_error() {
    let project = fixture_project("sell");
    fs_err::write(
        project.path().join("pyproject.toml"),
        "[tool.poetry]\nname = \"sell\"\n",
    )
    .unwrap();

    let output = sync_version(project.path(), &[]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("tool.poetry.version"), "{stderr}");
}

#[cfg(unix)]
mod formatter {
    use super::*;
    use crate::common::install_fake_prettier;

    #[test]
    fn local_prettier_output_is_written() {
        let project = fixture_project("sell");
        // Re-indents to four spaces so formatted output is distinguishable.
        install_fake_prettier(project.path(), "exec sed 's/^  /    /'");

        let output = sync_version(project.path(), &[]);
        assert!(output.status.success());

        let written = fs_err::read_to_string(project.path().join("package.json")).unwrap();
        assert!(written.contains("\n    \"version\": \"0.3.2\",\n"), "{written}");
    }

    #[test]
    fn hung_prettier_falls_back_to_raw_json() {
        let project = fixture_project("sell");
        install_fake_prettier(
            project.path(),
            "echo 'prettier: still warming up' >&2\nexec sleep 30",
        );

        let output = sync_version(project.path(), &["--formatter-timeout", "1"]);
        let stderr = String::from_utf8_lossy(&output.stderr);

        assert!(output.status.success(), "{stderr}");
        assert_eq!(String::from_utf8_lossy(&output.stdout), "0.3.2\n");
        assert!(stderr.contains("warning: Formatter timed out"), "{stderr}");
        assert!(stderr.contains("still warming up"), "{stderr}");
        assert_eq!(
            fs_err::read_to_string(project.path().join("package.json")).unwrap(),
            RAW_PACKAGE_JSON
        );
    }

    #[test]
    fn failing_prettier_falls_back_to_raw_json() {
        let project = fixture_project("sell");
        install_fake_prettier(
            project.path(),
            "cat > /dev/null\necho '[error] stdin: SyntaxError' >&2\nexit 2",
        );

        let output = sync_version(project.path(), &[]);
        let stderr = String::from_utf8_lossy(&output.stderr);

        assert!(output.status.success(), "{stderr}");
        assert!(stderr.contains("SyntaxError"), "{stderr}");
        assert_eq!(
            fs_err::read_to_string(project.path().join("package.json")).unwrap(),
            RAW_PACKAGE_JSON
        );
    }
}
