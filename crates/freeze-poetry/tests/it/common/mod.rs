// The `unreachable_pub` is to silence false positives in RustRover.
#![allow(dead_code, unreachable_pub)]

use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

/// Insta snapshot filters shared across freeze-poetry tests.
pub const INSTA_FILTERS: &[(&str, &str)] = &[
    // Rewrite Windows output to Unix output
    (r"\\([\w\d]|\.)", "/$1"),
    (r"freeze-poetry\.exe", "freeze-poetry"),
    // freeze-poetry version display
    (
        r"freeze-poetry \d+\.\d+\.\d+(-(alpha|beta|rc)\.\d+)?(\+\d+)?",
        r"freeze-poetry [VERSION]",
    ),
    // Trim end-of-line whitespaces
    (r"([^\s])[ \t]+(\r?\n)", "$1$2"),
];

/// Returns the freeze-poetry binary that cargo built before launching the tests.
pub fn get_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_freeze-poetry"))
}

/// Create a `freeze-poetry` command for testing.
pub fn freeze_poetry_command() -> Command {
    let mut command = Command::new(get_bin());
    // Clear environment variables that might interfere with tests.
    command.env_remove("FREEZE_POETRY_FORMATTER_TIMEOUT");
    command
}

/// Return the path to a test fixture project.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Copy a fixture project into a fresh temporary directory.
pub fn fixture_project(name: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for entry in fs_err::read_dir(fixture(name)).unwrap() {
        let entry = entry.unwrap();
        fs_err::copy(entry.path(), tmp.path().join(entry.file_name())).unwrap();
    }
    tmp
}

/// Install an executable `prettier` stand-in under `node_modules/.bin`.
///
/// The script sets its own `PATH`, since tests run freeze-poetry with an
/// empty one to hide any globally installed prettier.
#[cfg(unix)]
pub fn install_fake_prettier(root: &std::path::Path, script: &str) {
    use std::os::unix::fs::PermissionsExt;

    let bin = root.join("node_modules").join(".bin");
    fs_err::create_dir_all(&bin).unwrap();
    let prettier = bin.join("prettier");
    fs_err::write(
        &prettier,
        format!("#!/bin/sh\nPATH=/usr/local/bin:/usr/bin:/bin\n{script}\n"),
    )
    .unwrap();
    fs_err::set_permissions(&prettier, std::fs::Permissions::from_mode(0o755)).unwrap();
}

/// Snapshot test helper macro. Runs a command and asserts against an insta snapshot.
#[macro_export]
macro_rules! freeze_poetry_snapshot {
    ($filters:expr, $command:expr, @$expected:literal) => {{
        let output = $command.output().expect("Failed to execute freeze-poetry");
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        let mut combined = format!(
            "success: {:?}\nexit_code: {}\n----- stdout -----\n{}\n----- stderr -----\n{}",
            output.status.success(),
            output.status.code().unwrap_or(-1),
            stdout.trim(),
            stderr.trim(),
        );

        // Apply filters
        for (pattern, replacement) in $filters.iter() {
            let re = regex::Regex::new(pattern).expect("Invalid filter regex");
            combined = re.replace_all(&combined, *replacement).to_string();
        }

        insta::assert_snapshot!(combined, @$expected);
    }};
}
