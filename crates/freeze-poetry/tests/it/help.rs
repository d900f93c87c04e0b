use crate::common::{INSTA_FILTERS, freeze_poetry_command};
use crate::freeze_poetry_snapshot;

#[test]
fn help_lists_commands() {
    let mut cmd = freeze_poetry_command();
    cmd.arg("help");

    freeze_poetry_snapshot!(&INSTA_FILTERS, cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Freeze a poetry lock file into hash-pinned requirements.

    Usage: freeze-poetry [OPTIONS] <COMMAND>

    Commands:
      freeze        Write requirements.txt (or requirements-dev.txt) from poetry.lock
      sync-version  Copy the pyproject.toml version into package.json and print it
      bump          Bump the patch version with poetry and yarn, then sync
      tag           Sync versions, then create a `v<version>` git tag
      help          Print this message or the help of the given subcommand(s)

    Options:
      -v, --verbose...  Increase logging verbosity
      -q, --quiet       Suppress all output except errors
      -h, --help        Print help
      -V, --version     Print version

    Use `freeze-poetry help <command>` for more information on a specific command.
    ----- stderr -----
    ");
}

#[test]
fn freeze_help_describes_modes() {
    let mut cmd = freeze_poetry_command();
    cmd.args(["help", "freeze"]);

    let output = cmd.output().expect("Failed to execute freeze-poetry");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    for flag in ["--dev", "--prod", "--force", "--no-hashes", "--indent", "[ROOT]"] {
        assert!(stdout.contains(flag), "Expected `{flag}` in help, got: {stdout}");
    }
    for flag in ["--tool", "--formatter-timeout"] {
        assert!(!stdout.contains(flag), "Unexpected `{flag}` in help, got: {stdout}");
    }
}

#[test]
fn version_flag() {
    let mut cmd = freeze_poetry_command();
    cmd.arg("--version");

    freeze_poetry_snapshot!(&INSTA_FILTERS, cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    freeze-poetry [VERSION]
    ----- stderr -----
    ");
}

#[test]
fn unknown_command_is_a_usage_error() {
    let output = freeze_poetry_command()
        .arg("lock")
        .output()
        .expect("Failed to execute freeze-poetry");

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("unrecognized subcommand"));
}
