use std::process::ExitCode;

use freeze_poetry::main as freeze_poetry_main;

fn main() -> ExitCode {
    freeze_poetry_main(std::env::args_os())
}
