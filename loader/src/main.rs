//! `jarstrap` CLI entrypoint.
//!
//! Resolves the declared runtime artifacts and prints the resulting
//! classpath, exiting non-zero if any artifact could not be resolved.

use clap::Parser;
use jarstrap_loader::cli::Cli;
use jarstrap_loader::error::Result;
use jarstrap_loader::output::write_stderr_line;
use jarstrap_loader::run::run;
use std::io::Write;

fn main() {
    let command = Cli::parse().into_command();
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();
    let run_result = run(&command, &mut stdout, &mut stderr);
    let exit_code = exit_code_for_run_result(run_result, &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn exit_code_for_run_result(result: Result<()>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            write_stderr_line(stderr, format!("error: {err}"));
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jarstrap_loader::error::LoaderError;

    #[test]
    fn exit_code_for_run_result_returns_zero_on_success() {
        let mut stderr = Vec::new();
        let exit_code = exit_code_for_run_result(Ok(()), &mut stderr);
        assert_eq!(exit_code, 0);
        assert!(stderr.is_empty());
    }

    #[test]
    fn exit_code_for_run_result_prints_error_and_returns_one() {
        let mut stderr = Vec::new();
        let exit_code = exit_code_for_run_result(Err(LoaderError::NoRepositoryDir), &mut stderr);
        assert_eq!(exit_code, 1);

        let stderr_text = String::from_utf8(stderr).expect("stderr was not UTF-8");
        assert!(stderr_text.contains("could not determine a local repository directory"));
    }
}
