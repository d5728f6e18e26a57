use std::process::ExitCode;

fn main() -> ExitCode {
    guilttrip::init();
    match guilttrip::cli::run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            guilttrip::cli::output::error(&err);
            ExitCode::FAILURE
        }
    }
}
