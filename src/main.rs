use std::process::ExitCode;

fn main() -> ExitCode {
    log2clip_lib::run()
}
