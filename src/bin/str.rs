use std::process::ExitCode;

use process_scheduler::{policies::str_policy, run_cli};

fn main() -> ExitCode {
    run_cli(Box::new(str_policy::new()))
}
