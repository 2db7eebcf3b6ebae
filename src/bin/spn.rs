use std::process::ExitCode;

use process_scheduler::{policies::spn, run_cli};

fn main() -> ExitCode {
    run_cli(Box::new(spn::new()))
}
