use std::process::ExitCode;

use process_scheduler::{policies::fcfs, run_cli};

fn main() -> ExitCode {
    run_cli(Box::new(fcfs::new()))
}
