use std::process::ExitCode;

use clap::Parser;
use process_scheduler::policies::round_robin::RoundRobin;
use process_scheduler::{run_cli, SchedulerError};

#[derive(Parser)]
#[command(name = "rr", about = "Round-robin process scheduler")]
struct Args {
    /// Quantum, in ticks, given to a process before it's rotated to the back.
    #[arg(default_value_t = 3)]
    quantum: i64,
}

fn main() -> ExitCode {
    let args = Args::parse();
    if args.quantum < 1 {
        eprintln!("{}", SchedulerError::InvalidQuantum(args.quantum));
        return ExitCode::FAILURE;
    }

    run_cli(Box::new(RoundRobin::new(args.quantum)))
}
