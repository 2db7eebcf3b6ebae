use std::process::ExitCode;

use process_scheduler::policies::mlfq::Mlfq;
use process_scheduler::run_cli;

/// Priority bands and the doubling base quantum, matching the original
/// `new_mlfq(3, 3)` call in `scheduling/mlfq.c`.
const LEVELS: usize = 3;
const INITIAL_QUANTUM: i64 = 3;

fn main() -> ExitCode {
    run_cli(Box::new(Mlfq::new(LEVELS, INITIAL_QUANTUM)))
}
