//! A pedagogical single-CPU process scheduler framework: several classical
//! scheduling policies (FCFS, SPN, STR, round-robin, MLFQ, lottery)
//! expressed as pluggable algorithms driven by a common scheduler core.
//!
//! Grounded on `examples/original_source/scheduling/` (a C pthread
//! implementation); see `DESIGN.md` for the full grounding ledger.

pub mod algorithm;
pub mod container;
pub mod error;
pub mod policies;
pub mod process;
pub mod reader;
pub mod scheduler;

use std::io;
use std::process::ExitCode;

pub use algorithm::Algorithm;
pub use error::SchedulerError;
pub use process::Process;
pub use scheduler::{Metrics, Scheduler};

/// Shared CLI boilerplate: every `[[bin]]` target builds an `Algorithm`,
/// reads stdin with [`reader::read_processes`], runs the scheduler, and
/// prints the averages — this is that routine, extracted once instead of
/// repeated six times (one per policy binary).
pub fn run_cli(algorithm: Box<dyn Algorithm>) -> ExitCode {
    let scheduler = Scheduler::new(algorithm);

    let added = match reader::read_processes(&scheduler, io::stdin().lock()) {
        Ok(n) => n,
        Err(error) => {
            eprintln!("{error}");
            return ExitCode::FAILURE;
        }
    };

    if added == 0 {
        return ExitCode::from(1);
    }

    match scheduler.run() {
        Ok(metrics) => {
            println!();
            println!("{:<24} : {:.2}", "Average Turn Around Time", metrics.avg_turnaround);
            println!("{:<24} : {:.2}", "Average Wait Time", metrics.avg_wait);
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}
