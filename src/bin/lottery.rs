use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::SeedableRng;

use process_scheduler::policies::lottery::{Lottery, TicketDistribution};
use process_scheduler::run_cli;

/// Ticket count, matching `#define NUM_TICKETS 100` in `scheduling/lottery.c`.
const TOTAL_TICKETS: usize = 100;

fn main() -> ExitCode {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    let rng = StdRng::seed_from_u64(seed);

    run_cli(Box::new(Lottery::new(TOTAL_TICKETS, TicketDistribution::ServiceWeighted, rng)))
}
