//! Lottery scheduling, grounded on `scheduling/lottery.c`. The original
//! reaches for the process-global `rand()`; this keeps the engine
//! deterministic-on-demand by taking an injectable `R: Rng` instead (spec
//! §9 Design Notes: "expose a seedable RNG handle to make Scenario F
//! deterministic").

use rand::Rng;

use crate::algorithm::Algorithm;
use crate::container::Deque;
use crate::error::SchedulerError;
use crate::process::Process;

/// How tickets are divided among ready processes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketDistribution {
    /// Each process gets `floor(total_tickets / n)` contiguous tickets; any
    /// remainder falls to the last process.
    Uniform,
    /// Each process gets `round(total_tickets * current_service / sum)`
    /// contiguous tickets. Falls back to `Uniform` when the total remaining
    /// service time is zero.
    ServiceWeighted,
}

pub struct Lottery<R: Rng + Send> {
    queue: Deque<Process>,
    distribution: Vec<usize>,
    total_tickets: usize,
    strategy: TicketDistribution,
    rng: R,
}

impl<R: Rng + Send> Lottery<R> {
    pub fn new(total_tickets: usize, strategy: TicketDistribution, rng: R) -> Self {
        Self {
            queue: Deque::new(),
            distribution: vec![0; total_tickets],
            total_tickets,
            strategy,
            rng,
        }
    }

    fn redistribute(&mut self) {
        let n = self.queue.size();
        if n == 0 {
            return;
        }

        self.distribution = match self.strategy {
            TicketDistribution::Uniform => uniform_bands(n, self.total_tickets),
            TicketDistribution::ServiceWeighted => {
                let total_service: i64 = self.queue.iter().map(|p| p.current_service()).sum();
                if total_service <= 0 {
                    uniform_bands(n, self.total_tickets)
                } else {
                    weighted_bands(&self.queue, total_service, self.total_tickets)
                }
            }
        };
    }
}

/// `floor(T/n)`-wide contiguous bands, remainder assigned to the last index.
/// When `n > tickets`, `band` floors to 0 and every process but the last gets
/// no tickets at all rather than underflowing the remainder computation —
/// still exactly `tickets` entries, just not evenly shared.
fn uniform_bands(n: usize, tickets: usize) -> Vec<usize> {
    let band = tickets / n;
    let mut distribution = Vec::with_capacity(tickets);
    for index in 0..n {
        let width = if index + 1 == n { tickets.saturating_sub(distribution.len()) } else { band };
        distribution.extend(std::iter::repeat(index).take(width));
    }
    distribution
}

/// Contiguous bands sized by `round(T * current_service / total)`, padded
/// or truncated to exactly `tickets` entries (any rounding slack lands on
/// the last process).
fn weighted_bands(queue: &Deque<Process>, total_service: i64, tickets: usize) -> Vec<usize> {
    let n = queue.size();
    let mut distribution = Vec::with_capacity(tickets);
    for (index, process) in queue.iter().enumerate() {
        let share = (tickets as f64) * (process.current_service() as f64) / (total_service as f64);
        let width = share.round() as usize;
        distribution.extend(std::iter::repeat(index).take(width));
    }
    distribution.truncate(tickets);
    while distribution.len() < tickets {
        distribution.push(n - 1);
    }
    distribution
}

impl<R: Rng + Send> Algorithm for Lottery<R> {
    fn arrive(&mut self, process: Process) -> Result<(), SchedulerError> {
        self.queue.push_back(process);
        self.redistribute();
        Ok(())
    }

    fn ready(&self) -> Result<bool, SchedulerError> {
        Ok(!self.queue.is_empty())
    }

    fn get(&mut self) -> Result<Option<Process>, SchedulerError> {
        let n = self.queue.size();
        if n == 0 {
            return Ok(None);
        }
        if n == 1 {
            return Ok(self.queue.pop_front());
        }

        let ticket = self.rng.gen_range(0..self.total_tickets);
        let winner = self.distribution[ticket];
        let drawn = self.queue.remove_at(winner);
        // The set changed (one fewer process); rebuild the table so a
        // process that completes without a matching `put` doesn't leave a
        // stale distribution sized for the old queue length.
        self.redistribute();
        Ok(drawn)
    }

    fn put(&mut self, process: Process) -> Result<(), SchedulerError> {
        self.queue.push_back(process);
        self.redistribute();
        Ok(())
    }
}
