//! The simulated job, grounded on `scheduling/process.c`.

use std::cmp::Ordering;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use crate::container::Identified;
use crate::error::SchedulerError;

/// One unit of simulated CPU time.
pub type Tick = i64;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProcessId(u64);

/// A simulated job: arrival/service parameters plus the run-time counters
/// the scheduler and algorithms mutate during dispatch.
#[derive(Debug, Clone)]
pub struct Process {
    id: ProcessId,
    name: String,
    arrival: Tick,
    service: Tick,
    total_ticks: Tick,
    quantum_ticks: Tick,
    completion: Option<Tick>,
}

impl Process {
    pub fn new(name: impl Into<String>, arrival: Tick, service: Tick) -> Self {
        let id = ProcessId(NEXT_ID.fetch_add(1, AtomicOrdering::Relaxed));
        Self {
            id,
            name: name.into(),
            arrival,
            service,
            total_ticks: 0,
            quantum_ticks: 0,
            completion: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arrival(&self) -> Tick {
        self.arrival
    }

    pub fn service(&self) -> Tick {
        self.service
    }

    pub fn total_ticks(&self) -> Tick {
        self.total_ticks
    }

    pub fn quantum_ticks(&self) -> Tick {
        self.quantum_ticks
    }

    pub fn completion(&self) -> Option<Tick> {
        self.completion
    }

    /// Remaining work: `service - total_ticks`.
    pub fn current_service(&self) -> Tick {
        self.service - self.total_ticks
    }

    /// Effective "restart" timestamp used by some policies.
    pub fn current_arrival(&self) -> Tick {
        self.arrival + self.total_ticks
    }

    /// Runs the process for one tick. Returns `current_service` *after* the
    /// increment; `0` means the process finished on this tick.
    pub fn run(&mut self) -> Result<Tick, SchedulerError> {
        if self.current_service() <= 0 {
            return Err(SchedulerError::Invariant(format!(
                "process {} has no remaining service time",
                self.name
            )));
        }
        self.total_ticks += 1;
        self.quantum_ticks += 1;
        Ok(self.current_service())
    }

    /// Resets the per-dispatch quantum counter. Idempotent: calling this
    /// twice in a row is equivalent to calling it once.
    pub fn preempt(&mut self) {
        self.quantum_ticks = 0;
    }

    pub(crate) fn set_completion(&mut self, tick: Tick) {
        self.completion = Some(tick);
    }
}

impl Identified for Process {
    type Id = ProcessId;

    fn id(&self) -> ProcessId {
        self.id
    }
}

pub fn compare_arrival(a: &Process, b: &Process) -> Ordering {
    a.arrival.cmp(&b.arrival)
}

pub fn compare_current_service(a: &Process, b: &Process) -> Ordering {
    a.current_service().cmp(&b.current_service())
}

#[cfg(test)]
mod tests {
    use super::*;

    mod run {
        use super::*;

        #[test]
        fn run_increments_both_counters() {
            let mut p = Process::new("A", 0, 3);
            let remaining = p.run().unwrap();
            assert_eq!(remaining, 2);
            assert_eq!(p.total_ticks(), 1);
            assert_eq!(p.quantum_ticks(), 1);
        }

        #[test]
        fn run_to_completion_returns_zero() {
            let mut p = Process::new("A", 0, 2);
            assert_eq!(p.run().unwrap(), 1);
            assert_eq!(p.run().unwrap(), 0);
        }

        #[test]
        fn run_past_service_is_an_invariant_violation() {
            let mut p = Process::new("A", 0, 1);
            p.run().unwrap();
            assert!(p.run().is_err());
        }
    }

    mod preempt {
        use super::*;

        #[test]
        fn preempt_resets_quantum_not_total() {
            let mut p = Process::new("A", 0, 5);
            p.run().unwrap();
            p.run().unwrap();
            p.preempt();
            assert_eq!(p.quantum_ticks(), 0);
            assert_eq!(p.total_ticks(), 2);
        }

        #[test]
        fn double_preempt_is_idempotent() {
            let mut p = Process::new("A", 0, 5);
            p.run().unwrap();
            p.preempt();
            p.preempt();
            assert_eq!(p.quantum_ticks(), 0);
        }
    }

    mod comparators {
        use super::*;

        #[test]
        fn compare_arrival_orders_by_arrival_time() {
            let a = Process::new("A", 3, 1);
            let b = Process::new("B", 1, 1);
            assert_eq!(compare_arrival(&a, &b), Ordering::Greater);
        }

        #[test]
        fn compare_current_service_uses_remaining_work() {
            let mut a = Process::new("A", 0, 5);
            let b = Process::new("B", 0, 3);
            a.run().unwrap();
            a.run().unwrap();
            // a.current_service() == 3, tied with b
            assert_eq!(compare_current_service(&a, &b), Ordering::Equal);
        }
    }

    mod derived_fields {
        use super::*;

        #[test]
        fn current_arrival_tracks_total_ticks() {
            let mut p = Process::new("A", 2, 5);
            p.run().unwrap();
            assert_eq!(p.current_arrival(), 3);
        }
    }
}
