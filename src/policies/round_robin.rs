//! Round-robin with a fixed quantum, grounded on `scheduling/rr.c`.

use crate::algorithm::Algorithm;
use crate::container::Deque;
use crate::error::SchedulerError;
use crate::process::{Process, Tick};

pub struct RoundRobin {
    queue: Deque<Process>,
    quantum: Tick,
}

impl RoundRobin {
    pub fn new(quantum: Tick) -> Self {
        Self { queue: Deque::new(), quantum }
    }
}

impl Algorithm for RoundRobin {
    fn arrive(&mut self, process: Process) -> Result<(), SchedulerError> {
        self.queue.push_back(process);
        Ok(())
    }

    fn ready(&self) -> Result<bool, SchedulerError> {
        Ok(!self.queue.is_empty())
    }

    fn get(&mut self) -> Result<Option<Process>, SchedulerError> {
        Ok(self.queue.pop_front())
    }

    fn put(&mut self, mut process: Process) -> Result<(), SchedulerError> {
        if process.quantum_ticks() < self.quantum {
            self.queue.push_front(process);
        } else {
            process.preempt();
            self.queue.push_back(process);
        }
        Ok(())
    }
}
