//! Multi-level feedback queue, grounded on `scheduling/mlfq.c`. Promotion
//! from lower bands is out of scope (spec §9 Open Questions: "the original
//! leaves a `TODO: promote up from lower level queues if needed`").

use crate::algorithm::Algorithm;
use crate::container::Deque;
use crate::error::SchedulerError;
use crate::process::{Process, Tick};

pub struct Mlfq {
    levels: Vec<Deque<Process>>,
    quanta: Vec<Tick>,
    current_level: usize,
}

impl Mlfq {
    /// `levels` priority bands, quanta doubling from `initial_quantum`.
    pub fn new(levels: usize, initial_quantum: Tick) -> Self {
        let mut quanta = Vec::with_capacity(levels);
        let mut quantum = initial_quantum;
        for _ in 0..levels {
            quanta.push(quantum);
            quantum *= 2;
        }
        Self {
            levels: (0..levels).map(|_| Deque::new()).collect(),
            quanta,
            current_level: 0,
        }
    }
}

impl Algorithm for Mlfq {
    fn arrive(&mut self, process: Process) -> Result<(), SchedulerError> {
        self.levels[0].push_back(process);
        Ok(())
    }

    fn ready(&self) -> Result<bool, SchedulerError> {
        Ok(self.levels.iter().any(|level| !level.is_empty()))
    }

    fn get(&mut self) -> Result<Option<Process>, SchedulerError> {
        for (index, level) in self.levels.iter_mut().enumerate() {
            if !level.is_empty() {
                self.current_level = index;
                return Ok(level.pop_front());
            }
        }
        Ok(None)
    }

    fn put(&mut self, mut process: Process) -> Result<(), SchedulerError> {
        let quantum = self.quanta[self.current_level];
        if process.quantum_ticks() < quantum {
            self.levels[self.current_level].push_front(process);
            return Ok(());
        }

        process.preempt();
        let demoted = (self.current_level + 1).min(self.levels.len() - 1);
        self.levels[demoted].push_back(process);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_arrivals_always_enter_the_top_band() {
        let mut mlfq = Mlfq::new(3, 2);
        mlfq.arrive(Process::new("A", 0, 6)).unwrap();
        let a = mlfq.get().unwrap().unwrap();
        assert_eq!(a.name(), "A");
    }

    #[test]
    fn within_quantum_stays_on_the_same_level() {
        let mut mlfq = Mlfq::new(3, 2);
        mlfq.arrive(Process::new("A", 0, 6)).unwrap();
        let mut a = mlfq.get().unwrap().unwrap();
        a.run().unwrap();
        mlfq.put(a).unwrap();

        let a = mlfq.get().unwrap().unwrap();
        assert_eq!(a.quantum_ticks(), 1, "still on L0, quantum not reset");
    }

    #[test]
    fn quantum_exhaustion_demotes_one_band() {
        let mut mlfq = Mlfq::new(3, 2);
        mlfq.arrive(Process::new("A", 0, 6)).unwrap();

        let mut a = mlfq.get().unwrap().unwrap();
        a.run().unwrap();
        mlfq.put(a).unwrap();

        let mut a = mlfq.get().unwrap().unwrap();
        a.run().unwrap(); // quantum_ticks reaches 2, the L0 quantum
        mlfq.put(a).unwrap();

        mlfq.arrive(Process::new("B", 2, 1)).unwrap();
        let next = mlfq.get().unwrap().unwrap();
        assert_eq!(next.name(), "B", "B is on L0, preferred over demoted A on L1");
    }

    #[test]
    fn demotion_is_capped_at_the_bottom_band() {
        let mut mlfq = Mlfq::new(2, 1);
        mlfq.arrive(Process::new("A", 0, 10)).unwrap();

        for _ in 0..2 {
            let mut a = mlfq.get().unwrap().unwrap();
            a.run().unwrap(); // quantum == 1, exhausted every dispatch
            mlfq.put(a).unwrap();
        }

        // A should now be on the bottom band (index 1) and stay there.
        let mut a = mlfq.get().unwrap().unwrap();
        a.run().unwrap();
        mlfq.put(a).unwrap();
        let a = mlfq.get().unwrap().unwrap();
        assert_eq!(a.name(), "A");
    }
}
