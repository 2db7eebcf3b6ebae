//! The four-callback capability contract through which policies customize
//! admission, readiness, dispatch, and re-admission (spec §4.3). The
//! original is a function-pointer vtable plus an opaque `void *` state;
//! here that's a trait object, the idiomatic runtime-polymorphic
//! replacement called out in the Design Notes.

use crate::container::Deque;
use crate::error::SchedulerError;
use crate::process::Process;

pub trait Algorithm: Send {
    /// Admits a newly arrived process.
    fn arrive(&mut self, process: Process) -> Result<(), SchedulerError>;

    /// Does at least one process exist that can be dispatched?
    fn ready(&self) -> Result<bool, SchedulerError>;

    /// Selects and extracts the next process to run for one tick.
    fn get(&mut self) -> Result<Option<Process>, SchedulerError>;

    /// Returns a process that ran but did not finish.
    fn put(&mut self, process: Process) -> Result<(), SchedulerError>;
}

/// Wires a single FIFO as the ready set, using `push_back` for `arrive` and
/// `!is_empty` for `ready` — the convenience constructor spec §4.3 calls
/// `queue_algorithm`, used by FCFS, SPN, and STR.
pub struct QueueAlgorithm<G, P>
where
    G: FnMut(&mut Deque<Process>) -> Option<Process> + Send,
    P: FnMut(Process, &mut Deque<Process>) -> Result<(), SchedulerError> + Send,
{
    queue: Deque<Process>,
    get: G,
    put: P,
}

impl<G, P> QueueAlgorithm<G, P>
where
    G: FnMut(&mut Deque<Process>) -> Option<Process> + Send,
    P: FnMut(Process, &mut Deque<Process>) -> Result<(), SchedulerError> + Send,
{
    pub fn new(get: G, put: P) -> Self {
        Self { queue: Deque::new(), get, put }
    }
}

impl<G, P> Algorithm for QueueAlgorithm<G, P>
where
    G: FnMut(&mut Deque<Process>) -> Option<Process> + Send,
    P: FnMut(Process, &mut Deque<Process>) -> Result<(), SchedulerError> + Send,
{
    fn arrive(&mut self, process: Process) -> Result<(), SchedulerError> {
        self.queue.push_back(process);
        Ok(())
    }

    fn ready(&self) -> Result<bool, SchedulerError> {
        Ok(!self.queue.is_empty())
    }

    fn get(&mut self) -> Result<Option<Process>, SchedulerError> {
        Ok((self.get)(&mut self.queue))
    }

    fn put(&mut self, process: Process) -> Result<(), SchedulerError> {
        (self.put)(process, &mut self.queue)
    }
}
