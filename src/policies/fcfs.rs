//! First-come-first-serve: non-pre-emptive, a single FIFO.

use crate::algorithm::QueueAlgorithm;
use crate::container::Deque;
use crate::error::SchedulerError;
use crate::process::Process;

type Fcfs = QueueAlgorithm<
    fn(&mut Deque<Process>) -> Option<Process>,
    fn(Process, &mut Deque<Process>) -> Result<(), SchedulerError>,
>;

pub fn new() -> Fcfs {
    QueueAlgorithm::new(
        |queue| queue.pop_front(),
        |p, queue| {
            // Never pre-empted — the running process continues until it completes.
            queue.push_front(p);
            Ok(())
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::Algorithm;

    #[test]
    fn admission_order_is_completion_order() {
        let mut algo = new();
        algo.arrive(Process::new("A", 0, 1)).unwrap();
        algo.arrive(Process::new("B", 1, 1)).unwrap();
        algo.arrive(Process::new("C", 2, 1)).unwrap();

        let first = algo.get().unwrap().unwrap();
        assert_eq!(first.name(), "A");
    }

    #[test]
    fn put_keeps_process_at_front() {
        let mut algo = new();
        algo.arrive(Process::new("A", 0, 2)).unwrap();
        algo.arrive(Process::new("B", 0, 1)).unwrap();

        let a = algo.get().unwrap().unwrap();
        algo.put(a).unwrap();

        let next = algo.get().unwrap().unwrap();
        assert_eq!(next.name(), "A", "non-preemptive policy keeps the current process in front");
    }
}
