//! Shortest-process-next: non-pre-emptive, selects by remaining service
//! time at each dispatch.

use crate::algorithm::QueueAlgorithm;
use crate::container::Deque;
use crate::error::SchedulerError;
use crate::process::{compare_current_service, Process};

type Spn = QueueAlgorithm<
    fn(&mut Deque<Process>) -> Option<Process>,
    fn(Process, &mut Deque<Process>) -> Result<(), SchedulerError>,
>;

pub fn new() -> Spn {
    QueueAlgorithm::new(
        |queue| {
            let p = queue.pop_front();
            queue.sort_by(compare_current_service);
            p
        },
        |p, queue| {
            // Running process is never pre-empted.
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
    fn non_preemptive_keeps_running_process_in_front() {
        let mut algo = new();
        algo.arrive(Process::new("A", 0, 5)).unwrap();
        let a = algo.get().unwrap().unwrap();

        algo.arrive(Process::new("B", 1, 2)).unwrap();
        algo.arrive(Process::new("C", 1, 1)).unwrap();
        algo.put(a).unwrap();

        let still_a = algo.get().unwrap().unwrap();
        assert_eq!(still_a.name(), "A", "SPN never preempts the running process");
    }

    #[test]
    fn shortest_remaining_runs_once_current_finishes() {
        let mut algo = new();
        algo.arrive(Process::new("A", 0, 5)).unwrap();
        let a = algo.get().unwrap().unwrap();

        algo.arrive(Process::new("B", 1, 2)).unwrap();
        algo.arrive(Process::new("C", 1, 1)).unwrap();
        algo.put(a).unwrap();

        let still_a = algo.get().unwrap().unwrap();
        // `still_a` is not put back: simulates A completing on this tick.
        drop(still_a);

        let next = algo.get().unwrap().unwrap();
        assert_eq!(next.name(), "C", "shortest of the remaining processes is picked next");
    }
}
