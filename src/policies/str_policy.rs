//! Shortest-time-remaining: pre-emptive. Named `str_policy` to avoid
//! shadowing the `str` primitive type; the CLI binary is still `str`.

use std::cmp::Ordering;

use crate::algorithm::QueueAlgorithm;
use crate::container::Deque;
use crate::error::SchedulerError;
use crate::process::{compare_current_service, Process};

type Str = QueueAlgorithm<
    fn(&mut Deque<Process>) -> Option<Process>,
    fn(Process, &mut Deque<Process>) -> Result<(), SchedulerError>,
>;

pub fn new() -> Str {
    QueueAlgorithm::new(
        |queue| {
            queue.sort_by(compare_current_service);
            queue.pop_front()
        },
        |mut p, queue| {
            // "current" is fixed as the process that just ran; compare it
            // against the best remaining candidate (spec §9 Open Questions).
            let should_preempt = queue
                .peek_at(0)
                .map(|next| compare_current_service(next, &p) == Ordering::Less)
                .unwrap_or(false);

            if should_preempt {
                p.preempt();
                queue.push_back(p);
            } else {
                queue.push_front(p);
            }
            Ok(())
        },
    )
}
