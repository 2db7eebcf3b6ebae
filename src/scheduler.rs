//! The scheduler engine: clock, arrivals/ready/completed queues, trace, and
//! metrics. Grounded on `scheduling/scheduler.c`'s `__scheduler_produce` /
//! `__scheduler_consume` pair — a textbook bounded-buffer producer/consumer
//! realized here with `std::sync::{Mutex, Condvar}` rather than
//! `pthread_cond_t` (same shape as the `Mutex<bool>`/`Condvar` pairing used
//! for `work_available`/`all_done` gating in comparable worker-pool code —
//! e.g. the green-thread scheduler under `examples/other_examples/`).

use std::any::Any;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::algorithm::Algorithm;
use crate::container::Deque;
use crate::error::SchedulerError;
use crate::process::{compare_arrival, Process, Tick};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Error,
    End,
    Alive,
    Done,
}

struct State {
    arrivals: Deque<Process>,
    completed: Deque<Process>,
    algorithm: Box<dyn Algorithm>,
    status: Status,
    tick: Tick,
    daemon: bool,
    error: Option<SchedulerError>,
}

/// Final averages computed over the completed queue (spec §4.5).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub avg_turnaround: f64,
    pub avg_wait: f64,
}

/// Owns the arrivals/completed queues and the algorithm handle; a process is
/// borrowed to the consumer during its one-tick dispatch and returned via
/// `put` (or escalated to `completed`).
pub struct Scheduler {
    state: Arc<Mutex<State>>,
    can_produce: Arc<Condvar>,
    can_consume: Arc<Condvar>,
}

fn lock(state: &Mutex<State>) -> MutexGuard<'_, State> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Locks for a correctness-critical step of `run` itself (as opposed to the
/// producer/consumer loops' best-effort `lock`, which self-heals from
/// poisoning to keep looping): here poisoning is reported as a genuine
/// synchronization error rather than silently recovered from, per §7's
/// "synchronization errors... a diagnostic carrying the failing primitive
/// name".
fn try_lock<'a>(state: &'a Mutex<State>, step: &'static str) -> Result<MutexGuard<'a, State>, SchedulerError> {
    state.lock().map_err(|_| SchedulerError::Poisoned(step))
}

/// Joins a worker thread, turning a panic (e.g. an algorithm callback
/// panicking instead of returning `Err`) into a `SchedulerError` instead of
/// letting it crash the process — §7 requires every non-input error to
/// surface through `run`'s return value.
fn join_worker(handle: JoinHandle<()>, name: &'static str) -> Result<(), SchedulerError> {
    handle.join().map_err(|payload| {
        SchedulerError::Algorithm(format!("{name} thread panicked: {}", panic_message(&payload)))
    })
}

fn panic_message(payload: &Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

impl Scheduler {
    pub fn new(algorithm: Box<dyn Algorithm>) -> Self {
        Self::build(algorithm, false)
    }

    /// Suppresses the automatic `ALIVE -> DONE -> END` transition so the
    /// engine keeps waiting for externally-added arrivals indefinitely.
    pub fn new_daemon(algorithm: Box<dyn Algorithm>) -> Self {
        Self::build(algorithm, true)
    }

    fn build(algorithm: Box<dyn Algorithm>, daemon: bool) -> Self {
        let state = State {
            arrivals: Deque::new(),
            completed: Deque::new(),
            algorithm,
            status: Status::End,
            tick: 0,
            daemon,
            error: None,
        };
        Self {
            state: Arc::new(Mutex::new(state)),
            can_produce: Arc::new(Condvar::new()),
            can_consume: Arc::new(Condvar::new()),
        }
    }

    /// Adds a process to the arrivals queue, callable before or during
    /// `run` (supports daemon mode and a reader feeding the engine live).
    pub fn add_process(&self, process: Process) {
        {
            let mut guard = lock(&self.state);
            guard.arrivals.push_back(process);
            guard.arrivals.sort_by(compare_arrival);
        }
        self.can_produce.notify_all();
    }

    pub fn current_tick(&self) -> Tick {
        lock(&self.state).tick
    }

    /// Spawns the arrival producer and the dispatch consumer, joins both,
    /// and returns the final metrics.
    pub fn run(&self) -> Result<Metrics, SchedulerError> {
        {
            let mut guard = try_lock(&self.state, "starting the run")?;
            guard.status = Status::Alive;
        }

        let producer = {
            let state = Arc::clone(&self.state);
            let can_produce = Arc::clone(&self.can_produce);
            let can_consume = Arc::clone(&self.can_consume);
            thread::spawn(move || produce(&state, &can_produce, &can_consume))
        };
        let consumer = {
            let state = Arc::clone(&self.state);
            let can_produce = Arc::clone(&self.can_produce);
            let can_consume = Arc::clone(&self.can_consume);
            thread::spawn(move || consume(&state, &can_produce, &can_consume))
        };

        let producer_result = join_worker(producer, "arrival producer");
        let consumer_result = join_worker(consumer, "dispatch consumer");

        {
            let guard = try_lock(&self.state, "reading the run's outcome")?;
            if let Some(error) = &guard.error {
                return Err(error.clone());
            }
        }
        producer_result?;
        consumer_result?;

        let guard = try_lock(&self.state, "computing metrics")?;
        Ok(compute_metrics(&guard.completed))
    }
}

fn arrival_is_due(state: &State) -> bool {
    match state.arrivals.peek_at(0) {
        Some(p) => p.arrival() <= state.tick,
        None => false,
    }
}

fn produce(state: &Mutex<State>, can_produce: &Condvar, can_consume: &Condvar) {
    loop {
        let mut guard = lock(state);
        if guard.status != Status::Alive {
            break;
        }

        while !arrival_is_due(&guard) {
            guard = can_produce.wait(guard).unwrap_or_else(PoisonError::into_inner);
            if guard.status != Status::Alive {
                drop(guard);
                return;
            }
        }

        if let Some(process) = guard.arrivals.pop_front() {
            let tick = guard.tick;
            println!("Time {:02} : Process {} Arrival {:02}", tick, process.name(), process.arrival());

            if process.service() == 0 {
                // This engine admits a zero-service process directly to
                // completed rather than dispatching it (spec §9: "leaves
                // the semantics to the implementer").
                let mut process = process;
                process.set_completion(tick);
                guard.completed.push_back(process);
            } else if let Err(error) = guard.algorithm.arrive(process) {
                guard.status = Status::Error;
                guard.error = Some(error);
            }
        }

        if !guard.daemon && guard.arrivals.is_empty() && guard.status == Status::Alive {
            guard.status = Status::Done;
        }

        let status = guard.status;
        drop(guard);
        can_consume.notify_all();

        if status != Status::Alive {
            break;
        }
    }
}

fn consume(state: &Mutex<State>, can_produce: &Condvar, can_consume: &Condvar) {
    loop {
        let mut guard = lock(state);
        if !matches!(guard.status, Status::Alive | Status::Done) {
            break;
        }

        loop {
            match guard.algorithm.ready() {
                Ok(true) => break,
                Ok(false) => {
                    if guard.status != Status::Alive {
                        break;
                    }
                    guard = can_consume.wait(guard).unwrap_or_else(PoisonError::into_inner);
                }
                Err(error) => {
                    guard.status = Status::Error;
                    guard.error = Some(error);
                    break;
                }
            }
        }

        if guard.status == Status::Error {
            drop(guard);
            break;
        }

        match guard.algorithm.get() {
            Ok(Some(mut process)) => {
                let tick = guard.tick;
                println!("Time {:02} : Process {} Service {:02}", tick, process.name(), process.current_service());
                guard.tick += 1;
                let now = guard.tick;

                match process.run() {
                    Ok(0) => {
                        process.set_completion(now);
                        guard.completed.push_back(process);
                    }
                    Ok(_) => {
                        if let Err(error) = guard.algorithm.put(process) {
                            guard.status = Status::Error;
                            guard.error = Some(error);
                        }
                    }
                    Err(error) => {
                        guard.status = Status::Error;
                        guard.error = Some(error);
                    }
                }
            }
            Ok(None) => {}
            Err(error) => {
                guard.status = Status::Error;
                guard.error = Some(error);
            }
        }

        if guard.status == Status::Done && !guard.daemon {
            let still_ready = guard.algorithm.ready().unwrap_or(false);
            if !still_ready {
                guard.status = Status::End;
            }
        }

        let status = guard.status;
        drop(guard);
        can_produce.notify_all();

        if !matches!(status, Status::Alive | Status::Done) {
            break;
        }

        thread::sleep(Duration::from_micros(100));
    }
}

fn compute_metrics(completed: &Deque<Process>) -> Metrics {
    let n = completed.size();
    if n == 0 {
        return Metrics { avg_turnaround: 0.0, avg_wait: 0.0 };
    }

    let mut turnaround_total: i64 = 0;
    let mut wait_total: i64 = 0;
    for process in completed.iter() {
        let completion = process.completion().unwrap_or(process.arrival());
        let turnaround = completion - process.arrival();
        turnaround_total += turnaround;
        wait_total += turnaround - process.service();
    }

    Metrics {
        avg_turnaround: turnaround_total as f64 / n as f64,
        avg_wait: wait_total as f64 / n as f64,
    }
}
