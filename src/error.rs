use thiserror::Error;

/// Error taxonomy for the scheduler engine and its algorithms.
///
/// Any of these surfaces as `scheduler_run`'s return value; none of them are
/// recoverable mid-run (§7: "all other errors surface to `scheduler_run`'s
/// return value").
#[derive(Debug, Clone, Error)]
pub enum SchedulerError {
    #[error("mutex poisoned while {0}")]
    Poisoned(&'static str),

    #[error("algorithm callback failed: {0}")]
    Algorithm(String),

    #[error("process invariant violated: {0}")]
    Invariant(String),

    #[error("invalid quantum: {0} (must be >= 1)")]
    InvalidQuantum(i64),
}
