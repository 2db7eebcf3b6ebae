//! Concrete scheduling policies. Each module is grounded on its namesake in
//! `examples/original_source/scheduling/` (`fcfs.c`, `spn.c`, `str.c`,
//! `rr.c`, `mlfq.c`, `lottery.c`).

pub mod fcfs;
pub mod lottery;
pub mod mlfq;
pub mod round_robin;
pub mod spn;
pub mod str_policy;
