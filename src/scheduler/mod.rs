//! FCFS engine and schedule KPIs.
//!
//! `simulate` runs the non-preemptive First-Come-First-Served policy
//! over validated process descriptors; `ScheduleKpi` computes summary
//! metrics from the resulting schedule.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.1
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod fcfs;
mod kpi;

pub use fcfs::simulate;
pub use kpi::ScheduleKpi;
