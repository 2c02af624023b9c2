//! Non-preemptive FCFS CPU-scheduling simulation.
//!
//! Given a set of processes (arrival time, burst time), computes
//! completion, turnaround, and waiting times together with a
//! contiguous Gantt timeline of execution and idle intervals.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `ProcessResult`,
//!   `TimelineBlock`, `Schedule`
//! - **`validation`**: Boundary checks on raw entries (blank ids,
//!   incomplete rows, range limits, duplicates)
//! - **`scheduler`**: The FCFS engine and schedule KPIs
//!
//! # Architecture
//!
//! All input checking happens at the boundary, and the engine assumes
//! clean descriptors. `validation::validate_entries` turns raw entries
//! into `Process` descriptors, `scheduler::simulate` turns descriptors
//! into a `Schedule`, and `scheduler::ScheduleKpi` summarizes the
//! result. Rendering (metric tables, proportional Gantt bars) is a
//! consumer concern; the models expose the queries it needs.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod models;
pub mod scheduler;
pub mod validation;
