//! Process descriptor model.
//!
//! A process is the unit of work submitted to the scheduler: it
//! becomes ready at its arrival time and needs the CPU for its burst
//! time once started.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 3.1

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// Descriptors reach the engine only through [`crate::validation`],
/// which guarantees a unique, non-blank `id`, `arrival_ms >= 0`, and
/// `burst_ms >= 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier (e.g. "P1").
    pub id: String,
    /// Time at which the process becomes ready to run (ms).
    pub arrival_ms: i64,
    /// CPU time the process needs once started (ms).
    pub burst_ms: i64,
}

impl Process {
    /// Creates a new process descriptor.
    pub fn new(id: impl Into<String>, arrival_ms: i64, burst_ms: i64) -> Self {
        Self {
            id: id.into(),
            arrival_ms,
            burst_ms,
        }
    }
}
