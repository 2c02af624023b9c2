//! Schedule (solution) model.
//!
//! A schedule is the complete outcome of one simulation run: the
//! per-process results in processing order and a contiguous timeline
//! of execution and idle blocks covering [0, makespan].
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.1

use serde::{Deserialize, Serialize};

/// Sentinel id marking an idle interval in the timeline.
pub const IDLE_ID: &str = "IDLE";

/// A per-process scheduling outcome.
///
/// Extends the input descriptor with its derived times. `waiting_ms`
/// is never negative: a process cannot start before it arrives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// Process identifier.
    pub id: String,
    /// Arrival time of the input descriptor (ms).
    pub arrival_ms: i64,
    /// Burst time of the input descriptor (ms).
    pub burst_ms: i64,
    /// Time at which the process finished (ms).
    pub completion_ms: i64,
    /// Completion - arrival (ms).
    pub turnaround_ms: i64,
    /// Turnaround - burst (ms).
    pub waiting_ms: i64,
}

impl ProcessResult {
    /// Creates a result from a descriptor and its completion time.
    ///
    /// Turnaround and waiting are derived: turnaround is
    /// completion - arrival, waiting is turnaround - burst.
    pub fn new(id: impl Into<String>, arrival_ms: i64, burst_ms: i64, completion_ms: i64) -> Self {
        let turnaround_ms = completion_ms - arrival_ms;
        Self {
            id: id.into(),
            arrival_ms,
            burst_ms,
            completion_ms,
            turnaround_ms,
            waiting_ms: turnaround_ms - burst_ms,
        }
    }

    /// Time at which the process started executing (ms).
    #[inline]
    pub fn start_ms(&self) -> i64 {
        self.completion_ms - self.burst_ms
    }
}

/// One interval of the Gantt timeline.
///
/// Half-open interval: includes start, excludes end. `id` is either a
/// process id or [`IDLE_ID`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineBlock {
    /// Process id, or [`IDLE_ID`] for an idle interval.
    pub id: String,
    /// Block start (ms, inclusive).
    pub start_ms: i64,
    /// Block end (ms, exclusive).
    pub end_ms: i64,
    /// End - start (ms).
    pub duration_ms: i64,
}

impl TimelineBlock {
    /// Creates an execution block spanning [start, end).
    pub fn new(id: impl Into<String>, start_ms: i64, end_ms: i64) -> Self {
        Self {
            id: id.into(),
            start_ms,
            end_ms,
            duration_ms: end_ms - start_ms,
        }
    }

    /// Creates an idle block spanning [start, end).
    pub fn idle(start_ms: i64, end_ms: i64) -> Self {
        Self::new(IDLE_ID, start_ms, end_ms)
    }

    /// Whether this block is an idle interval.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.id == IDLE_ID
    }
}

/// A complete schedule (solution of one simulation run).
///
/// `results` preserve processing order. `timeline` blocks are
/// adjacent (`block[i].end_ms == block[i+1].start_ms`) and span
/// [0, makespan] without gaps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schedule {
    /// Per-process results, in processing order.
    pub results: Vec<ProcessResult>,
    /// Execution and idle blocks, ordered by start time.
    pub timeline: Vec<TimelineBlock>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makespan: end of the last timeline block (ms). 0 when empty.
    pub fn makespan_ms(&self) -> i64 {
        self.timeline.last().map(|b| b.end_ms).unwrap_or(0)
    }

    /// Total execution time across all processes (ms).
    pub fn total_busy_ms(&self) -> i64 {
        self.timeline
            .iter()
            .filter(|b| !b.is_idle())
            .map(|b| b.duration_ms)
            .sum()
    }

    /// Total idle time (ms).
    pub fn total_idle_ms(&self) -> i64 {
        self.timeline
            .iter()
            .filter(|b| b.is_idle())
            .map(|b| b.duration_ms)
            .sum()
    }

    /// CPU utilization: busy_time / makespan.
    ///
    /// Returns `None` for an empty schedule.
    pub fn cpu_utilization(&self) -> Option<f64> {
        let makespan = self.makespan_ms();
        if makespan <= 0 {
            return None;
        }
        Some(self.total_busy_ms() as f64 / makespan as f64)
    }

    /// Execution order as a display string, e.g. "P1 → P2 → P3".
    ///
    /// Idle blocks appear as "IDLE".
    pub fn sequence(&self) -> String {
        self.timeline
            .iter()
            .map(|b| b.id.as_str())
            .collect::<Vec<_>>()
            .join(" → ")
    }

    /// Finds the result for a given process id.
    pub fn result_for(&self, id: &str) -> Option<&ProcessResult> {
        self.results.iter().find(|r| r.id == id)
    }

    /// Results re-sorted lexicographically by id, for tabular display.
    ///
    /// The underlying `results` stay in processing order.
    pub fn results_by_id(&self) -> Vec<&ProcessResult> {
        let mut sorted: Vec<&ProcessResult> = self.results.iter().collect();
        sorted.sort_by(|a, b| a.id.cmp(&b.id));
        sorted
    }

    /// Fraction of the makespan covered by the block at `index`
    /// (0.0..1.0), for proportional-width rendering.
    ///
    /// Returns `None` if the index is out of range or the schedule
    /// is empty.
    pub fn block_fraction(&self, index: usize) -> Option<f64> {
        let makespan = self.makespan_ms();
        if makespan <= 0 {
            return None;
        }
        self.timeline
            .get(index)
            .map(|b| b.duration_ms as f64 / makespan as f64)
    }

    /// Number of timeline blocks.
    pub fn block_count(&self) -> usize {
        self.timeline.len()
    }
}
