//! Non-preemptive First-Come-First-Served scheduling.
//!
//! # Algorithm
//!
//! 1. Order processes by ascending arrival time, ties by ascending id.
//! 2. Sweep a time cursor from 0: when the next process has not
//!    arrived yet, emit an idle block up to its arrival; then emit an
//!    execution block for its full burst.
//! 3. Record completion, turnaround, and waiting per process.
//!
//! # Complexity
//! O(n log n) for the sort plus O(n) for the sweep.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.1

use std::cmp::Ordering;

use crate::models::{Process, ProcessResult, Schedule, TimelineBlock};

/// Runs FCFS over validated process descriptors.
///
/// Deterministic and side-effect free: the same input always yields
/// the same schedule, and well-formed input cannot fail. Once a
/// process starts it runs to completion.
///
/// Results are returned in processing order; the timeline spans
/// [0, makespan] without gaps, with idle blocks filling the stretches
/// before late arrivals.
///
/// # Example
/// ```
/// use fcfs_sim::models::Process;
/// use fcfs_sim::scheduler::simulate;
///
/// let schedule = simulate(&[Process::new("P1", 5, 3)]);
/// assert_eq!(schedule.sequence(), "IDLE → P1");
/// assert_eq!(schedule.makespan_ms(), 8);
/// ```
pub fn simulate(processes: &[Process]) -> Schedule {
    let mut ordered: Vec<&Process> = processes.iter().collect();
    ordered.sort_by(|a, b| arrival_then_id(a, b));

    let mut schedule = Schedule::new();
    let mut time = 0;

    for process in ordered {
        if process.arrival_ms > time {
            schedule
                .timeline
                .push(TimelineBlock::idle(time, process.arrival_ms));
            time = process.arrival_ms;
        }

        let completion = time + process.burst_ms;
        schedule
            .timeline
            .push(TimelineBlock::new(&process.id, time, completion));
        schedule.results.push(ProcessResult::new(
            &process.id,
            process.arrival_ms,
            process.burst_ms,
            completion,
        ));

        time = completion;
    }

    schedule
}

/// FCFS processing order: ascending arrival, then ascending id.
///
/// Ties on arrival are broken lexicographically by id, so the outcome
/// never depends on input order.
fn arrival_then_id(a: &Process, b: &Process) -> Ordering {
    a.arrival_ms
        .cmp(&b.arrival_ms)
        .then_with(|| a.id.cmp(&b.id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 10),
            Process::new("P2", 6, 4),
            Process::new("P3", 13, 5),
        ]
    }

    #[test]
    fn test_queued_arrivals() {
        // P2 arrives during P1's execution and queues; P3 arrives
        // during P2's execution. No idle gaps.
        let schedule = simulate(&sample_processes());

        assert_eq!(schedule.timeline.len(), 3);
        assert_eq!(schedule.timeline[0], TimelineBlock::new("P1", 0, 10));
        assert_eq!(schedule.timeline[1], TimelineBlock::new("P2", 10, 14));
        assert_eq!(schedule.timeline[2], TimelineBlock::new("P3", 14, 19));

        let p1 = schedule.result_for("P1").unwrap();
        assert_eq!((p1.completion_ms, p1.turnaround_ms, p1.waiting_ms), (10, 10, 0));
        let p2 = schedule.result_for("P2").unwrap();
        assert_eq!((p2.completion_ms, p2.turnaround_ms, p2.waiting_ms), (14, 8, 4));
        let p3 = schedule.result_for("P3").unwrap();
        assert_eq!((p3.completion_ms, p3.turnaround_ms, p3.waiting_ms), (19, 6, 1));
    }

    #[test]
    fn test_single_process_at_zero() {
        let schedule = simulate(&[Process::new("P1", 0, 5)]);
        assert_eq!(schedule.timeline, vec![TimelineBlock::new("P1", 0, 5)]);
        assert_eq!(schedule.result_for("P1").unwrap().waiting_ms, 0);
        assert_eq!(schedule.total_idle_ms(), 0);
    }

    #[test]
    fn test_leading_idle() {
        let schedule = simulate(&[Process::new("P1", 5, 3)]);
        assert_eq!(
            schedule.timeline,
            vec![TimelineBlock::idle(0, 5), TimelineBlock::new("P1", 5, 8)]
        );
        assert_eq!(schedule.result_for("P1").unwrap().waiting_ms, 0);
    }

    #[test]
    fn test_interior_idle() {
        let schedule = simulate(&[Process::new("P1", 0, 2), Process::new("P2", 7, 1)]);
        assert_eq!(schedule.sequence(), "P1 → IDLE → P2");
        assert_eq!(schedule.timeline[1], TimelineBlock::idle(2, 7));
        assert_eq!(schedule.makespan_ms(), 8);
    }

    #[test]
    fn test_arrival_exactly_at_cursor() {
        // The next process arrives exactly when the previous one
        // finishes: no idle block, zero waiting.
        let schedule = simulate(&[Process::new("P1", 0, 4), Process::new("P2", 4, 2)]);
        assert_eq!(schedule.sequence(), "P1 → P2");
        assert_eq!(schedule.result_for("P2").unwrap().waiting_ms, 0);
    }

    #[test]
    fn test_equal_arrival_id_tie_break() {
        // Input order P2 before P1; equal arrivals schedule in
        // ascending id order.
        let schedule = simulate(&[Process::new("P2", 0, 2), Process::new("P1", 0, 3)]);
        assert_eq!(schedule.sequence(), "P1 → P2");
        assert_eq!(schedule.results[0].id, "P1");
        assert_eq!(schedule.result_for("P1").unwrap().completion_ms, 3);
        assert_eq!(schedule.result_for("P2").unwrap().completion_ms, 5);
    }

    #[test]
    fn test_results_in_processing_order() {
        let mut shuffled = sample_processes();
        shuffled.reverse();
        let schedule = simulate(&shuffled);
        let order: Vec<&str> = schedule.results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(order, ["P1", "P2", "P3"]);
    }

    #[test]
    fn test_input_untouched() {
        let processes = sample_processes();
        let before = processes.clone();
        let _ = simulate(&processes);
        assert_eq!(processes, before);
    }

    #[test]
    fn test_idempotent() {
        let processes = sample_processes();
        let a = simulate(&processes);
        let b = simulate(&processes);
        assert_eq!(a.results, b.results);
        assert_eq!(a.timeline, b.timeline);
    }

    #[test]
    fn test_empty_input() {
        let schedule = simulate(&[]);
        assert!(schedule.results.is_empty());
        assert!(schedule.timeline.is_empty());
        assert_eq!(schedule.makespan_ms(), 0);
    }

    #[test]
    fn test_invariants_on_random_workloads() {
        use rand::rngs::SmallRng;
        use rand::{Rng, SeedableRng};

        let mut rng = SmallRng::seed_from_u64(42);

        for _ in 0..200 {
            let n = rng.random_range(1..=20);
            let processes: Vec<Process> = (0..n)
                .map(|i| {
                    Process::new(
                        format!("P{i:02}"),
                        rng.random_range(0..=100),
                        rng.random_range(1..=50),
                    )
                })
                .collect();

            let schedule = simulate(&processes);

            // Conservation of time: total duration == last end == max completion.
            let total: i64 = schedule.timeline.iter().map(|b| b.duration_ms).sum();
            assert_eq!(total, schedule.makespan_ms());
            let max_completion = schedule
                .results
                .iter()
                .map(|r| r.completion_ms)
                .max()
                .unwrap();
            assert_eq!(schedule.makespan_ms(), max_completion);

            // Contiguity: no gaps or overlaps, starting at 0.
            assert_eq!(schedule.timeline[0].start_ms, 0);
            for pair in schedule.timeline.windows(2) {
                assert_eq!(pair[0].end_ms, pair[1].start_ms);
            }

            // Per-result invariants.
            for r in &schedule.results {
                assert_eq!(r.waiting_ms, r.turnaround_ms - r.burst_ms);
                assert!(r.waiting_ms >= 0);
                assert!(r.start_ms() >= r.arrival_ms);
            }
        }
    }
}
