//! Input validation for simulation entries.
//!
//! Checks raw process entries before they reach the engine. Detects:
//! - Blank ids
//! - Partially filled entries (arrival without burst, or vice versa)
//! - Out-of-range values
//! - Duplicate ids
//! - No usable entries at all
//!
//! Fully empty entries (neither time field filled) are skipped
//! silently. All detected errors are collected and returned together.
//! The engine itself performs no checks; every descriptor it receives
//! has passed through this layer.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::Process;

/// Validation result: the cleaned process list, or all detected errors.
pub type ValidationResult = Result<Vec<Process>, Vec<ValidationError>>;

/// A raw, possibly incomplete process entry.
///
/// Mirrors one input row before validation: either time field may be
/// unfilled (`None`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessEntry {
    /// Process identifier as entered.
    pub id: String,
    /// Arrival time (ms), if filled.
    pub arrival_ms: Option<i64>,
    /// Burst time (ms), if filled.
    pub burst_ms: Option<i64>,
}

impl ProcessEntry {
    /// Creates an empty entry with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            arrival_ms: None,
            burst_ms: None,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival_ms: i64) -> Self {
        self.arrival_ms = Some(arrival_ms);
        self
    }

    /// Sets the burst time.
    pub fn with_burst(mut self, burst_ms: i64) -> Self {
        self.burst_ms = Some(burst_ms);
        self
    }

    /// Whether neither time field is filled.
    pub fn is_empty(&self) -> bool {
        self.arrival_ms.is_none() && self.burst_ms.is_none()
    }
}

/// Bounds enforced on entry values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationLimits {
    /// Largest accepted arrival or burst value (ms).
    pub max_time_unit_ms: i64,
}

impl ValidationLimits {
    /// Creates limits with the given ceiling.
    pub fn with_max_time_unit(max_time_unit_ms: i64) -> Self {
        Self { max_time_unit_ms }
    }
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_time_unit_ms: 500,
        }
    }
}

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// An entry has a blank or whitespace-only id.
    EmptyId,
    /// Exactly one of arrival/burst is filled.
    IncompleteEntry,
    /// A value is negative, a burst is below 1, or a value exceeds
    /// the configured ceiling.
    OutOfRange,
    /// Two entries share the same id.
    DuplicateId,
    /// No valid entries remain after skipping empty ones.
    NoProcesses,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates raw entries and produces engine-ready descriptors.
///
/// Checks, per entry:
/// 1. The id is non-blank (checked before the empty-row skip: a blank
///    id is an error even on an otherwise empty entry).
/// 2. Fully empty entries are skipped silently.
/// 3. Both time fields are filled.
/// 4. `arrival >= 0`, `burst >= 1`, and both values are within
///    `limits.max_time_unit_ms`.
/// 5. The id has not been used by an earlier surviving entry.
///
/// Finally, at least one entry must survive.
///
/// # Returns
/// `Ok(processes)` in input order if all checks pass, `Err(errors)`
/// with all detected issues.
pub fn validate_entries(entries: &[ProcessEntry], limits: &ValidationLimits) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen_ids = HashSet::new();
    let mut processes = Vec::new();

    for entry in entries {
        if entry.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                "Process id cannot be empty",
            ));
            continue;
        }

        if entry.is_empty() {
            continue;
        }

        let (arrival, burst) = match (entry.arrival_ms, entry.burst_ms) {
            (Some(a), Some(b)) => (a, b),
            _ => {
                errors.push(ValidationError::new(
                    ValidationErrorKind::IncompleteEntry,
                    format!(
                        "Process {}: arrival and burst must both be filled",
                        entry.id
                    ),
                ));
                continue;
            }
        };

        if arrival < 0 || burst < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::OutOfRange,
                format!(
                    "Process {}: arrival must be >= 0 and burst must be >= 1",
                    entry.id
                ),
            ));
            continue;
        }

        if arrival > limits.max_time_unit_ms || burst > limits.max_time_unit_ms {
            errors.push(ValidationError::new(
                ValidationErrorKind::OutOfRange,
                format!(
                    "Process {}: values must be <= {}",
                    entry.id, limits.max_time_unit_ms
                ),
            ));
            continue;
        }

        if !seen_ids.insert(entry.id.clone()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process id: {}", entry.id),
            ));
            continue;
        }

        processes.push(Process::new(&entry.id, arrival, burst));
    }

    if processes.is_empty() && errors.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoProcesses,
            "Define at least one process",
        ));
    }

    if errors.is_empty() {
        Ok(processes)
    } else {
        Err(errors)
    }
}
