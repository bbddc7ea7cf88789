use super::types::{DurationAverage, ReportMetrics, TaskTimings};
use crate::backend::types::Task;
use crate::status::{classify, ResolutionOrigin, TaskStatus};
use chrono::{DateTime, Utc};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Reduce one report's tasks to a display summary. Pure and
/// order-independent: the result depends only on the sequence's contents.
pub fn aggregate(tasks: &[Task]) -> ReportMetrics {
    let mut open = 0u64;
    let mut in_progress = 0u64;
    let mut auto_resolved = 0u64;
    let mut manually_resolved = 0u64;

    for task in tasks {
        match classify(task) {
            TaskStatus::Open => open += 1,
            TaskStatus::InProgress => in_progress += 1,
            TaskStatus::Resolved(ResolutionOrigin::AutoResolved) => auto_resolved += 1,
            TaskStatus::Resolved(ResolutionOrigin::ManuallyResolved) => manually_resolved += 1,
        }
    }

    let total = tasks.len() as u64;
    let resolved = auto_resolved + manually_resolved;
    let completion_percent = if total > 0 {
        (100.0 * resolved as f64 / total as f64).round() as u8
    } else {
        0
    };

    ReportMetrics {
        total,
        open,
        in_progress,
        auto_resolved,
        manually_resolved,
        avg_time_to_assign: average_duration(tasks, |t| (t.imported_at, t.assigned_at)),
        avg_time_to_resolve: average_duration(tasks, |t| (t.imported_at, t.resolved_at)),
        completion_percent,
    }
}

/// Arithmetic mean of the positive duration samples between two lifecycle
/// timestamps, in fractional days. Tasks missing either endpoint, and
/// durations <= 0 (clock skew, backfilled timestamps), are discarded rather
/// than clamped - they would otherwise drag a real average toward zero.
fn average_duration<F>(tasks: &[Task], endpoints: F) -> DurationAverage
where
    F: Fn(&Task) -> (Option<DateTime<Utc>>, Option<DateTime<Utc>>),
{
    let mut sum = 0.0;
    let mut samples = 0u64;

    for task in tasks {
        let (start, end) = endpoints(task);
        if let Some(days) = duration_days(start, end) {
            sum += days;
            samples += 1;
        }
    }

    if samples == 0 {
        DurationAverage::NotAvailable
    } else {
        DurationAverage::Days(sum / samples as f64)
    }
}

/// Positive fractional-day distance between two timestamps, or None when an
/// endpoint is missing or the ordering is invalid.
fn duration_days(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Option<f64> {
    let (start, end) = (start?, end?);
    let days = (end - start).num_milliseconds() as f64 / MILLIS_PER_DAY;
    (days > 0.0).then_some(days)
}

/// Per-task lifecycle breakdown for the timing view. Time open ends at
/// assignment, or at resolution for tasks the importer closed unassigned.
pub fn task_timings(task: &Task) -> TaskTimings {
    TaskTimings {
        time_open: duration_days(task.imported_at, task.assigned_at.or(task.resolved_at)),
        time_assigned: duration_days(task.assigned_at, task.resolved_at),
        time_to_resolve: duration_days(task.imported_at, task.resolved_at),
    }
}
