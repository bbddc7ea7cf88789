// Task lifecycle classification
// Maps a raw task record to exactly one display status. Resolution always
// takes precedence over assignment: a task can be both resolved and assigned,
// and it is shown as resolved.

use crate::backend::types::Task;
use std::fmt;

/// Marker the importer writes into the resolution note when it closes a task
/// itself (the flagged row disappeared from the source extract).
pub const AUTO_RESOLVED_MARKER: &str = "Auto-resolved";

/// Backend status value that marks an import-resolved task explicitly. When
/// the backend sends this, it overrides the note-text heuristic.
pub const RESOLVED_BY_IMPORT_STATUS: &str = "resolved_by_import";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    Open,
    InProgress,
    Resolved(ResolutionOrigin),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionOrigin {
    AutoResolved,
    ManuallyResolved,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskStatus::Open => f.write_str("open"),
            TaskStatus::InProgress => f.write_str("in progress"),
            TaskStatus::Resolved(ResolutionOrigin::AutoResolved) => {
                f.write_str("resolved (import)")
            }
            TaskStatus::Resolved(ResolutionOrigin::ManuallyResolved) => {
                f.write_str("resolved (assignee)")
            }
        }
    }
}

/// Classify a task into its lifecycle status. Pure - consults no external
/// state and never fails; malformed or missing note text simply does not
/// match the auto-resolved marker.
pub fn classify(task: &Task) -> TaskStatus {
    if task.resolved {
        TaskStatus::Resolved(resolution_origin(task))
    } else if task.assignee_id.is_some() {
        TaskStatus::InProgress
    } else {
        TaskStatus::Open
    }
}

fn resolution_origin(task: &Task) -> ResolutionOrigin {
    // An explicit backend status enum is authoritative; the note-text prefix
    // is the fallback for backends that only store free text.
    if task.status.as_deref() == Some(RESOLVED_BY_IMPORT_STATUS) {
        return ResolutionOrigin::AutoResolved;
    }
    match task.resolution_note() {
        Some(note) if note.message.starts_with(AUTO_RESOLVED_MARKER) => {
            ResolutionOrigin::AutoResolved
        }
        _ => ResolutionOrigin::ManuallyResolved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::types::TaskNote;
    use serde_json::Map;

    fn task() -> Task {
        Task {
            id: "t-1".to_string(),
            status: None,
            data_row: Map::new(),
            imported_at: None,
            assignee_id: None,
            assigned_at: None,
            resolved: false,
            resolved_at: None,
            notes: Vec::new(),
        }
    }

    #[test]
    fn unassigned_unresolved_is_open() {
        assert_eq!(classify(&task()), TaskStatus::Open);
    }

    #[test]
    fn assigned_unresolved_is_in_progress() {
        let mut t = task();
        t.assignee_id = Some("u-1".to_string());
        assert_eq!(classify(&t), TaskStatus::InProgress);
    }

    #[test]
    fn resolution_takes_precedence_over_assignment() {
        let mut t = task();
        t.assignee_id = Some("u-1".to_string());
        t.resolved = true;
        assert_eq!(
            classify(&t),
            TaskStatus::Resolved(ResolutionOrigin::ManuallyResolved)
        );
    }

    #[test]
    fn auto_resolved_marker_is_a_prefix_match() {
        let mut t = task();
        t.resolved = true;
        t.notes = vec![TaskNote::from_text("Auto-resolved due to reimport")];
        assert_eq!(
            classify(&t),
            TaskStatus::Resolved(ResolutionOrigin::AutoResolved)
        );

        // Marker elsewhere in the text does not count.
        t.notes = vec![TaskNote::from_text("was Auto-resolved earlier")];
        assert_eq!(
            classify(&t),
            TaskStatus::Resolved(ResolutionOrigin::ManuallyResolved)
        );
    }

    #[test]
    fn missing_note_defaults_to_manual() {
        let mut t = task();
        t.resolved = true;
        assert_eq!(
            classify(&t),
            TaskStatus::Resolved(ResolutionOrigin::ManuallyResolved)
        );
    }

    #[test]
    fn latest_note_is_the_resolution_note() {
        let mut t = task();
        t.resolved = true;
        t.notes = vec![
            TaskNote::from_text("investigating"),
            TaskNote::from_text("Auto-resolved on 2024-06-03 import"),
        ];
        assert_eq!(
            classify(&t),
            TaskStatus::Resolved(ResolutionOrigin::AutoResolved)
        );
    }

    #[test]
    fn backend_status_enum_overrides_note_heuristic() {
        let mut t = task();
        t.resolved = true;
        t.status = Some(RESOLVED_BY_IMPORT_STATUS.to_string());
        t.notes = vec![TaskNote::from_text("closed after phone call")];
        assert_eq!(
            classify(&t),
            TaskStatus::Resolved(ResolutionOrigin::AutoResolved)
        );
    }

    #[test]
    fn unresolved_flag_wins_over_stale_status_string() {
        // The boolean drives bucket membership; the status string only
        // refines resolution origin.
        let mut t = task();
        t.status = Some("open".to_string());
        assert_eq!(classify(&t), TaskStatus::Open);
    }
}
