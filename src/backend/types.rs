use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One exception record requiring human attention.
///
/// Everything except `notes` is written by the importer or by a confirmed
/// mutation round trip; this client never edits a task in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    /// Optional backend-provided status enum (e.g. `resolved_by_import`).
    /// When present it is authoritative over the note-text heuristic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Original source-system record being flagged. Opaque, display only.
    #[serde(default)]
    pub data_row: Map<String, Value>,
    /// Timestamp the exception was first detected by the importer.
    pub imported_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub assignee_id: Option<String>,
    #[serde(default)]
    pub assigned_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub resolved: bool,
    #[serde(default)]
    pub resolved_at: Option<DateTime<Utc>>,
    /// Append-only annotation trail. Older backend revisions deliver this as
    /// a single free-text string; newer ones as a list of note objects.
    #[serde(default, deserialize_with = "deserialize_notes")]
    pub notes: Vec<TaskNote>,
}

impl Task {
    /// The annotation recorded at (or closest to) resolution time. The
    /// importer appends its marker note last when it auto-resolves a task.
    pub fn resolution_note(&self) -> Option<&TaskNote> {
        self.notes.last()
    }
}

/// A single immutable annotation on a task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskNote {
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    pub message: String,
}

impl TaskNote {
    pub fn from_text(message: impl Into<String>) -> Self {
        Self {
            author: None,
            timestamp: None,
            message: message.into(),
        }
    }
}

/// Accept both wire shapes for `notes`: a bare string (legacy single
/// annotation) or an ordered array of note objects. Null means no notes.
fn deserialize_notes<'de, D>(deserializer: D) -> Result<Vec<TaskNote>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NotesWire {
        Text(String),
        Entries(Vec<TaskNote>),
    }

    match Option::<NotesWire>::deserialize(deserializer)? {
        None => Ok(Vec::new()),
        Some(NotesWire::Text(text)) if text.is_empty() => Ok(Vec::new()),
        Some(NotesWire::Text(text)) => Ok(vec![TaskNote::from_text(text)]),
        Some(NotesWire::Entries(entries)) => Ok(entries),
    }
}

/// Wrapper the task-listing endpoint returns.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskPage {
    #[serde(default)]
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub approved: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Result of a bulk import trigger. Ephemeral - held for display only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportSummary {
    #[serde(default)]
    pub results: Vec<ImportFileResult>,
    #[serde(default)]
    pub last_import: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportFileResult {
    pub file: String,
    #[serde(default)]
    pub imported_rows: u64,
    #[serde(default)]
    pub auto_resolved: u64,
}
