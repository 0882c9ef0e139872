use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Marker the submission platform inserts into folder names handed in after the deadline.
pub const LATE_MARKER: &str = "_late";

pub const ROSTER_HEADER: [&str; 3] = ["studentCanvasName", "studentCanvasId", "fullStudentName"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterRow {
    #[serde(rename = "studentCanvasName")]
    pub platform_display_name: String,
    #[serde(rename = "studentCanvasId")]
    pub platform_id: String,
    #[serde(rename = "fullStudentName")]
    pub full_name: String,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EntryNameError {
    #[error("entry `{name}` has no `_<id>` part")]
    MissingId { name: String },

    #[error("entry `{name}` has an empty display name")]
    EmptyDisplayName { name: String },

    #[error("entry `{name}` has an empty platform id")]
    EmptyId { name: String },
}

/// A submission folder name of the form `<displayName>_<platformId>[_late][...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionName {
    pub display_name: String,
    pub platform_id: String,
    pub late: bool,
}

impl SubmissionName {
    /// Every `_late` occurrence is removed before splitting, not only a trailing one.
    /// Tokens after the id (submission ids, original file names) are ignored.
    pub fn parse(name: &str) -> Result<Self, EntryNameError> {
        let late = name.contains(LATE_MARKER);
        let stripped = name.replace(LATE_MARKER, "");
        let mut tokens = stripped.split('_');

        let display_name = tokens.next().unwrap_or_default();
        let platform_id = tokens.next().ok_or_else(|| EntryNameError::MissingId {
            name: name.to_string(),
        })?;

        if display_name.is_empty() {
            return Err(EntryNameError::EmptyDisplayName {
                name: name.to_string(),
            });
        }
        if platform_id.is_empty() {
            return Err(EntryNameError::EmptyId {
                name: name.to_string(),
            });
        }

        Ok(Self {
            display_name: display_name.to_string(),
            platform_id: platform_id.to_string(),
            late,
        })
    }

    /// True when stripping the late marker changed the name or id tokens
    /// instead of only dropping a standalone `late` token.
    pub fn marker_altered_fields(&self, raw: &str) -> bool {
        let mut raw_tokens = raw.split('_').filter(|t| *t != "late");
        raw_tokens.next() != Some(self.display_name.as_str())
            || raw_tokens.next() != Some(self.platform_id.as_str())
    }
}

impl From<SubmissionName> for RosterRow {
    fn from(name: SubmissionName) -> Self {
        Self {
            platform_display_name: name.display_name,
            platform_id: name.platform_id,
            full_name: String::new(),
        }
    }
}
