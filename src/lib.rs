//! Builds a seed roster CSV (`studentCanvasName,studentCanvasId,fullStudentName`)
//! from a directory of course-platform submission folders.

pub mod cli;
pub mod model;
pub mod roster;
pub mod telemetry;

pub use model::{EntryNameError, RosterRow, SubmissionName};
pub use roster::{RosterSummary, build_roster};
