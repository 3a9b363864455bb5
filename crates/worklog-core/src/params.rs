//! Parameter structures for construction operations.
//!
//! This module contains the parameter structures accepted by the entity
//! constructors ([`Project::new`], [`Project::add_task`],
//! [`Task::start_entry`]). They carry no framework-specific derives beyond
//! serde, so interface layers (a CLI, an HTTP handler, a job runner) can wrap
//! them with their own derive sets and convert via `.into()` without pulling
//! those frameworks into the core.
//!
//! With the `schema` cargo feature enabled, each structure additionally
//! derives `schemars::JsonSchema` for interfaces that publish schemas.
//!
//! Validation does not happen here: every field is checked by the receiving
//! constructor, atomically, before any state is created.
//!
//! [`Project::new`]: crate::models::Project::new
//! [`Project::add_task`]: crate::models::Project::add_task
//! [`Task::start_entry`]: crate::models::Task::start_entry

use jiff::Timestamp;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for creating a new project.
///
/// The manager is recorded as the first participant of the project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct NewProject {
    /// Unique project identifier (required, non-blank)
    pub id: String,
    /// Name of the project (required, non-blank)
    pub name: String,
    /// Optional detailed description of the project
    pub description: Option<String>,
    /// Timestamp when work on the project starts
    pub start_date: Timestamp,
    /// Timestamp when the project is due to end (never before `start_date`)
    pub end_date: Timestamp,
    /// Employee identifier of the project manager (required, non-blank)
    pub manager: String,
}

/// Parameters for creating a new task within a project.
///
/// New tasks start with status `new`, priority `medium`, and zero logged
/// hours.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct NewTask {
    /// Unique task identifier within the owning project (required, non-blank)
    pub id: String,
    /// Title of the task (required, non-blank)
    pub title: String,
    /// Optional employee identifier of the assignee
    pub assignee: Option<String>,
    /// Due date of the task (must be strictly in the future)
    pub due_date: Timestamp,
}

/// Parameters for starting a new time entry on a task.
///
/// Entries are created open (no end time) and unapproved; the owning task
/// fills in the project and task references.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct NewTimeEntry {
    /// Unique time entry identifier within the owning task (required,
    /// non-blank)
    pub id: String,
    /// Employee identifier of the person logging the time (required,
    /// non-blank)
    pub employee: String,
    /// Timestamp when the work interval started (never in the future)
    pub start_time: Timestamp,
}
