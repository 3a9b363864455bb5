//! Data models for projects, tasks, and time entries.
//!
//! This module contains the core domain models of the work-tracking system.
//! [`Project`] is the aggregate root: it owns its [`Task`]s by value, each
//! task owns its [`TimeEntry`]s, and cross-entity references are identifier
//! handles resolved through the owner rather than pointers. The one-way
//! aggregation pipeline — an approved entry credits its task, the task
//! credits its project — therefore always runs inside a single `&mut Project`
//! call and cannot be observed half-applied.
//!
//! Fields are private behind getters; child collections surface as read-only
//! slices and are mutated only through the owning entity's methods.
//!
//! # Examples
//!
//! ```rust
//! use jiff::{SignedDuration, Timestamp};
//! use worklog_core::models::{Project, ProjectStatus};
//! use worklog_core::params::NewProject;
//!
//! # fn main() -> worklog_core::Result<()> {
//! let now = Timestamp::now();
//! let project = Project::new(NewProject {
//!     id: "P1".to_string(),
//!     name: "Billing revamp".to_string(),
//!     description: None,
//!     start_date: now,
//!     end_date: now + SignedDuration::from_hours(24 * 30),
//!     manager: "alice".to_string(),
//! })?;
//!
//! assert_eq!(project.status(), ProjectStatus::Planned);
//! assert_eq!(project.participants(), ["alice".to_string()]);
//! # Ok(())
//! # }
//! ```

mod project;
mod status;
mod task;
mod time_entry;


pub use project::Project;
pub use status::{ProjectStatus, TaskPriority, TaskStatus};
pub use task::Task;
pub use time_entry::TimeEntry;

use crate::error::{Result, WorklogError};

/// Rejects blank identifiers and names before any state is touched.
pub(crate) fn require_non_blank(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(WorklogError::validation(field).with_reason("cannot be blank"));
    }
    Ok(())
}
