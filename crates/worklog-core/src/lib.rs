//! Core library for the Worklog time-tracking domain.
//!
//! This crate models a company's work-hour aggregation and time-entry
//! approval workflow: a [`Project`] owns tasks, a [`Task`] owns time entries,
//! and approving a stopped [`TimeEntry`] pushes its hours up through the task
//! into the project, exactly once. All mutations run synchronously through
//! the owning project, which makes each aggregation cascade atomic from the
//! caller's perspective.
//!
//! The crate has no persistence, network, or presentation surface; it is
//! consumed as an in-process object graph. Identifier generation and
//! cross-project uniqueness belong to the surrounding application layer.
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::{SignedDuration, Timestamp};
//! use worklog_core::params::{NewProject, NewTask, NewTimeEntry};
//! use worklog_core::{Project, ProjectStatus, TaskStatus};
//!
//! # fn main() -> worklog_core::Result<()> {
//! let now = Timestamp::now();
//!
//! // Set up a project with a task.
//! let mut project = Project::new(NewProject {
//!     id: "P1".to_string(),
//!     name: "Billing revamp".to_string(),
//!     description: Some("Rework the invoicing pipeline".to_string()),
//!     start_date: now,
//!     end_date: now + SignedDuration::from_hours(24 * 30),
//!     manager: "alice".to_string(),
//! })?;
//! project.add_task(NewTask {
//!     id: "T1".to_string(),
//!     title: "Schema migration".to_string(),
//!     assignee: Some("bob".to_string()),
//!     due_date: now + SignedDuration::from_hours(24 * 7),
//! })?;
//!
//! // Log an hour of work and run it through the approval cascade.
//! let task = project.task_mut("T1")?;
//! task.start_entry(NewTimeEntry {
//!     id: "E1".to_string(),
//!     employee: "bob".to_string(),
//!     start_time: now - SignedDuration::from_hours(1),
//! })?;
//! task.entry_mut("E1")?.stop(now)?;
//! project.approve_time_entry("T1", "E1")?;
//!
//! assert_eq!(project.actual_hours(), 1.0);
//! assert_eq!(project.status(), ProjectStatus::InProgress);
//! assert_eq!(project.task("T1")?.status(), TaskStatus::InProgress);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod models;
pub mod params;

// Re-export commonly used types
pub use error::{Result, WorklogError};
pub use models::{Project, ProjectStatus, Task, TaskPriority, TaskStatus, TimeEntry};
pub use params::{NewProject, NewTask, NewTimeEntry};
