//! Time entry model definition and related functionality.

use std::fmt;

use jiff::{SignedDuration, Timestamp};
use serde::Serialize;

use crate::error::{Result, WorklogError};
use crate::params::NewTimeEntry;

use super::require_non_blank;

/// A single work interval logged by one employee against one project/task.
///
/// Entries are created open (no end time) and unapproved, stopped exactly
/// once, and then approved through the owning [`Project`]. The employee,
/// project, and task references are opaque identifier handles resolved
/// through the owning aggregate, never pointers back up the tree.
///
/// [`Project`]: super::Project
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TimeEntry {
    /// Unique identifier for the entry within its task
    id: String,

    /// Identifier of the employee who logged the time
    employee: String,

    /// Identifier of the owning project
    project_id: String,

    /// Identifier of the owning task
    task_id: String,

    /// Timestamp when the work interval started (UTC)
    start_time: Timestamp,

    /// Timestamp when the work interval ended; absent while the entry is open
    end_time: Option<Timestamp>,

    /// Free-form note on the work performed
    description: Option<String>,

    /// Whether the entry has been approved and its hours credited
    approved: bool,

    /// Timestamp when the entry was created (UTC)
    created_at: Timestamp,
}

impl TimeEntry {
    /// Creates an open, unapproved entry. Called by [`Task::start_entry`],
    /// which supplies the owning project/task identifiers.
    ///
    /// # Errors
    ///
    /// * `WorklogError::Validation` - When the id or employee is blank, or
    ///   the start time lies in the future
    ///
    /// [`Task::start_entry`]: super::Task::start_entry
    pub(crate) fn new(params: NewTimeEntry, project_id: String, task_id: String) -> Result<Self> {
        require_non_blank("id", &params.id)?;
        require_non_blank("employee", &params.employee)?;
        if params.start_time > Timestamp::now() {
            return Err(WorklogError::validation("start_time")
                .with_reason("start time cannot be in the future"));
        }

        Ok(Self {
            id: params.id,
            employee: params.employee,
            project_id,
            task_id,
            start_time: params.start_time,
            end_time: None,
            description: None,
            approved: false,
            created_at: Timestamp::now(),
        })
    }

    /// Unique identifier of the entry.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Identifier of the employee who logged the time.
    pub fn employee(&self) -> &str {
        &self.employee
    }

    /// Identifier of the owning project.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Identifier of the owning task.
    pub fn task_id(&self) -> &str {
        &self.task_id
    }

    /// Timestamp when the work interval started.
    pub fn start_time(&self) -> Timestamp {
        self.start_time
    }

    /// Timestamp when the work interval ended, if the entry has been stopped.
    pub fn end_time(&self) -> Option<Timestamp> {
        self.end_time
    }

    /// Free-form note on the work performed.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Whether the entry has been approved.
    pub fn is_approved(&self) -> bool {
        self.approved
    }

    /// Timestamp when the entry was created.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Elapsed time between start and end, or zero while the entry is open.
    pub fn duration(&self) -> SignedDuration {
        match self.end_time {
            Some(end) => end.duration_since(self.start_time),
            None => SignedDuration::ZERO,
        }
    }

    /// Logged hours at minute precision: elapsed whole minutes divided by 60.
    ///
    /// Zero while the entry is open. This is the exact value credited to the
    /// owning task and project when the entry is approved.
    pub fn hours(&self) -> f64 {
        self.duration().as_mins() as f64 / 60.0
    }

    /// Closes the work interval. Stopping is a one-time transition: the end
    /// timestamp, once set, is fixed.
    ///
    /// # Errors
    ///
    /// * `WorklogError::Validation` - When the end time is earlier than the
    ///   start time or lies in the future
    /// * `WorklogError::InvalidState` - When the entry has already been
    ///   stopped
    pub fn stop(&mut self, end_time: Timestamp) -> Result<()> {
        if end_time < self.start_time {
            return Err(WorklogError::validation("end_time")
                .with_reason("end time cannot be before start time"));
        }
        if end_time > Timestamp::now() {
            return Err(
                WorklogError::validation("end_time").with_reason("end time cannot be in the future")
            );
        }
        if self.end_time.is_some() {
            return Err(WorklogError::invalid_state("time entry")
                .with_reason("the entry has already been stopped"));
        }

        self.end_time = Some(end_time);
        Ok(())
    }

    /// Replaces the description.
    ///
    /// # Errors
    ///
    /// * `WorklogError::InvalidState` - When the entry has been approved;
    ///   approved entries are immutable apart from [`TimeEntry::reject`]
    pub fn update_description(&mut self, description: impl Into<String>) -> Result<()> {
        if self.approved {
            return Err(WorklogError::invalid_state("time entry")
                .with_reason("cannot update the description of an approved entry"));
        }
        self.description = Some(description.into());
        Ok(())
    }

    /// Unconditionally clears the approval flag.
    ///
    /// Rejection does not retract hours already credited through an earlier
    /// approval: the task and project totals keep the pushed amount. This
    /// mirrors the documented one-way aggregation pipeline, where no
    /// compensating subtraction path exists.
    pub fn reject(&mut self) {
        self.approved = false;
    }

    /// Returns the hours to credit on approval.
    ///
    /// # Errors
    ///
    /// * `WorklogError::InvalidState` - When the entry is still open
    pub(crate) fn approvable_hours(&self) -> Result<f64> {
        if self.end_time.is_none() {
            return Err(WorklogError::invalid_state("time entry")
                .with_reason("cannot approve a time entry without an end time"));
        }
        Ok(self.hours())
    }

    /// Marks the entry approved. The caller has already validated the state
    /// and credited the hours.
    pub(crate) fn mark_approved(&mut self) {
        self.approved = true;
    }
}

impl fmt::Display for TimeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TimeEntry {}: {} on {} ({:.2} hours, {})",
            self.id,
            self.employee,
            self.project_id,
            self.hours(),
            if self.approved {
                "approved"
            } else {
                "unapproved"
            }
        )
    }
}
