//! Task model definition and related functionality.

use std::fmt;

use jiff::Timestamp;
use log::debug;
use serde::Serialize;

use crate::error::{Result, WorklogError};
use crate::params::{NewTask, NewTimeEntry};

use super::{require_non_blank, TaskPriority, TaskStatus, TimeEntry};

/// A unit of work within a project, aggregating the hours of its approved
/// time entries.
///
/// Tasks are owned by their [`Project`] and created through
/// [`Project::add_task`]; the owning project identifier is fixed at
/// construction. Logged hours only ever increase, driven by approved time
/// entries flowing through the project-level cascade.
///
/// [`Project`]: super::Project
/// [`Project::add_task`]: super::Project::add_task
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Task {
    /// Unique identifier for the task within its project
    id: String,

    /// Brief title/summary of the task
    title: String,

    /// Detailed description of the task
    description: Option<String>,

    /// Identifier of the owning project
    project_id: String,

    /// Identifier of the assigned employee, if any
    assignee: Option<String>,

    /// Planned effort in hours; zero until estimated
    estimated_hours: f64,

    /// Hours credited from approved time entries
    actual_hours: f64,

    /// Scheduling priority of the task
    priority: TaskPriority,

    /// Current status of the task
    status: TaskStatus,

    /// Due date of the task; strictly in the future at creation and at every
    /// update
    due_date: Timestamp,

    /// Time entries logged against the task, in creation order
    entries: Vec<TimeEntry>,

    /// Timestamp when the task was created (UTC)
    created_at: Timestamp,
}

impl Task {
    /// Creates a task bound to the given project. Called by
    /// [`Project::add_task`].
    ///
    /// New tasks start with status [`TaskStatus::New`], priority
    /// [`TaskPriority::Medium`], and zero logged hours.
    ///
    /// # Errors
    ///
    /// * `WorklogError::Validation` - When the id or title is blank, the
    ///   assignee is present but blank, or the due date is not strictly in
    ///   the future
    ///
    /// [`Project::add_task`]: super::Project::add_task
    pub(crate) fn new(params: NewTask, project_id: String) -> Result<Self> {
        require_non_blank("id", &params.id)?;
        require_non_blank("title", &params.title)?;
        if let Some(assignee) = &params.assignee {
            require_non_blank("assignee", assignee)?;
        }
        if params.due_date <= Timestamp::now() {
            return Err(
                WorklogError::validation("due_date").with_reason("due date must be in the future")
            );
        }

        Ok(Self {
            id: params.id,
            title: params.title,
            description: None,
            project_id,
            assignee: params.assignee,
            estimated_hours: 0.0,
            actual_hours: 0.0,
            priority: TaskPriority::default(),
            status: TaskStatus::default(),
            due_date: params.due_date,
            entries: Vec::new(),
            created_at: Timestamp::now(),
        })
    }

    /// Unique identifier of the task.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Brief title of the task.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Detailed description of the task.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Identifier of the owning project.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Identifier of the assigned employee, if any.
    pub fn assignee(&self) -> Option<&str> {
        self.assignee.as_deref()
    }

    /// Planned effort in hours.
    pub fn estimated_hours(&self) -> f64 {
        self.estimated_hours
    }

    /// Hours credited from approved time entries.
    pub fn actual_hours(&self) -> f64 {
        self.actual_hours
    }

    /// Scheduling priority of the task.
    pub fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Current status of the task.
    pub fn status(&self) -> TaskStatus {
        self.status
    }

    /// Due date of the task.
    pub fn due_date(&self) -> Timestamp {
        self.due_date
    }

    /// Timestamp when the task was created.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Time entries logged against the task, in creation order.
    ///
    /// The slice is a read-only view; entries are mutated through
    /// [`Task::entry_mut`] and the project-level approval cascade.
    pub fn entries(&self) -> &[TimeEntry] {
        &self.entries
    }

    /// Resolves a time entry by its identifier.
    ///
    /// # Errors
    ///
    /// * `WorklogError::TimeEntryNotFound` - When no entry has the given id
    pub fn entry(&self, entry_id: &str) -> Result<&TimeEntry> {
        self.entries
            .iter()
            .find(|entry| entry.id() == entry_id)
            .ok_or_else(|| WorklogError::TimeEntryNotFound {
                id: entry_id.to_string(),
            })
    }

    /// Resolves a time entry by its identifier for mutation (stopping,
    /// rejecting, editing the description). Approval goes through
    /// [`Project::approve_time_entry`] instead, since it spans the whole
    /// aggregate.
    ///
    /// # Errors
    ///
    /// * `WorklogError::TimeEntryNotFound` - When no entry has the given id
    ///
    /// [`Project::approve_time_entry`]: super::Project::approve_time_entry
    pub fn entry_mut(&mut self, entry_id: &str) -> Result<&mut TimeEntry> {
        self.entries
            .iter_mut()
            .find(|entry| entry.id() == entry_id)
            .ok_or_else(|| WorklogError::TimeEntryNotFound {
                id: entry_id.to_string(),
            })
    }

    /// Completion ratio in percent: logged hours over estimated hours.
    ///
    /// Returns 0 when no estimate has been set; an unestimated task is never
    /// an error condition.
    pub fn progress(&self) -> f64 {
        if self.estimated_hours == 0.0 {
            return 0.0;
        }
        (self.actual_hours / self.estimated_hours) * 100.0
    }

    /// Starts a new open, unapproved time entry on this task.
    ///
    /// # Errors
    ///
    /// * `WorklogError::Validation` - When the entry parameters are invalid
    ///   or an entry with the same id already exists on this task
    pub fn start_entry(&mut self, params: NewTimeEntry) -> Result<&TimeEntry> {
        if self.entries.iter().any(|entry| entry.id() == params.id) {
            return Err(WorklogError::validation("id").with_reason(format!(
                "a time entry with ID '{}' already exists on task '{}'",
                params.id, self.id
            )));
        }

        let entry = TimeEntry::new(params, self.project_id.clone(), self.id.clone())?;
        let index = self.entries.len();
        self.entries.push(entry);
        Ok(&self.entries[index])
    }

    /// Replaces the title.
    ///
    /// # Errors
    ///
    /// * `WorklogError::Validation` - When the new title is blank
    pub fn update_title(&mut self, title: impl Into<String>) -> Result<()> {
        let title = title.into();
        require_non_blank("title", &title)?;
        self.title = title;
        Ok(())
    }

    /// Replaces the description.
    pub fn update_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    /// Sets the scheduling priority.
    pub fn set_priority(&mut self, priority: TaskPriority) {
        self.priority = priority;
    }

    /// Assigns the task to a different employee.
    ///
    /// # Errors
    ///
    /// * `WorklogError::Validation` - When the employee identifier is blank
    pub fn reassign(&mut self, employee: impl Into<String>) -> Result<()> {
        let employee = employee.into();
        require_non_blank("employee", &employee)?;
        self.assignee = Some(employee);
        Ok(())
    }

    /// Sets the planned effort.
    ///
    /// # Errors
    ///
    /// * `WorklogError::Validation` - When the hours are not strictly
    ///   positive
    pub fn set_estimated_hours(&mut self, hours: f64) -> Result<()> {
        if !hours.is_finite() || hours <= 0.0 {
            return Err(WorklogError::validation("estimated_hours")
                .with_reason("estimated hours must be positive"));
        }
        self.estimated_hours = hours;
        Ok(())
    }

    /// Moves the due date.
    ///
    /// # Errors
    ///
    /// * `WorklogError::Validation` - When the new due date is not strictly
    ///   in the future
    pub fn update_due_date(&mut self, due_date: Timestamp) -> Result<()> {
        if due_date <= Timestamp::now() {
            return Err(
                WorklogError::validation("due_date").with_reason("due date must be in the future")
            );
        }
        self.due_date = due_date;
        Ok(())
    }

    /// Adds work to the task total and moves a new task to in-progress.
    ///
    /// Task-local half of the aggregation cascade; the project-level half
    /// lives in [`Project::log_task_work`]. Validates before mutating, so a
    /// failed call leaves the task untouched.
    ///
    /// # Errors
    ///
    /// * `WorklogError::Validation` - When the hours are not strictly
    ///   positive
    ///
    /// [`Project::log_task_work`]: super::Project::log_task_work
    pub(crate) fn record_work(&mut self, hours: f64) -> Result<()> {
        if !hours.is_finite() || hours <= 0.0 {
            return Err(WorklogError::validation("hours").with_reason("hours must be positive"));
        }

        self.actual_hours += hours;
        if self.status == TaskStatus::New {
            self.status = TaskStatus::InProgress;
        }
        debug!(
            "task {}: recorded {:.2} hours (total {:.2})",
            self.id, hours, self.actual_hours
        );
        Ok(())
    }

    /// Marks the given entry approved after the cascade has credited its
    /// hours.
    pub(crate) fn mark_entry_approved(&mut self, entry_id: &str) -> Result<()> {
        self.entry_mut(entry_id)?.mark_approved();
        Ok(())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Task {}: {} ({}, {} priority, {:.1}% complete, {})",
            self.id,
            self.title,
            self.status,
            self.priority,
            self.progress(),
            self.assignee.as_deref().unwrap_or("unassigned")
        )
    }
}
