//! Project model definition and the work-hour aggregation cascade.

use std::fmt;

use jiff::Timestamp;
use log::debug;
use serde::Serialize;

use crate::error::{Result, WorklogError};
use crate::params::{NewProject, NewTask};

use super::{require_non_blank, ProjectStatus, Task};

/// The aggregate root of the work-tracking domain.
///
/// A project owns its tasks by value and each task owns its time entries, so
/// every mutation of the tree flows through a `&mut Project` and no two
/// mutations can interleave within one aggregation cascade. Child
/// collections are exposed only as read-only slices; callers address tasks
/// and entries by identifier through [`Project::task`] /
/// [`Project::task_mut`].
///
/// Hours move in one direction only: an approved time entry credits its
/// task, which credits the project. Nothing in the model ever subtracts.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Project {
    /// Unique identifier for the project
    id: String,

    /// Name of the project
    name: String,

    /// Detailed description of the project
    description: Option<String>,

    /// Timestamp when work on the project starts (UTC)
    start_date: Timestamp,

    /// Timestamp when the project is due to end (UTC); never before
    /// `start_date`
    end_date: Timestamp,

    /// Identifier of the managing employee; always a participant
    manager: String,

    /// Participating employees, unique, in insertion order
    participants: Vec<String>,

    /// Tasks owned by the project, in creation order
    tasks: Vec<Task>,

    /// Planned effort in hours; zero until estimated
    estimated_hours: f64,

    /// Hours aggregated from the tasks
    actual_hours: f64,

    /// Current status of the project
    status: ProjectStatus,

    /// Timestamp when the project was created (UTC)
    created_at: Timestamp,
}

impl Project {
    /// Creates a project. The manager becomes the first participant.
    ///
    /// All inputs are validated before any state is built, so a failed call
    /// constructs nothing.
    ///
    /// # Errors
    ///
    /// * `WorklogError::Validation` - When the id, name, or manager is blank,
    ///   or the end date is earlier than the start date
    pub fn new(params: NewProject) -> Result<Self> {
        require_non_blank("id", &params.id)?;
        require_non_blank("name", &params.name)?;
        Self::validate_dates(params.start_date, params.end_date)?;
        require_non_blank("manager", &params.manager)?;

        let participants = vec![params.manager.clone()];
        Ok(Self {
            id: params.id,
            name: params.name,
            description: params.description,
            start_date: params.start_date,
            end_date: params.end_date,
            manager: params.manager,
            participants,
            tasks: Vec::new(),
            estimated_hours: 0.0,
            actual_hours: 0.0,
            status: ProjectStatus::default(),
            created_at: Timestamp::now(),
        })
    }

    fn validate_dates(start_date: Timestamp, end_date: Timestamp) -> Result<()> {
        if end_date < start_date {
            return Err(WorklogError::validation("end_date")
                .with_reason("end date cannot be before start date"));
        }
        Ok(())
    }

    /// Unique identifier of the project.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Name of the project.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Detailed description of the project.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Timestamp when work on the project starts.
    pub fn start_date(&self) -> Timestamp {
        self.start_date
    }

    /// Timestamp when the project is due to end.
    pub fn end_date(&self) -> Timestamp {
        self.end_date
    }

    /// Identifier of the managing employee.
    pub fn manager(&self) -> &str {
        &self.manager
    }

    /// Participating employees, in insertion order.
    ///
    /// Membership is unique; mutate it through
    /// [`Project::add_participant`] / [`Project::remove_participant`] /
    /// [`Project::change_manager`].
    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    /// Tasks owned by the project, in creation order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Planned effort in hours.
    pub fn estimated_hours(&self) -> f64 {
        self.estimated_hours
    }

    /// Hours aggregated from the tasks.
    pub fn actual_hours(&self) -> f64 {
        self.actual_hours
    }

    /// Current status of the project.
    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Timestamp when the project was created.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Resolves a task by its identifier.
    ///
    /// # Errors
    ///
    /// * `WorklogError::TaskNotFound` - When no task has the given id
    pub fn task(&self, task_id: &str) -> Result<&Task> {
        self.tasks
            .iter()
            .find(|task| task.id() == task_id)
            .ok_or_else(|| WorklogError::TaskNotFound {
                id: task_id.to_string(),
            })
    }

    /// Resolves a task by its identifier for task-local mutation
    /// (reassignment, estimates, due dates, starting and stopping entries).
    ///
    /// Work logging is not task-local — it aggregates into the project — and
    /// goes through [`Project::log_task_work`] or
    /// [`Project::approve_time_entry`] instead.
    ///
    /// # Errors
    ///
    /// * `WorklogError::TaskNotFound` - When no task has the given id
    pub fn task_mut(&mut self, task_id: &str) -> Result<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|task| task.id() == task_id)
            .ok_or_else(|| WorklogError::TaskNotFound {
                id: task_id.to_string(),
            })
    }

    /// Completion ratio in percent: aggregated hours over estimated hours.
    ///
    /// Returns 0 when no estimate has been set; an unestimated project is
    /// never an error condition.
    pub fn progress(&self) -> f64 {
        if self.estimated_hours == 0.0 {
            return 0.0;
        }
        (self.actual_hours / self.estimated_hours) * 100.0
    }

    /// Creates a task owned by this project.
    ///
    /// # Errors
    ///
    /// * `WorklogError::Validation` - When the task parameters are invalid or
    ///   a task with the same id already exists in this project
    pub fn add_task(&mut self, params: NewTask) -> Result<&Task> {
        if self.tasks.iter().any(|task| task.id() == params.id) {
            return Err(WorklogError::validation("id").with_reason(format!(
                "a task with ID '{}' already exists in project '{}'",
                params.id, self.id
            )));
        }

        let task = Task::new(params, self.id.clone())?;
        let index = self.tasks.len();
        self.tasks.push(task);
        Ok(&self.tasks[index])
    }

    /// Adds hours to the project total and moves a planned project to
    /// in-progress.
    ///
    /// Zero is accepted here while [`Project::log_task_work`] requires
    /// strictly positive hours; the asymmetry is part of the contract and
    /// deliberately not unified.
    ///
    /// # Errors
    ///
    /// * `WorklogError::Validation` - When the hours are negative
    pub fn update_actual_hours(&mut self, hours: f64) -> Result<()> {
        if !hours.is_finite() || hours < 0.0 {
            return Err(WorklogError::validation("hours").with_reason("hours cannot be negative"));
        }

        self.actual_hours += hours;
        if self.status == ProjectStatus::Planned {
            self.status = ProjectStatus::InProgress;
        }
        debug!(
            "project {}: actual hours now {:.2}",
            self.id, self.actual_hours
        );
        Ok(())
    }

    /// Logs work against a task and aggregates the same hours into the
    /// project, as one synchronous call.
    ///
    /// This is the public entry point of the aggregation cascade; it is also
    /// what [`Project::approve_time_entry`] drives internally. The task is
    /// validated and credited first, then the project — a validation failure
    /// mutates neither.
    ///
    /// # Errors
    ///
    /// * `WorklogError::TaskNotFound` - When no task has the given id
    /// * `WorklogError::Validation` - When the hours are not strictly
    ///   positive
    pub fn log_task_work(&mut self, task_id: &str, hours: f64) -> Result<()> {
        let task = self.task_mut(task_id)?;
        task.record_work(hours)?;
        self.update_actual_hours(hours)
    }

    /// Approves a stopped time entry and pushes its hours through the task
    /// into the project, exactly once.
    ///
    /// Approving an already-approved entry is a no-op that returns the
    /// previously credited hours, so repeated calls cannot inflate the
    /// totals. The computed hours are validated before any state changes;
    /// an entry shorter than one minute computes zero hours and fails
    /// validation, leaving the entry unapproved.
    ///
    /// Returns the hours credited by this approval.
    ///
    /// # Errors
    ///
    /// * `WorklogError::TaskNotFound` / `WorklogError::TimeEntryNotFound` -
    ///   When a handle fails to resolve
    /// * `WorklogError::InvalidState` - When the entry is still open
    /// * `WorklogError::Validation` - When the computed hours are not
    ///   strictly positive
    pub fn approve_time_entry(&mut self, task_id: &str, entry_id: &str) -> Result<f64> {
        let task = self.task_mut(task_id)?;
        let entry = task.entry(entry_id)?;
        if entry.is_approved() {
            debug!("entry {entry_id} on task {task_id} already approved, skipping cascade");
            return Ok(entry.hours());
        }

        let hours = entry.approvable_hours()?;
        task.record_work(hours)?;
        task.mark_entry_approved(entry_id)?;
        self.update_actual_hours(hours)?;
        debug!("entry {entry_id} on task {task_id} approved for {hours:.2} hours");
        Ok(hours)
    }

    /// Adds an employee to the participants. Adding an existing participant
    /// is a no-op; membership stays unique.
    ///
    /// # Errors
    ///
    /// * `WorklogError::Validation` - When the employee identifier is blank
    pub fn add_participant(&mut self, employee: impl Into<String>) -> Result<()> {
        let employee = employee.into();
        require_non_blank("employee", &employee)?;
        if !self.participants.contains(&employee) {
            self.participants.push(employee);
        }
        Ok(())
    }

    /// Removes an employee from the participants. Removing a non-member is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// * `WorklogError::InvalidState` - When the employee is the current
    ///   project manager
    pub fn remove_participant(&mut self, employee: &str) -> Result<()> {
        if employee == self.manager {
            return Err(WorklogError::invalid_state("project")
                .with_reason("cannot remove the project manager from participants"));
        }
        self.participants.retain(|participant| participant != employee);
        Ok(())
    }

    /// Hands the project to a new manager.
    ///
    /// The new manager joins the participants if not already a member; the
    /// old manager remains a participant unless removed separately.
    ///
    /// # Errors
    ///
    /// * `WorklogError::Validation` - When the new manager identifier is
    ///   blank
    pub fn change_manager(&mut self, new_manager: impl Into<String>) -> Result<()> {
        let new_manager = new_manager.into();
        require_non_blank("manager", &new_manager)?;
        if !self.participants.contains(&new_manager) {
            self.participants.push(new_manager.clone());
        }
        self.manager = new_manager;
        Ok(())
    }

    /// Replaces the name.
    ///
    /// # Errors
    ///
    /// * `WorklogError::Validation` - When the new name is blank
    pub fn update_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        require_non_blank("name", &name)?;
        self.name = name;
        Ok(())
    }

    /// Replaces the description.
    pub fn update_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    /// Moves the start and end dates together, revalidating their order.
    ///
    /// # Errors
    ///
    /// * `WorklogError::Validation` - When the end date is earlier than the
    ///   start date
    pub fn update_dates(&mut self, start_date: Timestamp, end_date: Timestamp) -> Result<()> {
        Self::validate_dates(start_date, end_date)?;
        self.start_date = start_date;
        self.end_date = end_date;
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

    /// Sets the project status directly (putting the project on hold,
    /// completing or cancelling it). The planned-to-in-progress transition
    /// happens automatically on the first aggregated hour.
    pub fn set_status(&mut self, status: ProjectStatus) {
        self.status = status;
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Project {}: {} (manager {}, {}, {:.1}% complete, {} participants, {} tasks)",
            self.id,
            self.name,
            self.manager,
            self.status,
            self.progress(),
            self.participants.len(),
            self.tasks.len()
        )
    }
}
