//! Error types for the work tracking library.

use thiserror::Error;

/// Comprehensive error type for all work tracking operations.
#[derive(Error, Debug)]
pub enum WorklogError {
    /// Malformed or out-of-range input to a constructor or mutator.
    ///
    /// Raised before any state mutation takes place, so a failed call never
    /// leaves an entity partially updated.
    #[error("Invalid input for field '{field}': {reason}")]
    Validation { field: String, reason: String },
    /// Operation attempted while the entity is in a state that forbids it
    /// (stopping an already-stopped entry, approving an open entry, editing
    /// the description of an approved entry, removing the project manager).
    #[error("Invalid state for {entity}: {reason}")]
    InvalidState { entity: String, reason: String },
    /// Task not found for the given ID within the owning project.
    #[error("Task with ID '{id}' not found")]
    TaskNotFound { id: String },
    /// Time entry not found for the given ID within the owning task.
    #[error("Time entry with ID '{id}' not found")]
    TimeEntryNotFound { id: String },
}

/// Builder for creating input validation errors.
pub struct ValidationBuilder {
    field: String,
}

impl ValidationBuilder {
    /// Create a new validation error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> WorklogError {
        WorklogError::Validation {
            field: self.field,
            reason: reason.into(),
        }
    }
}

/// Builder for creating invalid state errors.
pub struct InvalidStateBuilder {
    entity: String,
}

impl InvalidStateBuilder {
    /// Create a new invalid state error builder for an entity.
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> WorklogError {
        WorklogError::InvalidState {
            entity: self.entity,
            reason: reason.into(),
        }
    }
}

impl WorklogError {
    /// Creates a builder for input validation errors.
    pub fn validation(field: impl Into<String>) -> ValidationBuilder {
        ValidationBuilder::new(field)
    }

    /// Creates a builder for invalid state errors.
    pub fn invalid_state(entity: impl Into<String>) -> InvalidStateBuilder {
        InvalidStateBuilder::new(entity)
    }
}

/// Result type alias for work tracking operations
pub type Result<T> = std::result::Result<T, WorklogError>;
