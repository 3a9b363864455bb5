use jiff::{SignedDuration, Timestamp};
use worklog_core::params::{NewProject, NewTask};
use worklog_core::{Project, ProjectStatus, WorklogError};

/// Timestamp a number of hours in the past.
fn hours_ago(hours: i64) -> Timestamp {
    Timestamp::now() - SignedDuration::from_hours(hours)
}

/// Timestamp a number of hours in the future.
fn hours_ahead(hours: i64) -> Timestamp {
    Timestamp::now() + SignedDuration::from_hours(hours)
}

/// Helper function to create a project managed by alice, running for 30 days.
fn create_test_project() -> Project {
    Project::new(NewProject {
        id: "P1".to_string(),
        name: "Billing revamp".to_string(),
        description: Some("Rework the invoicing pipeline".to_string()),
        start_date: hours_ago(1),
        end_date: hours_ahead(24 * 30),
        manager: "alice".to_string(),
    })
    .expect("Failed to create project")
}

fn new_task(id: &str) -> NewTask {
    NewTask {
        id: id.to_string(),
        title: "Schema migration".to_string(),
        assignee: Some("bob".to_string()),
        due_date: hours_ahead(24 * 7),
    }
}

#[test]
fn test_new_project_initial_state() {
    let project = create_test_project();

    assert_eq!(project.id(), "P1");
    assert_eq!(project.name(), "Billing revamp");
    assert_eq!(project.status(), ProjectStatus::Planned);
    assert_eq!(project.manager(), "alice");
    assert_eq!(project.participants(), ["alice".to_string()]);
    assert_eq!(project.actual_hours(), 0.0);
    assert_eq!(project.estimated_hours(), 0.0);
    assert!(project.tasks().is_empty());
}

#[test]
fn test_project_rejects_blank_inputs() {
    for (id, name, manager, field) in [
        ("", "Billing revamp", "alice", "id"),
        ("P1", "   ", "alice", "name"),
        ("P1", "Billing revamp", "", "manager"),
    ] {
        let result = Project::new(NewProject {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            start_date: hours_ago(1),
            end_date: hours_ahead(24),
            manager: manager.to_string(),
        });

        match result.unwrap_err() {
            WorklogError::Validation { field: actual, .. } => assert_eq!(actual, field),
            _ => panic!("Expected Validation error"),
        }
    }
}

#[test]
fn test_project_rejects_end_before_start() {
    let result = Project::new(NewProject {
        id: "P1".to_string(),
        name: "Billing revamp".to_string(),
        description: None,
        start_date: hours_ago(1),
        end_date: hours_ago(2),
        manager: "alice".to_string(),
    });

    match result.unwrap_err() {
        WorklogError::Validation { field, reason } => {
            assert_eq!(field, "end_date");
            assert!(reason.contains("before start date"));
        }
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_manager_cannot_be_removed() {
    let mut project = create_test_project();

    match project.remove_participant("alice").unwrap_err() {
        WorklogError::InvalidState { reason, .. } => {
            assert!(reason.contains("project manager"));
        }
        _ => panic!("Expected InvalidState error"),
    }
    assert_eq!(project.participants(), ["alice".to_string()]);

    // Still forbidden with other members present.
    project
        .add_participant("bob")
        .expect("Failed to add participant");
    assert!(project.remove_participant("alice").is_err());
}

#[test]
fn test_participant_membership_is_unique() {
    let mut project = create_test_project();

    project
        .add_participant("bob")
        .expect("Failed to add participant");
    project
        .add_participant("bob")
        .expect("Adding an existing participant is a no-op");
    assert_eq!(
        project.participants(),
        ["alice".to_string(), "bob".to_string()]
    );

    assert!(project.add_participant("  ").is_err());
}

#[test]
fn test_remove_participant() {
    let mut project = create_test_project();
    project
        .add_participant("bob")
        .expect("Failed to add participant");

    project
        .remove_participant("bob")
        .expect("Failed to remove participant");
    assert_eq!(project.participants(), ["alice".to_string()]);

    // Removing a non-member is a no-op.
    project
        .remove_participant("bob")
        .expect("Removing a non-member is a no-op");
}

#[test]
fn test_change_manager_keeps_old_manager_as_participant() {
    let mut project = create_test_project();

    project.change_manager("bob").expect("Failed to change manager");
    assert_eq!(project.manager(), "bob");
    assert_eq!(
        project.participants(),
        ["alice".to_string(), "bob".to_string()]
    );

    // The old manager is an ordinary participant now and can leave; the new
    // one cannot.
    assert!(project.remove_participant("bob").is_err());
    project
        .remove_participant("alice")
        .expect("Failed to remove old manager");
    assert_eq!(project.participants(), ["bob".to_string()]);
}

#[test]
fn test_change_manager_to_existing_participant() {
    let mut project = create_test_project();
    project
        .add_participant("bob")
        .expect("Failed to add participant");

    project.change_manager("bob").expect("Failed to change manager");
    assert_eq!(project.manager(), "bob");
    assert_eq!(
        project.participants(),
        ["alice".to_string(), "bob".to_string()]
    );

    assert!(project.change_manager("").is_err());
}

#[test]
fn test_update_dates_revalidates_order() {
    let mut project = create_test_project();
    let start = hours_ago(2);
    let end = hours_ahead(24 * 60);

    project
        .update_dates(start, end)
        .expect("Failed to update dates");
    assert_eq!(project.start_date(), start);
    assert_eq!(project.end_date(), end);

    assert!(project.update_dates(end, start).is_err());
    assert_eq!(project.start_date(), start);
    assert_eq!(project.end_date(), end);
}

#[test]
fn test_update_name_and_description() {
    let mut project = create_test_project();

    project
        .update_name("Billing revamp, phase 2")
        .expect("Failed to update name");
    assert_eq!(project.name(), "Billing revamp, phase 2");
    assert!(project.update_name("   ").is_err());

    project.update_description("Now with dunning letters");
    assert_eq!(project.description(), Some("Now with dunning letters"));
}

#[test]
fn test_project_progress_zero_guard() {
    let mut project = create_test_project();

    // Hours without an estimate: progress stays 0, never NaN.
    project
        .update_actual_hours(12.0)
        .expect("Failed to update hours");
    assert_eq!(project.progress(), 0.0);

    project
        .set_estimated_hours(48.0)
        .expect("Failed to set estimate");
    assert_eq!(project.progress(), 25.0);

    assert!(project.set_estimated_hours(0.0).is_err());
    assert!(project.set_estimated_hours(-8.0).is_err());
}

#[test]
fn test_add_task_and_lookup() {
    let mut project = create_test_project();

    project.add_task(new_task("T1")).expect("Failed to add task");
    assert_eq!(project.tasks().len(), 1);

    let task = project.task("T1").expect("Failed to resolve task");
    assert_eq!(task.project_id(), "P1");
    assert_eq!(task.assignee(), Some("bob"));

    match project.task("T9").unwrap_err() {
        WorklogError::TaskNotFound { id } => assert_eq!(id, "T9"),
        _ => panic!("Expected TaskNotFound error"),
    }
}

#[test]
fn test_add_task_rejects_duplicate_id() {
    let mut project = create_test_project();
    project.add_task(new_task("T1")).expect("Failed to add task");

    match project.add_task(new_task("T1")).unwrap_err() {
        WorklogError::Validation { field, reason } => {
            assert_eq!(field, "id");
            assert!(reason.contains("already exists"));
        }
        _ => panic!("Expected Validation error"),
    }
    assert_eq!(project.tasks().len(), 1);
}

#[test]
fn test_add_task_rejects_past_due_date() {
    let mut project = create_test_project();
    let result = project.add_task(NewTask {
        id: "T1".to_string(),
        title: "Overdue before it started".to_string(),
        assignee: None,
        due_date: hours_ago(24),
    });

    match result.unwrap_err() {
        WorklogError::Validation { field, .. } => assert_eq!(field, "due_date"),
        _ => panic!("Expected Validation error"),
    }
    assert!(project.tasks().is_empty());
}

#[test]
fn test_set_status_directly() {
    let mut project = create_test_project();

    project.set_status(ProjectStatus::OnHold);
    assert_eq!(project.status(), ProjectStatus::OnHold);

    // Aggregation only auto-transitions out of planned, not out of on-hold.
    project
        .update_actual_hours(1.0)
        .expect("Failed to update hours");
    assert_eq!(project.status(), ProjectStatus::OnHold);
}

#[test]
fn test_project_display() {
    let mut project = create_test_project();
    project.add_task(new_task("T1")).expect("Failed to add task");

    let output = format!("{project}");
    assert!(output.contains("Project P1: Billing revamp"));
    assert!(output.contains("manager alice"));
    assert!(output.contains("planned"));
    assert!(output.contains("1 participants"));
    assert!(output.contains("1 tasks"));
}

#[test]
fn test_project_serializes_to_snapshot() {
    let mut project = create_test_project();
    project.add_task(new_task("T1")).expect("Failed to add task");

    let value = serde_json::to_value(&project).expect("Failed to serialize project");
    assert_eq!(value["id"], "P1");
    assert_eq!(value["status"], "planned");
    assert_eq!(value["manager"], "alice");
    assert_eq!(value["tasks"][0]["id"], "T1");
    assert_eq!(value["tasks"][0]["priority"], "medium");
}
