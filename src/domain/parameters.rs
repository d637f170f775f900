//! Creation parameters resolved against a project.

use serde::Serialize;
use tracing::warn;

use crate::domain::{Project, Task, UserStory};

/// Fields submitted to create a user story.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserStoryParameters {
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    pub status: i64,
}

/// Fields submitted to create a task inside a user story.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskParameters {
    pub subject: String,
    pub status: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub us_order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<i64>,
}

/// Resolve an assignee username to a member id. A miss is not an error.
pub fn resolve_assignee(project: &Project, username: Option<&str>) -> Option<i64> {
    let username = username?;
    let member_id = project.member_id(username);
    if member_id.is_none() {
        warn!(project = %project.slug, username, "assignee is not a project member; leaving unassigned");
    }
    member_id
}

/// Resolve a status slug, falling back to the project's default user story status.
pub fn resolve_user_story_status(project: &Project, slug: Option<&str>) -> i64 {
    let Some(slug) = slug else {
        return project.default_us_status;
    };

    project.user_story_status_id(slug).unwrap_or_else(|| {
        warn!(project = %project.slug, status = slug, "unknown user story status; using project default");
        project.default_us_status
    })
}

pub fn build_user_story_parameters(project: &Project, story: &UserStory) -> UserStoryParameters {
    UserStoryParameters {
        subject: story.subject.clone(),
        description: story.description.clone(),
        assigned_to: resolve_assignee(project, story.assignee.as_deref()),
        tags: story.tags.clone(),
        status: resolve_user_story_status(project, story.status.as_deref()),
    }
}

/// Tasks always start in the project's default task status.
pub fn build_task_parameters(project: &Project, task: &Task) -> TaskParameters {
    TaskParameters {
        subject: task.subject.clone(),
        status: project.default_task_status,
        us_order: task.order,
        tags: task.tags.clone(),
        assigned_to: resolve_assignee(project, task.assignee.as_deref()),
    }
}
