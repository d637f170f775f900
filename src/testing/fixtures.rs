use crate::domain::{Member, Project, Task, UserStory, UserStoryStatus};

/// Project `demo` (id 5): members ana=11 and bo=12, statuses new=1 and in-progress=2.
pub fn sample_project() -> Project {
    Project {
        id: 5,
        slug: "demo".to_string(),
        members: vec![
            Member { id: 11, username: "ana".to_string() },
            Member { id: 12, username: "bo".to_string() },
        ],
        us_statuses: vec![
            UserStoryStatus { id: 1, slug: "new".to_string() },
            UserStoryStatus { id: 2, slug: "in-progress".to_string() },
        ],
        default_us_status: 1,
        default_task_status: 20,
    }
}

pub fn story(project_slug: &str, subject: &str) -> UserStory {
    UserStory {
        project_slug: project_slug.to_string(),
        subject: subject.to_string(),
        description: None,
        assignee: None,
        status: None,
        tags: None,
        tasks: vec![],
    }
}

pub fn task(subject: &str) -> Task {
    Task { subject: subject.to_string(), order: None, assignee: None, tags: None }
}
