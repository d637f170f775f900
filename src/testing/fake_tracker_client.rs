use std::sync::{Arc, Mutex};

use crate::domain::{
    AppError, CreatedItem, Credentials, Project, TaskParameters, UserStoryParameters,
};
use crate::ports::{TrackerClient, TrackerConnector};

#[derive(Debug, Default)]
struct TrackerState {
    projects: Vec<Project>,
    user_stories: Vec<(i64, UserStoryParameters)>,
    tasks: Vec<(i64, TaskParameters)>,
    user_story_attempts: usize,
    fail_user_story_attempt: Option<usize>,
    fail_task_attempt: Option<usize>,
    task_attempts: usize,
    next_id: i64,
}

/// Tracker double recording every creation call.
#[derive(Clone, Debug, Default)]
pub struct FakeTrackerClient {
    state: Arc<Mutex<TrackerState>>,
}

impl FakeTrackerClient {
    pub fn new(projects: Vec<Project>) -> Self {
        let state = TrackerState { projects, next_id: 100, ..TrackerState::default() };
        Self { state: Arc::new(Mutex::new(state)) }
    }

    /// Make the n-th (1-based) user story creation fail.
    pub fn failing_user_story_attempt(self, attempt: usize) -> Self {
        self.state.lock().unwrap().fail_user_story_attempt = Some(attempt);
        self
    }

    /// Make the n-th (1-based) task creation fail.
    pub fn failing_task_attempt(self, attempt: usize) -> Self {
        self.state.lock().unwrap().fail_task_attempt = Some(attempt);
        self
    }

    /// Project id and parameters of each created user story.
    pub fn created_user_stories(&self) -> Vec<(i64, UserStoryParameters)> {
        self.state.lock().unwrap().user_stories.clone()
    }

    /// Parent user story id and parameters of each created task.
    pub fn created_tasks(&self) -> Vec<(i64, TaskParameters)> {
        self.state.lock().unwrap().tasks.clone()
    }

    pub fn user_story_attempts(&self) -> usize {
        self.state.lock().unwrap().user_story_attempts
    }
}

impl TrackerClient for FakeTrackerClient {
    fn project_by_slug(&self, slug: &str) -> Result<Project, AppError> {
        let state = self.state.lock().unwrap();
        state
            .projects
            .iter()
            .find(|project| project.slug == slug)
            .cloned()
            .ok_or_else(|| AppError::ProjectNotFound(slug.to_string()))
    }

    fn create_user_story(
        &self,
        project: &Project,
        parameters: &UserStoryParameters,
    ) -> Result<CreatedItem, AppError> {
        let mut state = self.state.lock().unwrap();
        state.user_story_attempts += 1;
        if state.fail_user_story_attempt == Some(state.user_story_attempts) {
            return Err(AppError::TrackerApi { status: 400, details: "rejected".to_string() });
        }

        state.next_id += 1;
        let id = state.next_id;
        state.user_stories.push((project.id, parameters.clone()));
        Ok(CreatedItem { id, reference: id, subject: parameters.subject.clone() })
    }

    fn create_task(
        &self,
        _project: &Project,
        user_story: &CreatedItem,
        parameters: &TaskParameters,
    ) -> Result<CreatedItem, AppError> {
        let mut state = self.state.lock().unwrap();
        state.task_attempts += 1;
        if state.fail_task_attempt == Some(state.task_attempts) {
            return Err(AppError::TrackerApi { status: 400, details: "rejected".to_string() });
        }

        state.next_id += 1;
        let id = state.next_id;
        state.tasks.push((user_story.id, parameters.clone()));
        Ok(CreatedItem { id, reference: id, subject: parameters.subject.clone() })
    }
}

/// Connector handing out a shared [`FakeTrackerClient`].
#[derive(Clone, Debug)]
pub struct FakeTrackerConnector {
    pub client: FakeTrackerClient,
    reject_credentials: bool,
}

impl FakeTrackerConnector {
    pub fn new(client: FakeTrackerClient) -> Self {
        Self { client, reject_credentials: false }
    }

    pub fn rejecting(client: FakeTrackerClient) -> Self {
        Self { client, reject_credentials: true }
    }
}

impl TrackerConnector for FakeTrackerConnector {
    fn connect(&self, credentials: &Credentials) -> Result<Box<dyn TrackerClient>, AppError> {
        if self.reject_credentials {
            return Err(AppError::Authentication(format!("bad password for {}", credentials.username)));
        }
        Ok(Box::new(self.client.clone()))
    }
}
