//! Project tracker port definitions.

use crate::domain::{
    AppError, CreatedItem, Credentials, Project, TaskParameters, UserStoryParameters,
};

/// Authenticated session against the project tracker.
pub trait TrackerClient {
    /// Look up a project by its slug.
    fn project_by_slug(&self, slug: &str) -> Result<Project, AppError>;

    /// Create a user story in `project`.
    fn create_user_story(
        &self,
        project: &Project,
        parameters: &UserStoryParameters,
    ) -> Result<CreatedItem, AppError>;

    /// Create a task attached to `user_story`.
    fn create_task(
        &self,
        project: &Project,
        user_story: &CreatedItem,
        parameters: &TaskParameters,
    ) -> Result<CreatedItem, AppError>;
}

/// Opens authenticated tracker sessions. One session per webhook invocation.
pub trait TrackerConnector {
    fn connect(&self, credentials: &Credentials) -> Result<Box<dyn TrackerClient>, AppError>;
}
