//! Create user stories and their tasks on the tracker.

use tracing::{info, warn};

use crate::domain::{
    AppError, CreatedItem, MergedDocument, UserStory, build_task_parameters,
    build_user_story_parameters,
};
use crate::ports::TrackerClient;

/// A created user story with the tasks created inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedUserStory {
    pub user_story: CreatedItem,
    pub tasks: Vec<CreatedItem>,
}

/// Issues creation calls through an authenticated tracker session.
pub struct StoryBuilder<'a> {
    tracker: &'a dyn TrackerClient,
}

impl<'a> StoryBuilder<'a> {
    pub fn new(tracker: &'a dyn TrackerClient) -> Self {
        Self { tracker }
    }

    /// Create every story of the document in order.
    ///
    /// Stops at the first failure. Stories and tasks already created stay created.
    pub fn build_user_story(
        &self,
        document: &MergedDocument,
    ) -> Result<Vec<CreatedUserStory>, AppError> {
        document
            .user_stories()
            .iter()
            .map(|story| self.create_user_story_from_dict(story))
            .collect()
    }

    /// Create one user story, then its tasks in order.
    pub fn create_user_story_from_dict(
        &self,
        story: &UserStory,
    ) -> Result<CreatedUserStory, AppError> {
        let project = self.tracker.project_by_slug(&story.project_slug).map_err(|err| {
            warn!(project = %story.project_slug, error = %err, "project lookup failed");
            AppError::ProjectNotFound(story.project_slug.clone())
        })?;

        let parameters = build_user_story_parameters(&project, story);
        let user_story = self.tracker.create_user_story(&project, &parameters)?;
        info!("Created User Story ({}): \"{}\"", user_story.reference, user_story.subject);

        let mut tasks = Vec::with_capacity(story.tasks.len());
        for task in &story.tasks {
            let parameters = build_task_parameters(&project, task);
            let created = self.tracker.create_task(&project, &user_story, &parameters)?;
            info!(
                "Created Task ({}) on User Story ({}): \"{}\"",
                created.reference, user_story.reference, created.subject
            );
            tasks.push(created);
        }

        Ok(CreatedUserStory { user_story, tasks })
    }
}
