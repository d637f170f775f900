//! Tracker-side models consumed by the story builder.

use serde::Deserialize;

/// A Taiga project with the lookups needed to build creation requests.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub id: i64,
    pub slug: String,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub us_statuses: Vec<UserStoryStatus>,
    pub default_us_status: i64,
    pub default_task_status: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Member {
    pub id: i64,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserStoryStatus {
    pub id: i64,
    pub slug: String,
}

impl Project {
    /// Id of the first member whose username matches exactly.
    pub fn member_id(&self, username: &str) -> Option<i64> {
        self.members.iter().find(|member| member.username == username).map(|member| member.id)
    }

    /// Id of the user story status with the given slug.
    pub fn user_story_status_id(&self, slug: &str) -> Option<i64> {
        self.us_statuses.iter().find(|status| status.slug == slug).map(|status| status.id)
    }
}

/// Story or task returned by a creation call.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreatedItem {
    pub id: i64,
    #[serde(rename = "ref")]
    pub reference: i64,
    pub subject: String,
}
