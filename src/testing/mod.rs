mod fake_tracker_client;
mod fixtures;
mod mock_template_store;

pub use fake_tracker_client::{FakeTrackerClient, FakeTrackerConnector};
pub use fixtures::{sample_project, story, task};
pub use mock_template_store::MockTemplateStore;
