mod template_store;
mod tracker_client;

pub use template_store::TemplateStore;
pub use tracker_client::{TrackerClient, TrackerConnector};
