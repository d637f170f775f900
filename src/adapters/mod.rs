pub mod filesystem;
pub mod taiga_http;

pub use filesystem::FilesystemTemplateStore;
pub use taiga_http::{HttpTaigaClient, HttpTaigaConnector};
