mod client;
mod error;
mod loader;
mod types;

pub use error::DriveError;
pub use loader::GoogleDriveLoader;
pub use types::{DriveFile, FileList};
