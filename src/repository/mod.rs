use async_trait::async_trait;

use crate::domain::models::SeenJobs;
use crate::error::Result;

pub mod json_file;

pub use json_file::JsonFileRepository;

#[async_trait]
pub trait SeenRepository: Send + Sync {
    /// Load the seen state. Never fails: unreadable state is reported and treated as empty.
    async fn load(&self) -> SeenJobs;
    /// Replace the persisted state with `seen`.
    async fn save(&self, seen: &SeenJobs) -> Result<()>;
}
