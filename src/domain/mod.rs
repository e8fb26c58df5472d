pub mod models;

pub use models::{JobRecord, SeenEntry, SeenJobs};
