pub mod differ;
pub mod fetcher;
pub mod http;
pub mod notifier;

pub use differ::diff_and_merge;
pub use fetcher::PageFetcher;
pub use notifier::{Notifier, NotifyOutcome};
