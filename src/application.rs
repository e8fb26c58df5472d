//! One watch run: load state, fetch, extract, diff, persist, notify.

use crate::config::Config;
use crate::error::Result;
use crate::extractor::ListingExtractor;
use crate::repository::SeenRepository;
use crate::service::{diff_and_merge, Notifier, NotifyOutcome, PageFetcher};

/// What a completed run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub extracted: usize,
    pub new: usize,
    pub notification: NotifyOutcome,
}

pub struct Application<'a> {
    config: &'a Config,
    repository: &'a dyn SeenRepository,
    fetcher: PageFetcher,
    notifier: Notifier,
}

impl<'a> Application<'a> {
    pub fn new(config: &'a Config, repository: &'a dyn SeenRepository) -> Result<Self> {
        Ok(Self {
            config,
            repository,
            fetcher: PageFetcher::new()?,
            notifier: Notifier::new(
                config.webhook_url.clone(),
                config.target_keywords.clone(),
            )?,
        })
    }

    /// Run once. Errors only when the page fetch or the state write fails;
    /// notification problems are logged and reported in the summary.
    pub async fn run(&self) -> Result<RunSummary> {
        let mut seen = self.repository.load().await;

        let html = self.fetcher.fetch(&self.config.listing_url()).await?;
        let jobs = ListingExtractor::extract(&html, &self.config.base_url);
        tracing::debug!("Extracted {} jobs", jobs.len());

        let new_jobs = diff_and_merge(&mut seen, &jobs);
        if new_jobs.is_empty() {
            tracing::info!("No new jobs found");
        } else {
            tracing::info!("Found {} new jobs", new_jobs.len());
        }

        self.repository.save(&seen).await?;

        let notification = self
            .notifier
            .notify(&new_jobs, self.config.notify_when_empty)
            .await;

        Ok(RunSummary {
            extracted: jobs.len(),
            new: new_jobs.len(),
            notification,
        })
    }
}

/// Build the application from `config` with the JSON state file and run it once.
pub async fn run(config: &Config) -> Result<RunSummary> {
    let repository = crate::repository::JsonFileRepository::new(&config.data_file);
    Application::new(config, &repository)?.run().await
}
