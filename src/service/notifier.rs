//! Webhook notifications for newly found jobs.
//!
//! Jobs are filtered by keyword against their store name. Matches produce a
//! summary plus up to [`MAX_EMBEDS`] embeds; no matches produce an
//! informational message only when `include_empty` is set. Delivery failures
//! are logged and never returned to the caller.

use reqwest::Client;
use serde::Serialize;

use crate::domain::models::JobRecord;
use crate::error::{AppError, Result};
use crate::service::http::{create_client, ClientType};

pub const MAX_EMBEDS: usize = 10;
pub const MATCH_COLOR: u32 = 0x00FF00;

pub const NO_MATCH_MESSAGE: &str =
    "ℹ️ New jobs were detected, but none matched the target keywords.";
pub const NO_NEW_JOBS_MESSAGE: &str = "ℹ️ No new jobs detected at this time.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Embed {
    pub title: String,
    pub url: Option<String>,
    pub color: u32,
}

impl From<&JobRecord> for Embed {
    fn from(job: &JobRecord) -> Self {
        Self {
            title: job.title(),
            url: job.url.clone(),
            color: MATCH_COLOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookPayload {
    pub content: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<Embed>,
}

/// A payload ready to send, with the number of keyword matches behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub payload: WebhookPayload,
    pub matched: usize,
}

impl Notification {
    fn log_message(&self) -> String {
        if self.matched > 0 {
            format!("Notification sent for {} jobs", self.matched)
        } else {
            "Notification sent with no matching updates".to_string()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyOutcome {
    /// No webhook configured.
    Disabled,
    /// Nothing matched and empty notifications are off.
    NothingToSend,
    Sent,
    Failed,
}

pub struct Notifier {
    webhook_url: Option<String>,
    keywords: Vec<String>,
    client: Client,
}

impl Notifier {
    pub fn new(webhook_url: Option<String>, keywords: Vec<String>) -> Result<Self> {
        Ok(Self {
            webhook_url,
            keywords,
            client: create_client(ClientType::Webhook)?,
        })
    }

    /// Jobs whose store name contains any target keyword, in input order.
    pub fn matching<'a>(&self, jobs: &'a [JobRecord]) -> Vec<&'a JobRecord> {
        jobs.iter()
            .filter(|job| job.matches_any(self.keywords.as_slice()))
            .collect()
    }

    /// Decide what, if anything, to send for `new_jobs`.
    pub fn build_notification(
        &self,
        new_jobs: &[JobRecord],
        include_empty: bool,
    ) -> Option<Notification> {
        let matches = self.matching(new_jobs);

        if !matches.is_empty() {
            let embeds = matches
                .iter()
                .take(MAX_EMBEDS)
                .map(|job| Embed::from(*job))
                .collect();

            return Some(Notification {
                payload: WebhookPayload {
                    content: format!("🆕 New jobs found: {} positions", matches.len()),
                    embeds,
                },
                matched: matches.len(),
            });
        }

        if !include_empty {
            return None;
        }

        let content = if new_jobs.is_empty() {
            NO_NEW_JOBS_MESSAGE
        } else {
            NO_MATCH_MESSAGE
        };

        Some(Notification {
            payload: WebhookPayload {
                content: content.to_string(),
                embeds: Vec::new(),
            },
            matched: 0,
        })
    }

    /// Send the notification for `new_jobs`. Never fails the run.
    pub async fn notify(&self, new_jobs: &[JobRecord], include_empty: bool) -> NotifyOutcome {
        let Some(webhook_url) = self.webhook_url.as_deref() else {
            tracing::info!("No Discord webhook URL set");
            return NotifyOutcome::Disabled;
        };

        let Some(notification) = self.build_notification(new_jobs, include_empty) else {
            tracing::info!("No target jobs found");
            return NotifyOutcome::NothingToSend;
        };

        match self.post(webhook_url, &notification.payload).await {
            Ok(()) => {
                tracing::info!("{}", notification.log_message());
                NotifyOutcome::Sent
            }
            Err(e) => {
                tracing::error!("Error sending notification: {}", e);
                NotifyOutcome::Failed
            }
        }
    }

    async fn post(&self, webhook_url: &str, payload: &WebhookPayload) -> Result<()> {
        let response = self.client.post(webhook_url).json(payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::http_status(status, webhook_url));
        }
        Ok(())
    }
}
