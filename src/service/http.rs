use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

const USER_AGENT: &str =
    "Mozilla/5.0 (compatible; listing-watch/0.1; +https://github.com/listing-watch)";

#[derive(Debug, Clone, Copy)]
pub enum ClientType {
    /// Listing page fetch.
    Page,
    /// Webhook delivery.
    Webhook,
}

impl ClientType {
    pub fn timeout(self) -> Duration {
        match self {
            ClientType::Page => Duration::from_secs(30),
            ClientType::Webhook => Duration::from_secs(10),
        }
    }
}

/// Factory for creating an HTTP client with the timeout for its purpose.
pub fn create_client(client_type: ClientType) -> Result<Client> {
    let builder = Client::builder().timeout(client_type.timeout());

    match client_type {
        ClientType::Page => builder
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build page HTTP client"),
        ClientType::Webhook => builder
            .build()
            .context("Failed to build webhook HTTP client"),
    }
}
