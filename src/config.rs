use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

use crate::error::{AppError, Result};

/// Path of the listing page, appended to the base URL.
pub const LISTING_PATH: &str = "/jobfind-pc/area/Kanto/Ibaraki/08220";

pub const DEFAULT_DATA_FILE: &str = "/app/data/data.json";

pub const DEFAULT_TARGET_KEYWORDS: [&str; 4] = ["中央図書館", "筑波大学", "つくば", "研究学園"];

/// Run configuration loaded once at process start and passed down explicitly.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub webhook_url: Option<String>,
    pub data_file: PathBuf,
    pub target_keywords: Vec<String>,
    pub notify_when_empty: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let base_url = get("ST4R8UX_URL")
            .ok_or_else(|| AppError::config("ST4R8UX_URL must be set"))?;

        let target_keywords = match get("TARGET_KEYWORDS") {
            Some(raw) => parse_keywords(&raw),
            None => DEFAULT_TARGET_KEYWORDS.iter().map(|s| s.to_string()).collect(),
        };

        let notify_when_empty = match get("NOTIFY_WHEN_EMPTY") {
            Some(raw) => parse_flag(&raw).ok_or_else(|| {
                AppError::config(format!("NOTIFY_WHEN_EMPTY must be a boolean, got {raw:?}"))
            })?,
            None => true,
        };

        Ok(Self {
            base_url,
            webhook_url: get("DISCORD_WEBHOOK_URL"),
            data_file: get("DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE)),
            target_keywords,
            notify_when_empty,
        })
    }

    /// Absolute URL of the listing page.
    pub fn listing_url(&self) -> String {
        format!("{}{}", self.base_url, LISTING_PATH)
    }
}

fn parse_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|kw| !kw.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
