// src/main.rs

use std::process::ExitCode;

use listing_watch::{application, config::Config, lifecycle};

#[tokio::main]
async fn main() -> ExitCode {
    lifecycle::init_logging();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match application::run(&config).await {
        Ok(summary) => {
            tracing::debug!(?summary, "Run finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Run failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
