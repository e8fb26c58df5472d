/// Builders for domain values used across unit tests
pub mod fixtures {
    use crate::config::{Config, DEFAULT_TARGET_KEYWORDS};
    use crate::domain::models::JobRecord;
    use std::path::PathBuf;

    /// Creates a job record without a URL
    pub fn job(id: &str, store: &str, role: &str) -> JobRecord {
        JobRecord {
            id: id.into(),
            store: store.into(),
            role: role.into(),
            url: None,
        }
    }

    /// Creates a config pointing at a mock server
    pub fn config(base_url: &str, webhook_url: Option<String>, data_file: PathBuf) -> Config {
        Config {
            base_url: base_url.into(),
            webhook_url,
            data_file,
            target_keywords: DEFAULT_TARGET_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            notify_when_empty: true,
        }
    }
}

/// HTML builders for extractor and pipeline tests
pub mod mocks {
    /// One `div.jobs_name` block; `href` of `None` renders the heading without a link
    pub fn listing_block(store: &str, role: &str, href: Option<&str>) -> String {
        let heading = match href {
            Some(href) => format!(r#"<h2><a href="{}">{}</a></h2>"#, href, store),
            None => format!("<h2>{}</h2>", store),
        };
        let role = if role.is_empty() {
            String::new()
        } else {
            format!("<h3>{}</h3>", role)
        };
        format!(r#"<div class="jobs_name">{}{}</div>"#, heading, role)
    }

    /// Wraps blocks in a page with some unrelated markup around them
    pub fn listing_page(blocks: &[String]) -> String {
        format!(
            r#"
            <html>
                <head><title>求人一覧</title></head>
                <body>
                    <header><h2>Careers</h2></header>
                    <section class="results">{}</section>
                    <footer><a href="/privacy">Privacy</a></footer>
                </body>
            </html>
            "#,
            blocks.join("\n")
        )
    }
}

/// Repository doubles
pub mod repositories {
    use async_trait::async_trait;
    use std::sync::Mutex;

    use crate::domain::models::SeenJobs;
    use crate::error::{AppError, Result};
    use crate::repository::SeenRepository;

    /// Keeps the seen state in memory; optionally fails every save
    #[derive(Default)]
    pub struct InMemoryRepository {
        pub state: Mutex<SeenJobs>,
        pub saves: Mutex<usize>,
        pub fail_saves: bool,
    }

    impl InMemoryRepository {
        pub fn with_state(seen: SeenJobs) -> Self {
            Self {
                state: Mutex::new(seen),
                ..Default::default()
            }
        }

        pub fn snapshot(&self) -> SeenJobs {
            self.state.lock().unwrap().clone()
        }

        pub fn save_count(&self) -> usize {
            *self.saves.lock().unwrap()
        }
    }

    #[async_trait]
    impl SeenRepository for InMemoryRepository {
        async fn load(&self) -> SeenJobs {
            self.snapshot()
        }

        async fn save(&self, seen: &SeenJobs) -> Result<()> {
            if self.fail_saves {
                return Err(AppError::Persistence(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    "disk full",
                )));
            }
            *self.state.lock().unwrap() = seen.clone();
            *self.saves.lock().unwrap() += 1;
            Ok(())
        }
    }
}
