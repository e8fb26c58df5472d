use scraper::{ElementRef, Html, Selector};
use std::collections::HashMap;
use std::sync::OnceLock;
use url::Url;

use crate::domain::models::JobRecord;

pub struct ListingExtractor;

impl ListingExtractor {
    /// Extract every listing block of `html` as a [`JobRecord`].
    ///
    /// Blocks without a store name are dropped. When two blocks share an id the
    /// later block's attributes win, at the position of the first occurrence.
    pub fn extract(html: &str, base_url: &str) -> Vec<JobRecord> {
        static SELECTOR: OnceLock<Selector> = OnceLock::new();
        let selector = SELECTOR.get_or_init(|| Selector::parse("div.jobs_name").unwrap());

        let document = Html::parse_document(html);
        let base = Url::parse(base_url).ok();

        let mut jobs: Vec<JobRecord> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for block in document.select(selector) {
            let Some(job) = Self::extract_block(block, base.as_ref()) else {
                continue;
            };
            tracing::debug!(id = %job.id, store = %job.store, "Extracted listing block");

            match positions.get(&job.id) {
                Some(&idx) => jobs[idx] = job,
                None => {
                    positions.insert(job.id.clone(), jobs.len());
                    jobs.push(job);
                }
            }
        }

        jobs
    }

    fn extract_block(block: ElementRef<'_>, base: Option<&Url>) -> Option<JobRecord> {
        static H2: OnceLock<Selector> = OnceLock::new();
        static H3: OnceLock<Selector> = OnceLock::new();
        static LINK: OnceLock<Selector> = OnceLock::new();
        let h2_selector = H2.get_or_init(|| Selector::parse("h2").unwrap());
        let h3_selector = H3.get_or_init(|| Selector::parse("h3").unwrap());
        let link_selector = LINK.get_or_init(|| Selector::parse("a").unwrap());

        let heading = block.select(h2_selector).next();
        let link = heading.and_then(|h2| h2.select(link_selector).next());

        let store = link.or(heading).map(stripped_text).unwrap_or_default();
        if store.is_empty() {
            return None;
        }

        let role = block
            .select(h3_selector)
            .next()
            .map(stripped_text)
            .unwrap_or_default();

        let href = link
            .and_then(|a| a.value().attr("href"))
            .filter(|href| !href.is_empty());

        let (id, url) = match href {
            Some(href) => (
                trailing_segment(href).to_string(),
                Some(resolve(base, href)),
            ),
            None => (store.clone(), None),
        };

        Some(JobRecord {
            id,
            store,
            role,
            url,
        })
    }
}

/// Every text node trimmed, joined without separator.
fn stripped_text(element: ElementRef<'_>) -> String {
    element.text().map(str::trim).collect()
}

fn trailing_segment(href: &str) -> &str {
    href.rsplit('/').next().unwrap_or(href)
}

/// Absolute URL for `href`. Non-ASCII path characters come out percent-encoded.
fn resolve(base: Option<&Url>, href: &str) -> String {
    match base {
        Some(base) => base
            .join(href)
            .map(|u| u.to_string())
            .unwrap_or_else(|_| href.to_string()),
        None => href.to_string(),
    }
}
