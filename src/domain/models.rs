//! Rich domain entities - behavior lives WITH data

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ====== Job records ======

/// One posting extracted from the listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    /// Trailing path segment of the detail link, or the store name when there is no link.
    pub id: String,
    /// Primary display name, verbatim (annotations included).
    pub store: String,
    /// Secondary line; empty when the block has none.
    pub role: String,
    /// Absolute detail-page URL.
    pub url: Option<String>,
}

impl JobRecord {
    /// Case-insensitive substring match of any keyword against `store`.
    pub fn matches_any<S: AsRef<str>>(&self, keywords: &[S]) -> bool {
        let store = self.store.to_lowercase();
        keywords
            .iter()
            .any(|kw| store.contains(&kw.as_ref().to_lowercase()))
    }

    pub fn title(&self) -> String {
        if self.role.is_empty() {
            self.store.clone()
        } else {
            format!("{} — {}", self.store, self.role)
        }
    }
}

// ====== Seen state ======

/// Persisted projection of a [`JobRecord`]. The URL is not kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeenEntry {
    #[serde(default)]
    pub store: String,
    #[serde(default)]
    pub role: String,
}

impl From<&JobRecord> for SeenEntry {
    fn from(job: &JobRecord) -> Self {
        Self {
            store: job.store.clone(),
            role: job.role.clone(),
        }
    }
}

/// Every job id observed across runs. Mirrors the state file document.
///
/// Ids keep insertion order: loaded ids first, new ids appended.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeenJobs {
    #[serde(default)]
    pub seen_jobs: IndexMap<String, SeenEntry>,
}

impl SeenJobs {
    pub fn contains(&self, id: &str) -> bool {
        self.seen_jobs.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&SeenEntry> {
        self.seen_jobs.get(id)
    }

    /// Insert or refresh the entry for `job`.
    pub fn upsert(&mut self, job: &JobRecord) {
        self.seen_jobs.insert(job.id.clone(), SeenEntry::from(job));
    }

    pub fn len(&self) -> usize {
        self.seen_jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen_jobs.is_empty()
    }
}
