use crate::domain::models::{JobRecord, SeenJobs};

/// Split `jobs` into the ones not yet in `seen`, then refresh `seen` with every job.
///
/// The returned list keeps the order of `jobs`. After the call `seen` holds an
/// entry for every id in `jobs`, carrying the latest store and role.
pub fn diff_and_merge(seen: &mut SeenJobs, jobs: &[JobRecord]) -> Vec<JobRecord> {
    let new_jobs: Vec<JobRecord> = jobs
        .iter()
        .filter(|job| !seen.contains(&job.id))
        .cloned()
        .collect();

    for job in jobs {
        if let Some(previous) = seen.get(&job.id) {
            if previous.store != job.store || previous.role != job.role {
                tracing::debug!(id = %job.id, "Refreshing seen entry: {} -> {}", previous.store, job.store);
            }
        }
        seen.upsert(job);
    }

    new_jobs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::job;

    #[test]
    fn test_all_new_on_empty_state() {
        let mut seen = SeenJobs::default();
        let jobs = vec![job("1", "a", "x"), job("2", "b", "y")];

        let new_jobs = diff_and_merge(&mut seen, &jobs);

        assert_eq!(new_jobs, jobs);
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_second_pass_is_idempotent() {
        let mut seen = SeenJobs::default();
        let jobs = vec![job("1", "a", "x"), job("2", "b", "y")];

        diff_and_merge(&mut seen, &jobs);
        let snapshot = seen.clone();
        let new_jobs = diff_and_merge(&mut seen, &jobs);

        assert!(new_jobs.is_empty());
        assert_eq!(seen, snapshot);
    }

    #[test]
    fn test_changed_store_is_refreshed_not_new() {
        let mut seen = SeenJobs::default();
        diff_and_merge(&mut seen, &[job("1", "旧店名", "x")]);

        let new_jobs = diff_and_merge(&mut seen, &[job("1", "新店名", "z")]);

        assert!(new_jobs.is_empty());
        let entry = seen.get("1").unwrap();
        assert_eq!(entry.store, "新店名");
        assert_eq!(entry.role, "z");
    }

    #[test]
    fn test_new_order_preserved_and_old_ids_retained() {
        let mut seen = SeenJobs::default();
        diff_and_merge(&mut seen, &[job("old", "gone", "")]);

        let jobs = vec![job("3", "c", ""), job("1", "a", ""), job("2", "b", "")];
        let new_jobs = diff_and_merge(&mut seen, &jobs);

        let ids: Vec<&str> = new_jobs.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
        assert!(seen.contains("old"));
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_empty_extraction_leaves_state_untouched() {
        let mut seen = SeenJobs::default();
        diff_and_merge(&mut seen, &[job("1", "a", "")]);
        let snapshot = seen.clone();

        assert!(diff_and_merge(&mut seen, &[]).is_empty());
        assert_eq!(seen, snapshot);
    }
}
