//! Process-wide list of subject codes for the configured term.
//!
//! Loaded once at startup by [`load_subjects`]. Until the load finishes (or
//! if it fails) readers see an empty list.

use std::sync::{Arc, RwLock};
use tracing::{error, info};

use crate::services::roster_api::RosterApi;

/// Read-mostly snapshot of subject codes. Cloning shares the same snapshot.
#[derive(Clone, Default)]
pub struct SubjectList {
    inner: Arc<RwLock<Arc<[String]>>>,
}

impl SubjectList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current snapshot without holding the lock afterwards.
    pub fn snapshot(&self) -> Arc<[String]> {
        match self.inner.read() {
            Ok(guard) => Arc::clone(&*guard),
            Err(poisoned) => Arc::clone(&*poisoned.into_inner()),
        }
    }

    /// Swaps in a whole new snapshot.
    pub fn replace(&self, subjects: Vec<String>) {
        let snapshot: Arc<[String]> = subjects.into();
        match self.inner.write() {
            Ok(mut guard) => *guard = snapshot,
            Err(poisoned) => *poisoned.into_inner() = snapshot,
        }
    }
}

impl From<Vec<String>> for SubjectList {
    fn from(subjects: Vec<String>) -> Self {
        let list = Self::new();
        list.replace(subjects);
        list
    }
}

/// Fetches the subjects for `term` and stores them in `list`.
///
/// Failures are logged and leave `list` untouched; the service keeps running.
#[tracing::instrument(skip(roster, list))]
pub async fn load_subjects(roster: &dyn RosterApi, term: &str, list: &SubjectList) {
    match roster.list_subjects(term).await {
        Ok(subjects) => {
            info!(count = subjects.len(), "Subject list loaded");
            list.replace(subjects);
        }
        Err(e) => {
            error!(error = ?e, "There was a problem fetching subjects");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::roster_api::ClassRecord;
    use anyhow::{Result, anyhow};

    struct FixedRoster(Option<Vec<String>>);

    #[async_trait::async_trait]
    impl RosterApi for FixedRoster {
        async fn list_subjects(&self, _term: &str) -> Result<Vec<String>> {
            self.0.clone().ok_or_else(|| anyhow!("network down"))
        }

        async fn list_classes(&self, _term: &str, _subject: &str) -> Result<Vec<ClassRecord>> {
            Ok(vec![])
        }
    }

    #[test]
    fn test_new_list_is_empty() {
        assert!(SubjectList::new().snapshot().is_empty());
    }

    #[test]
    fn test_replace_is_visible_through_clones() {
        let list = SubjectList::new();
        let reader = list.clone();
        list.replace(vec!["CS".into()]);
        assert_eq!(&*reader.snapshot(), ["CS".to_string()]);
    }

    #[test]
    fn test_old_snapshot_survives_replace() {
        let list = SubjectList::from(vec!["CS".to_string()]);
        let before = list.snapshot();
        list.replace(vec!["MATH".into(), "PHYS".into()]);
        assert_eq!(before.len(), 1);
        assert_eq!(list.snapshot().len(), 2);
    }

    #[tokio::test]
    async fn test_load_subjects_stores_result() {
        let list = SubjectList::new();
        let roster = FixedRoster(Some(vec!["CS".into(), "MATH".into()]));
        load_subjects(&roster, "SP24", &list).await;
        assert_eq!(&*list.snapshot(), ["CS".to_string(), "MATH".to_string()]);
    }

    #[tokio::test]
    async fn test_load_subjects_failure_leaves_list_empty() {
        let list = SubjectList::new();
        load_subjects(&FixedRoster(None), "SP24", &list).await;
        assert!(list.snapshot().is_empty());
    }
}
