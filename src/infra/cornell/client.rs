use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use tracing::{debug, error};

use crate::fetch::{HttpClient, fetch_json};
use crate::services::roster_api::{ClassRecord, RosterApi};

pub const DEFAULT_API_BASE: &str = "https://classes.cornell.edu/api/2.0";

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct SubjectsData {
    subjects: Vec<SubjectEntry>,
}

#[derive(Deserialize)]
struct SubjectEntry {
    value: String,
}

#[derive(Deserialize)]
struct ClassesData {
    classes: Vec<ClassRecord>,
}

/// [`RosterApi`] backed by the Cornell class roster REST API.
pub struct CornellRosterClient<C> {
    http: C,
    base_url: String,
}

impl<C: HttpClient> CornellRosterClient<C> {
    pub fn new(http: C, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, resource: &str, params: &[(&str, &str)]) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/{}", self.base_url, resource))
            .with_context(|| format!("Invalid roster API base '{}'", self.base_url))?;
        url.query_pairs_mut().extend_pairs(params);
        Ok(url)
    }
}

#[async_trait]
impl<C: HttpClient> RosterApi for CornellRosterClient<C> {
    #[tracing::instrument(skip(self))]
    async fn list_subjects(&self, term: &str) -> Result<Vec<String>> {
        let url = self.url("config/subjects.json", &[("roster", term)])?;

        let envelope: Envelope<SubjectsData> = fetch_json(&self.http, url.as_str())
            .await
            .with_context(|| format!("Failed to fetch subjects for {term}"))?;

        let subjects: Vec<String> = envelope
            .data
            .subjects
            .into_iter()
            .map(|s| s.value)
            .collect();

        debug!(count = subjects.len(), "Subjects received");
        Ok(subjects)
    }

    #[tracing::instrument(skip(self))]
    async fn list_classes(&self, term: &str, subject: &str) -> Result<Vec<ClassRecord>> {
        let url = self.url(
            "search/classes.json",
            &[("roster", term), ("subject", subject)],
        )?;

        match fetch_json::<_, Envelope<ClassesData>>(&self.http, url.as_str()).await {
            Ok(envelope) => {
                debug!(count = envelope.data.classes.len(), "Classes received");
                Ok(envelope.data.classes)
            }
            Err(e) => {
                error!(subject, error = %e, "Error fetching class data");
                Err(e.context(format!("Failed to fetch {subject} class data")))
            }
        }
    }
}
