use async_trait::async_trait;
use reqwest::{Request, Response};

/// Transport used for every roster call, so tests can swap the network out.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Sends `req` as-is. Non-2xx statuses are returned, not turned into errors;
    /// [`fetch_json`](super::fetch_json) decides what counts as a failure.
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}
