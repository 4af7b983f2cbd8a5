use protocol::{FetchOutcome, Query, QueryRequest, QueryResponse};
use tracing::warn;

use crate::ResultSource;

/// Service-backed strategy: one POST per call, no retry, no backoff.
///
/// `ok` mirrors the HTTP success flag; the body is decoded as a
/// [`QueryResponse`] regardless of status. Transport and decode errors
/// fail closed to the all-empty envelope.
#[derive(Debug, Clone)]
pub struct RemoteSource {
    client: reqwest::Client,
    endpoint: String,
}

impl RemoteSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn try_fetch(&self, request: &QueryRequest) -> Result<FetchOutcome, reqwest::Error> {
        let response = self.client.post(&self.endpoint).json(request).send().await?;
        let ok = response.status().is_success();
        let envelope: QueryResponse = response.json().await?;
        Ok(envelope.into_outcome(ok))
    }
}

impl ResultSource for RemoteSource {
    async fn fetch(&self, query: &Query) -> FetchOutcome {
        let request = QueryRequest::from_query(query);
        match self.try_fetch(&request).await {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!("query fetch failed: {err}");
                FetchOutcome::failure()
            }
        }
    }
}
