use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use roadmap_core::model::{RoadmapDocument, RoadmapId};
use serde::Deserialize;
use tracing::{debug, info, warn};

use super::{RoadmapSource, parse_document};
use crate::error::SourceError;
use crate::generate::{GenerateRequest, RoadmapGenerator};

/// Generation waits on a model call, so it gets far longer than a fetch.
pub const GENERATE_TIMEOUT: Duration = Duration::from_secs(180);

const GENERATE_FAILED: &str = "Failed to generate roadmap";

/// Talks to the roadmap backend: `GET {base_url}/api/roadmap/{id}` and
/// `POST {base_url}/api/generate-roadmap`.
#[derive(Clone, Debug)]
pub struct HttpRoadmapSource {
    client: Client,
    base_url: String,
}

impl HttpRoadmapSource {
    /// # Errors
    ///
    /// Returns `SourceError::Http` if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn roadmap_url(&self, id: &RoadmapId) -> String {
        format!("{}/api/roadmap/{id}", self.trimmed_base())
    }

    #[must_use]
    pub fn generate_url(&self) -> String {
        format!("{}/api/generate-roadmap", self.trimmed_base())
    }

    fn trimmed_base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

#[async_trait]
impl RoadmapSource for HttpRoadmapSource {
    async fn fetch(&self, id: &RoadmapId) -> Result<RoadmapDocument, SourceError> {
        let url = self.roadmap_url(id);
        debug!(%url, "fetching roadmap");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if status.is_success() {
            let body = response.text().await?;
            return parse_document(&body);
        }

        let message = read_error_message(response).await;
        warn!(%url, %status, reason = message.as_deref(), "roadmap request failed");
        Err(status_error(status))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    success: bool,
    roadmap_id: Option<RoadmapId>,
}

#[async_trait]
impl RoadmapGenerator for HttpRoadmapSource {
    async fn generate(&self, request: &GenerateRequest) -> Result<RoadmapId, SourceError> {
        let url = self.generate_url();
        debug!(%url, field = %request.field, level = request.level.as_str(), "requesting roadmap");

        let response = self
            .client
            .post(&url)
            .timeout(GENERATE_TIMEOUT)
            .json(request)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let message = read_error_message(response)
                .await
                .unwrap_or_else(|| GENERATE_FAILED.to_string());
            warn!(%url, %status, reason = %message, "roadmap generation failed");
            return Err(SourceError::Generation { status, message });
        }

        let body = response.text().await?;
        let parsed: GenerateResponse = serde_json::from_str(&body)?;
        match parsed.roadmap_id {
            Some(id) if parsed.success => {
                info!(%id, "roadmap generated");
                Ok(id)
            }
            _ => Err(SourceError::Generation {
                status,
                message: GENERATE_FAILED.to_string(),
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

async fn read_error_message(response: Response) -> Option<String> {
    let body = response.text().await.unwrap_or_default();
    error_message(&body)
}

/// Extracts the endpoint's `{ "error": ... }` message, if the body has one.
fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|parsed| parsed.error)
}

fn status_error(status: StatusCode) -> SourceError {
    match status {
        StatusCode::NOT_FOUND => SourceError::NotFound,
        StatusCode::BAD_REQUEST => SourceError::InvalidId,
        other => SourceError::HttpStatus(other),
    }
}
