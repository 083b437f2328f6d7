use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::error::SourceError;
use crate::roadmap_service::RoadmapService;
use crate::source::{FileRoadmapSource, HttpRoadmapSource, RoadmapSource};

pub const DEFAULT_SOURCE: &str = "http://localhost:5000";
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Where roadmaps are fetched from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceConfig {
    Http { base_url: String, timeout: Duration },
    Directory(PathBuf),
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self::parse(DEFAULT_SOURCE, DEFAULT_HTTP_TIMEOUT)
    }
}

impl SourceConfig {
    /// Interpret a raw source: `http(s)://` URLs select the retrieval
    /// endpoint, anything else is a directory of exported documents.
    #[must_use]
    pub fn parse(raw: &str, timeout: Duration) -> Self {
        let raw = raw.trim();
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Self::Http {
                base_url: raw.to_string(),
                timeout,
            }
        } else {
            Self::Directory(PathBuf::from(raw))
        }
    }

    /// Read `ROADMAP_SOURCE` and `ROADMAP_HTTP_TIMEOUT_SECS`, falling back to defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("ROADMAP_SOURCE").ok().as_deref(),
            env::var("ROADMAP_HTTP_TIMEOUT_SECS").ok().as_deref(),
        )
    }

    /// Resolve raw source and timeout values; blank or missing ones use the defaults.
    #[must_use]
    pub fn from_values(source: Option<&str>, timeout_secs: Option<&str>) -> Self {
        let source = source
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(DEFAULT_SOURCE);
        Self::parse(source, timeout_from_secs(timeout_secs))
    }

    /// Build the configured source.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if the HTTP client cannot be created.
    pub fn build(&self) -> Result<Arc<dyn RoadmapSource>, SourceError> {
        let source: Arc<dyn RoadmapSource> = match self {
            Self::Http { base_url, timeout } => {
                Arc::new(HttpRoadmapSource::new(base_url.clone(), *timeout)?)
            }
            Self::Directory(dir) => Arc::new(FileRoadmapSource::new(dir.clone())),
        };
        Ok(source)
    }

    /// Build a `RoadmapService`; HTTP sources also serve generation requests.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if the HTTP client cannot be created.
    pub fn build_service(&self) -> Result<RoadmapService, SourceError> {
        match self {
            Self::Http { base_url, timeout } => {
                let http = Arc::new(HttpRoadmapSource::new(base_url.clone(), *timeout)?);
                Ok(RoadmapService::new(http.clone()).with_generator(http))
            }
            Self::Directory(_) => Ok(RoadmapService::new(self.build()?)),
        }
    }
}

/// Parse a timeout in whole seconds; missing, zero or invalid values use the default.
#[must_use]
pub fn timeout_from_secs(raw: Option<&str>) -> Duration {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .map_or(DEFAULT_HTTP_TIMEOUT, Duration::from_secs)
}
