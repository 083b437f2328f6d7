use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use roadmap_core::model::{RoadmapDocument, RoadmapId};
use tracing::debug;

use super::{RoadmapSource, parse_document};
use crate::error::SourceError;

/// Reads exported roadmap documents stored as `{dir}/{id}.json`.
#[derive(Clone, Debug)]
pub struct FileRoadmapSource {
    dir: PathBuf,
}

impl FileRoadmapSource {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn path_for(&self, id: &RoadmapId) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }

    /// Read a single exported document regardless of its id.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::NotFound` if the file does not exist, `Io` for
    /// other read failures, and `Json` if the content is not a roadmap.
    pub async fn load_path(path: &Path) -> Result<RoadmapDocument, SourceError> {
        debug!(path = %path.display(), "reading roadmap file");
        let body = match tokio::fs::read_to_string(path).await {
            Ok(body) => body,
            Err(err) if err.kind() == ErrorKind::NotFound => return Err(SourceError::NotFound),
            Err(err) => return Err(err.into()),
        };
        parse_document(&body)
    }
}

#[async_trait]
impl RoadmapSource for FileRoadmapSource {
    async fn fetch(&self, id: &RoadmapId) -> Result<RoadmapDocument, SourceError> {
        Self::load_path(&self.path_for(id)).await
    }
}
