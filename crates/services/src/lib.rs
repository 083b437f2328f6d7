#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod generate;
pub mod roadmap_service;
pub mod source;

pub use config::SourceConfig;
pub use error::{RoadmapServiceError, SourceError};
pub use generate::{GenerateRequest, RoadmapGenerator};
pub use roadmap_service::RoadmapService;
pub use reqwest::StatusCode;
pub use source::{FileRoadmapSource, HttpRoadmapSource, InMemoryRoadmapSource, RoadmapSource};
