use dioxus::prelude::*;
use services::RoadmapServiceError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    NotFound,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn from_service(err: &RoadmapServiceError) -> Self {
        if err.is_not_found() {
            Self::NotFound
        } else {
            Self::Unknown
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::NotFound => "Roadmap not found.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone + 'static>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match &*resource.read() {
        None => ViewState::Loading,
        Some(Ok(data)) => ViewState::Ready(data.clone()),
        Some(Err(err)) => ViewState::Error(*err),
    }
}
