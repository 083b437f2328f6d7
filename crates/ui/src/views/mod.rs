mod home;
mod roadmap;
mod section;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use home::HomeView;
pub use roadmap::RoadmapView;
pub use section::RoadmapSection;
pub use state::{ViewError, ViewState, view_state_from_resource};
