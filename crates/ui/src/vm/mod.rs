mod home_vm;
mod roadmap_vm;
mod section_vm;
mod time_fmt;

pub use home_vm::{LevelOptionVm, generation_error_message, map_level_options};
pub use roadmap_vm::{RoadmapHeaderVm, map_roadmap_header, render_roadmap_text};
pub use section_vm::{
    ChartSliceVm, LOCK_HINT, SectionVm, StepVm, TopicVm, map_breakdown_slices, map_section,
    status_class, tier_class, tier_color,
};
pub use time_fmt::format_date;
