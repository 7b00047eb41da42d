pub mod catalog;
pub mod contact;
pub mod field;
pub mod scheduler;
pub mod spotlight;
pub mod typewriter;
pub mod viewport;

pub use catalog::{
    icon_set_by_slug, icon_url, icon_urls, project_by_slug, IconSet, ProjectEntry, SkillEntry,
    DEFAULT_ICON_SET, ICON_SETS, PROJECT_CATALOG, SKILL_CATALOG,
};
pub use contact::{is_plausible_email, ContactError, ContactMessage};
pub use field::{
    adaptive_count, generate_entities, step_entities, Entity, FieldConfig, ParticleField,
    DENSITY_PX_PER_ENTITY, STEP_DT_CAP_MS,
};
pub use scheduler::{FrameScheduler, Phase, ICON_LOAD_TIMEOUT_MS, MIN_FRAME_INTERVAL_MS};
pub use spotlight::{
    grid_line_positions, spotlight_band, GRID_BASE_ALPHA, GRID_BRIGHT_ALPHA, GRID_CELL_PX,
    GRID_LINE_WIDTH, SPOTLIGHT_RADIUS,
};
pub use typewriter::{Typewriter, TypewriterPhase};
pub use viewport::{ViewportState, RESIZE_DEBOUNCE_MS, RESIZE_JITTER_PX};
