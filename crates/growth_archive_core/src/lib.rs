//! Core domain logic for the growth archive viewer.
//! This crate owns the record catalog, view transformers and screen models;
//! front-ends only render what it returns.

pub mod config;
pub mod logging;
pub mod model;
pub mod route;
pub mod screen;
pub mod service;
pub mod store;
pub mod view;

pub use config::{load_config, ConfigError, ViewerConfig};
pub use logging::{default_log_level, init_logging, init_stderr_logging, logging_status, LogTarget};
pub use model::comment::{CommentDraft, ParentComment, ReplyStatus};
pub use model::profile::{BasicInfo, User};
pub use model::record::{RecordItem, RecordKind, TeacherFeedback};
pub use model::section::{Category, Section, Subcategory};
pub use route::{Navigator, Route, RouteParseError};
pub use screen::Screen;
pub use service::archive_service::ArchiveService;
pub use store::catalog::{Catalog, CatalogError, DefaultMap, RecordSource};
pub use store::seed::SeedData;
pub use view::card::{build_card_view, CardView};
pub use view::month::{month_label, month_rank, RECENT_LABEL};
pub use view::structure::{build_structure_view, AccordionState, StructureView};
pub use view::timeline::{build_timeline_view, group_by_month, TimelineView};
pub use view::{flatten_units, ViewTab, ViewUnit};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
