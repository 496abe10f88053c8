//! Display-ready screen models.
//!
//! # Responsibility
//! - Compose looked-up records, the active view and navigation affordances
//!   into one serializable value per screen.
//! - Leave rendering to the front-end.
//!
//! # Invariants
//! - Building a screen never fails; lookups fall back to defaults.
//! - Screen models hold route paths, never live references to the catalog.

pub mod comment;
pub mod home;
pub mod messages;
pub mod record;
pub mod section;

use crate::route::Route;
use serde::Serialize;

pub use comment::{AddCommentScreen, CommentComposer};
pub use home::{HomeScreen, HomeTileView, SectionListScreen, SemesterProgress};
pub use messages::{
    ParentMessagesScreen, TeacherMessageDetailScreen, TeacherMessageSummary,
    TeacherMessagesScreen,
};
pub use record::{CommentView, RecordDetailScreen};
pub use section::{SectionBody, SectionScreen, SectionState, TabEntry};

/// Top bar with title and back affordance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub title: String,
    pub subtitle: Option<String>,
    /// Explicit back target path; `None` pops the back-stack.
    pub back_path: Option<String>,
}

impl Header {
    pub(crate) fn new(title: impl Into<String>, subtitle: Option<String>, route: &Route) -> Self {
        Self {
            title: title.into(),
            subtitle,
            back_path: route.back_target().map(|target| target.path()),
        }
    }
}

/// Label/value row used by detail screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaRow {
    pub label: String,
    pub value: String,
}

impl MetaRow {
    pub(crate) fn new(label: &str, value: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            value: value.into(),
        }
    }
}

/// Button that navigates somewhere; `path = None` means go back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    pub label: String,
    pub path: Option<String>,
}

impl Action {
    pub(crate) fn to(label: &str, route: Route) -> Self {
        Self {
            label: label.to_string(),
            path: Some(route.path()),
        }
    }

    pub(crate) fn back(label: &str) -> Self {
        Self {
            label: label.to_string(),
            path: None,
        }
    }
}

/// Bottom navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub label: String,
    pub path: String,
    pub active: bool,
}

/// Bottom navigation bar for the screen at `current_path`.
///
/// Home is active only on `/`; message entries match by prefix so that the
/// detail screens keep their list tab highlighted.
pub fn bottom_nav(current_path: &str) -> Vec<NavEntry> {
    let entry = |label: &str, route: Route, active: bool| NavEntry {
        label: label.to_string(),
        path: route.path(),
        active,
    };
    vec![
        entry("首页", Route::Home, current_path == "/"),
        entry(
            "老师寄语",
            Route::TeacherMessages,
            current_path.starts_with("/teacher-message"),
        ),
        entry(
            "家长留言",
            Route::ParentMessages,
            current_path.starts_with("/parent-message"),
        ),
    ]
}

/// `name | class` subtitle shared by list screens.
pub(crate) fn profile_subtitle(name: &str, class_name: &str) -> String {
    format!("{name} | {class_name}")
}

/// Any screen the router can show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    Home(HomeScreen),
    Sections(SectionListScreen),
    Section(SectionScreen),
    Record(RecordDetailScreen),
    TeacherMessages(TeacherMessagesScreen),
    TeacherMessage(TeacherMessageDetailScreen),
    ParentMessages(ParentMessagesScreen),
    AddComment(AddCommentScreen),
}

#[cfg(test)]
mod tests {
    use super::bottom_nav;

    fn active_labels(path: &str) -> Vec<String> {
        bottom_nav(path)
            .into_iter()
            .filter(|entry| entry.active)
            .map(|entry| entry.label)
            .collect()
    }

    #[test]
    fn bottom_nav_highlights_by_exact_home_and_prefix_messages() {
        assert_eq!(active_labels("/"), vec!["首页"]);
        assert_eq!(active_labels("/teacher-message/teacher-msg-1"), vec!["老师寄语"]);
        assert_eq!(active_labels("/teacher-messages"), vec!["老师寄语"]);
        assert_eq!(active_labels("/parent-messages"), vec!["家长留言"]);
        assert!(active_labels("/section/growth-records").is_empty());
    }
}
