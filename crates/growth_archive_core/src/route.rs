//! Logical routes and back-stack navigation.
//!
//! # Responsibility
//! - Parse hash-style paths into typed routes carrying at most one id.
//! - Keep a back-stack for header and action-bar navigation.
//!
//! # Invariants
//! - `Route::path()` output always parses back to the same route.
//! - The navigator never fails: unparseable paths land on home.
//! - `back()` on an empty stack stays on home.

use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// One navigable screen.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Sections,
    Section(String),
    Record(String),
    TeacherMessages,
    TeacherMessage(String),
    ParentMessages,
    AddComment,
}

/// Errors from route parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteParseError {
    /// Path does not name any screen.
    UnknownPath(String),
    /// Path names a detail screen but carries no id.
    MissingId(&'static str),
}

impl Display for RouteParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownPath(path) => write!(f, "unknown route path: `{path}`"),
            Self::MissingId(screen) => write!(f, "route `{screen}` requires an id"),
        }
    }
}

impl Error for RouteParseError {}

impl Route {
    /// Parses a path such as `/section/english-course` or `#/record/lang-1`.
    ///
    /// A leading `#` and a trailing `/` are ignored.
    pub fn parse(path: &str) -> Result<Self, RouteParseError> {
        let trimmed = path.trim();
        let without_hash = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let normalized = without_hash.trim_end_matches('/');
        let segments: Vec<&str> = normalized
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        match segments.as_slice() {
            [] if normalized.is_empty()
                && (!without_hash.is_empty() || trimmed.starts_with('#')) =>
            {
                Ok(Self::Home)
            }
            ["sections"] => Ok(Self::Sections),
            ["section"] => Err(RouteParseError::MissingId("section")),
            ["section", id] => Ok(Self::Section((*id).to_string())),
            ["record"] => Err(RouteParseError::MissingId("record")),
            ["record", id] => Ok(Self::Record((*id).to_string())),
            ["teacher-messages"] => Ok(Self::TeacherMessages),
            ["teacher-message"] => Err(RouteParseError::MissingId("teacher-message")),
            ["teacher-message", id] => Ok(Self::TeacherMessage((*id).to_string())),
            ["parent-messages"] => Ok(Self::ParentMessages),
            ["add-comment"] => Ok(Self::AddComment),
            _ => Err(RouteParseError::UnknownPath(path.to_string())),
        }
    }

    /// Canonical path of this route.
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Sections => "/sections".to_string(),
            Self::Section(id) => format!("/section/{id}"),
            Self::Record(id) => format!("/record/{id}"),
            Self::TeacherMessages => "/teacher-messages".to_string(),
            Self::TeacherMessage(id) => format!("/teacher-message/{id}"),
            Self::ParentMessages => "/parent-messages".to_string(),
            Self::AddComment => "/add-comment".to_string(),
        }
    }

    /// Explicit header back target; `None` means pop the back-stack.
    pub fn back_target(&self) -> Option<Route> {
        match self {
            Self::Home | Self::AddComment => None,
            Self::TeacherMessage(_) => Some(Self::TeacherMessages),
            Self::Sections
            | Self::Section(_)
            | Self::Record(_)
            | Self::TeacherMessages
            | Self::ParentMessages => Some(Self::Home),
        }
    }
}

impl FromStr for Route {
    type Err = RouteParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

/// Current route plus back-stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    current: Route,
    history: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Starts on home with an empty back-stack.
    pub fn new() -> Self {
        Self {
            current: Route::Home,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Number of routes that `back()` can return to.
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// Pushes `route`. Navigating to the current route is a no-op.
    pub fn navigate(&mut self, route: Route) {
        if route == self.current {
            return;
        }
        let previous = std::mem::replace(&mut self.current, route);
        self.history.push(previous);
    }

    /// Parses and navigates to `path`, landing on home when it does not parse.
    pub fn open(&mut self, path: &str) -> &Route {
        let route = match Route::parse(path) {
            Ok(route) => route,
            Err(err) => {
                warn!("event=route_fallback module=route status=recovered error={err}");
                Route::Home
            }
        };
        self.navigate(route);
        &self.current
    }

    /// Pops to the previous route, or stays on home when there is none.
    pub fn back(&mut self) -> &Route {
        self.current = self.history.pop().unwrap_or(Route::Home);
        &self.current
    }

    /// Follows the header back button of the current screen.
    pub fn header_back(&mut self) -> &Route {
        match self.current.back_target() {
            Some(target) => {
                self.navigate(target);
                &self.current
            }
            None => self.back(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Navigator, Route, RouteParseError};

    #[test]
    fn parses_every_route_and_round_trips_paths() {
        let routes = [
            Route::Home,
            Route::Sections,
            Route::Section("english-course".to_string()),
            Route::Record("lang-1".to_string()),
            Route::TeacherMessages,
            Route::TeacherMessage("teacher-msg-2".to_string()),
            Route::ParentMessages,
            Route::AddComment,
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()).expect("path parses"), route);
        }
    }

    #[test]
    fn tolerates_hash_prefix_and_trailing_slash() {
        assert_eq!(
            Route::parse("#/record/lang-2/").expect("hash route parses"),
            Route::Record("lang-2".to_string())
        );
        assert_eq!(Route::parse("#/").expect("hash home parses"), Route::Home);
        assert_eq!(Route::parse("#").expect("bare hash parses"), Route::Home);
        assert_eq!(Route::parse(" # ").expect("padded bare hash parses"), Route::Home);
    }

    #[test]
    fn rejects_unknown_paths_and_missing_ids() {
        assert_eq!(
            Route::parse("/section").expect_err("missing id"),
            RouteParseError::MissingId("section")
        );
        assert!(matches!(
            Route::parse("/settings"),
            Err(RouteParseError::UnknownPath(_))
        ));
        assert!(matches!(Route::parse(""), Err(RouteParseError::UnknownPath(_))));
        assert!(matches!(
            Route::parse("/record/a/b"),
            Err(RouteParseError::UnknownPath(_))
        ));
    }

    #[test]
    fn open_falls_back_to_home_and_back_stops_at_home() {
        let mut nav = Navigator::new();
        nav.open("/section/growth-records");
        nav.open("/record/lang-1");
        assert_eq!(nav.depth(), 2);

        assert_eq!(nav.open("/nowhere"), &Route::Home);
        assert_eq!(nav.back(), &Route::Record("lang-1".to_string()));
        assert_eq!(nav.back(), &Route::Section("growth-records".to_string()));
        assert_eq!(nav.back(), &Route::Home);
        assert_eq!(nav.back(), &Route::Home);
    }

    #[test]
    fn header_back_prefers_explicit_target() {
        let mut nav = Navigator::new();
        nav.open("/teacher-message/teacher-msg-1");
        assert_eq!(nav.header_back(), &Route::TeacherMessages);

        nav.open("/add-comment");
        assert_eq!(nav.header_back(), &Route::TeacherMessages);
    }
}
