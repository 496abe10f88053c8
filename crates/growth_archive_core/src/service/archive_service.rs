//! Archive browsing use-case service.
//!
//! # Responsibility
//! - Resolve a route into its screen model.
//! - Own per-session screen state (active tab, accordion, comment draft).
//!
//! # Invariants
//! - `screen()` is total: every route yields a screen.
//! - Detail routes with unknown ids render the collection default.
//! - Comment submission never mutates the record source.

use crate::config::ViewerConfig;
use crate::model::comment::CommentDraft;
use crate::route::{Navigator, Route};
use crate::screen::{
    AddCommentScreen, CommentComposer, HomeScreen, ParentMessagesScreen, RecordDetailScreen,
    Screen, SectionListScreen, SectionScreen, SectionState, TeacherMessageDetailScreen,
    TeacherMessagesScreen,
};
use crate::store::catalog::RecordSource;
use crate::view::ViewTab;
use log::debug;

/// Archive service facade over a record source.
pub struct ArchiveService<S: RecordSource> {
    source: S,
    config: ViewerConfig,
    navigator: Navigator,
    section_state: SectionState,
    composer: Option<CommentComposer>,
}

impl<S: RecordSource> ArchiveService<S> {
    /// Creates a service starting on home.
    pub fn new(source: S, config: ViewerConfig) -> Self {
        Self {
            source,
            config,
            navigator: Navigator::new(),
            section_state: SectionState::default(),
            composer: None,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn current_route(&self) -> &Route {
        self.navigator.current()
    }

    /// Opens `path`; unparseable paths land on home.
    ///
    /// Entering a section resets its tab and accordion; entering add-comment
    /// starts a fresh draft.
    pub fn open(&mut self, path: &str) -> Screen {
        let route = self.navigator.open(path).clone();
        self.enter(&route);
        self.screen()
    }

    /// Navigates to an already-typed route.
    pub fn navigate(&mut self, route: Route) -> Screen {
        self.navigator.navigate(route.clone());
        self.enter(&route);
        self.screen()
    }

    /// Pops the back-stack.
    pub fn back(&mut self) -> Screen {
        self.navigator.back();
        self.screen()
    }

    /// Follows the current screen's header back button.
    pub fn header_back(&mut self) -> Screen {
        self.navigator.header_back();
        self.screen()
    }

    /// Switches the section tab. Has no visible effect off the section screen.
    pub fn select_tab(&mut self, tab: ViewTab) -> Screen {
        self.section_state.tab = tab;
        self.screen()
    }

    /// Expands or collapses one structure-view category.
    pub fn toggle_category(&mut self, category_id: &str) -> Screen {
        self.section_state.accordion.toggle(category_id);
        self.screen()
    }

    /// Replaces the add-comment draft text.
    pub fn set_comment_text(&mut self, text: &str) -> Screen {
        self.composer_mut().set_text(text);
        self.screen()
    }

    /// Simulates comment submission, returning the receipt and going back.
    pub fn submit_comment(&mut self) -> (CommentDraft, Screen) {
        let composer = self
            .composer
            .take()
            .unwrap_or_else(|| CommentComposer::new(&self.source, &self.config));
        let draft = composer.submit();
        self.navigator.back();
        (draft, self.screen())
    }

    /// Builds the screen of the current route.
    pub fn screen(&self) -> Screen {
        self.screen_for(self.navigator.current())
    }

    /// Builds the screen for `route` using the session state.
    pub fn screen_for(&self, route: &Route) -> Screen {
        debug!(
            "event=screen_build module=service route={} tab={}",
            route,
            self.section_state.tab.id()
        );
        match route {
            Route::Home => Screen::Home(HomeScreen::build(&self.source, &self.config)),
            Route::Sections => Screen::Sections(SectionListScreen::build(&self.source)),
            Route::Section(id) => Screen::Section(SectionScreen::build(
                &self.source,
                &self.config,
                id,
                &self.section_state,
            )),
            Route::Record(id) => Screen::Record(RecordDetailScreen::build(&self.source, id)),
            Route::TeacherMessages => {
                Screen::TeacherMessages(TeacherMessagesScreen::build(&self.source))
            }
            Route::TeacherMessage(id) => {
                Screen::TeacherMessage(TeacherMessageDetailScreen::build(&self.source, id))
            }
            Route::ParentMessages => {
                Screen::ParentMessages(ParentMessagesScreen::build(&self.source))
            }
            Route::AddComment => {
                let screen = match &self.composer {
                    Some(composer) => AddCommentScreen::build(composer),
                    None => AddCommentScreen::build(&CommentComposer::new(
                        &self.source,
                        &self.config,
                    )),
                };
                Screen::AddComment(screen)
            }
        }
    }

    fn enter(&mut self, route: &Route) {
        match route {
            Route::Section(_) => self.section_state = SectionState::default(),
            Route::AddComment => {
                self.composer = Some(CommentComposer::new(&self.source, &self.config));
            }
            _ => {}
        }
    }

    fn composer_mut(&mut self) -> &mut CommentComposer {
        let source = &self.source;
        let config = &self.config;
        self.composer
            .get_or_insert_with(|| CommentComposer::new(source, config))
    }
}
