//! Section detail screen with structure/card/timeline tabs.

use crate::config::ViewerConfig;
use crate::route::Route;
use crate::screen::{bottom_nav, profile_subtitle, Header, NavEntry};
use crate::store::catalog::RecordSource;
use crate::view::card::{build_card_view, CardView};
use crate::view::structure::{build_structure_view, AccordionState, StructureView};
use crate::view::timeline::{build_timeline_view, TimelineView};
use crate::view::{flatten_units, ViewTab};
use serde::Serialize;

/// Local state of the section screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionState {
    pub tab: ViewTab,
    pub accordion: AccordionState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabEntry {
    pub tab: ViewTab,
    pub label: String,
    pub active: bool,
}

/// Body of the active tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "tab", content = "view", rename_all = "snake_case")]
pub enum SectionBody {
    Structure(StructureView),
    Card(CardView),
    Timeline(TimelineView),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionScreen {
    /// Id of the section actually shown, after fallback.
    pub section_id: String,
    pub header: Header,
    pub tabs: Vec<TabEntry>,
    pub body: SectionBody,
    pub nav: Vec<NavEntry>,
}

impl SectionScreen {
    /// Builds the screen for `requested_id`, falling back to the default
    /// section when it does not resolve.
    pub fn build<S: RecordSource>(
        source: &S,
        config: &ViewerConfig,
        requested_id: &str,
        state: &SectionState,
    ) -> Self {
        let section = source.section(requested_id);
        let user = source.user();
        let route = Route::Section(requested_id.to_string());

        let body = match state.tab {
            ViewTab::Structure => SectionBody::Structure(build_structure_view(
                &section.categories,
                |name| config.is_hidden_group(name),
                &state.accordion,
            )),
            ViewTab::Card => SectionBody::Card(build_card_view(&flatten_units(&section.categories))),
            ViewTab::Timeline => {
                SectionBody::Timeline(build_timeline_view(&flatten_units(&section.categories)))
            }
        };

        Self {
            section_id: section.id.clone(),
            header: Header::new(
                section.name.clone(),
                Some(profile_subtitle(&user.name, &user.class_name)),
                &route,
            ),
            tabs: ViewTab::ALL
                .into_iter()
                .map(|tab| TabEntry {
                    tab,
                    label: tab.label().to_string(),
                    active: tab == state.tab,
                })
                .collect(),
            body,
            nav: bottom_nav(&route.path()),
        }
    }
}
