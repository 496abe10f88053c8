//! Home and section-list screens.

use crate::config::ViewerConfig;
use crate::route::Route;
use crate::model::profile::BasicInfo;
use crate::screen::{bottom_nav, profile_subtitle, Header, MetaRow, NavEntry};
use crate::store::catalog::RecordSource;
use crate::store::seed::TileTarget;
use serde::Serialize;

const HOME_TITLE: &str = "成长档案";
const HOME_TAGLINE: &str = "记录每一步成长";
const SECTION_LIST_TITLE: &str = "全部档案";
const CURRENT_WEEK: u32 = 14;
const TOTAL_WEEKS: u32 = 20;

/// Navigation tile with a stat counted from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeTileView {
    pub title: String,
    pub subtitle: String,
    pub stat: usize,
    pub stat_label: String,
    pub path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SemesterProgress {
    pub current_week: u32,
    pub total_weeks: u32,
    pub percent: u32,
}

impl SemesterProgress {
    pub fn new(current_week: u32, total_weeks: u32) -> Self {
        let percent = if total_weeks == 0 {
            0
        } else {
            current_week.min(total_weeks) * 100 / total_weeks
        };
        Self {
            current_week,
            total_weeks,
            percent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeScreen {
    pub user_name: String,
    pub avatar: String,
    pub class_name: String,
    pub semester_label: String,
    /// Semester and class staffing rows.
    pub class_info: Vec<MetaRow>,
    pub title: String,
    pub tagline: String,
    pub tiles: Vec<HomeTileView>,
    pub progress: SemesterProgress,
    pub nav: Vec<NavEntry>,
}

impl HomeScreen {
    pub fn build<S: RecordSource>(source: &S, config: &ViewerConfig) -> Self {
        let user = source.user();
        let tiles = source
            .home_tiles()
            .iter()
            .map(|tile| {
                let (stat, route) = match &tile.target {
                    TileTarget::Section(id) => (
                        source.section(id).item_count(),
                        Route::Section(id.clone()),
                    ),
                    TileTarget::TeacherMessages => {
                        (source.teacher_messages().len(), Route::TeacherMessages)
                    }
                };
                HomeTileView {
                    title: tile.title.clone(),
                    subtitle: tile.subtitle.clone(),
                    stat,
                    stat_label: tile.stat_label.clone(),
                    path: route.path(),
                }
            })
            .collect();

        Self {
            user_name: user.name.clone(),
            avatar: user.avatar.clone(),
            class_name: user.class_name.clone(),
            semester_label: config.semester_label.clone(),
            class_info: class_info_rows(source.basic_info()),
            title: HOME_TITLE.to_string(),
            tagline: HOME_TAGLINE.to_string(),
            tiles,
            progress: SemesterProgress::new(CURRENT_WEEK, TOTAL_WEEKS),
            nav: bottom_nav(&Route::Home.path()),
        }
    }
}

/// One row of the section list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionSummary {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub category_count: usize,
    pub item_count: usize,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionListScreen {
    pub header: Header,
    pub sections: Vec<SectionSummary>,
    pub nav: Vec<NavEntry>,
}

impl SectionListScreen {
    pub fn build<S: RecordSource>(source: &S) -> Self {
        let route = Route::Sections;
        let user = source.user();
        Self {
            header: Header::new(
                SECTION_LIST_TITLE,
                Some(profile_subtitle(&user.name, &user.class_name)),
                &route,
            ),
            sections: source
                .sections()
                .iter()
                .map(|section| SectionSummary {
                    id: section.id.clone(),
                    name: section.name.clone(),
                    icon: section.icon.clone(),
                    category_count: section.categories.len(),
                    item_count: section.item_count(),
                    path: Route::Section(section.id.clone()).path(),
                })
                .collect(),
            nav: bottom_nav(&route.path()),
        }
    }
}

fn class_info_rows(info: &BasicInfo) -> Vec<MetaRow> {
    let mut rows = vec![
        MetaRow::new("学期", info.semester.clone()),
        MetaRow::new("班级", info.class_name.clone()),
        MetaRow::new("班主任", info.head_teacher.clone()),
    ];
    if let Some(assistant) = &info.assistant_teacher {
        rows.push(MetaRow::new("配班老师", assistant.clone()));
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::{class_info_rows, SemesterProgress};
    use crate::model::profile::BasicInfo;

    #[test]
    fn progress_percent_is_clamped_and_safe() {
        assert_eq!(SemesterProgress::new(14, 20).percent, 70);
        assert_eq!(SemesterProgress::new(25, 20).percent, 100);
        assert_eq!(SemesterProgress::new(3, 0).percent, 0);
    }

    #[test]
    fn class_info_skips_missing_assistant() {
        let info = BasicInfo {
            semester: "2024-2025学年 第一学期".to_string(),
            class_name: "中二班".to_string(),
            head_teacher: "李老师".to_string(),
            assistant_teacher: None,
        };
        let labels: Vec<String> = class_info_rows(&info)
            .into_iter()
            .map(|row| row.label)
            .collect();
        assert_eq!(labels, vec!["学期", "班级", "班主任"]);
    }
}
