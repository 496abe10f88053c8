//! Structure (accordion) view.
//!
//! # Invariants
//! - Category, subcategory and record order follow the source.
//! - Categories with zero records are omitted, as are subcategories with
//!   zero records and categories whose name is in the hidden list.
//! - At most one category is expanded at a time.

use crate::model::record::RecordItem;
use crate::model::section::Category;
use crate::view::record_path;
use serde::Serialize;

/// Empty-state text when no category survives filtering.
pub const NO_DATA_MESSAGE: &str = "暂无数据";

const BADGE_CHARS: usize = 2;

/// Clickable record row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordLink {
    pub id: String,
    pub title: String,
    pub path: String,
}

impl RecordLink {
    fn from_record(item: &RecordItem) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            path: record_path(&item.id),
        }
    }
}

/// Subcategory block inside an expanded category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructureSubgroup {
    pub id: String,
    pub name: String,
    pub records: Vec<RecordLink>,
}

/// One accordion row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructureGroup {
    pub id: String,
    pub name: String,
    /// First two characters of the name.
    pub badge: String,
    pub item_count: usize,
    pub expanded: bool,
    pub records: Vec<RecordLink>,
    pub subgroups: Vec<StructureSubgroup>,
}

/// Accordion content, or the empty-state signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "groups", rename_all = "snake_case")]
pub enum StructureView {
    Groups(Vec<StructureGroup>),
    NoData,
}

impl StructureView {
    pub fn groups(&self) -> &[StructureGroup] {
        match self {
            Self::Groups(groups) => groups,
            Self::NoData => &[],
        }
    }
}

/// Accordion expansion state; at most one category is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccordionState {
    expanded: Option<String>,
}

impl AccordionState {
    pub fn expanded(category_id: impl Into<String>) -> Self {
        Self {
            expanded: Some(category_id.into()),
        }
    }

    /// Collapses `category_id` when it is open, otherwise opens it alone.
    pub fn toggle(&mut self, category_id: &str) {
        if self.expanded.as_deref() == Some(category_id) {
            self.expanded = None;
        } else {
            self.expanded = Some(category_id.to_string());
        }
    }

    pub fn is_expanded(&self, category_id: &str) -> bool {
        self.expanded.as_deref() == Some(category_id)
    }

    pub fn expanded_id(&self) -> Option<&str> {
        self.expanded.as_deref()
    }
}

/// Builds the accordion list for `categories`.
pub fn build_structure_view<F>(
    categories: &[Category],
    is_hidden: F,
    accordion: &AccordionState,
) -> StructureView
where
    F: Fn(&str) -> bool,
{
    let groups: Vec<StructureGroup> = categories
        .iter()
        .filter(|category| !category.is_empty() && !is_hidden(category.name.as_str()))
        .map(|category| StructureGroup {
            id: category.id.clone(),
            name: category.name.clone(),
            badge: category.name.chars().take(BADGE_CHARS).collect(),
            item_count: category.item_count(),
            expanded: accordion.is_expanded(&category.id),
            records: category.items.iter().map(RecordLink::from_record).collect(),
            subgroups: category
                .subcategories
                .iter()
                .filter(|sub| !sub.items.is_empty())
                .map(|sub| StructureSubgroup {
                    id: sub.id.clone(),
                    name: sub.name.clone(),
                    records: sub.items.iter().map(RecordLink::from_record).collect(),
                })
                .collect(),
        })
        .collect();

    if groups.is_empty() {
        StructureView::NoData
    } else {
        StructureView::Groups(groups)
    }
}

#[cfg(test)]
mod tests {
    use super::{build_structure_view, AccordionState, StructureView};
    use crate::model::record::{RecordItem, RecordKind};
    use crate::model::section::{Category, Subcategory};

    fn item(id: &str) -> RecordItem {
        RecordItem::new(id, format!("title {id}"), RecordKind::Observation, "11-01")
    }

    fn sample() -> Vec<Category> {
        vec![
            Category::with_items("lang", "语言表达", "x", vec![item("l1"), item("l2")]),
            Category::with_items("empty", "空分类", "x", Vec::new()),
            Category::with_subcategories(
                "dev",
                "幼儿成长测评",
                "x",
                vec![
                    Subcategory::new("cog", "认知发展", vec![item("c1")]),
                    Subcategory::new("none", "无记录", Vec::new()),
                ],
            ),
            Category::with_items("other", "其他", "x", vec![item("o1")]),
        ]
    }

    #[test]
    fn omits_empty_and_hidden_categories_preserving_order() {
        let view = build_structure_view(&sample(), |name| name == "其他", &AccordionState::default());
        let ids: Vec<&str> = view.groups().iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["lang", "dev"]);

        let dev = &view.groups()[1];
        assert_eq!(dev.badge, "幼儿");
        assert_eq!(dev.item_count, 1);
        assert_eq!(dev.subgroups.len(), 1);
        assert_eq!(dev.subgroups[0].records[0].path, "/record/c1");
    }

    #[test]
    fn hidden_list_can_be_disabled() {
        let view = build_structure_view(&sample(), |_| false, &AccordionState::default());
        assert_eq!(view.groups().len(), 3);
    }

    #[test]
    fn all_empty_yields_no_data() {
        let categories = vec![Category::with_items("e", "空", "x", Vec::new())];
        let view = build_structure_view(&categories, |_| false, &AccordionState::default());
        assert_eq!(view, StructureView::NoData);
    }

    #[test]
    fn accordion_toggle_keeps_single_expanded_category() {
        let mut state = AccordionState::default();
        state.toggle("lang");
        assert!(state.is_expanded("lang"));
        state.toggle("dev");
        assert!(state.is_expanded("dev"));
        assert!(!state.is_expanded("lang"));
        state.toggle("dev");
        assert_eq!(state.expanded_id(), None);

        let view = build_structure_view(&sample(), |_| false, &AccordionState::expanded("lang"));
        assert!(view.groups()[0].expanded);
        assert!(!view.groups()[1].expanded);
    }
}
