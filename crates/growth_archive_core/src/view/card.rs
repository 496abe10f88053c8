//! Card list view.
//!
//! # Invariants
//! - One group per flattened unit that has records; empty units are skipped.
//! - Cards within a group keep unit order.
//! - Zero records overall yields `CardView::NoContent`.

use crate::model::record::RecordItem;
use crate::view::{record_path, ViewUnit};
use serde::Serialize;

/// Empty-state text for the card tab.
pub const NO_CONTENT_MESSAGE: &str = "暂无内容";

/// Self-contained summary of one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordCard {
    pub id: String,
    pub title: String,
    pub date: String,
    pub kind_label: String,
    pub summary: Option<String>,
    pub score_label: Option<String>,
    pub tags: Vec<String>,
    pub image: Option<String>,
    pub path: String,
}

impl From<&RecordItem> for RecordCard {
    fn from(item: &RecordItem) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            date: item.date.clone(),
            kind_label: item.kind.label().to_string(),
            summary: item.summary.clone(),
            score_label: item.score_label.clone(),
            tags: item.tags.clone(),
            image: item.image.clone(),
            path: record_path(&item.id),
        }
    }
}

/// Cards of one unit under its title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardGroup {
    pub unit_id: String,
    pub title: String,
    pub item_count: usize,
    pub cards: Vec<RecordCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "groups", rename_all = "snake_case")]
pub enum CardView {
    Groups(Vec<CardGroup>),
    NoContent,
}

impl CardView {
    pub fn groups(&self) -> &[CardGroup] {
        match self {
            Self::Groups(groups) => groups,
            Self::NoContent => &[],
        }
    }

    /// Total cards across all groups.
    pub fn card_count(&self) -> usize {
        self.groups().iter().map(|group| group.cards.len()).sum()
    }
}

/// Builds card groups from flattened units.
pub fn build_card_view(units: &[ViewUnit<'_>]) -> CardView {
    let groups: Vec<CardGroup> = units
        .iter()
        .filter(|unit| !unit.items.is_empty())
        .map(|unit| CardGroup {
            unit_id: unit.id.to_string(),
            title: unit.title.to_string(),
            item_count: unit.items.len(),
            cards: unit.items.iter().map(|item| RecordCard::from(*item)).collect(),
        })
        .collect();

    if groups.is_empty() {
        CardView::NoContent
    } else {
        CardView::Groups(groups)
    }
}

#[cfg(test)]
mod tests {
    use super::{build_card_view, CardView};
    use crate::model::record::{RecordItem, RecordKind};
    use crate::model::section::{Category, Subcategory};
    use crate::view::flatten_units;

    #[test]
    fn skips_empty_units_and_merges_subcategories() {
        let item = |id: &str| {
            RecordItem::new(id, id, RecordKind::Artwork, "11-20").with_score_label("表现良好")
        };
        let categories = vec![
            Category::with_items("empty", "空", "x", Vec::new()),
            Category::with_subcategories(
                "math",
                "数学基础",
                "x",
                vec![
                    Subcategory::new("q", "数量概念", vec![item("q1")]),
                    Subcategory::new("c", "简单运算", vec![item("c1")]),
                ],
            ),
        ];

        let view = build_card_view(&flatten_units(&categories));
        assert_eq!(view.groups().len(), 1);
        let group = &view.groups()[0];
        assert_eq!(group.title, "数学基础");
        assert_eq!(group.item_count, 2);
        assert_eq!(group.cards[1].id, "c1");
        assert_eq!(group.cards[1].path, "/record/c1");
        assert_eq!(group.cards[0].score_label.as_deref(), Some("表现良好"));
        assert_eq!(group.cards[0].kind_label, "作品");
    }

    #[test]
    fn no_records_signals_no_content() {
        let categories = vec![Category::with_items("empty", "空", "x", Vec::new())];
        assert_eq!(build_card_view(&flatten_units(&categories)), CardView::NoContent);
        assert_eq!(build_card_view(&[]), CardView::NoContent);
    }
}
