//! View transformers.
//!
//! # Responsibility
//! - Turn the nested section tree into display-ready shapes for the
//!   structure, card and timeline tabs.
//! - Keep every transformation pure: no I/O, no logging, no mutation.
//!
//! # Invariants
//! - Source order is preserved unless a view documents its own ordering.
//! - Empty inputs yield explicit empty-state signals instead of errors.

pub mod card;
pub mod month;
pub mod structure;
pub mod timeline;

use crate::model::record::RecordItem;
use crate::model::section::Category;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Display mode of the section screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewTab {
    #[default]
    Structure,
    Card,
    Timeline,
}

impl ViewTab {
    /// Tabs in display order.
    pub const ALL: [ViewTab; 3] = [ViewTab::Structure, ViewTab::Card, ViewTab::Timeline];

    pub fn id(self) -> &'static str {
        match self {
            Self::Structure => "structure",
            Self::Card => "card",
            Self::Timeline => "timeline",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Structure => "结构视图",
            Self::Card => "卡片视图",
            Self::Timeline => "时间线",
        }
    }
}

/// Unknown tab id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTab(pub String);

impl Display for UnknownTab {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown view tab `{}`; expected structure|card|timeline",
            self.0
        )
    }
}

impl Error for UnknownTab {}

impl FromStr for ViewTab {
    type Err = UnknownTab;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ViewTab::ALL
            .into_iter()
            .find(|tab| tab.id() == value.trim())
            .ok_or_else(|| UnknownTab(value.to_string()))
    }
}

/// One category flattened to a single list of records.
///
/// Subcategory records are merged into their parent's bucket after the
/// category's direct records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewUnit<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub items: Vec<&'a RecordItem>,
}

/// Flattens categories into units, keeping empty units.
pub fn flatten_units(categories: &[Category]) -> Vec<ViewUnit<'_>> {
    categories
        .iter()
        .map(|category| ViewUnit {
            id: category.id.as_str(),
            title: category.name.as_str(),
            items: category.iter_items().collect(),
        })
        .collect()
}

/// Route path of the record detail screen for `record_id`.
pub(crate) fn record_path(record_id: &str) -> String {
    format!("/record/{record_id}")
}

#[cfg(test)]
mod tests {
    use super::{flatten_units, ViewTab};
    use crate::model::record::{RecordItem, RecordKind};
    use crate::model::section::{Category, Subcategory};

    #[test]
    fn tab_ids_round_trip_through_from_str() {
        for tab in ViewTab::ALL {
            assert_eq!(tab.id().parse::<ViewTab>().expect("tab id parses"), tab);
        }
        assert!("grid".parse::<ViewTab>().is_err());
    }

    #[test]
    fn flatten_merges_subcategories_into_parent_unit() {
        let item = |id: &str| RecordItem::new(id, id, RecordKind::Activity, "11-01");
        let categories = vec![
            Category::with_items("a", "A", "x", vec![item("a1")]),
            Category::with_subcategories(
                "b",
                "B",
                "x",
                vec![
                    Subcategory::new("b-1", "B1", vec![item("b1")]),
                    Subcategory::new("b-2", "B2", vec![item("b2")]),
                ],
            ),
            Category::with_items("c", "C", "x", Vec::new()),
        ];

        let units = flatten_units(&categories);
        assert_eq!(units.len(), 3);
        assert_eq!(units[1].title, "B");
        let ids: Vec<&str> = units[1].items.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["b1", "b2"]);
        assert!(units[2].items.is_empty());
    }
}
