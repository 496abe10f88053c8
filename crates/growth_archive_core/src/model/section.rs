//! Section / category / subcategory hierarchy.
//!
//! # Responsibility
//! - Model the three-level archive tree: section > category > subcategory.
//! - Provide ordered item iteration without copying records.
//!
//! # Invariants
//! - Source order is display order at every level.
//! - A record belongs to exactly one category or subcategory.
//! - Category direct items always precede subcategory items on iteration.

use crate::model::record::RecordItem;
use serde::{Deserialize, Serialize};

/// Optional third level inside a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub items: Vec<RecordItem>,
}

impl Subcategory {
    pub fn new(id: impl Into<String>, name: impl Into<String>, items: Vec<RecordItem>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            items,
        }
    }
}

/// Second-level grouping, also called a unit in the subject schema.
///
/// A category holds records directly, through subcategories, or both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub items: Vec<RecordItem>,
    #[serde(default)]
    pub subcategories: Vec<Subcategory>,
}

impl Category {
    /// Creates a category that holds records directly.
    pub fn with_items(
        id: impl Into<String>,
        name: impl Into<String>,
        icon: impl Into<String>,
        items: Vec<RecordItem>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: Some(icon.into()),
            items,
            subcategories: Vec::new(),
        }
    }

    /// Creates a category that holds records through subcategories.
    pub fn with_subcategories(
        id: impl Into<String>,
        name: impl Into<String>,
        icon: impl Into<String>,
        subcategories: Vec<Subcategory>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: Some(icon.into()),
            items: Vec::new(),
            subcategories,
        }
    }

    /// Iterates direct items first, then each subcategory in order.
    pub fn iter_items(&self) -> impl Iterator<Item = &RecordItem> + '_ {
        self.items
            .iter()
            .chain(self.subcategories.iter().flat_map(|sub| sub.items.iter()))
    }

    /// Total items including every subcategory.
    pub fn item_count(&self) -> usize {
        self.items.len()
            + self
                .subcategories
                .iter()
                .map(|sub| sub.items.len())
                .sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }
}

/// Top-level archive section, also called a subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub categories: Vec<Category>,
}

impl Section {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        icon: impl Into<String>,
        categories: Vec<Category>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
            categories,
        }
    }

    /// Iterates every record of the section in category order.
    pub fn iter_items(&self) -> impl Iterator<Item = &RecordItem> + '_ {
        self.categories.iter().flat_map(Category::iter_items)
    }

    pub fn item_count(&self) -> usize {
        self.categories.iter().map(Category::item_count).sum()
    }
}
