//! Immutable archive catalog with total lookups.
//!
//! # Responsibility
//! - Index seed collections by id once at startup.
//! - Resolve route ids to records, falling back to a designated default.
//!
//! # Invariants
//! - Every lookup is total: a miss yields the collection default, never `None`.
//! - Ids are unique within each indexed collection.
//! - The designated default of every collection exists in that collection.
//! - The catalog is never mutated after construction.

use crate::config::ViewerConfig;
use crate::model::comment::ParentComment;
use crate::model::profile::{BasicInfo, User};
use crate::model::record::RecordItem;
use crate::model::section::Section;
use crate::store::seed::{CommentContext, HomeTile, SeedData};
use log::debug;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

static BUILTIN_CATALOG: Lazy<Catalog> = Lazy::new(|| {
    Catalog::from_seed(SeedData::builtin(), &ViewerConfig::default())
        .expect("built-in seed data is consistent")
});

/// Errors from catalog construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Collection has no entries, so no default can be designated.
    EmptyCollection(&'static str),
    /// Two entries of one collection share an id.
    DuplicateId {
        collection: &'static str,
        id: String,
    },
    /// Configured default id is absent from its collection.
    MissingDefault {
        collection: &'static str,
        id: String,
    },
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCollection(collection) => {
                write!(f, "catalog collection `{collection}` must not be empty")
            }
            Self::DuplicateId { collection, id } => {
                write!(f, "duplicate id `{id}` in catalog collection `{collection}`")
            }
            Self::MissingDefault { collection, id } => write!(
                f,
                "default id `{id}` not found in catalog collection `{collection}`"
            ),
        }
    }
}

impl Error for CatalogError {}

/// Anything addressable by a string id.
pub trait Identified {
    fn id(&self) -> &str;
}

impl Identified for Section {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for RecordItem {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Id map with a designated default entry.
///
/// `get` is total: ids that do not resolve yield the default entry.
#[derive(Debug, Clone)]
pub struct DefaultMap<T> {
    collection: &'static str,
    entries: Vec<T>,
    positions: HashMap<String, usize>,
    default_position: usize,
}

impl<T: Identified> DefaultMap<T> {
    /// Builds the map; `default_id = None` designates the first entry.
    ///
    /// # Errors
    /// - `EmptyCollection` when `entries` is empty.
    /// - `DuplicateId` when two entries share an id.
    /// - `MissingDefault` when `default_id` does not resolve.
    pub fn new(
        collection: &'static str,
        entries: Vec<T>,
        default_id: Option<&str>,
    ) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::EmptyCollection(collection));
        }

        let mut positions = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            if positions.insert(entry.id().to_string(), position).is_some() {
                return Err(CatalogError::DuplicateId {
                    collection,
                    id: entry.id().to_string(),
                });
            }
        }

        let default_position = match default_id {
            Some(id) => *positions
                .get(id)
                .ok_or_else(|| CatalogError::MissingDefault {
                    collection,
                    id: id.to_string(),
                })?,
            None => 0,
        };

        Ok(Self {
            collection,
            entries,
            positions,
            default_position,
        })
    }

    /// Resolves `id`, falling back to the default entry on miss.
    pub fn get(&self, id: &str) -> &T {
        match self.positions.get(id) {
            Some(position) => &self.entries[*position],
            None => {
                let fallback = self.default_entry();
                debug!(
                    "event=lookup_fallback module=store collection={} id={} fallback={}",
                    self.collection,
                    id,
                    fallback.id()
                );
                fallback
            }
        }
    }

    /// Resolves `id` without fallback.
    pub fn find(&self, id: &str) -> Option<&T> {
        self.positions.get(id).map(|position| &self.entries[*position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    pub fn default_entry(&self) -> &T {
        &self.entries[self.default_position]
    }

    /// Entries in source order.
    pub fn entries(&self) -> &[T] {
        &self.entries
    }
}

/// Read access to archive content used by screens.
///
/// Every single-entry accessor is total.
pub trait RecordSource {
    fn user(&self) -> &User;
    fn basic_info(&self) -> &BasicInfo;
    fn sections(&self) -> &[Section];
    /// Resolves a section id; unknown ids yield the default section.
    fn section(&self, id: &str) -> &Section;
    /// Resolves a record id across all collections; unknown ids yield the
    /// default record.
    fn record(&self, id: &str) -> &RecordItem;
    fn teacher_messages(&self) -> &[RecordItem];
    /// Resolves a teacher-message id; unknown ids yield the first message.
    fn teacher_message(&self, id: &str) -> &RecordItem;
    fn parent_messages(&self) -> &[RecordItem];
    fn parent_comments(&self) -> &[ParentComment];
    fn home_tiles(&self) -> &[HomeTile];
    fn comment_context(&self) -> &CommentContext;
}

/// In-memory catalog built from seed data.
#[derive(Debug, Clone)]
pub struct Catalog {
    user: User,
    basic_info: BasicInfo,
    sections: DefaultMap<Section>,
    records: DefaultMap<RecordItem>,
    teacher_messages: DefaultMap<RecordItem>,
    parent_messages: Vec<RecordItem>,
    parent_comments: Vec<ParentComment>,
    home_tiles: Vec<HomeTile>,
    comment_context: CommentContext,
}

impl Catalog {
    /// Returns the process-wide catalog of built-in content.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN_CATALOG
    }

    /// Indexes seed data using fallback ids from `config`.
    ///
    /// The record index spans every section item plus teacher and parent
    /// messages, so record ids must be unique across all of them.
    pub fn from_seed(seed: SeedData, config: &ViewerConfig) -> Result<Self, CatalogError> {
        let all_records: Vec<RecordItem> = seed
            .sections
            .iter()
            .flat_map(Section::iter_items)
            .chain(seed.teacher_messages.iter())
            .chain(seed.parent_messages.iter())
            .cloned()
            .collect();

        let sections = DefaultMap::new(
            "sections",
            seed.sections,
            Some(config.default_section_id.as_str()),
        )?;
        let records = DefaultMap::new(
            "records",
            all_records,
            Some(config.default_record_id.as_str()),
        )?;
        let teacher_messages = DefaultMap::new("teacher_messages", seed.teacher_messages, None)?;

        debug!(
            "event=catalog_built module=store status=ok sections={} records={} teacher_messages={}",
            sections.entries().len(),
            records.entries().len(),
            teacher_messages.entries().len()
        );

        Ok(Self {
            user: seed.user,
            basic_info: seed.basic_info,
            sections,
            records,
            teacher_messages,
            parent_messages: seed.parent_messages,
            parent_comments: seed.parent_comments,
            home_tiles: seed.home_tiles,
            comment_context: seed.comment_context,
        })
    }

    /// Returns whether `id` names a section without applying fallback.
    pub fn has_section(&self, id: &str) -> bool {
        self.sections.contains(id)
    }

    /// Returns whether `id` names a record without applying fallback.
    pub fn has_record(&self, id: &str) -> bool {
        self.records.contains(id)
    }
}

impl RecordSource for Catalog {
    fn user(&self) -> &User {
        &self.user
    }

    fn basic_info(&self) -> &BasicInfo {
        &self.basic_info
    }

    fn sections(&self) -> &[Section] {
        self.sections.entries()
    }

    fn section(&self, id: &str) -> &Section {
        self.sections.get(id)
    }

    fn record(&self, id: &str) -> &RecordItem {
        self.records.get(id)
    }

    fn teacher_messages(&self) -> &[RecordItem] {
        self.teacher_messages.entries()
    }

    fn teacher_message(&self, id: &str) -> &RecordItem {
        self.teacher_messages.get(id)
    }

    fn parent_messages(&self) -> &[RecordItem] {
        &self.parent_messages
    }

    fn parent_comments(&self) -> &[ParentComment] {
        &self.parent_comments
    }

    fn home_tiles(&self) -> &[HomeTile] {
        &self.home_tiles
    }

    fn comment_context(&self) -> &CommentContext {
        &self.comment_context
    }
}

impl<S: RecordSource + ?Sized> RecordSource for &S {
    fn user(&self) -> &User {
        (**self).user()
    }

    fn basic_info(&self) -> &BasicInfo {
        (**self).basic_info()
    }

    fn sections(&self) -> &[Section] {
        (**self).sections()
    }

    fn section(&self, id: &str) -> &Section {
        (**self).section(id)
    }

    fn record(&self, id: &str) -> &RecordItem {
        (**self).record(id)
    }

    fn teacher_messages(&self) -> &[RecordItem] {
        (**self).teacher_messages()
    }

    fn teacher_message(&self, id: &str) -> &RecordItem {
        (**self).teacher_message(id)
    }

    fn parent_messages(&self) -> &[RecordItem] {
        (**self).parent_messages()
    }

    fn parent_comments(&self) -> &[ParentComment] {
        (**self).parent_comments()
    }

    fn home_tiles(&self) -> &[HomeTile] {
        (**self).home_tiles()
    }

    fn comment_context(&self) -> &CommentContext {
        (**self).comment_context()
    }
}

#[cfg(test)]
mod tests {
    use super::{CatalogError, DefaultMap};
    use crate::model::record::{RecordItem, RecordKind};

    fn record(id: &str) -> RecordItem {
        RecordItem::new(id, id, RecordKind::Feedback, "11-01")
    }

    #[test]
    fn get_falls_back_to_designated_default() {
        let map = DefaultMap::new("t", vec![record("a"), record("b")], Some("b"))
            .expect("map should build");
        assert_eq!(map.get("a").id, "a");
        assert_eq!(map.get("zzz").id, "b");
        assert!(map.find("zzz").is_none());
    }

    #[test]
    fn first_entry_is_default_when_unspecified() {
        let map = DefaultMap::new("t", vec![record("a"), record("b")], None)
            .expect("map should build");
        assert_eq!(map.get("").id, "a");
    }

    #[test]
    fn rejects_duplicates_missing_default_and_empty() {
        let err = DefaultMap::new("t", vec![record("a"), record("a")], None)
            .expect_err("duplicate must fail");
        assert_eq!(
            err,
            CatalogError::DuplicateId {
                collection: "t",
                id: "a".to_string()
            }
        );

        let err = DefaultMap::new("t", vec![record("a")], Some("x"))
            .expect_err("missing default must fail");
        assert!(matches!(err, CatalogError::MissingDefault { .. }));

        let err = DefaultMap::<RecordItem>::new("t", Vec::new(), None)
            .expect_err("empty must fail");
        assert_eq!(err, CatalogError::EmptyCollection("t"));
    }
}
