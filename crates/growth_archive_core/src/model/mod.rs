//! Archive domain model.
//!
//! # Responsibility
//! - Define the read-only record tree shared by every view mode.
//! - Keep one record shape for structure, card and timeline projections.
//!
//! # Invariants
//! - Ids are unique within their containing collection.
//! - Model values are built once at startup and never mutated.

pub mod comment;
pub mod profile;
pub mod record;
pub mod section;
