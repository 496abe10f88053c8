//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate lookups, views and navigation into screen-level APIs.
//! - Keep front-ends decoupled from catalog details.

pub mod archive_service;
