//! Static archive store.
//!
//! # Responsibility
//! - Hold built-in archive content as immutable values.
//! - Provide total id lookups through `RecordSource`.
//!
//! # Invariants
//! - Nothing in this module performs I/O or mutates data after startup.

pub mod catalog;
pub mod seed;
