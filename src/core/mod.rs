//! Core module for common functionality across all targets
//!
//! Loading goes through [`dataset`]; the query layer ([`facets`],
//! [`resolver`], [`grades`]) works on plain record slices and is bundled per
//! session by [`catalog::Catalog`].

pub mod catalog;
pub mod config;
pub mod dataset;
pub mod error;
pub mod facets;
pub mod grades;
pub mod models;
pub mod report;
pub mod resolver;
pub mod session;

/// Returns the current version of the `GauchoClass` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
