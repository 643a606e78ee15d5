//! CLI command handlers for `GauchoClass`.
//!
//! Each command is implemented in its own submodule.

pub mod catalog;
pub mod config;
pub mod report;
pub mod show;
