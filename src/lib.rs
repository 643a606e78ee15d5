//! Shared library for `GauchoClass`
//! Course dataset loading and queries used by the CLI and the WASM target

pub mod core;
pub mod logger;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use crate::core::catalog::{Catalog, LoadState};
pub use crate::core::error::LoadError;
pub use crate::core::{config, get_version};
