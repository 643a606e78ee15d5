//! WASM bindings exported to JavaScript/TypeScript
//!
//! The host page fetches the dataset itself and hands the text to
//! [`CourseCatalog::load_text`]. Query results cross the boundary as JSON.

use crate::core::catalog::Catalog;
use crate::core::error::LoadError;
use crate::get_version;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Returns the current `GauchoClass` version for the WASM build.
#[wasm_bindgen]
pub fn get_wasm_version() -> String {
    format!("GauchoClass WASM v{}", get_version())
}

/// Course catalog for one page session
#[wasm_bindgen]
#[derive(Debug, Default)]
pub struct CourseCatalog {
    inner: Catalog,
}

#[wasm_bindgen]
impl CourseCatalog {
    /// New catalog in the loading state
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse fetched dataset text; returns whether the catalog is ready
    pub fn load_text(&mut self, text: &str) -> bool {
        self.inner = Catalog::from_bytes(text.as_bytes());
        self.inner.is_ready()
    }

    /// Record that the host could not fetch the dataset
    pub fn fail(&mut self, location: &str, reason: &str) {
        self.inner = Catalog::from_result(Err(LoadError::unreachable(location, reason)));
    }

    /// True until `load_text` or `fail` is called
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.inner.is_loading()
    }

    /// True once records are available
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.inner.is_ready()
    }

    /// Load failure message, if the load failed
    #[must_use]
    pub fn load_error(&self) -> Option<String> {
        self.inner.error().map(ToString::to_string)
    }

    /// Departments as a JSON array of strings
    #[must_use]
    pub fn departments(&self) -> String {
        to_json(&self.inner.departments())
    }

    /// Course options of a department as a JSON array of `{code, title}`
    #[must_use]
    pub fn course_options(&self, department: &str) -> String {
        to_json(&self.inner.course_options(department))
    }

    /// The resolved record as JSON, or `null`
    #[must_use]
    pub fn resolve(&self, department: &str, course_number: &str) -> String {
        to_json(&self.inner.resolve(department, course_number))
    }

    /// Grade series of the resolved record as JSON
    #[must_use]
    pub fn grade_series(&self, department: &str, course_number: &str) -> String {
        to_json(&self.inner.grade_series(department, course_number))
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        crate::error!("Failed to serialize result: {e}");
        "null".to_string()
    })
}
