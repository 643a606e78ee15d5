//! Session catalog tying the loader to the query layer
//!
//! A catalog starts out `Loading`, then becomes `Ready` or `Failed` exactly
//! once. A failed catalog holds no records, so every query on it returns an
//! empty result instead of an error.

use crate::core::dataset::{self, DatasetSource};
use crate::core::error::LoadError;
use crate::core::facets;
use crate::core::grades::{build_series, GradeSeries};
use crate::core::models::{CourseOption, CourseRecord};
use crate::core::resolver;

/// Where the catalog is in its single load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// The dataset has not arrived yet
    Loading,
    /// Records are available (possibly zero of them)
    Ready,
    /// The load failed; no records are available this session
    Failed(LoadError),
}

/// Course records for one session plus their load state
#[derive(Debug, Clone)]
pub struct Catalog {
    state: LoadState,
    records: Vec<CourseRecord>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::loading()
    }
}

impl Catalog {
    /// Catalog that is still waiting for its dataset
    #[must_use]
    pub const fn loading() -> Self {
        Self {
            state: LoadState::Loading,
            records: Vec::new(),
        }
    }

    /// Load a catalog from a source; failures are kept in the state
    #[must_use]
    pub fn load(source: &dyn DatasetSource) -> Self {
        Self::from_result(dataset::load(source))
    }

    /// Build a catalog from dataset text already in memory
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::from_result(dataset::parse_dataset(bytes))
    }

    /// Build a catalog from a finished load attempt
    #[must_use]
    pub fn from_result(result: Result<Vec<CourseRecord>, LoadError>) -> Self {
        match result {
            Ok(records) => Self {
                state: LoadState::Ready,
                records,
            },
            Err(e) => Self {
                state: LoadState::Failed(e),
                records: Vec::new(),
            },
        }
    }

    /// Current load state
    #[must_use]
    pub const fn state(&self) -> &LoadState {
        &self.state
    }

    /// Returns true while the dataset has not arrived
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    /// Returns true once records are available
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self.state, LoadState::Ready)
    }

    /// The load failure, if any
    #[must_use]
    pub const fn error(&self) -> Option<&LoadError> {
        match &self.state {
            LoadState::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// All loaded records (empty unless ready)
    #[must_use]
    pub fn records(&self) -> &[CourseRecord] {
        &self.records
    }

    /// See [`facets::departments`]
    #[must_use]
    pub fn departments(&self) -> Vec<String> {
        facets::departments(&self.records)
    }

    /// See [`facets::course_options`]
    #[must_use]
    pub fn course_options(&self, department: &str) -> Vec<CourseOption> {
        facets::course_options(&self.records, department)
    }

    /// See [`resolver::resolve`]
    #[must_use]
    pub fn resolve(&self, department: &str, course_number: &str) -> Option<&CourseRecord> {
        resolver::resolve(&self.records, department, course_number)
    }

    /// See [`resolver::offerings`]
    #[must_use]
    pub fn offerings(&self, department: &str, course_number: &str) -> Vec<&CourseRecord> {
        resolver::offerings(&self.records, department, course_number)
    }

    /// Grade series of the resolved course (empty when not found)
    #[must_use]
    pub fn grade_series(&self, department: &str, course_number: &str) -> GradeSeries {
        build_series(self.resolve(department, course_number))
    }
}
