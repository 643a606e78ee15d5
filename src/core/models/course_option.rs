//! Course option model used to populate course-number selectors

use serde::{Deserialize, Serialize};

/// One selectable course number within a department
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseOption {
    /// Course number without the department prefix (e.g., "130A")
    pub code: String,

    /// Title of the first record seen for this number
    pub title: String,
}

impl CourseOption {
    /// Create a new course option
    #[must_use]
    pub const fn new(code: String, title: String) -> Self {
        Self { code, title }
    }
}
