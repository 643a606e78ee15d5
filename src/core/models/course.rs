//! Course record model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Letter grades reported in the dataset, best first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    /// A+
    #[serde(rename = "A+")]
    APlus,
    /// A
    #[serde(rename = "A")]
    A,
    /// A-
    #[serde(rename = "A-")]
    AMinus,
    /// B+
    #[serde(rename = "B+")]
    BPlus,
    /// B
    #[serde(rename = "B")]
    B,
    /// B-
    #[serde(rename = "B-")]
    BMinus,
    /// C+
    #[serde(rename = "C+")]
    CPlus,
    /// C
    #[serde(rename = "C")]
    C,
    /// C-
    #[serde(rename = "C-")]
    CMinus,
    /// D
    #[serde(rename = "D")]
    D,
    /// F
    #[serde(rename = "F")]
    F,
}

impl Grade {
    /// Every grade in chart order (A+ through F)
    pub const ALL: [Self; 11] = [
        Self::APlus,
        Self::A,
        Self::AMinus,
        Self::BPlus,
        Self::B,
        Self::BMinus,
        Self::CPlus,
        Self::C,
        Self::CMinus,
        Self::D,
        Self::F,
    ];

    /// Display symbol, e.g. `"B+"`
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::CMinus => "C-",
            Self::D => "D",
            Self::F => "F",
        }
    }

    /// Dataset column holding this grade's count, e.g. `"Bp"`
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::APlus => "Ap",
            Self::A => "A",
            Self::AMinus => "Am",
            Self::BPlus => "Bp",
            Self::B => "B",
            Self::BMinus => "Bm",
            Self::CPlus => "Cp",
            Self::C => "C",
            Self::CMinus => "Cm",
            Self::D => "D",
            Self::F => "F",
        }
    }

    /// Chart color for the grade band
    #[must_use]
    pub const fn color_hint(self) -> &'static str {
        match self {
            Self::APlus | Self::A | Self::AMinus => "#34D399",
            Self::BPlus | Self::B | Self::BMinus => "#60A5FA",
            Self::CPlus | Self::C | Self::CMinus => "#F59E0B",
            Self::D => "#EF4444",
            Self::F => "#DC2626",
        }
    }

    /// Position in [`Grade::ALL`]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Per-grade student counts for one offering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeCounts {
    counts: [u32; 11],
}

impl GradeCounts {
    /// Count for a single grade
    #[must_use]
    pub const fn get(&self, grade: Grade) -> u32 {
        self.counts[grade.index()]
    }

    /// Replace the count for a grade
    pub fn set(&mut self, grade: Grade, count: u32) {
        self.counts[grade.index()] = count;
    }

    /// Builder-style variant of [`GradeCounts::set`]
    #[must_use]
    pub fn with(mut self, grade: Grade, count: u32) -> Self {
        self.set(grade, count);
        self
    }

    /// Sum over all eleven grades, zero entries included
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().fold(0u32, |acc, c| acc.saturating_add(*c))
    }

    /// Iterate `(grade, count)` in chart order
    pub fn iter(&self) -> impl Iterator<Item = (Grade, u32)> + '_ {
        Grade::ALL.iter().map(|g| (*g, self.get(*g)))
    }
}

/// One normalized course offering row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRecord {
    /// Department code (e.g., "CMPSC")
    pub department: String,

    /// Full course code (e.g., "CMPSC 8")
    pub course_code: String,

    /// Course code with the department prefix stripped (e.g., "8")
    pub course_number: String,

    /// Course title
    pub title: Option<String>,

    /// Instructor of this offering
    pub instructor: Option<String>,

    /// Quarter of the offering (Fall, Winter, Spring, Summer)
    pub quarter: Option<String>,

    /// Year of the offering
    pub year: Option<i32>,

    /// Units, kept as display text since the source mixes numbers and ranges
    pub units: Option<String>,

    /// Catalog description
    pub description: Option<String>,

    /// Prerequisites as free text
    pub prerequisites: Option<String>,

    /// Letter grade counts
    pub grades: GradeCounts,

    /// Average GPA of the offering
    #[serde(rename = "averageGPA")]
    pub average_gpa: Option<f64>,

    /// Number of students that received a letter grade
    pub total_graded_students: Option<u32>,

    /// Would-take-again rate as published (e.g., "73%")
    pub would_take_again: Option<String>,

    /// Difficulty rating on a 0-5 scale
    pub difficulty: Option<f64>,

    /// Aggregated student comments
    pub student_comments: Option<String>,
}

impl CourseRecord {
    /// Create a record with only its identity set
    ///
    /// The course number is derived from the code and department.
    #[must_use]
    pub fn new(department: String, course_code: String) -> Self {
        let course_number = derive_course_number(&department, &course_code);
        Self {
            department,
            course_code,
            course_number,
            title: None,
            instructor: None,
            quarter: None,
            year: None,
            units: None,
            description: None,
            prerequisites: None,
            grades: GradeCounts::default(),
            average_gpa: None,
            total_graded_students: None,
            would_take_again: None,
            difficulty: None,
            student_comments: None,
        }
    }

    /// Term label such as "Fall 2023", or `None` when neither part is known
    #[must_use]
    pub fn term(&self) -> Option<String> {
        match (self.quarter.as_deref(), self.year) {
            (Some(q), Some(y)) => Some(format!("{q} {y}")),
            (Some(q), None) => Some(q.to_string()),
            (None, Some(y)) => Some(y.to_string()),
            (None, None) => None,
        }
    }

    /// Average GPA with two decimals, or "N/A"
    #[must_use]
    pub fn gpa_display(&self) -> String {
        self.average_gpa
            .map_or_else(|| "N/A".to_string(), |gpa| format!("{gpa:.2}"))
    }
}

/// Strip the department prefix from a full course code
///
/// `("CMPSC", "CMPSC 130A")` gives `"130A"` and `("CMPSC", "CMPSC8")` gives
/// `"8"`. When the code does not start with the department, everything after
/// the first whitespace is used; a code with no whitespace then yields an
/// empty number.
#[must_use]
pub fn derive_course_number(department: &str, course_code: &str) -> String {
    let dept = department.trim();
    let code = course_code.trim();

    if !dept.is_empty() {
        if let Some(head) = code.get(..dept.len()) {
            let rest = &code[dept.len()..];
            let boundary = rest.chars().next().map_or(true, |c| !c.is_alphabetic());
            if head.eq_ignore_ascii_case(dept) && boundary {
                return rest.trim().to_string();
            }
        }
    }

    code.split_once(char::is_whitespace)
        .map(|(_, rest)| rest.trim().to_string())
        .unwrap_or_default()
}
