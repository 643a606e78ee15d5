//! Report generation for a single course
//!
//! A report covers the resolved record, its grade distribution and every
//! offering sharing its course code. Formats: Markdown, HTML, CSV and JSON.

pub mod formats;
pub mod visualization;

use crate::core::catalog::Catalog;
use crate::core::grades::{build_series, GradeSeries};
use crate::core::models::CourseRecord;
use std::error::Error;
use std::fs;
use std::path::Path;

pub use formats::{CsvReporter, HtmlReporter, JsonReporter, MarkdownReporter, ReportFormat};
pub use visualization::BarChart;

/// Data context for report generation
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// The resolved record (first match)
    pub record: &'a CourseRecord,
    /// Every record with the same course code, the resolved one first
    pub offerings: Vec<&'a CourseRecord>,
    /// Grade series of the resolved record
    pub series: GradeSeries,
}

impl<'a> ReportContext<'a> {
    /// Create a context for a record and its offerings
    #[must_use]
    pub fn new(record: &'a CourseRecord, offerings: Vec<&'a CourseRecord>) -> Self {
        Self {
            record,
            offerings,
            series: build_series(Some(record)),
        }
    }

    /// Context for a course in a catalog, `None` when it does not resolve
    #[must_use]
    pub fn from_catalog(catalog: &'a Catalog, department: &str, course_number: &str) -> Option<Self> {
        let record = catalog.resolve(department, course_number)?;
        Some(Self::new(record, catalog.offerings(department, course_number)))
    }

    /// Display-ready summary shared by the text templates
    #[must_use]
    pub fn summary(&self) -> CourseSummary {
        let r = self.record;
        CourseSummary {
            code: r.course_code.clone(),
            title: text(r.title.as_ref()),
            department: r.department.clone(),
            number: r.course_number.clone(),
            term: r.term().unwrap_or_default(),
            instructor: text(r.instructor.as_ref()),
            units: text(r.units.as_ref()),
            gpa: r.gpa_display(),
            difficulty: r.difficulty.map(|d| format!("{d:.1}")).unwrap_or_default(),
            would_take_again: text(r.would_take_again.as_ref()),
            graded_students: r
                .total_graded_students
                .map(|n| n.to_string())
                .unwrap_or_default(),
            description: text(r.description.as_ref()),
            prerequisites: text(r.prerequisites.as_ref()),
            comments: text(r.student_comments.as_ref()),
            total_enrollment: self.series.total_enrollment,
            offerings: self
                .offerings
                .iter()
                .map(|o| OfferingSummary {
                    term: o.term().unwrap_or_else(|| "-".to_string()),
                    instructor: o.instructor.clone().unwrap_or_else(|| "-".to_string()),
                    gpa: o.gpa_display(),
                    enrollment: o.grades.total(),
                })
                .collect(),
        }
    }

    /// Default report file name, e.g. `CMPSC_8.html`
    #[must_use]
    pub fn file_stem(&self) -> String {
        format!("{}_{}", self.record.department.trim(), self.record.course_number)
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
            .collect()
    }
}

fn text(value: Option<&String>) -> String {
    value.cloned().unwrap_or_default()
}

/// Course fields formatted for display; absent values are empty strings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseSummary {
    /// Full course code
    pub code: String,
    /// Course title
    pub title: String,
    /// Department code
    pub department: String,
    /// Course number
    pub number: String,
    /// Term label
    pub term: String,
    /// Instructor
    pub instructor: String,
    /// Units
    pub units: String,
    /// Average GPA with two decimals, or "N/A"
    pub gpa: String,
    /// Difficulty with one decimal
    pub difficulty: String,
    /// Would-take-again rate
    pub would_take_again: String,
    /// Students with a letter grade
    pub graded_students: String,
    /// Catalog description
    pub description: String,
    /// Prerequisites
    pub prerequisites: String,
    /// Student comments
    pub comments: String,
    /// Sum of all grade counts
    pub total_enrollment: u32,
    /// One row per offering
    pub offerings: Vec<OfferingSummary>,
}

/// One offering row of a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferingSummary {
    /// Term label or "-"
    pub term: String,
    /// Instructor or "-"
    pub instructor: String,
    /// Average GPA or "N/A"
    pub gpa: String,
    /// Sum of the offering's grade counts
    pub enrollment: u32,
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;

    /// Generate a report to a file, creating parent directories
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(output_path, content)?;
        Ok(())
    }
}
