//! CSV report generator: one row per offering with its grade counts

use crate::core::models::{CourseRecord, Grade};
use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;

/// CSV report generator
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvReporter;

impl CsvReporter {
    /// Create a new CSV reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn header() -> Vec<String> {
        let mut header: Vec<String> = [
            "course",
            "coursetitle",
            "instructor",
            "quarter",
            "year",
            "avgGPA",
        ]
        .iter()
        .map(ToString::to_string)
        .collect();
        header.extend(Grade::ALL.iter().map(|g| g.symbol().to_string()));
        header.push("total".to_string());
        header
    }

    fn row(record: &CourseRecord) -> Vec<String> {
        let mut row = vec![
            record.course_code.clone(),
            record.title.clone().unwrap_or_default(),
            record.instructor.clone().unwrap_or_default(),
            record.quarter.clone().unwrap_or_default(),
            record.year.map(|y| y.to_string()).unwrap_or_default(),
            record
                .average_gpa
                .map(|gpa| format!("{gpa:.2}"))
                .unwrap_or_default(),
        ];
        row.extend(record.grades.iter().map(|(_, count)| count.to_string()));
        row.push(record.grades.total().to_string());
        row
    }
}

impl ReportGenerator for CsvReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let mut writer = ::csv::Writer::from_writer(Vec::new());
        writer.write_record(Self::header())?;
        for record in &ctx.offerings {
            writer.write_record(Self::row(record))?;
        }
        let bytes = writer.into_inner().map_err(|e| e.to_string())?;
        Ok(String::from_utf8(bytes)?)
    }
}
