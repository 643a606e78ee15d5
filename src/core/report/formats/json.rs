//! JSON report generator

use crate::core::grades::GradeSeries;
use crate::core::models::CourseRecord;
use crate::core::report::{ReportContext, ReportGenerator};
use serde::Serialize;
use std::error::Error;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    course: &'a CourseRecord,
    grade_series: &'a GradeSeries,
    offerings: &'a [&'a CourseRecord],
}

/// JSON report generator
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonReporter;

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let report = JsonReport {
            course: ctx.record,
            grade_series: &ctx.series,
            offerings: &ctx.offerings,
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }
}
