//! Markdown report generator
//!
//! The grade distribution is drawn as a fenced text bar chart so the report
//! reads the same in a terminal and in rendered Markdown.

use crate::core::report::visualization::BarChart;
use crate::core::report::{CourseSummary, ReportContext, ReportGenerator};
use askama::Template;
use std::error::Error;

/// Width of the longest bar in characters
const CHART_WIDTH: u32 = 40;

#[derive(Template)]
#[template(path = "course_report.md")]
struct MarkdownReport<'a> {
    course: &'a CourseSummary,
    chart: String,
    version: &'a str,
}

/// Markdown report generator
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let course = ctx.summary();
        let page = MarkdownReport {
            course: &course,
            chart: BarChart::new(&ctx.series).render_text(CHART_WIDTH),
            version: crate::core::get_version(),
        };
        Ok(page.render()?)
    }
}
