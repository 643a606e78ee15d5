//! HTML report generator
//!
//! Generates a self-contained course page with embedded CSS and an SVG bar
//! chart of the grade distribution.

use crate::core::report::visualization::{BarChart, SvgBar, SvgLayout};
use crate::core::report::{CourseSummary, ReportContext, ReportGenerator};
use askama::Template;
use std::error::Error;

#[derive(Template)]
#[template(path = "course_report.html")]
struct HtmlReport<'a> {
    course: &'a CourseSummary,
    bars: Vec<SvgBar>,
    chart_width: u32,
    chart_height: u32,
    label_y: u32,
    version: &'a str,
}

/// HTML report generator
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlReporter {
    layout: SvgLayout,
}

impl HtmlReporter {
    /// Create a new HTML reporter with the default chart layout
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let course = ctx.summary();
        let bars = BarChart::new(&ctx.series).svg_bars(&self.layout);
        let page = HtmlReport {
            course: &course,
            chart_width: self.layout.width(bars.len()),
            chart_height: self.layout.height(),
            label_y: self.layout.label_y(),
            bars,
            version: crate::core::get_version(),
        };
        Ok(page.render()?)
    }
}
