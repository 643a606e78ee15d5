//! Grade distribution bar chart
//!
//! One bar per grade series point, scaled against the largest count. The same
//! scaling feeds the terminal chart and the SVG geometry of the HTML report.

use crate::core::grades::GradeSeries;
use std::fmt::Write;

/// Glyph used for terminal bars
const BAR_GLYPH: char = '█';

/// Pixel layout of an SVG chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvgLayout {
    /// Height of the tallest bar
    pub plot_height: u32,
    /// Width of each bar
    pub bar_width: u32,
    /// Space between bars and around the outer edges
    pub gap: u32,
    /// Room above the plot for the count labels
    pub top_margin: u32,
    /// Room below the plot for the grade labels
    pub bottom_margin: u32,
}

impl Default for SvgLayout {
    fn default() -> Self {
        Self {
            plot_height: 200,
            bar_width: 36,
            gap: 12,
            top_margin: 16,
            bottom_margin: 20,
        }
    }
}

impl SvgLayout {
    /// Total SVG width for `bars` bars
    #[must_use]
    pub fn width(&self, bars: usize) -> u32 {
        let bars = u32::try_from(bars).unwrap_or(u32::MAX);
        bars.saturating_mul(self.bar_width + self.gap)
            .saturating_add(self.gap)
    }

    /// Total SVG height
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.top_margin + self.plot_height + self.bottom_margin
    }

    /// Baseline for the grade labels under the bars
    #[must_use]
    pub const fn label_y(&self) -> u32 {
        self.top_margin + self.plot_height + self.bottom_margin - 5
    }
}

/// Geometry and labels of one SVG bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgBar {
    /// Left edge
    pub x: u32,
    /// Top edge
    pub y: u32,
    /// Bar width
    pub width: u32,
    /// Bar height
    pub height: u32,
    /// Horizontal center, used to anchor labels
    pub center: u32,
    /// Baseline of the count label drawn above the bar
    pub value_y: u32,
    /// Grade label
    pub label: &'static str,
    /// Student count
    pub count: u32,
    /// Fill color
    pub color: &'static str,
}

/// Bar chart over a grade series
#[derive(Debug, Clone, Copy)]
pub struct BarChart<'a> {
    series: &'a GradeSeries,
}

impl<'a> BarChart<'a> {
    /// Chart the given series
    #[must_use]
    pub const fn new(series: &'a GradeSeries) -> Self {
        Self { series }
    }

    /// Length of a bar for `count` when the largest bar spans `span` units
    ///
    /// Rounded to the nearest unit; a positive count is never drawn as zero.
    #[must_use]
    pub fn scaled(&self, count: u32, span: u32) -> u32 {
        let max = self.series.max_count();
        if max == 0 || count == 0 || span == 0 {
            return 0;
        }
        let max = u64::from(max);
        let len = (u64::from(count) * u64::from(span) + max / 2) / max;
        u32::try_from(len).unwrap_or(span).clamp(1, span)
    }

    /// Render the chart as text, one line per grade plus a total line
    ///
    /// ```text
    /// A  | ██████████████████████████████ 30
    /// B+ | █████ 5
    /// Total enrollment: 35
    /// ```
    #[must_use]
    pub fn render_text(&self, width: u32) -> String {
        let mut out = String::new();
        if self.series.is_empty() {
            out.push_str("No grade distribution available.\n");
        }
        for point in &self.series.points {
            let len = self.scaled(point.count, width) as usize;
            let bar: String = std::iter::repeat(BAR_GLYPH).take(len).collect();
            let _ = writeln!(out, "{:<2} | {bar} {}", point.label, point.count);
        }
        let _ = writeln!(out, "Total enrollment: {}", self.series.total_enrollment);
        out
    }

    /// Bar geometry for an SVG rendering
    #[must_use]
    pub fn svg_bars(&self, layout: &SvgLayout) -> Vec<SvgBar> {
        let mut x = layout.gap;
        self.series
            .points
            .iter()
            .map(|point| {
                let height = self.scaled(point.count, layout.plot_height);
                let y = layout.top_margin + layout.plot_height - height;
                let bar = SvgBar {
                    x,
                    y,
                    width: layout.bar_width,
                    height,
                    center: x + layout.bar_width / 2,
                    value_y: y.saturating_sub(4),
                    label: point.label,
                    count: point.count,
                    color: point.color_hint,
                };
                x += layout.bar_width + layout.gap;
                bar
            })
            .collect()
    }
}
