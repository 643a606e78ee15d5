//! Grade series builder: shapes grade counts into chartable points

use crate::core::models::{CourseRecord, Grade};
use serde::Serialize;

/// One bar of a grade distribution chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeSeriesPoint {
    /// Grade this bar represents
    pub grade: Grade,
    /// Display label (e.g., "B+")
    pub label: &'static str,
    /// Number of students, always greater than zero
    pub count: u32,
    /// Presentational color for the bar
    pub color_hint: &'static str,
}

/// Non-zero grade counts in A+ to F order plus the overall total
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeSeries {
    /// Points with a positive count
    pub points: Vec<GradeSeriesPoint>,
    /// Sum of all eleven counts before zero entries are filtered out
    pub total_enrollment: u32,
}

impl GradeSeries {
    /// Largest count in the series, 0 when empty
    #[must_use]
    pub fn max_count(&self) -> u32 {
        self.points.iter().map(|p| p.count).max().unwrap_or(0)
    }

    /// Returns true when no grade has a positive count
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Build the grade series for a resolved record
///
/// `None` (nothing resolved) gives an empty series with a zero total.
#[must_use]
pub fn build_series(record: Option<&CourseRecord>) -> GradeSeries {
    let Some(record) = record else {
        return GradeSeries::default();
    };

    let points = record
        .grades
        .iter()
        .filter(|(_, count)| *count > 0)
        .map(|(grade, count)| GradeSeriesPoint {
            grade,
            label: grade.symbol(),
            count,
            color_hint: grade.color_hint(),
        })
        .collect();

    GradeSeries {
        points,
        total_enrollment: record.grades.total(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::GradeCounts;

    fn record_with(counts: GradeCounts) -> CourseRecord {
        let mut r = CourseRecord::new("CMPSC".to_string(), "CMPSC 8".to_string());
        r.grades = counts;
        r
    }

    #[test]
    fn test_series_filters_zero_and_keeps_order() {
        let record = record_with(
            GradeCounts::default()
                .with(Grade::BPlus, 5)
                .with(Grade::A, 30),
        );
        let series = build_series(Some(&record));

        let labels: Vec<(&str, u32)> = series.points.iter().map(|p| (p.label, p.count)).collect();
        assert_eq!(labels, [("A", 30), ("B+", 5)]);
        assert_eq!(series.total_enrollment, 35);
        assert_eq!(series.max_count(), 30);
    }

    #[test]
    fn test_series_colors_follow_bands() {
        let record = record_with(
            GradeCounts::default()
                .with(Grade::AMinus, 1)
                .with(Grade::C, 1)
                .with(Grade::F, 1),
        );
        let colors: Vec<&str> = build_series(Some(&record))
            .points
            .iter()
            .map(|p| p.color_hint)
            .collect();
        assert_eq!(colors, ["#34D399", "#F59E0B", "#DC2626"]);
    }

    #[test]
    fn test_series_for_missing_record() {
        let series = build_series(None);
        assert!(series.is_empty());
        assert_eq!(series.total_enrollment, 0);
        assert_eq!(series.max_count(), 0);
    }

    #[test]
    fn test_series_all_zero() {
        let series = build_series(Some(&record_with(GradeCounts::default())));
        assert!(series.is_empty());
        assert_eq!(series.total_enrollment, 0);
    }
}
