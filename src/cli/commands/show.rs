//! Show command: course detail with a text grade chart

use super::catalog::print_json;
use gaucho_class::core::grades::GradeSeries;
use gaucho_class::core::models::CourseRecord;
use gaucho_class::core::report::BarChart;
use gaucho_class::{verbose, Catalog};
use serde::Serialize;
use std::fmt::Write;

/// Width of the longest bar in the terminal chart
const CHART_WIDTH: u32 = 40;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ShowOutput<'a> {
    course: &'a CourseRecord,
    grade_series: &'a GradeSeries,
    #[serde(skip_serializing_if = "Option::is_none")]
    offerings: Option<&'a [&'a CourseRecord]>,
}

/// Run the show command
///
/// Returns `false` when the course does not resolve.
pub fn run(catalog: &Catalog, department: &str, number: &str, all_offerings: bool, json: bool) -> bool {
    let Some(record) = catalog.resolve(department, number) else {
        eprintln!("✗ Course not found: {department} {number}");
        return false;
    };
    let series = catalog.grade_series(department, number);
    let offerings = catalog.offerings(department, number);
    verbose!("{} offering(s) share course code {}", offerings.len(), record.course_code);

    if json {
        print_json(&ShowOutput {
            course: record,
            grade_series: &series,
            offerings: all_offerings.then_some(offerings.as_slice()),
        });
        return true;
    }

    print!("{}", describe(record));
    println!("\nGrade distribution");
    print!("{}", BarChart::new(&series).render_text(CHART_WIDTH));

    if all_offerings {
        println!("\nOfferings");
        for offering in &offerings {
            println!(
                "  {:<12} {:<24} GPA {:>4}  {} students",
                offering.term().unwrap_or_else(|| "-".to_string()),
                offering.instructor.as_deref().unwrap_or("-"),
                offering.gpa_display(),
                offering.grades.total()
            );
        }
    }
    true
}

/// Header block for a record; absent fields are skipped
fn describe(record: &CourseRecord) -> String {
    let mut out = String::new();
    let _ = write!(out, "{}", record.course_code);
    if let Some(title) = &record.title {
        let _ = write!(out, ": {title}");
    }
    out.push('\n');

    let fields = [
        ("Term", record.term()),
        ("Instructor", record.instructor.clone()),
        ("Units", record.units.clone()),
        ("Average GPA", Some(record.gpa_display())),
        ("Difficulty", record.difficulty.map(|d| format!("{d:.1} / 5"))),
        ("Would take again", record.would_take_again.clone()),
        ("Prerequisites", record.prerequisites.clone()),
    ];
    for (label, value) in fields {
        if let Some(value) = value {
            let _ = writeln!(out, "  {label:<17}{value}");
        }
    }
    if let Some(description) = &record.description {
        let _ = writeln!(out, "\n{description}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_skips_absent_fields() {
        let mut record = CourseRecord::new("CMPSC".to_string(), "CMPSC 8".to_string());
        record.title = Some("Intro".to_string());
        record.average_gpa = Some(3.5);

        let text = describe(&record);
        assert!(text.starts_with("CMPSC 8: Intro\n"));
        assert!(text.contains("Average GPA      3.50"));
        assert!(!text.contains("Instructor"));
    }
}
