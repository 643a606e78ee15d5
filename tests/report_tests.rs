//! Integration tests for course reports

use gaucho_class::core::report::{ReportContext, ReportFormat};
use gaucho_class::Catalog;
use std::fs;
use tempfile::TempDir;

fn catalog() -> Catalog {
    Catalog::from_bytes(
        fs::read(concat!(env!("CARGO_MANIFEST_DIR"), "/samples/courses.csv"))
            .expect("sample dataset")
            .as_slice(),
    )
}

fn render(format: ReportFormat, department: &str, number: &str) -> String {
    let catalog = catalog();
    let ctx = ReportContext::from_catalog(&catalog, department, number).expect("course resolves");
    format.reporter().render(&ctx).expect("report renders")
}

#[test]
fn markdown_report_has_chart_and_offerings() {
    let md = render(ReportFormat::Markdown, "CMPSC", "8");
    assert!(md.starts_with("# CMPSC 8: Introduction to Computer Science"));
    assert!(md.contains("## Grade Distribution"));
    assert!(md.contains("Total enrollment: "));
    assert!(md.contains("## All Offerings"));
    assert!(md.contains("Matni Z"));
}

#[test]
fn html_report_is_self_contained() {
    let html = render(ReportFormat::Html, "CMPSC", "130A");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<svg"));
    assert!(html.contains("<rect"));
    assert!(html.contains("#34D399"));
    assert!(!html.contains("All offerings"));
}

#[test]
fn html_report_escapes_text() {
    let catalog = Catalog::from_bytes(b"dept,course,coursetitle,A\nART,ART 1,<b>Bold</b> & Co,4\n");
    let ctx = ReportContext::from_catalog(&catalog, "ART", "1").expect("resolves");
    let html = ReportFormat::Html.reporter().render(&ctx).expect("renders");
    assert!(!html.contains("<b>Bold</b>"));
    assert!(html.contains("&lt;b&gt;"));
}

#[test]
fn csv_report_has_row_per_offering() {
    let csv_text = render(ReportFormat::Csv, "WRIT", "2");
    let mut reader = csv::Reader::from_reader(csv_text.as_bytes());

    let headers = reader.headers().expect("header").clone();
    assert_eq!(&headers[0], "course");
    assert_eq!(&headers[headers.len() - 1], "total");
    assert_eq!(headers.len(), 6 + 11 + 1);

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.expect("row")).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][2], "Dolan H");
    assert_eq!(&rows[1][2], "Okafor J");
}

#[test]
fn json_report_round_trips_series() {
    let json = render(ReportFormat::Json, "MATH", "117");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(value["course"]["courseCode"], "MATH 117");
    let points = value["gradeSeries"]["points"].as_array().expect("points");
    let sum: u64 = points
        .iter()
        .map(|p| p["count"].as_u64().expect("count"))
        .sum();
    assert_eq!(value["gradeSeries"]["totalEnrollment"].as_u64(), Some(sum));
    assert_eq!(value["offerings"].as_array().map(Vec::len), Some(1));
}

#[test]
fn generate_writes_into_missing_directory() {
    let dir = TempDir::new().expect("temp dir");
    let catalog = catalog();
    let ctx = ReportContext::from_catalog(&catalog, "PSTAT", "120A").expect("resolves");

    for format in [ReportFormat::Markdown, ReportFormat::Html, ReportFormat::Csv, ReportFormat::Json] {
        let path = dir
            .path()
            .join("reports")
            .join(format!("{}.{}", ctx.file_stem(), format.extension()));
        format.reporter().generate(&ctx, &path).expect("report written");
        assert!(fs::metadata(&path).expect("file exists").len() > 0);
    }
}
