//! Integration tests for loading the course dataset and querying it

use gaucho_class::core::dataset::{self, source_for, FileSource, InlineSource};
use gaucho_class::core::facets::{course_options, departments};
use gaucho_class::core::grades::build_series;
use gaucho_class::core::models::Grade;
use gaucho_class::core::resolver::{offerings, resolve};
use gaucho_class::{Catalog, LoadError};
use std::path::PathBuf;

fn sample(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("samples")
        .join(name)
}

fn small_catalog() -> Catalog {
    Catalog::load(&FileSource::new(sample("courses_small.csv")))
}

#[test]
fn scenario_small_fixture() {
    let catalog = small_catalog();
    assert!(catalog.is_ready());
    assert_eq!(catalog.records().len(), 3);

    assert_eq!(catalog.departments(), ["ART", "CMPSC"]);

    let codes: Vec<String> = catalog
        .course_options("CMPSC")
        .into_iter()
        .map(|o| o.code)
        .collect();
    assert_eq!(codes, ["8", "130A"]);

    let record = catalog.resolve("CMPSC", "8").expect("CMPSC 8 resolves");
    assert_eq!(record.title.as_deref(), Some("Introduction to Computer Science"));

    // Ap=2 A=30 Bp=5 B=12 C=3 F=1, the rest zero
    let series = catalog.grade_series("CMPSC", "8");
    let points: Vec<(&str, u32)> = series.points.iter().map(|p| (p.label, p.count)).collect();
    assert_eq!(
        points,
        [("A+", 2), ("A", 30), ("B+", 5), ("B", 12), ("C", 3), ("F", 1)]
    );
    assert_eq!(series.total_enrollment, 53);
}

#[test]
fn rows_without_identity_are_dropped() {
    let text = "dept,course,coursetitle\n\
                CMPSC,CMPSC 8,Intro\n\
                ,CMPSC 9,Missing dept\n\
                CMPSC,,Missing course\n\
                \"\",\"\",Both blank\n\
                MATH,MATH 3A,Calculus\n";
    let records = dataset::parse_dataset(text.as_bytes()).expect("parses");

    assert_eq!(records.len(), 2);
    assert!(records
        .iter()
        .all(|r| !r.department.is_empty() && !r.course_code.is_empty()));
}

#[test]
fn departments_are_distinct_and_sorted() {
    let text = "dept,course\nMATH,MATH 3A\nART,ART 10\n MATH ,MATH 3B\nCMPSC,CMPSC 8\nART,ART 7A\n";
    let records = dataset::parse_dataset(text.as_bytes()).expect("parses");
    assert_eq!(departments(&records), ["ART", "CMPSC", "MATH"]);
}

#[test]
fn course_options_sort_numerically() {
    let text = "dept,course,coursetitle\n\
                CMPSC,CMPSC 130A,Algorithms\n\
                CMPSC,CMPSC 16,Problem Solving\n\
                CMPSC,CMPSC 8,Intro\n\
                CMPSC,CMPSC 8,Intro (again)\n\
                CMPSC,CMPSC 24,Problem Solving II\n\
                MATH,MATH 3A,Calculus\n";
    let records = dataset::parse_dataset(text.as_bytes()).expect("parses");
    let options = course_options(&records, "CMPSC");

    let codes: Vec<&str> = options.iter().map(|o| o.code.as_str()).collect();
    assert_eq!(codes, ["8", "16", "24", "130A"]);
    assert_eq!(options[0].title, "Intro");
    assert!(course_options(&records, "").is_empty());
    assert!(course_options(&records, "PHYS").is_empty());
}

#[test]
fn resolve_ignores_case_and_spacing() {
    let catalog = small_catalog();
    let record = catalog.resolve("  cmpsc ", " 130a ").expect("resolves");
    assert_eq!(record.course_code, "CMPSC 130A");

    assert!(resolve(catalog.records(), "CMPSC", "130").is_none());
    assert!(resolve(catalog.records(), "", "").is_none());
}

#[test]
fn resolve_miss_is_none() {
    let catalog = small_catalog();
    assert!(catalog.resolve("PHYS", "1").is_none());
    assert!(catalog.grade_series("PHYS", "1").is_empty());
    assert_eq!(catalog.grade_series("PHYS", "1").total_enrollment, 0);
}

#[test]
fn resolve_keeps_first_of_repeated_offerings() {
    let records = dataset::parse_dataset(
        b"dept,course,instructor,A\nWRIT,WRIT 2,Dolan,10\nWRIT,WRIT 2,Okafor,20\n",
    )
    .expect("parses");

    let first = resolve(&records, "WRIT", "2").expect("resolves");
    assert_eq!(first.instructor.as_deref(), Some("Dolan"));
    assert_eq!(offerings(&records, "writ", "2").len(), 2);
}

#[test]
fn series_skips_zero_counts_in_grade_order() {
    let text = "dept,course,F,D,C,A,Ap\nART,ART 10,1,0,,7,3\n";
    let records = dataset::parse_dataset(text.as_bytes()).expect("parses");
    let series = build_series(records.first());

    let grades: Vec<Grade> = series.points.iter().map(|p| p.grade).collect();
    assert_eq!(grades, [Grade::APlus, Grade::A, Grade::F]);
    assert!(series.points.iter().all(|p| p.count > 0));
}

#[test]
fn total_counts_every_grade() {
    let catalog = small_catalog();
    let record = catalog.resolve("CMPSC", "130A").expect("resolves");
    let series = build_series(Some(record));

    let charted: u32 = series.points.iter().map(|p| p.count).sum();
    assert_eq!(series.total_enrollment, 56);
    assert_eq!(series.total_enrollment, charted);
    assert_eq!(series.total_enrollment, record.grades.total());
}

#[test]
fn malformed_dataset_yields_empty_catalog() {
    for text in ["", "\n\n", "title,instructor\nIntro,Smith\n"] {
        let catalog = Catalog::load(&InlineSource::new("bad.csv", text));
        assert!(!catalog.is_ready());
        assert!(
            catalog.error().is_some_and(LoadError::is_malformed),
            "{text:?} should be malformed"
        );
        assert!(catalog.records().is_empty());
        assert!(catalog.departments().is_empty());
    }
}

#[test]
fn header_only_dataset_is_ready_and_empty() {
    let catalog = Catalog::load(&InlineSource::new("empty.csv", "dept,course,A\n"));
    assert!(catalog.is_ready());
    assert!(catalog.departments().is_empty());
}

#[test]
fn missing_file_is_unreachable() {
    let err = dataset::load(&FileSource::new(sample("does_not_exist.csv"))).unwrap_err();
    assert!(err.is_unreachable());
}

#[test]
fn refused_connection_is_unreachable() {
    let source = source_for("http://127.0.0.1:1/courses.csv");
    assert_eq!(source.location(), "http://127.0.0.1:1/courses.csv");

    let catalog = Catalog::load(source.as_ref());
    assert!(catalog.error().is_some_and(LoadError::is_unreachable));
    assert!(catalog.records().is_empty());
}

#[test]
fn full_sample_loads() {
    let catalog = Catalog::load(source_for(&sample("courses.csv").to_string_lossy()).as_ref());
    assert!(catalog.is_ready());
    assert_eq!(
        catalog.departments(),
        ["ART", "ARTHI", "CMPSC", "MATH", "PSTAT", "WRIT"]
    );

    let math: Vec<String> = catalog
        .course_options("MATH")
        .into_iter()
        .map(|o| o.code)
        .collect();
    assert_eq!(math, ["3A", "3B", "4A", "4B", "6A", "117"]);

    assert_eq!(catalog.offerings("CMPSC", "8").len(), 2);
    assert_eq!(
        catalog.resolve("ARTHI", "6A").map(|r| r.course_number.as_str()),
        Some("6A")
    );
}
