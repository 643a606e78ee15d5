//! CSV parser for the course dataset

use super::cell::Cell;
use crate::core::error::LoadError;
use crate::core::models::{CourseRecord, Grade};
use crate::{debug, info};
use csv::{ReaderBuilder, StringRecord};

/// Column holding the department code
pub const DEPARTMENT_COLUMN: &str = "dept";
/// Column holding the full course code
pub const COURSE_CODE_COLUMN: &str = "course";

/// Column positions resolved from the header row
///
/// Lookups are case-sensitive; when a name repeats, the first column wins.
struct Columns {
    headers: StringRecord,
}

impl Columns {
    fn position(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    fn has(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    fn cell<'r>(&self, row: &'r StringRecord, name: &str) -> Cell<'r> {
        Cell::classify(self.position(name).and_then(|idx| row.get(idx)))
    }
}

/// Parse dataset text into course records
///
/// The first row must be a header. Rows without a text `dept` and `course`
/// are dropped, as are rows the CSV reader cannot decode.
///
/// # Errors
/// Returns [`LoadError::Malformed`] when there is no usable header row or the
/// header names neither `dept` nor `course`.
pub fn parse_dataset(bytes: &[u8]) -> Result<Vec<CourseRecord>, LoadError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(LoadError::malformed("dataset is empty"));
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let headers = reader
        .headers()
        .map_err(|e| LoadError::malformed(format!("unreadable header row: {e}")))?
        .clone();

    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(LoadError::malformed("header row is blank"));
    }

    let columns = Columns { headers };
    if !columns.has(DEPARTMENT_COLUMN) && !columns.has(COURSE_CODE_COLUMN) {
        return Err(LoadError::malformed(format!(
            "header has neither '{DEPARTMENT_COLUMN}' nor '{COURSE_CODE_COLUMN}' column"
        )));
    }

    let mut records = Vec::new();
    let mut dropped = 0usize;

    for (idx, result) in reader.records().enumerate() {
        let row = match result {
            Ok(row) => row,
            Err(e) => {
                debug!("Dropping unreadable row {}: {e}", idx + 2);
                dropped += 1;
                continue;
            }
        };

        match parse_row(&row, &columns) {
            Some(record) => records.push(record),
            None => {
                debug!("Dropping row {} without department or course code", idx + 2);
                dropped += 1;
            }
        }
    }

    info!(
        "Parsed {} course records ({} rows dropped)",
        records.len(),
        dropped
    );
    Ok(records)
}

/// Normalize one row into a record, or `None` if its identity is missing
fn parse_row(row: &StringRecord, columns: &Columns) -> Option<CourseRecord> {
    let department = columns.cell(row, DEPARTMENT_COLUMN).as_text()?;
    let course_code = columns.cell(row, COURSE_CODE_COLUMN).as_text()?;

    let mut record = CourseRecord::new(department.to_string(), course_code.to_string());

    record.title = columns.cell(row, "coursetitle").display();
    record.instructor = columns.cell(row, "instructor").display();
    record.quarter = columns.cell(row, "quarter").display();
    record.year = columns
        .cell(row, "year")
        .as_integer()
        .and_then(|y| i32::try_from(y).ok());
    record.units = columns.cell(row, "units").display();
    record.description = columns.cell(row, "description").display();
    record.prerequisites = columns.cell(row, "prereqs").display();

    for grade in Grade::ALL {
        record
            .grades
            .set(grade, columns.cell(row, grade.column()).as_count());
    }

    record.average_gpa = columns.cell(row, "avgGPA").as_number();
    record.total_graded_students = columns
        .cell(row, "nLetterStudents")
        .as_integer()
        .and_then(|n| u32::try_from(n).ok());
    record.would_take_again = columns.cell(row, "wouldtakeagain").display();
    record.difficulty = columns.cell(row, "difficultylevel").as_number();
    record.student_comments = columns.cell(row, "studentcomments").display();

    Some(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "dept,course,coursetitle,instructor,quarter,year,units,Ap,A,Am,Bp,B,Bm,Cp,C,Cm,D,F,avgGPA,nLetterStudents,wouldtakeagain,difficultylevel";

    #[test]
    fn test_parse_full_row() {
        let text = format!(
            "{HEADER}\nCMPSC,CMPSC 8,Intro to Computer Science,Smith,Fall,2023,4,2,30,4,5,0,,,,,,1,3.61,42,73%,2.5\n"
        );
        let records = parse_dataset(text.as_bytes()).expect("parse failed");
        assert_eq!(records.len(), 1);

        let r = &records[0];
        assert_eq!(r.department, "CMPSC");
        assert_eq!(r.course_code, "CMPSC 8");
        assert_eq!(r.course_number, "8");
        assert_eq!(r.title.as_deref(), Some("Intro to Computer Science"));
        assert_eq!(r.quarter.as_deref(), Some("Fall"));
        assert_eq!(r.year, Some(2023));
        assert_eq!(r.units.as_deref(), Some("4"));
        assert_eq!(r.grades.get(Grade::APlus), 2);
        assert_eq!(r.grades.get(Grade::A), 30);
        assert_eq!(r.grades.get(Grade::BPlus), 5);
        assert_eq!(r.grades.get(Grade::C), 0);
        assert_eq!(r.grades.get(Grade::F), 1);
        assert_eq!(r.average_gpa, Some(3.61));
        assert_eq!(r.total_graded_students, Some(42));
        assert_eq!(r.would_take_again.as_deref(), Some("73%"));
        assert_eq!(r.difficulty, Some(2.5));
        assert!(r.description.is_none());
        assert!(r.student_comments.is_none());
    }

    #[test]
    fn test_rows_missing_identity_are_dropped() {
        let text = "dept,course,coursetitle\n\
                    CMPSC,CMPSC 8,Intro\n\
                    ,CMPSC 16,No department\n\
                    ART,,No code\n\
                    101,ART 10,Numeric department\n\
                    ART,ART 10,Drawing\n";
        let records = parse_dataset(text.as_bytes()).expect("parse failed");
        let codes: Vec<&str> = records.iter().map(|r| r.course_code.as_str()).collect();
        assert_eq!(codes, ["CMPSC 8", "ART 10"]);
    }

    #[test]
    fn test_short_rows_and_extra_columns() {
        let text = "dept,course,extra,coursetitle\nART,ART 10,ignored\n";
        let records = parse_dataset(text.as_bytes()).expect("parse failed");
        assert_eq!(records.len(), 1);
        assert!(records[0].title.is_none());
    }

    #[test]
    fn test_header_is_case_sensitive() {
        let text = "Dept,Course\nART,ART 10\n";
        let err = parse_dataset(text.as_bytes()).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_empty_input_is_malformed() {
        assert!(parse_dataset(b"").unwrap_err().is_malformed());
        assert!(parse_dataset(b"  \n\n").unwrap_err().is_malformed());
    }

    #[test]
    fn test_quoted_fields() {
        let text = "dept,course,description\nMATH,MATH 3A,\"Limits, derivatives, and \"\"more\"\"\"\n";
        let records = parse_dataset(text.as_bytes()).expect("parse failed");
        assert_eq!(
            records[0].description.as_deref(),
            Some("Limits, derivatives, and \"more\"")
        );
    }
}
