//! Course resolver: exact lookup by department and course number

use crate::core::models::CourseRecord;

/// Lookup key for a department and course number, e.g. `"CMPSC 8"`
#[must_use]
pub fn course_key(department: &str, course_number: &str) -> String {
    format!("{} {}", department.trim(), course_number.trim()).to_uppercase()
}

/// First record whose uppercased course code equals the lookup key
///
/// A miss is a normal outcome, not an error. Blank inputs never match.
#[must_use]
pub fn resolve<'a>(
    records: &'a [CourseRecord],
    department: &str,
    course_number: &str,
) -> Option<&'a CourseRecord> {
    let key = lookup_key(department, course_number)?;
    records.iter().find(|r| r.course_code.to_uppercase() == key)
}

/// Every record matching the lookup key, in dataset order
///
/// Repeated offerings of a course (different terms or instructors) share one
/// course code; [`resolve`] returns only the first of them.
#[must_use]
pub fn offerings<'a>(
    records: &'a [CourseRecord],
    department: &str,
    course_number: &str,
) -> Vec<&'a CourseRecord> {
    let Some(key) = lookup_key(department, course_number) else {
        return Vec::new();
    };
    records
        .iter()
        .filter(|r| r.course_code.to_uppercase() == key)
        .collect()
}

fn lookup_key(department: &str, course_number: &str) -> Option<String> {
    if department.trim().is_empty() || course_number.trim().is_empty() {
        return None;
    }
    Some(course_key(department, course_number))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offering(code: &str, instructor: &str) -> CourseRecord {
        let dept = code.split_whitespace().next().unwrap_or_default().to_string();
        let mut r = CourseRecord::new(dept, code.to_string());
        r.instructor = Some(instructor.to_string());
        r
    }

    #[test]
    fn test_course_key() {
        assert_eq!(course_key("CMPSC", "8"), "CMPSC 8");
        assert_eq!(course_key(" cmpsc ", " 130a "), "CMPSC 130A");
    }

    #[test]
    fn test_resolve_first_match_wins() {
        let records = vec![
            offering("CMPSC 8", "Smith"),
            offering("CMPSC 8", "Jones"),
            offering("CMPSC 16", "Lee"),
        ];
        let found = resolve(&records, "cmpsc", " 8 ").expect("should resolve");
        assert_eq!(found.instructor.as_deref(), Some("Smith"));
    }

    #[test]
    fn test_resolve_no_partial_match() {
        let records = vec![offering("CMPSC 130A", "Smith")];
        assert!(resolve(&records, "CMPSC", "130").is_none());
        assert!(resolve(&records, "CMPSC", "").is_none());
        assert!(resolve(&records, "", "130A").is_none());
        assert!(resolve(&[], "CMPSC", "130A").is_none());
    }

    #[test]
    fn test_offerings_returns_all_matches() {
        let records = vec![
            offering("CMPSC 8", "Smith"),
            offering("CMPSC 16", "Lee"),
            offering("cmpsc 8", "Jones"),
        ];
        let instructors: Vec<&str> = offerings(&records, "CMPSC", "8")
            .into_iter()
            .filter_map(|r| r.instructor.as_deref())
            .collect();
        assert_eq!(instructors, ["Smith", "Jones"]);
    }
}
