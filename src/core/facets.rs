//! Facet index: department list and per-department course options

use crate::core::models::{CourseOption, CourseRecord};
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};

/// Distinct trimmed departments in ascending ordinal order
#[must_use]
pub fn departments(records: &[CourseRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.department.trim())
        .filter(|d| !d.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Course options for one department, sorted numerically
///
/// The first record seen for each course number supplies the title. A blank
/// department means nothing is selected and yields an empty list.
///
/// Numbers are trimmed, but the code they came from is not normalized: a code
/// with internal runs of whitespace such as `"CMPSC  8"` still offers `"8"`,
/// and [`resolve`](crate::core::resolver::resolve) will not find it, since
/// it matches the whole code against `"CMPSC 8"`.
#[must_use]
pub fn course_options(records: &[CourseRecord], department: &str) -> Vec<CourseOption> {
    let department = department.trim();
    if department.is_empty() {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    let mut options: Vec<CourseOption> = records
        .iter()
        .filter(|r| r.department.trim() == department)
        .filter(|r| !r.course_number.is_empty())
        .filter(|r| seen.insert(r.course_number.as_str()))
        .map(|r| CourseOption::new(r.course_number.clone(), r.title.clone().unwrap_or_default()))
        .collect();

    options.sort_by(|a, b| natural_cmp(&a.code, &b.code));
    options
}

/// Numeric-aware string comparison
///
/// Digit runs compare by value and other runs compare case-insensitively, so
/// `"2" < "10"` and `"8" < "8A" < "8b" < "9"`. Ties fall back to ordinal order.
#[must_use]
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = Chunks::new(a);
    let mut right = Chunks::new(b);

    loop {
        match (left.next(), right.next()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ord = compare_chunks(x, y);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

fn compare_chunks(x: &str, y: &str) -> Ordering {
    let x_digits = x.starts_with(|c: char| c.is_ascii_digit());
    let y_digits = y.starts_with(|c: char| c.is_ascii_digit());

    match (x_digits, y_digits) {
        (true, true) => {
            let xs = x.trim_start_matches('0');
            let ys = y.trim_start_matches('0');
            xs.len().cmp(&ys.len()).then_with(|| xs.cmp(ys))
        }
        // Numbers sort before words
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => x
            .chars()
            .flat_map(char::to_lowercase)
            .cmp(y.chars().flat_map(char::to_lowercase)),
    }
}

/// Splits a string into alternating digit and non-digit runs
struct Chunks<'a> {
    rest: &'a str,
}

impl<'a> Chunks<'a> {
    const fn new(s: &'a str) -> Self {
        Self { rest: s }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let first = self.rest.chars().next()?;
        let digits = first.is_ascii_digit();
        let end = self
            .rest
            .find(|c: char| c.is_ascii_digit() != digits)
            .unwrap_or(self.rest.len());
        let (chunk, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(chunk)
    }
}
