//! Listing commands: departments and course options

use gaucho_class::core::models::CourseOption;
use gaucho_class::{info, Catalog};

/// Print every department, one per line or as a JSON array
pub fn departments(catalog: &Catalog, json: bool) {
    let departments = catalog.departments();
    info!("{} departments", departments.len());

    if json {
        print_json(&departments);
        return;
    }
    for department in &departments {
        println!("{department}");
    }
}

/// Print the course options of a department
pub fn courses(catalog: &Catalog, department: &str, json: bool) {
    let options = catalog.course_options(department);
    info!("{} course options in {department}", options.len());

    if json {
        print_json(&options);
        return;
    }
    if options.is_empty() {
        println!("No courses found for department '{department}'");
        return;
    }
    print!("{}", format_options(&options));
}

/// Two aligned columns: course number and title
fn format_options(options: &[CourseOption]) -> String {
    let width = options.iter().map(|o| o.code.len()).max().unwrap_or(0);
    options
        .iter()
        .map(|o| format!("{:<width$}  {}\n", o.code, o.title))
        .collect()
}

/// Print a value as pretty JSON, reporting serialization failures on stderr
pub fn print_json<T: serde::Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => eprintln!("✗ Failed to serialize output: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_options_aligns_codes() {
        let options = vec![
            CourseOption::new("8".to_string(), "Intro".to_string()),
            CourseOption::new("130A".to_string(), "Data Structures".to_string()),
        ];
        assert_eq!(
            format_options(&options),
            "8     Intro\n130A  Data Structures\n"
        );
    }
}
