//! Data models for `GauchoClass`

pub mod course;
pub mod course_option;

pub use course::{derive_course_number, CourseRecord, Grade, GradeCounts};
pub use course_option::CourseOption;
