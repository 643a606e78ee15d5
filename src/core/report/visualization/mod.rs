//! Chart generation for course reports

pub mod bar_chart;

pub use bar_chart::{BarChart, SvgBar, SvgLayout};
