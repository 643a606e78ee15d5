//! CLI argument definitions for `GauchoClass`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use gaucho_class::config::ConfigOverrides;
use gaucho_class::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `logger::Level`
/// for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&Level::from(*self), f)
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    Get {
        /// Optional configuration key (`level`, `file`, `verbose`, `source`, `reports_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// List every department in the dataset.
    Departments {
        /// Print JSON instead of one department per line
        #[arg(long)]
        json: bool,
    },
    /// List the course numbers offered by a department.
    Courses {
        /// Department code (e.g., CMPSC)
        #[arg(value_name = "DEPT")]
        department: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show a course with its grade distribution.
    Show {
        /// Department code (e.g., CMPSC)
        #[arg(value_name = "DEPT")]
        department: String,

        /// Course number without the department (e.g., 130A)
        #[arg(value_name = "NUMBER")]
        number: String,

        /// Also list every offering sharing the course code
        #[arg(long)]
        all_offerings: bool,

        /// Print the record and grade series as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write a report for a course.
    Report {
        /// Department code (e.g., CMPSC)
        #[arg(value_name = "DEPT")]
        department: String,

        /// Course number without the department (e.g., 130A)
        #[arg(value_name = "NUMBER")]
        number: String,

        /// Report format: markdown (md), html, csv, or json
        #[arg(short, long, value_name = "FORMAT", default_value = "html")]
        format: String,

        /// Output file path (defaults to `<reports_dir>/<DEPT>_<NUMBER>.<ext>`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "gauchoclass",
    about = "Browse course listings and historical grade distributions",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Load courses from this file or URL for this run only
    #[arg(long, value_name = "PATH|URL")]
    pub dataset: Option<String>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config dataset location
    #[arg(long = "config-dataset", value_name = "PATH|URL")]
    pub config_dataset: Option<String>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--reports-dir`) take precedence over long-form
    /// flags (e.g., `--config-reports-dir`). `--dataset` wins over
    /// `--config-dataset`.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            source: self
                .dataset
                .clone()
                .or_else(|| self.config_dataset.clone()),
            reports_dir: self
                .reports_dir
                .as_ref()
                .or(self.config_reports_dir.as_ref())
                .map(|p| p.to_string_lossy().to_string()),
        }
    }

    /// Whether the command prints JSON on stdout
    pub const fn wants_json(&self) -> bool {
        match self.command {
            Command::Departments { json }
            | Command::Courses { json, .. }
            | Command::Show { json, .. } => json,
            Command::Config { .. } | Command::Report { .. } => false,
        }
    }
}
