//! Report command handler
//!
//! Writes a course report in Markdown, HTML, CSV or JSON.

use gaucho_class::config::Config;
use gaucho_class::core::report::{ReportContext, ReportFormat};
use gaucho_class::{error, info, Catalog};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Run the report command.
///
/// Returns `false` if the report could not be written.
pub fn run(
    catalog: &Catalog,
    department: &str,
    number: &str,
    format_str: &str,
    output_file: Option<&Path>,
    config: &Config,
) -> bool {
    match generate_report(catalog, department, number, format_str, output_file, config) {
        Ok(path) => {
            println!("✓ Report generated: {}", path.display());
            true
        }
        Err(err) => {
            error!("Report generation failed for {department} {number}: {err}");
            eprintln!("✗ {err}");
            false
        }
    }
}

fn generate_report(
    catalog: &Catalog,
    department: &str,
    number: &str,
    format_str: &str,
    output_file: Option<&Path>,
    config: &Config,
) -> Result<PathBuf, String> {
    let format = ReportFormat::from_str(format_str)?;
    let ctx = ReportContext::from_catalog(catalog, department, number)
        .ok_or_else(|| format!("Course not found: {department} {number}"))?;

    let output_path = output_file.map_or_else(
        || default_output_path(&config.reports_dir(), &ctx.file_stem(), format),
        Path::to_path_buf,
    );

    info!("Generating {format} report at {}", output_path.display());
    format
        .reporter()
        .generate(&ctx, &output_path)
        .map_err(|e| format!("Failed to write {}: {e}", output_path.display()))?;

    Ok(output_path)
}

/// `<reports_dir>/<stem>.<ext>`
fn default_output_path(reports_dir: &Path, stem: &str, format: ReportFormat) -> PathBuf {
    reports_dir.join(format!("{stem}.{}", format.extension()))
}
