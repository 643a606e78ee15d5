//! Dataset loading: fetch the CSV text and parse it into course records

pub mod cell;
pub mod csv_parser;
pub mod source;

pub use csv_parser::parse_dataset;
#[cfg(not(target_arch = "wasm32"))]
pub use source::HttpSource;
pub use source::{source_for, DatasetSource, FileSource, InlineSource};

use crate::core::error::LoadError;
use crate::core::models::CourseRecord;
use crate::{error, info};

/// Fetch and parse a dataset
///
/// Nothing is cached; each call fetches the source again.
///
/// # Errors
/// Returns [`LoadError::Unreachable`] when the source cannot be fetched and
/// [`LoadError::Malformed`] when the text is not a table with a usable header.
pub fn load(source: &dyn DatasetSource) -> Result<Vec<CourseRecord>, LoadError> {
    let location = source.location();
    info!("Loading course dataset from {location}");

    let bytes = source.fetch().inspect_err(|e| error!("{e}"))?;
    let records = parse_dataset(&bytes).inspect_err(|e| error!("{location}: {e}"))?;

    info!("Loaded {} courses from {location}", records.len());
    Ok(records)
}
