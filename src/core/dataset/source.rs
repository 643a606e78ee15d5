//! Dataset sources
//!
//! A source only fetches raw bytes; tokenizing is the parser's job. Fetch
//! failures are always reported as [`LoadError::Unreachable`].

use crate::core::error::LoadError;
use std::fs;
use std::path::PathBuf;

/// Something the dataset text can be fetched from
pub trait DatasetSource {
    /// Human-readable location for logs and errors
    fn location(&self) -> String;

    /// Fetch the raw dataset bytes
    ///
    /// # Errors
    /// Returns [`LoadError::Unreachable`] when the resource cannot be read
    fn fetch(&self) -> Result<Vec<u8>, LoadError>;
}

/// Dataset stored on the local filesystem
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source reading from `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetSource for FileSource {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        fs::read(&self.path).map_err(|e| LoadError::unreachable(self.location(), e))
    }
}

/// Dataset served over HTTP(S)
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
}

#[cfg(not(target_arch = "wasm32"))]
impl HttpSource {
    /// Create a source fetching `url`
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl DatasetSource for HttpSource {
    fn location(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        let response = reqwest::blocking::get(&self.url)
            .map_err(|e| LoadError::unreachable(&self.url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::unreachable(
                &self.url,
                format!("HTTP status {status}"),
            ));
        }

        response
            .bytes()
            .map(|body| body.to_vec())
            .map_err(|e| LoadError::unreachable(&self.url, e))
    }
}

/// Dataset text already held in memory
#[derive(Debug, Clone)]
pub struct InlineSource {
    name: String,
    bytes: Vec<u8>,
}

impl InlineSource {
    /// Wrap in-memory dataset bytes under a display name
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

impl DatasetSource for InlineSource {
    fn location(&self) -> String {
        self.name.clone()
    }

    fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        Ok(self.bytes.clone())
    }
}

/// Pick a source for a configured location
///
/// `http://` and `https://` locations are fetched over the network; anything
/// else is treated as a filesystem path.
#[must_use]
pub fn source_for(location: &str) -> Box<dyn DatasetSource> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let lower = location.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return Box::new(HttpSource::new(location));
        }
    }
    Box::new(FileSource::new(location))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_for_picks_http() {
        assert_eq!(
            source_for("https://example.com/courses.csv").location(),
            "https://example.com/courses.csv"
        );
        assert_eq!(source_for("data/courses.csv").location(), "data/courses.csv");
    }

    #[test]
    fn test_missing_file_is_unreachable() {
        let err = FileSource::new("samples/does-not-exist.csv")
            .fetch()
            .unwrap_err();
        assert!(err.is_unreachable());
    }

    #[test]
    fn test_inline_source_returns_bytes() {
        let source = InlineSource::new("inline", "dept,course\n");
        assert_eq!(source.fetch().unwrap(), b"dept,course\n".to_vec());
        assert_eq!(source.location(), "inline");
    }
}
