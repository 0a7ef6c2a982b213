//! Matrix retrieval
//!
//! Every call to [`load_matrix`] reads the source afresh. There is no cache
//! and no fallback: if the source cannot be read the resolution fails.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, info};

use super::Matrix;
use crate::domain::PlatformName;
use crate::error::{Result, SetupError};

/// Somewhere a matrix document can be read from
pub trait MatrixSource {
    /// Human-readable origin, used in logs and errors
    fn describe(&self) -> String;

    /// Read the raw document
    fn fetch(&self) -> Result<String>;
}

/// Fetch the matrix over HTTP(S)
#[derive(Debug, Clone)]
pub struct HttpMatrixSource {
    url: String,
    timeout: Option<Duration>,
}

impl HttpMatrixSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn unavailable(&self, reason: impl ToString) -> SetupError {
        SetupError::MatrixUnavailable {
            source_desc: self.url.clone(),
            reason: reason.to_string(),
        }
    }
}

impl MatrixSource for HttpMatrixSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self) -> Result<String> {
        let mut builder = reqwest::blocking::Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| self.unavailable(e))?;

        debug!(url = %self.url, "fetching compatibility matrix");
        let body = client
            .get(&self.url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .and_then(reqwest::blocking::Response::text)
            .map_err(|e| self.unavailable(e))?;
        info!(url = %self.url, bytes = body.len(), "fetched compatibility matrix");

        Ok(body)
    }
}

/// Read the matrix from a local file chosen by the operator
#[derive(Debug, Clone)]
pub struct FileMatrixSource {
    path: PathBuf,
}

impl FileMatrixSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MatrixSource for FileMatrixSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<String> {
        debug!(path = %self.path.display(), "reading compatibility matrix");
        fs::read_to_string(&self.path).map_err(|e| SetupError::MatrixUnavailable {
            source_desc: self.describe(),
            reason: e.to_string(),
        })
    }
}

/// Fetch and decode the matrix from `source`
///
/// # Errors
///
/// Returns `SetupError::MatrixUnavailable` if the source cannot be read or
/// the document does not decode.
pub fn load_matrix(source: &dyn MatrixSource) -> Result<Matrix> {
    let content = source.fetch()?;
    let matrix = Matrix::from_yaml(&content, &source.describe())?;
    debug!(
        platforms = ?matrix.platform_names().map(PlatformName::as_str).collect::<Vec<_>>(),
        "decoded compatibility matrix"
    );
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::fixtures::MATRIX_YAML;
    use tempfile::TempDir;

    #[test]
    fn test_file_source_loads_matrix() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("matrix.yaml");
        std::fs::write(&path, MATRIX_YAML).unwrap();

        let matrix = load_matrix(&FileMatrixSource::new(&path)).unwrap();
        assert!(matrix.contains(&PlatformName::new("harmonic")));
    }

    #[test]
    fn test_file_source_missing_file() {
        let temp = TempDir::new().unwrap();
        let source = FileMatrixSource::new(temp.path().join("missing.yaml"));

        let err = load_matrix(&source).unwrap_err();
        assert!(matches!(err, SetupError::MatrixUnavailable { .. }));
        assert!(err.to_string().contains("missing.yaml"));
    }

    #[test]
    fn test_file_source_bad_schema() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("matrix.yaml");
        std::fs::write(&path, "collections:\n  - label: fortress\npackaging_configs: []\n")
            .unwrap();

        let err = load_matrix(&FileMatrixSource::new(&path)).unwrap_err();
        assert!(matches!(err, SetupError::MatrixUnavailable { .. }));
    }

    #[test]
    fn test_http_source_unreachable() {
        // Port 9 on localhost is the discard service and is closed on test hosts
        let source = HttpMatrixSource::new("http://127.0.0.1:9/matrix.yaml")
            .with_timeout(Duration::from_secs(2));

        let err = load_matrix(&source).unwrap_err();
        assert!(matches!(err, SetupError::MatrixUnavailable { .. }));
        assert!(err.to_string().contains("127.0.0.1:9"));
    }
}
