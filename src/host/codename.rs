//! Ubuntu codename detection
//!
//! Reads `/etc/lsb-release` directly because the `lsb_release` tool is not
//! installed on minimal images.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, SetupError};

const LSB_RELEASE_PATH: &str = "/etc/lsb-release";

/// Detect the codename of the running host (e.g. "jammy")
///
/// # Errors
///
/// Returns `SetupError::HostDetectionFailed` if the release file is missing
/// or has no `DISTRIB_CODENAME`.
pub fn detect_codename() -> Result<String> {
    detect_codename_from(Path::new(LSB_RELEASE_PATH))
}

fn detect_codename_from(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|e| SetupError::HostDetectionFailed {
        reason: format!("{}: {}", path.display(), e),
    })?;

    let codename =
        parse_lsb_release(&content).ok_or_else(|| SetupError::HostDetectionFailed {
            reason: format!("{}: no DISTRIB_CODENAME entry", path.display()),
        })?;
    debug!(codename = %codename, "detected host codename");
    Ok(codename)
}

/// Extract `DISTRIB_CODENAME` from lsb-release content
pub fn parse_lsb_release(content: &str) -> Option<String> {
    content
        .lines()
        .filter_map(|line| line.trim().split_once('='))
        .find(|(key, _)| key.trim() == "DISTRIB_CODENAME")
        .map(|(_, value)| value.trim().trim_matches('"').to_string())
        .filter(|value| !value.is_empty())
}
