//! Validation of requested distributions
//!
//! This module provides:
//! - Platform name checks against the matrix collections
//! - Bridge name checks against the built-in bridge table
//! - Host codename checks against each platform's packaging configs
//!
//! Each check stops at the first offending name.

use tracing::debug;

use crate::domain::{BridgeName, BridgeTable, PlatformName};
use crate::error::{Result, SetupError};
use crate::matrix::Matrix;

/// Check every platform name is a matrix collection
///
/// # Errors
///
/// Returns `SetupError::UnknownPlatformDistro` for the first unknown name.
pub fn validate_platforms(matrix: &Matrix, platforms: &[PlatformName]) -> Result<()> {
    if let Some(unknown) = platforms.iter().find(|p| !matrix.contains(p)) {
        return Err(SetupError::UnknownPlatformDistro {
            name: unknown.to_string(),
        });
    }
    debug!(count = platforms.len(), "platform distributions valid");
    Ok(())
}

/// Check every bridge name is in the bridge table; empty input is valid
///
/// # Errors
///
/// Returns `SetupError::UnknownBridgeDistro` for the first unknown name.
pub fn validate_bridges(table: &BridgeTable, bridges: &[BridgeName]) -> Result<()> {
    if let Some(unknown) = bridges.iter().find(|b| !table.contains(b)) {
        debug!(known = ?table.names().collect::<Vec<_>>(), "unknown bridge distribution");
        return Err(SetupError::UnknownBridgeDistro {
            name: unknown.to_string(),
        });
    }
    debug!(count = bridges.len(), "bridge distributions valid");
    Ok(())
}

/// Check the host codename is a packaging target of every platform
///
/// `distribution` is the matrix family key of the host (e.g. "ubuntu").
///
/// # Errors
///
/// Returns `SetupError::IncompatibleHostCombination` for the first platform
/// not packaged for `codename`.
pub fn check_host_compatibility(
    matrix: &Matrix,
    platforms: &[PlatformName],
    distribution: &str,
    codename: &str,
) -> Result<()> {
    for platform in platforms {
        let compatible = matrix.compatible_codenames(platform, distribution);
        if !compatible.contains(codename) {
            return Err(SetupError::IncompatibleHostCombination {
                platform: platform.to_string(),
                host_codename: codename.to_string(),
            });
        }
    }
    debug!(distribution, codename, "host compatible with all platforms");
    Ok(())
}
