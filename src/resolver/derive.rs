//! Package name derivation
//!
//! Turns validated platform and bridge names into the ordered package list.
//! Bridges form the outer loop and platforms the inner loop; for each pair
//! the standalone platform package (if any) comes before the wrapper.
//!
//! Standalone platform packages are emitted once per call. Wrapper packages
//! are emitted for every pair unless [`WrapperDuplicates::Collapse`] is set.

use std::collections::HashSet;

use serde::Deserialize;
use tracing::debug;

use crate::domain::{BridgeName, BridgeTable, PackageName, PlatformName};
use crate::error::{Result, SetupError};
use crate::matrix::Matrix;

/// What to do when the same wrapper package is derived more than once
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WrapperDuplicates {
    /// Emit every occurrence
    #[default]
    Keep,
    /// Emit only the first occurrence
    Collapse,
}

/// Templates for package identifiers
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackageNaming {
    pub platform_prefix: String,
    pub bridge_prefix: String,
    pub bridge_suffix: String,
}

impl Default for PackageNaming {
    fn default() -> Self {
        Self {
            platform_prefix: "platform-".to_string(),
            bridge_prefix: "bridge-".to_string(),
            bridge_suffix: "-bridge".to_string(),
        }
    }
}

impl PackageNaming {
    /// `platform-<p>`
    pub fn standalone(&self, platform: &PlatformName) -> PackageName {
        PackageName::new(format!("{}{}", self.platform_prefix, platform.as_str()))
    }

    /// `bridge-<b>-bridge`
    pub fn official_wrapper(&self, bridge: &BridgeName) -> PackageName {
        PackageName::new(format!(
            "{}{}{}",
            self.bridge_prefix,
            bridge.as_str(),
            self.bridge_suffix
        ))
    }

    /// `bridge-<b>-bridge<p>`
    pub fn unofficial_wrapper(&self, bridge: &BridgeName, platform: &PlatformName) -> PackageName {
        PackageName::new(format!(
            "{}{}{}{}",
            self.bridge_prefix,
            bridge.as_str(),
            self.bridge_suffix,
            platform.as_str()
        ))
    }
}

/// Knobs for [`derive_packages`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeriveOptions {
    pub naming: PackageNaming,
    pub wrapper_duplicates: WrapperDuplicates,
}

/// Derive the package list for `platforms` and `bridges`
///
/// # Errors
///
/// - `SetupError::IncompatibleBridgeCombination` when a bridge has no
///   wrapper for a requested platform
/// - `SetupError::UnknownPlatformDistro` / `SetupError::UnknownBridgeDistro`
///   when a name is missing from the matrix or bridge table
pub fn derive_packages(
    matrix: &Matrix,
    table: &BridgeTable,
    platforms: &[PlatformName],
    bridges: &[BridgeName],
    options: &DeriveOptions,
) -> Result<Vec<PackageName>> {
    if let Some(unknown) = platforms.iter().find(|p| !matrix.contains(p)) {
        return Err(SetupError::UnknownPlatformDistro {
            name: unknown.to_string(),
        });
    }

    let naming = &options.naming;
    if bridges.is_empty() {
        return Ok(platforms.iter().map(|p| naming.standalone(p)).collect());
    }

    let mut packages = Vec::new();
    let mut standalone_emitted = HashSet::new();
    let mut wrappers_emitted = HashSet::new();

    for bridge_name in bridges {
        let bridge = table
            .get(bridge_name)
            .ok_or_else(|| SetupError::UnknownBridgeDistro {
                name: bridge_name.to_string(),
            })?;

        for platform in platforms {
            if !bridge.vendor_packages_available {
                let standalone = naming.standalone(platform);
                if standalone_emitted.insert(standalone.clone()) {
                    packages.push(standalone);
                }
            }

            let wrapper = if bridge.wraps_officially(platform) {
                naming.official_wrapper(bridge_name)
            } else if bridge.wraps_unofficially(platform) {
                naming.unofficial_wrapper(bridge_name, platform)
            } else {
                return Err(SetupError::IncompatibleBridgeCombination {
                    bridge: bridge_name.to_string(),
                    platform: platform.to_string(),
                });
            };

            let collapse = options.wrapper_duplicates == WrapperDuplicates::Collapse;
            if !collapse || wrappers_emitted.insert(wrapper.clone()) {
                packages.push(wrapper);
            }
        }
    }

    debug!(count = packages.len(), "derived package names");
    Ok(packages)
}
