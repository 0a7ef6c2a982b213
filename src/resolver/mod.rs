//! Compatibility resolution
//!
//! This module handles:
//! - Fetching the compatibility matrix once per resolution
//! - Validating requested platform and bridge names
//! - Checking the host is a packaging target for every platform
//! - Deriving the ordered package list
//!
//! Any failure aborts the whole resolution; there is no partial result.

use tracing::{debug, info};

use crate::domain::{BridgeName, BridgeTable, PackageName, PlatformName};
use crate::error::{Result, SetupError};
use crate::host::HostTarget;
use crate::matrix::{Matrix, MatrixSource, load_matrix};

pub mod derive;
pub mod validation;

pub use derive::{DeriveOptions, PackageNaming, WrapperDuplicates, derive_packages};

/// Names requested for one resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveRequest {
    pub platforms: Vec<PlatformName>,
    pub bridges: Vec<BridgeName>,
    pub host: HostTarget,
}

/// Resolves requested distributions into package names
pub struct Resolver {
    source: Box<dyn MatrixSource>,
    bridges: BridgeTable,
    options: DeriveOptions,
}

impl Resolver {
    pub fn new(source: Box<dyn MatrixSource>) -> Self {
        Self {
            source,
            bridges: BridgeTable::default(),
            options: DeriveOptions::default(),
        }
    }

    pub fn with_options(mut self, options: DeriveOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &DeriveOptions {
        &self.options
    }

    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    /// Fetch the matrix and resolve `request` against it
    ///
    /// # Errors
    ///
    /// Any error of the resolution taxonomy; see [`SetupError`].
    pub fn resolve(&self, request: &ResolveRequest) -> Result<Vec<PackageName>> {
        debug!(
            platforms = ?request.platforms,
            bridges = ?request.bridges,
            family = %request.host.family,
            "resolving packages"
        );
        let matrix = load_matrix(self.source.as_ref())?;
        self.resolve_with_matrix(&matrix, request)
    }

    /// Resolve `request` against an already fetched matrix
    ///
    /// # Errors
    ///
    /// Any error of the resolution taxonomy except `MatrixUnavailable`.
    pub fn resolve_with_matrix(
        &self,
        matrix: &Matrix,
        request: &ResolveRequest,
    ) -> Result<Vec<PackageName>> {
        validation::validate_platforms(matrix, &request.platforms)?;
        validation::validate_bridges(&self.bridges, &request.bridges)?;
        Self::check_host(matrix, request)?;

        let packages = derive_packages(
            matrix,
            &self.bridges,
            &request.platforms,
            &request.bridges,
            &self.options,
        )?;
        info!(count = packages.len(), "resolved packages");
        Ok(packages)
    }

    fn check_host(matrix: &Matrix, request: &ResolveRequest) -> Result<()> {
        let Some(distribution) = request.host.family.matrix_distribution() else {
            debug!(family = %request.host.family, "host family has no codenames, skipping host check");
            return Ok(());
        };

        let codename =
            request
                .host
                .codename
                .as_deref()
                .ok_or_else(|| SetupError::HostDetectionFailed {
                    reason: format!("no codename supplied for {} host", request.host.family),
                })?;

        validation::check_host_compatibility(matrix, &request.platforms, distribution, codename)
    }
}
