//! Command helper utilities
//!
//! Merges flags, environment and the configuration file into a resolver
//! and a request. Precedence: flag/env > config file > built-in default.

use std::time::Duration;

use tracing::debug;

use crate::cli::{GlobalArgs, RequestArgs};
use crate::config::SetupConfig;
use crate::domain::PackageName;
use crate::error::Result;
use crate::host::{self, HostTarget, OsFamily};
use crate::input::{parse_bridge_input, parse_platform_input};
use crate::matrix::{DEFAULT_MATRIX_URL, FileMatrixSource, HttpMatrixSource, MatrixSource};
use crate::progress;
use crate::resolver::{DeriveOptions, ResolveRequest, Resolver};

/// Everything a command needs to run one resolution
pub struct Prepared {
    pub resolver: Resolver,
    pub request: ResolveRequest,
}

impl Prepared {
    /// Run the resolution, with a spinner while the matrix is read
    pub fn resolve(&self) -> Result<Vec<PackageName>> {
        let message = format!(
            "Fetching compatibility matrix from {}",
            self.resolver.source_description()
        );
        debug!(options = ?self.resolver.options(), "derivation options");
        progress::spin_while(message, || self.resolver.resolve(&self.request))
    }
}

/// Build the resolver and request from CLI input and configuration
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded, the platform
/// list is empty, or the host codename cannot be determined.
pub fn prepare(globals: &GlobalArgs, request_args: &RequestArgs) -> Result<Prepared> {
    let config = SetupConfig::load(globals.config.as_deref())?;
    prepare_with_config(globals, request_args, &config, host::detect_codename)
}

fn prepare_with_config(
    globals: &GlobalArgs,
    request_args: &RequestArgs,
    config: &SetupConfig,
    detect_codename: impl FnOnce() -> Result<String>,
) -> Result<Prepared> {
    let platforms = parse_platform_input(
        request_args
            .platform
            .as_deref()
            .or(config.platform_distros.as_deref()),
    )?;
    let bridges = parse_bridge_input(
        request_args
            .bridge
            .as_deref()
            .or(config.bridge_distros.as_deref()),
    );

    let family = globals
        .host_family
        .or(config.host_family)
        .unwrap_or_else(OsFamily::current);
    let codename = match globals
        .host_codename
        .clone()
        .or_else(|| config.host_codename.clone())
    {
        Some(codename) => Some(codename),
        None if family.matrix_distribution().is_some() => Some(detect_codename()?),
        None => None,
    };
    debug!(%family, codename = ?codename, "host target");

    let options = DeriveOptions {
        naming: config.naming.clone().unwrap_or_default(),
        wrapper_duplicates: request_args
            .wrapper_duplicates
            .or(config.wrapper_duplicates)
            .unwrap_or_default(),
    };

    let resolver = Resolver::new(matrix_source(globals, config)).with_options(options);
    let request = ResolveRequest {
        platforms,
        bridges,
        host: HostTarget::new(family, codename),
    };

    Ok(Prepared { resolver, request })
}

fn matrix_source(globals: &GlobalArgs, config: &SetupConfig) -> Box<dyn MatrixSource> {
    if let Some(path) = &globals.matrix_file {
        return Box::new(FileMatrixSource::new(path));
    }

    let url = globals
        .matrix_url
        .clone()
        .or_else(|| config.matrix_url.clone())
        .unwrap_or_else(|| DEFAULT_MATRIX_URL.to_string());
    let mut source = HttpMatrixSource::new(url);
    if let Some(secs) = config.fetch_timeout_secs {
        source = source.with_timeout(Duration::from_secs(secs));
    }
    Box::new(source)
}
