//! Error types and handling for setup-sim
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Resolution errors are terminal: nothing here is retried or downgraded
//! to a warning, the caller reports the message and aborts.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for setup-sim operations
#[derive(Error, Diagnostic, Debug)]
pub enum SetupError {
    // Input errors
    #[error("No platform distributions requested")]
    #[diagnostic(
        code(setup_sim::input::empty),
        help("Pass a whitespace-separated list, e.g. --platform \"fortress harmonic\"")
    )]
    EmptyInput,

    // Matrix errors
    #[error("Compatibility matrix unavailable from {source_desc}: {reason}")]
    #[diagnostic(
        code(setup_sim::matrix::unavailable),
        help("Check network access to the matrix URL, or point --matrix-file at a local copy")
    )]
    MatrixUnavailable { source_desc: String, reason: String },

    // Validation errors
    #[error("Unknown platform distribution: {name}")]
    #[diagnostic(
        code(setup_sim::platform::unknown),
        help("Platform names must appear in the collections of the compatibility matrix")
    )]
    UnknownPlatformDistro { name: String },

    #[error("Unknown bridge distribution: {name}")]
    #[diagnostic(
        code(setup_sim::bridge::unknown),
        help("Supported bridge distributions: humble, jazzy, kilted, rolling")
    )]
    UnknownBridgeDistro { name: String },

    #[error("Platform '{platform}' is not packaged for host '{host_codename}'")]
    #[diagnostic(code(setup_sim::host::incompatible))]
    IncompatibleHostCombination {
        platform: String,
        host_codename: String,
    },

    #[error("Bridge '{bridge}' has no package for platform '{platform}'")]
    #[diagnostic(
        code(setup_sim::bridge::incompatible),
        help("Pick a platform distribution that this bridge distribution wraps")
    )]
    IncompatibleBridgeCombination { bridge: String, platform: String },

    // Host errors
    #[error("Failed to detect host codename: {reason}")]
    #[diagnostic(
        code(setup_sim::host::detection_failed),
        help("Pass --host-codename or set SETUP_SIM_HOST_CODENAME")
    )]
    HostDetectionFailed { reason: String },

    // Configuration errors
    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(setup_sim::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(setup_sim::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(setup_sim::config::invalid))]
    ConfigInvalid { message: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(setup_sim::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for SetupError {
    fn from(err: std::io::Error) -> Self {
        SetupError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for SetupError {
    fn from(err: serde_yaml::Error) -> Self {
        SetupError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SetupError>;
