//! Host operating system description
//!
//! - [`codename`]: reading the release codename of an Ubuntu host
//! - [`package_manager`]: assembling the native install command

use std::fmt;

use clap::ValueEnum;
use serde::Deserialize;

pub mod codename;
pub mod package_manager;

pub use codename::detect_codename;
pub use package_manager::PackageManager;

/// Supported operating system families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OsFamily {
    Ubuntu,
    Macos,
    Windows,
}

impl OsFamily {
    /// Family of the operating system this binary was built for
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            OsFamily::Macos
        } else if cfg!(target_os = "windows") {
            OsFamily::Windows
        } else {
            OsFamily::Ubuntu
        }
    }

    /// `system.distribution` value used by the matrix for this family
    ///
    /// Families without one have no codename-specific packaging, so host
    /// compatibility is not checked for them.
    pub fn matrix_distribution(self) -> Option<&'static str> {
        match self {
            OsFamily::Ubuntu => Some("ubuntu"),
            OsFamily::Macos | OsFamily::Windows => None,
        }
    }

    pub fn package_manager(self) -> PackageManager {
        match self {
            OsFamily::Ubuntu => PackageManager::Apt,
            OsFamily::Macos => PackageManager::Brew,
            OsFamily::Windows => PackageManager::Conda,
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OsFamily::Ubuntu => "ubuntu",
            OsFamily::Macos => "macos",
            OsFamily::Windows => "windows",
        };
        f.write_str(name)
    }
}

/// The machine packages are being resolved for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostTarget {
    pub family: OsFamily,
    pub codename: Option<String>,
}

impl HostTarget {
    pub fn new(family: OsFamily, codename: Option<String>) -> Self {
        Self { family, codename }
    }
}
