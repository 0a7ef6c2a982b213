//! Native package manager invocations
//!
//! Commands are only assembled here. Running them is left to the caller.

use crate::domain::PackageName;

/// Package manager driving installs on a host family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Apt,
    Brew,
    Conda,
}

impl PackageManager {
    /// Full argv that installs `packages`, non-interactively
    pub fn install_command(self, packages: &[PackageName]) -> Vec<String> {
        let prefix: &[&str] = match self {
            PackageManager::Apt => &[
                "sudo",
                "DEBIAN_FRONTEND=noninteractive",
                "apt-get",
                "install",
                "--no-install-recommends",
                "--quiet",
                "--yes",
            ],
            PackageManager::Brew => &["brew", "install"],
            PackageManager::Conda => &["conda", "install", "--channel", "conda-forge"],
        };

        prefix
            .iter()
            .map(ToString::to_string)
            .chain(packages.iter().map(|p| p.as_str().to_string()))
            .collect()
    }

    pub fn name(self) -> &'static str {
        match self {
            PackageManager::Apt => "apt",
            PackageManager::Brew => "brew",
            PackageManager::Conda => "conda",
        }
    }
}
