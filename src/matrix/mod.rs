//! Platform compatibility matrix
//!
//! The matrix is an externally published YAML document listing every
//! platform collection and the packaging configs it is built for:
//!
//! ```yaml
//! collections:
//!   - name: fortress
//!     packaging:
//!       configs: [focal, jammy]
//! packaging_configs:
//!   - name: jammy
//!     system:
//!       distribution: ubuntu
//!       version: jammy
//! ```
//!
//! Fields not listed above are ignored. A decoded [`Matrix`] is immutable
//! and lives for a single resolution call; see [`source`] for retrieval.

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

use crate::domain::PlatformName;
use crate::error::{Result, SetupError};

pub mod source;

pub use source::{FileMatrixSource, HttpMatrixSource, MatrixSource, load_matrix};

/// Default location of the published matrix
pub const DEFAULT_MATRIX_URL: &str = "https://raw.githubusercontent.com/gazebo-tooling/release-tools/master/jenkins-scripts/dsl/gz-collections.yaml";

#[derive(Debug, Deserialize)]
struct MatrixDocument {
    collections: Vec<CollectionEntry>,
    packaging_configs: Vec<PackagingConfig>,
}

#[derive(Debug, Deserialize)]
struct CollectionEntry {
    name: String,
    #[serde(default)]
    packaging: CollectionPackaging,
}

#[derive(Debug, Default, Deserialize)]
struct CollectionPackaging {
    #[serde(default)]
    configs: Vec<String>,
}

/// A named packaging target from the `packaging_configs` table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackagingConfig {
    pub name: String,
    pub system: TargetSystem,
}

/// Operating system a packaging config builds for
///
/// Homebrew-style configs carry no distribution and never match a host family.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TargetSystem {
    #[serde(default)]
    pub distribution: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

/// A platform release as described by the matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformDistro {
    pub name: PlatformName,
    pub packaging_configs: Vec<String>,
}

/// Decoded compatibility matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    collections: BTreeMap<PlatformName, PlatformDistro>,
    packaging_configs: Vec<PackagingConfig>,
}

impl Matrix {
    /// Decode a matrix document
    ///
    /// `origin` only labels the error when decoding fails.
    ///
    /// # Errors
    ///
    /// Returns `SetupError::MatrixUnavailable` for malformed YAML or a
    /// document missing either table.
    pub fn from_yaml(content: &str, origin: &str) -> Result<Self> {
        let document: MatrixDocument =
            serde_yaml::from_str(content).map_err(|e| SetupError::MatrixUnavailable {
                source_desc: origin.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self::from_document(document))
    }

    fn from_document(document: MatrixDocument) -> Self {
        let mut collections = BTreeMap::new();
        for entry in document.collections {
            let name = PlatformName::new(entry.name);
            collections
                .entry(name.clone())
                .or_insert_with(|| PlatformDistro {
                    name,
                    packaging_configs: entry.packaging.configs,
                });
        }

        Self {
            collections,
            packaging_configs: document.packaging_configs,
        }
    }

    pub fn contains(&self, name: &PlatformName) -> bool {
        self.collections.contains_key(name)
    }

    pub fn platform(&self, name: &PlatformName) -> Option<&PlatformDistro> {
        self.collections.get(name)
    }

    pub fn platform_names(&self) -> impl Iterator<Item = &PlatformName> {
        self.collections.values().map(|platform| &platform.name)
    }

    /// OS versions of `distribution` that `name` is packaged for
    ///
    /// Empty when the platform is unknown or has no config for that family.
    pub fn compatible_codenames(&self, name: &PlatformName, distribution: &str) -> BTreeSet<&str> {
        let Some(platform) = self.platform(name) else {
            return BTreeSet::new();
        };

        self.packaging_configs
            .iter()
            .filter(|config| platform.packaging_configs.contains(&config.name))
            .filter(|config| config.system.distribution.as_deref() == Some(distribution))
            .filter_map(|config| config.system.version.as_deref())
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    /// Small matrix used across resolver tests
    pub const MATRIX_YAML: &str = r"
collections:
  - name: citadel
    packaging:
      configs: [focal, homebrew]
  - name: fortress
    packaging:
      configs: [focal, jammy, homebrew]
  - name: harmonic
    packaging:
      configs: [jammy, noble]
  - name: ionic
    packaging:
      configs: [noble]
  - name: jetty
    packaging:
      configs: [noble]
packaging_configs:
  - name: focal
    system:
      so: linux
      distribution: ubuntu
      version: focal
      arch: amd64
  - name: jammy
    system:
      so: linux
      distribution: ubuntu
      version: jammy
      arch: amd64
  - name: noble
    system:
      so: linux
      distribution: ubuntu
      version: noble
      arch: amd64
  - name: homebrew
    system:
      so: darwin
";

    pub fn matrix() -> super::Matrix {
        super::Matrix::from_yaml(MATRIX_YAML, "fixture").unwrap()
    }
}
