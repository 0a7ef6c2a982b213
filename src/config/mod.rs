//! Configuration file handling
//!
//! An optional `setup-sim.yaml` supplies defaults for everything the CLI
//! accepts. Flags and environment variables take precedence over the file.
//!
//! ```yaml
//! platform_distros: "fortress harmonic"
//! bridge_distros: "humble"
//! host_family: ubuntu
//! wrapper_duplicates: keep
//! naming:
//!   platform_prefix: "gz-"
//!   bridge_prefix: "ros-"
//!   bridge_suffix: "-ros-gz"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, SetupError};
use crate::host::OsFamily;
use crate::resolver::{PackageNaming, WrapperDuplicates};

/// File name looked up in the user config directory
pub const CONFIG_FILE_NAME: &str = "setup-sim.yaml";

/// Contents of `setup-sim.yaml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SetupConfig {
    pub platform_distros: Option<String>,
    pub bridge_distros: Option<String>,
    pub matrix_url: Option<String>,
    pub host_family: Option<OsFamily>,
    pub host_codename: Option<String>,
    pub wrapper_duplicates: Option<WrapperDuplicates>,
    pub fetch_timeout_secs: Option<u64>,
    pub naming: Option<PackageNaming>,
}

impl SetupConfig {
    pub fn from_yaml(content: &str, path: &str) -> Result<Self> {
        let config: Self =
            serde_yaml::from_str(content).map_err(|e| SetupError::ConfigParseFailed {
                path: path.to_string(),
                reason: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.fetch_timeout_secs == Some(0) {
            return Err(SetupError::ConfigInvalid {
                message: "fetch_timeout_secs must be greater than zero".to_string(),
            });
        }
        if let Some(naming) = &self.naming {
            if naming.platform_prefix.is_empty() || naming.bridge_prefix.is_empty() {
                return Err(SetupError::ConfigInvalid {
                    message: "naming prefixes must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Load configuration
    ///
    /// An explicit path must exist. Without one, the default location is
    /// used if present, otherwise an empty configuration is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_file(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::load_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn load_file(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading configuration");
        let content = fs::read_to_string(path).map_err(|e| SetupError::ConfigReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_yaml(&content, &path.display().to_string())
    }
}

/// `<config_dir>/setup-sim/setup-sim.yaml`, if a config dir exists
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("setup-sim").join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_file() {
        let config = SetupConfig::from_yaml("{}", "test.yaml").unwrap();
        assert_eq!(config, SetupConfig::default());
    }

    #[test]
    fn test_full_file() {
        let yaml = r#"
platform_distros: "fortress harmonic"
bridge_distros: humble
matrix_url: https://example.com/matrix.yaml
host_family: ubuntu
host_codename: jammy
wrapper_duplicates: collapse
fetch_timeout_secs: 30
naming:
  platform_prefix: "gz-"
  bridge_prefix: "ros-"
  bridge_suffix: "-ros-gz"
"#;
        let config = SetupConfig::from_yaml(yaml, "test.yaml").unwrap();
        assert_eq!(config.platform_distros.as_deref(), Some("fortress harmonic"));
        assert_eq!(config.bridge_distros.as_deref(), Some("humble"));
        assert_eq!(config.host_family, Some(OsFamily::Ubuntu));
        assert_eq!(config.wrapper_duplicates, Some(WrapperDuplicates::Collapse));
        assert_eq!(config.fetch_timeout_secs, Some(30));
        assert_eq!(config.naming.unwrap().platform_prefix, "gz-");
    }

    #[test]
    fn test_partial_naming_keeps_defaults() {
        let config =
            SetupConfig::from_yaml("naming:\n  platform_prefix: gz-\n", "test.yaml").unwrap();
        let naming = config.naming.unwrap();
        assert_eq!(naming.platform_prefix, "gz-");
        assert_eq!(naming.bridge_prefix, PackageNaming::default().bridge_prefix);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = SetupConfig::from_yaml("platforms: fortress\n", "test.yaml").unwrap_err();
        assert!(matches!(err, SetupError::ConfigParseFailed { .. }));
        assert!(err.to_string().contains("test.yaml"));
    }

    #[test]
    fn test_unknown_wrapper_policy_rejected() {
        let err = SetupConfig::from_yaml("wrapper_duplicates: merge\n", "test.yaml").unwrap_err();
        assert!(matches!(err, SetupError::ConfigParseFailed { .. }));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = SetupConfig::from_yaml("fetch_timeout_secs: 0\n", "test.yaml").unwrap_err();
        assert!(matches!(err, SetupError::ConfigInvalid { .. }));
    }

    #[test]
    fn test_load_explicit_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "platform_distros: ionic\n").unwrap();

        let config = SetupConfig::load(Some(&path)).unwrap();
        assert_eq!(config.platform_distros.as_deref(), Some("ionic"));
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let temp = TempDir::new().unwrap();
        let err = SetupConfig::load(Some(&temp.path().join("nope.yaml"))).unwrap_err();
        assert!(matches!(err, SetupError::ConfigReadFailed { .. }));
    }
}
