//! Bridge distribution table
//!
//! Unlike platform distributions, bridge distributions are not fetched. The
//! table below is the built-in record of which platform releases each bridge
//! release ships a combined package for.

use super::names::{BridgeName, PlatformName};

/// A bridge framework release and the platform releases it wraps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeDistro {
    pub name: BridgeName,

    /// Platforms with a first-class combined package
    pub official_wrappers: Vec<PlatformName>,

    /// Platforms with a best-effort combined package, suffixed by platform name
    pub unofficial_wrappers: Vec<PlatformName>,

    /// When true the bridge package bundles the platform, so the standalone
    /// platform package must not be requested alongside it
    pub vendor_packages_available: bool,
}

impl BridgeDistro {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: BridgeName::new(name),
            official_wrappers: Vec::new(),
            unofficial_wrappers: Vec::new(),
            vendor_packages_available: false,
        }
    }

    pub fn with_official(mut self, platform: impl Into<String>) -> Self {
        self.official_wrappers.push(PlatformName::new(platform));
        self
    }

    pub fn with_unofficial(mut self, platform: impl Into<String>) -> Self {
        self.unofficial_wrappers.push(PlatformName::new(platform));
        self
    }

    pub fn vendoring(mut self) -> Self {
        self.vendor_packages_available = true;
        self
    }

    pub fn wraps_officially(&self, platform: &PlatformName) -> bool {
        self.official_wrappers.contains(platform)
    }

    pub fn wraps_unofficially(&self, platform: &PlatformName) -> bool {
        self.unofficial_wrappers.contains(platform)
    }
}

/// Lookup table of known bridge distributions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeTable {
    distros: Vec<BridgeDistro>,
}

impl BridgeTable {
    pub fn from_distros(distros: Vec<BridgeDistro>) -> Self {
        Self { distros }
    }

    pub fn get(&self, name: &BridgeName) -> Option<&BridgeDistro> {
        self.distros.iter().find(|d| &d.name == name)
    }

    pub fn contains(&self, name: &BridgeName) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &BridgeName> {
        self.distros.iter().map(|d| &d.name)
    }
}

impl Default for BridgeTable {
    fn default() -> Self {
        Self::from_distros(default_bridge_distros())
    }
}

/// Built-in bridge distributions
pub fn default_bridge_distros() -> Vec<BridgeDistro> {
    vec![
        BridgeDistro::new("humble")
            .with_official("fortress")
            .with_unofficial("harmonic"),
        BridgeDistro::new("jazzy").with_official("harmonic").vendoring(),
        BridgeDistro::new("kilted").with_official("ionic").vendoring(),
        BridgeDistro::new("rolling").with_official("jetty").vendoring(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_names() {
        let table = BridgeTable::default();
        let names: Vec<&str> = table.names().map(BridgeName::as_str).collect();
        assert_eq!(names, vec!["humble", "jazzy", "kilted", "rolling"]);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let table = BridgeTable::default();
        assert!(table.contains(&BridgeName::new("humble")));
        assert!(!table.contains(&BridgeName::new("Humble")));
        assert!(!table.contains(&BridgeName::new("noetic")));
    }

    #[test]
    fn test_humble_wrappers() {
        let table = BridgeTable::default();
        let humble = table.get(&BridgeName::new("humble")).unwrap();
        assert!(humble.wraps_officially(&PlatformName::new("fortress")));
        assert!(humble.wraps_unofficially(&PlatformName::new("harmonic")));
        assert!(!humble.vendor_packages_available);
    }

    #[test]
    fn test_rolling_has_no_fortress_wrapper() {
        let table = BridgeTable::default();
        let rolling = table.get(&BridgeName::new("rolling")).unwrap();
        let fortress = PlatformName::new("fortress");
        assert!(!rolling.wraps_officially(&fortress));
        assert!(!rolling.wraps_unofficially(&fortress));
        assert!(rolling.vendor_packages_available);
    }
}
