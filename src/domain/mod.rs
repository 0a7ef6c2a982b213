//! Domain types for compatibility resolution
//!
//! - [`names`]: newtypes for platform, bridge and package names
//! - [`bridge`]: the built-in bridge distribution table

pub mod bridge;
pub mod names;

pub use bridge::BridgeTable;
pub use names::{BridgeName, PackageName, PlatformName};
