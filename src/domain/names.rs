//! Distribution and package name newtypes
//!
//! Names are compared verbatim. Keeping each axis in its own type means a
//! platform name can never be looked up in the bridge table by accident.

use std::fmt;

use serde::Serialize;

macro_rules! name_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }
    };
}

name_newtype!(
    /// Name of a simulation platform release (e.g. "fortress")
    PlatformName
);

name_newtype!(
    /// Name of a bridge framework release (e.g. "humble")
    BridgeName
);

name_newtype!(
    /// Identifier handed to the host package manager
    PackageName
);
