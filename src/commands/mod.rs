//! Command implementations for the setup-sim CLI

pub mod completions;
pub mod helpers;
pub mod plan;
pub mod resolve;
pub mod version;
