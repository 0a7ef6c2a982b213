//! Version command implementation

use crate::config::default_config_path;
use crate::error::Result;
use crate::matrix::DEFAULT_MATRIX_URL;

/// Run version command
pub fn run() -> Result<()> {
    println!("setup-sim {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", build_profile());
    println!();
    println!("Defaults:");
    println!("  Matrix: {}", DEFAULT_MATRIX_URL);
    match default_config_path() {
        Some(path) => println!("  Config: {}", path.display()),
        None => println!("  Config: (no config directory)"),
    }

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
