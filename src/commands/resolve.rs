//! Resolve command implementation
//!
//! Prints the derived package list, one identifier per line or as JSON.

use std::io::Write;

use crate::cli::{GlobalArgs, ResolveArgs};
use crate::domain::PackageName;
use crate::error::{Result, SetupError};

use super::helpers;

/// Run resolve command
pub fn run(globals: &GlobalArgs, args: &ResolveArgs) -> Result<()> {
    let prepared = helpers::prepare(globals, &args.request)?;
    let packages = prepared.resolve()?;

    let mut stdout = std::io::stdout().lock();
    write_packages(&mut stdout, &packages, args.json)
}

fn write_packages(out: &mut impl Write, packages: &[PackageName], json: bool) -> Result<()> {
    if json {
        let rendered =
            serde_json::to_string(packages).map_err(|e| SetupError::IoError {
                message: format!("Failed to render JSON: {}", e),
            })?;
        writeln!(out, "{}", rendered)?;
    } else {
        for package in packages {
            writeln!(out, "{}", package)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn packages() -> Vec<PackageName> {
        vec![
            PackageName::new("platform-fortress"),
            PackageName::new("bridge-humble-bridge"),
        ]
    }

    #[test]
    fn test_plain_output() {
        let mut out = Vec::new();
        write_packages(&mut out, &packages(), false).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "platform-fortress\nbridge-humble-bridge\n"
        );
    }

    #[test]
    fn test_json_output() {
        let mut out = Vec::new();
        write_packages(&mut out, &packages(), true).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[\"platform-fortress\",\"bridge-humble-bridge\"]\n"
        );
    }
}
