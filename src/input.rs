//! Distribution list parsing
//!
//! Both axes arrive as a single whitespace-delimited string. Tokens keep
//! their order and case, and duplicates are passed through untouched.

use crate::domain::{BridgeName, PlatformName};
use crate::error::{Result, SetupError};

/// Parse the required platform list
///
/// # Errors
///
/// Returns `SetupError::EmptyInput` when the input is absent or blank.
pub fn parse_platform_input(raw: Option<&str>) -> Result<Vec<PlatformName>> {
    let names: Vec<PlatformName> = tokens(raw).map(PlatformName::new).collect();
    if names.is_empty() {
        return Err(SetupError::EmptyInput);
    }
    Ok(names)
}

/// Parse the optional bridge list; blank input means no bridge packages
pub fn parse_bridge_input(raw: Option<&str>) -> Vec<BridgeName> {
    tokens(raw).map(BridgeName::new).collect()
}

fn tokens(raw: Option<&str>) -> impl Iterator<Item = &str> {
    raw.unwrap_or_default().split_whitespace()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_single() {
        let names = parse_platform_input(Some("fortress")).unwrap();
        assert_eq!(names, vec![PlatformName::new("fortress")]);
    }

    #[test]
    fn test_platform_mixed_whitespace() {
        let names = parse_platform_input(Some("  fortress\tharmonic\n ionic ")).unwrap();
        let names: Vec<&str> = names.iter().map(PlatformName::as_str).collect();
        assert_eq!(names, vec!["fortress", "harmonic", "ionic"]);
    }

    #[test]
    fn test_platform_keeps_duplicates_and_case() {
        let names = parse_platform_input(Some("Fortress fortress fortress")).unwrap();
        let names: Vec<&str> = names.iter().map(PlatformName::as_str).collect();
        assert_eq!(names, vec!["Fortress", "fortress", "fortress"]);
    }

    #[test]
    fn test_platform_absent_is_error() {
        assert!(matches!(
            parse_platform_input(None),
            Err(SetupError::EmptyInput)
        ));
    }

    #[test]
    fn test_platform_blank_is_error() {
        assert!(matches!(
            parse_platform_input(Some(" \n\t ")),
            Err(SetupError::EmptyInput)
        ));
    }

    #[test]
    fn test_bridge_absent_is_empty() {
        assert!(parse_bridge_input(None).is_empty());
        assert!(parse_bridge_input(Some("   ")).is_empty());
    }

    #[test]
    fn test_bridge_order_preserved() {
        let names = parse_bridge_input(Some("jazzy humble"));
        let names: Vec<&str> = names.iter().map(BridgeName::as_str).collect();
        assert_eq!(names, vec!["jazzy", "humble"]);
    }
}
