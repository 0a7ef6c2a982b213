//! Plan command implementation
//!
//! Shows the package manager invocation for the resolved packages. The
//! command is printed, never executed.

use console::Style;

use crate::cli::{GlobalArgs, PlanArgs};
use crate::error::Result;

use super::helpers;

/// Run plan command
pub fn run(globals: &GlobalArgs, args: &PlanArgs) -> Result<()> {
    let prepared = helpers::prepare(globals, &args.request)?;
    let packages = prepared.resolve()?;
    let host = &prepared.request.host;
    let manager = host.family.package_manager();

    let label = Style::new().bold().green();
    let dim = Style::new().dim();
    let target = match &host.codename {
        Some(codename) => format!("{} ({})", host.family, codename),
        None => host.family.to_string(),
    };

    println!("{} {}", label.apply_to("Host:"), target);
    println!(
        "{} {} {}",
        label.apply_to("Packages:"),
        packages.len(),
        dim.apply_to(format!("via {}", manager.name()))
    );
    println!("{}", shell_join(&manager.install_command(&packages)));

    Ok(())
}

/// Join argv for display, quoting words a shell would split
fn shell_join(argv: &[String]) -> String {
    argv.iter()
        .map(|word| {
            if word.is_empty() || word.contains(char::is_whitespace) {
                format!("'{}'", word)
            } else {
                word.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
