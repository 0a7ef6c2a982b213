//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - resolve: Resolve command arguments (and the request arguments shared with plan)
//! - plan: Plan command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::host::OsFamily;

pub mod completions;
pub mod plan;
pub mod resolve;

pub use completions::CompletionsArgs;
pub use plan::PlanArgs;
pub use resolve::{RequestArgs, ResolveArgs};

/// setup-sim - simulation platform package resolver
///
/// Resolve which native packages install a simulation platform and its bridge packages.
#[derive(Parser, Debug)]
#[command(
    name = "setup-sim",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Resolve simulation platform and bridge packages for this machine",
    long_about = "setup-sim checks requested simulation platform and bridge distributions \
                  against the published compatibility matrix and the host OS, then derives \
                  the exact list of native packages to install.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  setup-sim resolve --platform fortress                 \x1b[90m# Platform only\x1b[0m\n   \
                  setup-sim resolve --platform harmonic --bridge jazzy  \x1b[90m# With bridge packages\x1b[0m\n   \
                  setup-sim plan --platform fortress --bridge humble    \x1b[90m# Show install command\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Configuration file (defaults to <config dir>/setup-sim/setup-sim.yaml)
    #[arg(long, short = 'c', global = true, env = "SETUP_SIM_CONFIG")]
    pub config: Option<PathBuf>,

    /// URL of the compatibility matrix (ignored when --matrix-file is given)
    #[arg(long, global = true, env = "SETUP_SIM_MATRIX_URL")]
    pub matrix_url: Option<String>,

    /// Read the compatibility matrix from a local file instead of the network
    #[arg(long, global = true, value_name = "PATH")]
    pub matrix_file: Option<PathBuf>,

    /// Host operating system family (defaults to the running OS)
    #[arg(long, global = true, value_enum)]
    pub host_family: Option<OsFamily>,

    /// Host OS codename (defaults to DISTRIB_CODENAME from /etc/lsb-release)
    #[arg(long, global = true, env = "SETUP_SIM_HOST_CODENAME")]
    pub host_codename: Option<String>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command that talks to the resolver
#[derive(Debug, Clone, Default)]
pub struct GlobalArgs {
    pub config: Option<PathBuf>,
    pub matrix_url: Option<String>,
    pub matrix_file: Option<PathBuf>,
    pub host_family: Option<OsFamily>,
    pub host_codename: Option<String>,
}

impl Cli {
    pub fn globals(&self) -> GlobalArgs {
        GlobalArgs {
            config: self.config.clone(),
            matrix_url: self.matrix_url.clone(),
            matrix_file: self.matrix_file.clone(),
            host_family: self.host_family,
            host_codename: self.host_codename.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the packages to install
    Resolve(ResolveArgs),

    /// Print the package manager command that would install the packages
    Plan(PlanArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
