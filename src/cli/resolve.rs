use clap::{Args, Parser};

use crate::resolver::WrapperDuplicates;

/// Distribution names and derivation options
#[derive(Args, Debug, Clone, Default)]
pub struct RequestArgs {
    /// Platform distributions to install, whitespace separated (e.g. "fortress harmonic")
    #[arg(long, short = 'p', env = "SETUP_SIM_PLATFORM_DISTROS")]
    pub platform: Option<String>,

    /// Bridge distributions to install packages for, whitespace separated
    #[arg(long, short = 'b', env = "SETUP_SIM_BRIDGE_DISTROS")]
    pub bridge: Option<String>,

    /// How to treat the same wrapper package derived more than once
    #[arg(long, value_enum)]
    pub wrapper_duplicates: Option<WrapperDuplicates>,
}

/// Arguments for the resolve command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Platform packages only:\n    setup-sim resolve --platform \"fortress harmonic\"\n\n\
                   With bridge packages:\n    setup-sim resolve --platform harmonic --bridge \"humble jazzy\"\n\n\
                   Machine-readable output:\n    setup-sim resolve --platform fortress --json")]
pub struct ResolveArgs {
    #[command(flatten)]
    pub request: RequestArgs,

    /// Print the package list as a JSON array
    #[arg(long)]
    pub json: bool,
}
