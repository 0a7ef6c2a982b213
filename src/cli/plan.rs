use clap::Parser;

use super::RequestArgs;

/// Arguments for the plan command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Show the apt command for an Ubuntu worker:\n    setup-sim plan --platform fortress --bridge humble\n\n\
                   Show the Homebrew command:\n    setup-sim plan --platform harmonic --host-family macos")]
pub struct PlanArgs {
    #[command(flatten)]
    pub request: RequestArgs,
}
