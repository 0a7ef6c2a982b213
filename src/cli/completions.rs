use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    setup-sim completions bash > ~/.bash_completion.d/setup-sim\n\n\
                  Generate zsh completions:\n    setup-sim completions zsh > ~/.zfunc/_setup-sim\n\n\
                  Generate fish completions:\n    setup-sim completions fish > ~/.config/fish/completions/setup-sim.fish")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}
