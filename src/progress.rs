//! Spinner display while the compatibility matrix is fetched

use std::time::Duration;

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown on stderr, hidden when stderr is not a terminal
pub struct FetchSpinner {
    pb: ProgressBar,
}

impl FetchSpinner {
    pub fn start(message: impl Into<String>) -> Self {
        let pb = if Term::stderr().is_term() {
            ProgressBar::new_spinner()
        } else {
            ProgressBar::hidden()
        };

        let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        pb.set_style(style);
        pb.set_message(message.into());
        pb.enable_steady_tick(Duration::from_millis(100));

        Self { pb }
    }

    /// Remove the spinner from the terminal
    pub fn finish(self) {
        self.pb.finish_and_clear();
    }
}

/// Run `f` with a spinner showing `message`
pub fn spin_while<T>(message: impl Into<String>, f: impl FnOnce() -> T) -> T {
    let spinner = FetchSpinner::start(message);
    let result = f();
    spinner.finish();
    result
}
