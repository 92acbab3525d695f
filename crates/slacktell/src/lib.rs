//! Post a message to a Slack channel through an incoming webhook.
//!
//! Settings are seeded from `SLACK_URL`, `SLACK_CHANNEL` and `SLACK_BOTNAME`, overridden by
//! command-line flags; the message body comes from `--message` or, failing that, from a
//! piped standard input.

pub mod cli;
pub mod config;
pub mod error;
pub mod webhook;

pub use config::MessageRequest;
pub use error::{ConfigError, Error, Result};
pub use webhook::SlackWebhook;

/// Install a stderr fmt subscriber. `RUST_LOG` wins over the `-v` count when set.
pub fn init_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // A subscriber may already be set (tests); that is fine.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
