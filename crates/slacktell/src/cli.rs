use std::ffi::OsString;

use clap::{CommandFactory, Parser};

/// Slacktell – post a message to a Slack channel through an incoming webhook
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Slack hook endpoint ($SLACK_URL)
    #[arg(long, value_name = "URL", allow_hyphen_values = true)]
    pub url: Option<String>,

    /// Slack channel ($SLACK_CHANNEL)
    #[arg(long, value_name = "CHANNEL", allow_hyphen_values = true)]
    pub channel: Option<String>,

    /// Name of slack sender ($SLACK_BOTNAME)
    #[arg(long, value_name = "NAME", allow_hyphen_values = true)]
    pub botname: Option<String>,

    /// Message to send, will be read from stdin if not set
    #[arg(long, value_name = "TEXT", allow_hyphen_values = true)]
    pub message: Option<String>,

    /// Activate verbose output (-v, -vv, etc.)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Long flags that take the following argument as their value.
const VALUE_FLAGS: &[&str] = &["url", "channel", "botname", "message"];

/// Long flags that may also be spelled with a single dash (`-url`, `-channel=#ops`).
const LONG_FLAGS: &[&str] = &["url", "channel", "botname", "message", "verbose", "help", "version"];

/// Rewrite single-dash long flags to their `--` form so clap can parse them.
///
/// The argument following a value flag is its value and is never rewritten, whatever it
/// starts with. Everything after a bare `--` is passed through as is. Arguments that are
/// not valid UTF-8 are converted lossily.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;
    let mut value_next = false;
    for arg in args.into_iter().map(Into::into) {
        let arg = match arg.into_string() {
            Ok(arg) => arg,
            Err(raw) => raw.to_string_lossy().into_owned(),
        };
        if passthrough || value_next {
            value_next = false;
            out.push(arg.into());
            continue;
        }
        if arg == "--" {
            passthrough = true;
            out.push(arg.into());
            continue;
        }
        let Some(rest) = arg.strip_prefix('-') else {
            out.push(arg.into());
            continue;
        };
        let rest = rest.strip_prefix('-').unwrap_or(rest);
        let name = flag_name(rest);
        if !LONG_FLAGS.contains(&name) {
            out.push(arg.into());
            continue;
        }
        value_next = VALUE_FLAGS.contains(&name) && !rest.contains('=');
        out.push(format!("--{rest}").into());
    }
    out
}

fn flag_name(arg: &str) -> &str {
    arg.split_once('=').map_or(arg, |(name, _)| name)
}

impl Cli {
    /// Parse the process arguments, accepting single-dash long flags.
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }
}

/// Help text printed on a usage error.
pub fn usage() -> String {
    Cli::command().render_help().to_string()
}
