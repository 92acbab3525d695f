use std::io::{self, Read};

use tracing::debug;

use crate::cli::Cli;
use crate::error::{ConfigError, Result};

pub const ENV_URL: &str = "SLACK_URL";
pub const ENV_CHANNEL: &str = "SLACK_CHANNEL";
pub const ENV_BOTNAME: &str = "SLACK_BOTNAME";

/// A fully resolved message, ready to be pushed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRequest {
    pub endpoint: String,
    pub channel: String,
    /// Display name override; empty means "use the webhook's default".
    pub sender_name: String,
    pub text: String,
}

/// First stage of resolution: values seeded from the environment.
#[derive(Debug, Default, Clone)]
pub struct Defaults {
    pub url: Option<String>,
    pub channel: Option<String>,
    pub botname: Option<String>,
}

impl Defaults {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build defaults from an arbitrary lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key| lookup(key).filter(|v: &String| !v.is_empty());
        Self {
            url: get(ENV_URL),
            channel: get(ENV_CHANNEL),
            botname: get(ENV_BOTNAME),
        }
    }
}

/// Where the message body comes from when no `--message` flag is given.
pub trait MessageInput {
    /// Whether the stream is a pipe or a regular file, i.e. safe to drain without blocking on a user.
    fn is_piped(&self) -> bool;

    /// Drain the stream as raw bytes.
    fn read_all(&mut self) -> io::Result<Vec<u8>>;
}

impl MessageInput for io::Stdin {
    #[cfg(unix)]
    fn is_piped(&self) -> bool {
        use std::os::fd::AsFd;
        use std::os::unix::fs::FileTypeExt;

        let Ok(fd) = self.as_fd().try_clone_to_owned() else {
            return false;
        };
        match std::fs::File::from(fd).metadata() {
            Ok(meta) => {
                let ft = meta.file_type();
                ft.is_fifo() || ft.is_file()
            }
            Err(_) => false,
        }
    }

    #[cfg(not(unix))]
    fn is_piped(&self) -> bool {
        use std::io::IsTerminal;
        !self.is_terminal()
    }

    fn read_all(&mut self) -> io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.lock().read_to_end(&mut buf)?;
        Ok(buf)
    }
}

/// Second stage: apply flag overrides, validate, and fill in the message body.
///
/// Fails before touching `input` when the endpoint or channel is missing, and never
/// reads `input` when a message was given on the command line.
pub fn resolve<I: MessageInput + ?Sized>(
    cli: &Cli,
    defaults: Defaults,
    input: &mut I,
) -> Result<MessageRequest> {
    let pick = |flag: &Option<String>, default: Option<String>| {
        flag.clone().or(default).unwrap_or_default()
    };
    let endpoint = pick(&cli.url, defaults.url);
    let channel = pick(&cli.channel, defaults.channel);
    let sender_name = pick(&cli.botname, defaults.botname);

    if endpoint.is_empty() {
        return Err(ConfigError::Missing("url").into());
    }
    if channel.is_empty() {
        return Err(ConfigError::Missing("channel").into());
    }

    let mut text = cli.message.clone().unwrap_or_default();
    if text.is_empty() {
        if input.is_piped() {
            debug!("reading message from stdin");
            let data = input.read_all().map_err(ConfigError::Stdin)?;
            // Log output is often not UTF-8; invalid bytes become U+FFFD instead of failing.
            text = String::from_utf8_lossy(&data).into_owned();
        } else {
            debug!("stdin is not a pipe or file, not reading it");
        }
    }
    if text.is_empty() {
        return Err(ConfigError::EmptyMessage.into());
    }

    Ok(MessageRequest {
        endpoint,
        channel,
        sender_name,
        text,
    })
}
