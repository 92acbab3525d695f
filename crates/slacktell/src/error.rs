use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    /// The request could not be sent or the response not read. The URL is stripped.
    #[error("Failed to send webhook request: {0}")]
    Transport(#[source] reqwest::Error),

    /// The endpoint answered with something other than 200.
    #[error("Webhook rejected message: {status}\n{body}")]
    Delivery { status: String, body: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required setting is unset after flags and environment; the caller prints usage.
    #[error("missing required setting: {0}")]
    Missing(&'static str),

    #[error("empty message")]
    EmptyMessage,

    #[error("Failed to read message from stdin: {0}")]
    Stdin(#[source] std::io::Error),
}

// Webhook URLs embed their secret token, so it must not reach diagnostics.
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err.without_url())
    }
}

impl Error {
    /// True for errors that should be reported together with usage text.
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::Configuration(ConfigError::Missing(_)))
    }
}
