use reqwest::StatusCode;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::MessageRequest;
use crate::error::{Error, Result};

/// JSON body accepted by Slack incoming webhooks.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Payload<'a> {
    pub text: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub channel: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub username: &'a str,
    /// Reserved; never populated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_emoji: Option<&'a str>,
}

impl<'a> From<&'a MessageRequest> for Payload<'a> {
    fn from(req: &'a MessageRequest) -> Self {
        Self {
            text: &req.text,
            channel: &req.channel,
            username: &req.sender_name,
            icon_emoji: None,
        }
    }
}

pub struct SlackWebhook {
    url: String,
    client: reqwest::Client,
}

impl SlackWebhook {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Post a single message. Anything but `200 OK` is a delivery error carrying the
    /// status line and response body.
    pub async fn push(&self, req: &MessageRequest) -> Result<()> {
        let payload = Payload::from(req);
        debug!(channel = payload.channel, bytes = payload.text.len(), "posting to webhook");

        let resp = self.client.post(&self.url).json(&payload).send().await?;
        let status = resp.status();
        // Drain the body either way so the connection is released cleanly.
        let body = resp.text().await?;

        if status != StatusCode::OK {
            return Err(Error::Delivery {
                status: status.to_string(),
                body,
            });
        }
        info!(channel = payload.channel, "message delivered");
        Ok(())
    }
}
