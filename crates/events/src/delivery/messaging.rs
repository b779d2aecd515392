//! Alert delivery to a messaging provider (WhatsApp gateway) over HTTP.
//!
//! [`MessagingChannel`] POSTs a JSON message to the provider endpoint with an
//! optional bearer token. There is no retry; the next tolerance transition
//! is the next delivery attempt.

use std::time::Duration;

use async_trait::async_trait;

use crate::channel::{ChannelError, NotificationChannel};

/// HTTP request timeout for a single delivery attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum MessagingError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("Messaging provider returned HTTP {0}")]
    HttpStatus(u16),
}

// ---------------------------------------------------------------------------
// MessagingConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct MessagingConfig {
    /// Provider endpoint that accepts `{ "to", "text" }` JSON.
    pub api_url: String,
    pub api_token: Option<String>,
    /// Destination handle, e.g. a WhatsApp number in E.164 form.
    pub to: String,
}

impl MessagingConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable             | Required |
    /// |----------------------|----------|
    /// | `WHATSAPP_API_URL`   | yes      |
    /// | `WHATSAPP_TO`        | yes      |
    /// | `WHATSAPP_API_TOKEN` | no       |
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let api_url = lookup("WHATSAPP_API_URL").filter(|v| !v.trim().is_empty())?;
        let to = lookup("WHATSAPP_TO").filter(|v| !v.trim().is_empty())?;
        Some(Self {
            api_url,
            api_token: lookup("WHATSAPP_API_TOKEN").filter(|v| !v.is_empty()),
            to,
        })
    }
}

// ---------------------------------------------------------------------------
// MessagingChannel
// ---------------------------------------------------------------------------

pub struct MessagingChannel {
    client: reqwest::Client,
    config: MessagingConfig,
}

impl MessagingChannel {
    /// Create a channel with a pre-configured HTTP client.
    pub fn new(config: MessagingConfig) -> Result<Self, MessagingError> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, config })
    }

    /// Message text sent to the provider.
    fn payload(&self, subject: &str, body: &str) -> serde_json::Value {
        serde_json::json!({
            "to": self.config.to,
            "text": format!("{subject}\n{body}"),
        })
    }

    async fn deliver(&self, subject: &str, body: &str) -> Result<(), MessagingError> {
        let mut request = self
            .client
            .post(&self.config.api_url)
            .json(&self.payload(subject, body));
        if let Some(token) = &self.config.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(MessagingError::HttpStatus(response.status().as_u16()));
        }

        tracing::info!(to = %self.config.to, subject, "Alert message sent");
        Ok(())
    }
}

#[async_trait]
impl NotificationChannel for MessagingChannel {
    fn name(&self) -> &'static str {
        "messaging"
    }

    async fn send(&self, subject: &str, body: &str) -> Result<(), ChannelError> {
        Ok(self.deliver(subject, body).await?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> MessagingConfig {
        MessagingConfig {
            api_url: "http://127.0.0.1:9/messages".into(),
            api_token: None,
            to: "+15550100".into(),
        }
    }

    #[test]
    fn unconfigured_without_url_or_recipient() {
        assert!(MessagingConfig::from_lookup(|_| None).is_none());
        assert!(MessagingConfig::from_lookup(|key| {
            (key == "WHATSAPP_API_URL").then(|| "https://gateway.example/send".to_string())
        })
        .is_none());
    }

    #[test]
    fn configured_with_url_and_recipient() {
        let config = MessagingConfig::from_lookup(|key| match key {
            "WHATSAPP_API_URL" => Some("https://gateway.example/send".into()),
            "WHATSAPP_TO" => Some("+15550100".into()),
            "WHATSAPP_API_TOKEN" => Some(String::new()),
            _ => None,
        })
        .expect("configured");
        assert_eq!(config.to, "+15550100");
        assert!(config.api_token.is_none());
    }

    #[test]
    fn payload_carries_recipient_and_text() {
        let channel = MessagingChannel::new(config()).unwrap();
        let payload = channel.payload("[JaxBrew] Kettle OUT OF TOLERANCE", "Kettle: current 90.0°C");
        assert_eq!(payload["to"], "+15550100");
        assert_eq!(
            payload["text"],
            "[JaxBrew] Kettle OUT OF TOLERANCE\nKettle: current 90.0°C"
        );
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_channel_error() {
        let channel = MessagingChannel::new(config()).unwrap();
        let err = channel.send("subject", "body").await.unwrap_err();
        assert!(matches!(err, ChannelError::Messaging(MessagingError::Request(_))));
    }

    #[test]
    fn error_display_http_status() {
        let err = MessagingError::HttpStatus(502);
        assert_eq!(err.to_string(), "Messaging provider returned HTTP 502");
    }
}
