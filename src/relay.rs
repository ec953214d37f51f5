//! Delivery of contact messages.
//!
//! A [`MessageRelay`] takes a finished [`RelayMessage`] and either hands it to
//! the EmailJS REST API or, in simulated mode, pretends to after a short delay.
//! Exactly one implementation is active, chosen by [`RelayMode`].

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::config::{ConfigError, RelayConfig, RelayCredentials, RelayMode};

/// What the relay template receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelayMessage {
    pub to_email: String,
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    pub reply_to: String,
    pub sent_at: String,
}

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("relay request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("relay rejected the message with status {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("relay worker panicked: {0}")]
    Panicked(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub trait MessageRelay: Send + Sync {
    /// Makes a single delivery attempt.
    fn deliver(&self, message: &RelayMessage) -> Result<(), RelayError>;

    fn mode(&self) -> RelayMode;
}

/// Builds the relay selected by `config.mode`.
pub fn from_config(config: &RelayConfig) -> Result<Arc<dyn MessageRelay>, RelayError> {
    Ok(match config.mode {
        RelayMode::Simulated => Arc::new(SimulatedRelay::new(Duration::from_millis(
            config.simulated_delay_ms,
        ))),
        RelayMode::Live => Arc::new(EmailJsRelay::new(config)?),
    })
}

/// Stand-in for environments without relay credentials.
#[derive(Debug, Clone)]
pub struct SimulatedRelay {
    delay: Duration,
}

impl SimulatedRelay {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl MessageRelay for SimulatedRelay {
    fn deliver(&self, message: &RelayMessage) -> Result<(), RelayError> {
        thread::sleep(self.delay);
        debug!(subject = %message.subject, "simulated relay accepted message");
        Ok(())
    }

    fn mode(&self) -> RelayMode {
        RelayMode::Simulated
    }
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: &'a RelayMessage,
}

/// Client for the EmailJS `email/send` endpoint.
#[derive(Debug)]
pub struct EmailJsRelay {
    client: reqwest::blocking::Client,
    endpoint: String,
    credentials: RelayCredentials,
}

impl EmailJsRelay {
    pub fn new(config: &RelayConfig) -> Result<Self, RelayError> {
        let credentials = config.credentials()?;
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            credentials,
        })
    }

    fn request<'a>(&'a self, message: &'a RelayMessage) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.credentials.service_id,
            template_id: &self.credentials.template_id,
            user_id: &self.credentials.public_key,
            access_token: self.credentials.access_token.as_deref(),
            template_params: message,
        }
    }
}

impl MessageRelay for EmailJsRelay {
    fn deliver(&self, message: &RelayMessage) -> Result<(), RelayError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&self.request(message))
            .send()?;

        let status = response.status();
        if status.is_success() {
            debug!(%status, "relay accepted message");
            Ok(())
        } else {
            let body = response.text().unwrap_or_default();
            Err(RelayError::Rejected {
                status: status.as_u16(),
                body,
            })
        }
    }

    fn mode(&self) -> RelayMode {
        RelayMode::Live
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;

    fn message() -> RelayMessage {
        RelayMessage {
            to_email: "owner@example.com".into(),
            from_name: "Ava".into(),
            from_email: "a@x.com".into(),
            subject: "Hi".into(),
            message: "Hello".into(),
            reply_to: "a@x.com".into(),
            sent_at: "2024-10-01T12:00:00+00:00".into(),
        }
    }

    fn live_config(endpoint: String) -> RelayConfig {
        RelayConfig {
            mode: RelayMode::Live,
            service_id: Some("service_x".into()),
            template_id: Some("template_y".into()),
            public_key: Some("pk_z".into()),
            endpoint,
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Serves one request with the given status line and body, returning the
    /// endpoint URL and a handle yielding the raw request body.
    fn serve_once(status: &'static str, body: &'static str) -> (String, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/api/v1.0/email/send", listener.local_addr().unwrap());
        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream);
            let mut content_length = 0;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                if line == "\r\n" || line.is_empty() {
                    break;
                }
                if let Some((name, value)) = line.split_once(':') {
                    if name.eq_ignore_ascii_case("content-length") {
                        content_length = value.trim().parse().unwrap();
                    }
                }
            }
            let mut request_body = vec![0; content_length];
            reader.read_exact(&mut request_body).unwrap();

            let mut stream = reader.into_inner();
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
            String::from_utf8(request_body).unwrap()
        });
        (url, handle)
    }

    #[test]
    fn test_request_carries_tokens_and_params() {
        let mut config = live_config("http://localhost".into());
        config.access_token = Some("secret".into());
        let relay = EmailJsRelay::new(&config).unwrap();
        let msg = message();

        let body = serde_json::to_value(relay.request(&msg)).unwrap();
        assert_eq!(body["service_id"], "service_x");
        assert_eq!(body["template_id"], "template_y");
        assert_eq!(body["user_id"], "pk_z");
        assert_eq!(body["accessToken"], "secret");
        assert_eq!(body["template_params"]["from_name"], "Ava");
        assert_eq!(body["template_params"]["reply_to"], "a@x.com");
        assert_eq!(body["template_params"]["to_email"], "owner@example.com");
    }

    #[test]
    fn test_request_omits_missing_access_token() {
        let relay = EmailJsRelay::new(&live_config("http://localhost".into())).unwrap();
        let msg = message();
        let body = serde_json::to_value(relay.request(&msg)).unwrap();
        assert!(body.get("accessToken").is_none());
    }

    #[test]
    fn test_live_relay_requires_tokens() {
        let config = RelayConfig {
            mode: RelayMode::Live,
            ..Default::default()
        };
        assert!(matches!(
            EmailJsRelay::new(&config),
            Err(RelayError::Config(ConfigError::MissingRelayToken(_)))
        ));
    }

    #[test]
    fn test_deliver_success() {
        let (url, server) = serve_once("200 OK", "OK");
        let relay = EmailJsRelay::new(&live_config(url)).unwrap();

        relay.deliver(&message()).unwrap();

        let sent: serde_json::Value = serde_json::from_str(&server.join().unwrap()).unwrap();
        assert_eq!(sent["template_params"]["subject"], "Hi");
    }

    #[test]
    fn test_deliver_rejected() {
        let (url, server) = serve_once("400 Bad Request", "The user ID is invalid");
        let relay = EmailJsRelay::new(&live_config(url)).unwrap();

        let err = relay.deliver(&message()).unwrap_err();
        server.join().unwrap();
        match err {
            RelayError::Rejected { status, body } => {
                assert_eq!(status, 400);
                assert_eq!(body, "The user ID is invalid");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_deliver_unreachable_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/send", listener.local_addr().unwrap());
        drop(listener);

        let relay = EmailJsRelay::new(&live_config(url)).unwrap();
        assert!(matches!(
            relay.deliver(&message()),
            Err(RelayError::Transport(_))
        ));
    }

    #[test]
    fn test_simulated_relay_always_succeeds() {
        let relay = SimulatedRelay::new(Duration::ZERO);
        assert!(relay.deliver(&message()).is_ok());
        assert_eq!(relay.mode(), RelayMode::Simulated);
    }

    #[test]
    fn test_from_config_picks_mode() {
        let simulated = from_config(&RelayConfig::default()).unwrap();
        assert_eq!(simulated.mode(), RelayMode::Simulated);

        let live = from_config(&live_config("http://localhost".into())).unwrap();
        assert_eq!(live.mode(), RelayMode::Live);
    }
}
