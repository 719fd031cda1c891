//! Permission-service confirmation contract and HTTP client.
//!
//! When a sampling decision is made locally, the coordinator notifies the
//! permission service with a single fire-and-forget submission. The service
//! is the system of record for *future* sessions; the current session's
//! authority stays with the local [`DecisionStore`](crate::DecisionStore)
//! regardless of what happens on the wire.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

use warden_core::{RequestId, SessionId};

use crate::error::{ApprovalError, ApprovalResult};

/// Header carrying the shared secret the permission service expects.
const SECRET_KEY_HEADER: &str = "x-secret-key";

/// Path of the confirmation endpoint, relative to the configured base URL.
const CONFIRM_ENDPOINT: &str = "confirm";

/// The action reported to the permission service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmationAction {
    /// Allow this request, once.
    AllowOnce,
    /// Deny this request.
    Deny,
}

impl fmt::Display for ConfirmationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllowOnce => write!(f, "allow_once"),
            Self::Deny => write!(f, "deny"),
        }
    }
}

/// The kind of principal a confirmation is submitted on behalf of.
///
/// Serialized verbatim; the service expects `"Extension"` for sampling
/// confirmations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrincipalType {
    /// An installed extension.
    Extension,
    /// A single tool.
    Tool,
}

/// One confirmation submission, as the permission service consumes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationSubmission {
    /// Session the request belongs to.
    pub session_id: SessionId,
    /// The request being confirmed.
    pub id: RequestId,
    /// The chosen action.
    pub action: ConfirmationAction,
    /// Principal the request was made on behalf of.
    pub principal_type: PrincipalType,
}

impl ConfirmationSubmission {
    /// Build a submission for an extension sampling request.
    #[must_use]
    pub fn sampling(session_id: SessionId, id: RequestId, action: ConfirmationAction) -> Self {
        Self {
            session_id,
            id,
            action,
            principal_type: PrincipalType::Extension,
        }
    }
}

/// The permission service's reply.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfirmationReply {
    /// Application-level error, if the service rejected the confirmation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Client for the external permission service.
///
/// Implementations submit one confirmation and report how it went; they do
/// not retry, and callers do not roll anything back on failure. The
/// coordinator treats every error from here as log-and-ignore.
#[async_trait]
pub trait ConfirmationClient: Send + Sync {
    /// Submit a confirmation to the permission service.
    ///
    /// # Errors
    ///
    /// Returns [`ApprovalError::Transport`] when the service cannot be
    /// reached and [`ApprovalError::Service`] when it replies with an
    /// application-level error.
    async fn submit(&self, submission: ConfirmationSubmission) -> ApprovalResult<()>;
}

/// Confirmation client wrapper.
pub type ArcConfirmationClient = std::sync::Arc<dyn ConfirmationClient>;

/// Connection settings for the permission service.
#[derive(Clone, Deserialize)]
pub struct ConfirmationConfig {
    /// Base URL of the permission service. Should end with a trailing
    /// slash; the confirmation endpoint is joined onto it.
    pub base_url: Url,
    /// Shared secret sent in the `x-secret-key` header, if the service
    /// requires one.
    pub secret_key: Option<String>,
}

impl ConfirmationConfig {
    /// Configuration for an unauthenticated service.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            secret_key: None,
        }
    }

    /// Attach the shared secret.
    #[must_use]
    pub fn with_secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.secret_key = Some(secret_key.into());
        self
    }
}

impl fmt::Debug for ConfirmationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfirmationConfig")
            .field("base_url", &self.base_url.as_str())
            .field("secret_key", &self.secret_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// HTTP implementation of [`ConfirmationClient`].
#[derive(Debug)]
pub struct HttpConfirmationClient {
    http: reqwest::Client,
    confirm_url: Url,
    secret_key: Option<String>,
}

impl HttpConfirmationClient {
    /// Create a client for the configured permission service.
    ///
    /// # Errors
    ///
    /// Returns [`ApprovalError::Transport`] when the confirmation endpoint
    /// cannot be derived from the configured base URL.
    pub fn new(config: ConfirmationConfig) -> ApprovalResult<Self> {
        let confirm_url = config.base_url.join(CONFIRM_ENDPOINT).map_err(|e| {
            ApprovalError::Transport(format!("invalid confirmation endpoint: {e}"))
        })?;
        Ok(Self {
            http: reqwest::Client::new(),
            confirm_url,
            secret_key: config.secret_key,
        })
    }
}

#[async_trait]
impl ConfirmationClient for HttpConfirmationClient {
    async fn submit(&self, submission: ConfirmationSubmission) -> ApprovalResult<()> {
        let mut request = self.http.post(self.confirm_url.clone()).json(&submission);
        if let Some(secret_key) = &self.secret_key {
            request = request.header(SECRET_KEY_HEADER, secret_key);
        }

        let response = request
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| ApprovalError::Transport(e.to_string()))?;

        let reply: ConfirmationReply = response
            .json()
            .await
            .map_err(|e| ApprovalError::Transport(e.to_string()))?;

        match reply.error {
            Some(error) if !error.is_empty() => Err(ApprovalError::Service(error)),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_wire_shape() {
        let submission = ConfirmationSubmission::sampling(
            SessionId::new("20260806_104501"),
            RequestId::new("req-7"),
            ConfirmationAction::AllowOnce,
        );

        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["session_id"], "20260806_104501");
        assert_eq!(json["id"], "req-7");
        assert_eq!(json["action"], "allow_once");
        assert_eq!(json["principal_type"], "Extension");
    }

    #[test]
    fn test_deny_action_wire_value() {
        let json = serde_json::to_string(&ConfirmationAction::Deny).unwrap();
        assert_eq!(json, "\"deny\"");
        assert_eq!(ConfirmationAction::Deny.to_string(), "deny");
    }

    #[test]
    fn test_reply_parses_with_and_without_error() {
        let ok: ConfirmationReply = serde_json::from_str("{}").unwrap();
        assert!(ok.error.is_none());

        let rejected: ConfirmationReply =
            serde_json::from_str(r#"{"error": "unknown request"}"#).unwrap();
        assert_eq!(rejected.error.as_deref(), Some("unknown request"));
    }

    #[test]
    fn test_http_client_endpoint_join() {
        let config =
            ConfirmationConfig::new(Url::parse("http://127.0.0.1:3000/api/").unwrap())
                .with_secret_key("hunter2");
        let client = HttpConfirmationClient::new(config).unwrap();
        assert_eq!(client.confirm_url.as_str(), "http://127.0.0.1:3000/api/confirm");
        assert_eq!(client.secret_key.as_deref(), Some("hunter2"));
    }

    #[test]
    fn test_config_debug_redacts_secret() {
        let config = ConfirmationConfig::new(Url::parse("http://127.0.0.1:3000/").unwrap())
            .with_secret_key("hunter2");
        let debug = format!("{config:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("<redacted>"));
    }
}
