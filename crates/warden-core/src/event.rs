//! Inbound action-required payloads.
//!
//! The session daemon surfaces actions that need a human decision as a
//! single tagged payload. Each category has its own coordinator; a
//! coordinator must dispatch on the discriminant and ignore categories it
//! does not own.

use serde::{Deserialize, Serialize};

use crate::types::RequestId;

/// Display placeholder used when a sampling request carries no displayable
/// message text.
pub const EMPTY_MESSAGE_PLACEHOLDER: &str = "(no message content)";

/// A request from an extension to forward messages to the language model.
///
/// Immutable once surfaced; the id is stable across UI remounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplingRequest {
    /// Request identifier.
    pub id: RequestId,
    /// Name of the extension asking to sample.
    pub extension_name: String,
    /// Ordered, opaque message bodies to be forwarded.
    pub messages: Vec<String>,
}

impl SamplingRequest {
    /// Create a sampling request with no messages yet.
    #[must_use]
    pub fn new(id: impl Into<RequestId>, extension_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            extension_name: extension_name.into(),
            messages: Vec::new(),
        }
    }

    /// Append a message body.
    #[must_use]
    pub fn with_message(mut self, body: impl Into<String>) -> Self {
        self.messages.push(body.into());
        self
    }

    /// Join the message bodies for display.
    ///
    /// Blank bodies are skipped; if nothing displayable remains, the
    /// placeholder is returned instead. Missing or malformed content is a
    /// display concern here, never an error.
    #[must_use]
    pub fn preview(&self) -> String {
        let text = self
            .messages
            .iter()
            .map(|body| body.trim())
            .filter(|body| !body.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n");
        if text.is_empty() {
            EMPTY_MESSAGE_PLACEHOLDER.to_string()
        } else {
            text
        }
    }
}

/// A tool call awaiting confirmation.
///
/// Owned by the tool-confirmation coordinator; carried here so the
/// category dispatch on [`ActionRequired`] is total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolConfirmationRequest {
    /// Request identifier.
    pub id: RequestId,
    /// Fully qualified tool name.
    pub tool_name: String,
    /// Tool arguments as the model supplied them.
    pub arguments: serde_json::Value,
}

/// An action surfaced to the frontend that requires a human decision,
/// tagged by request category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionRequired {
    /// An extension asks to forward messages to the language model.
    SamplingConfirmation(SamplingRequest),
    /// A tool call awaits confirmation.
    ToolConfirmation(ToolConfirmationRequest),
}

impl ActionRequired {
    /// The request id, regardless of category.
    #[must_use]
    pub fn request_id(&self) -> &RequestId {
        match self {
            Self::SamplingConfirmation(request) => &request.id,
            Self::ToolConfirmation(request) => &request.id,
        }
    }

    /// The sampling request, if this payload is one.
    ///
    /// Every other category yields `None`; callers that only own sampling
    /// confirmations must go through this accessor and do no work on
    /// `None`.
    #[must_use]
    pub fn as_sampling(&self) -> Option<&SamplingRequest> {
        match self {
            Self::SamplingConfirmation(request) => Some(request),
            Self::ToolConfirmation(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagged_representation() {
        let event = ActionRequired::SamplingConfirmation(
            SamplingRequest::new("req-1", "github").with_message("summarize this thread"),
        );

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "sampling_confirmation");
        assert_eq!(json["extension_name"], "github");

        let back: ActionRequired = serde_json::from_value(json).unwrap();
        assert_eq!(back.request_id().as_str(), "req-1");
    }

    #[test]
    fn test_sampling_dispatch() {
        let sampling = ActionRequired::SamplingConfirmation(SamplingRequest::new("a", "jira"));
        assert!(sampling.as_sampling().is_some());

        let tool = ActionRequired::ToolConfirmation(ToolConfirmationRequest {
            id: RequestId::new("b"),
            tool_name: "developer__shell".to_string(),
            arguments: serde_json::json!({"command": "ls"}),
        });
        assert!(tool.as_sampling().is_none());
        assert_eq!(tool.request_id().as_str(), "b");
    }

    #[test]
    fn test_preview_joins_bodies() {
        let request = SamplingRequest::new("req-2", "slack")
            .with_message("first")
            .with_message("second");
        assert_eq!(request.preview(), "first\n\nsecond");
    }

    #[test]
    fn test_preview_placeholder_for_empty() {
        let empty = SamplingRequest::new("req-3", "slack");
        assert_eq!(empty.preview(), EMPTY_MESSAGE_PLACEHOLDER);

        let blank = SamplingRequest::new("req-4", "slack")
            .with_message("   ")
            .with_message("");
        assert_eq!(blank.preview(), EMPTY_MESSAGE_PLACEHOLDER);
    }
}
