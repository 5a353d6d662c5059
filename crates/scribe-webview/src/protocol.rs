//! Engine -> host wire protocol.
//!
//! The engine page posts `{ "type": ..., "payload": ... }` envelopes as JSON
//! strings through the webview IPC primitive. Two types are understood;
//! anything else decodes to [`EditorEvent::Unknown`] so newer engines can
//! add message types without breaking older hosts.

use serde::{Deserialize, Serialize};

use scribe_common::{BridgeError, EditorStatus};

/// Message type carrying a fresh [`EditorStatus`].
pub const UPDATE_STATUS: &str = "updateStatus";
/// Message type carrying the reply to a content request.
pub const GET_CONTENT: &str = "getContent";

/// Raw envelope, before the payload is interpreted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub payload: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ContentPayload {
    html: String,
}

/// A decoded engine message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    UpdateStatus(EditorStatus),
    GetContent { html: String },
    /// A message type this host does not understand.
    Unknown(String),
}

impl EditorEvent {
    /// Decode a raw IPC body.
    pub fn decode(raw: &str) -> Result<Self, BridgeError> {
        let envelope: Envelope = serde_json::from_str(raw)
            .map_err(|e| BridgeError::Protocol(format!("invalid envelope: {e}")))?;
        Self::from_envelope(envelope)
    }

    pub fn from_envelope(envelope: Envelope) -> Result<Self, BridgeError> {
        match envelope.kind.as_str() {
            UPDATE_STATUS => serde_json::from_value::<EditorStatus>(envelope.payload)
                .map(EditorEvent::UpdateStatus)
                .map_err(|e| BridgeError::Protocol(format!("invalid {UPDATE_STATUS} payload: {e}"))),
            GET_CONTENT => serde_json::from_value::<ContentPayload>(envelope.payload)
                .map(|p| EditorEvent::GetContent { html: p.html })
                .map_err(|e| BridgeError::Protocol(format!("invalid {GET_CONTENT} payload: {e}"))),
            _ => Ok(EditorEvent::Unknown(envelope.kind)),
        }
    }

    /// The wire `type` of this event.
    pub fn kind(&self) -> &str {
        match self {
            EditorEvent::UpdateStatus(_) => UPDATE_STATUS,
            EditorEvent::GetContent { .. } => GET_CONTENT,
            EditorEvent::Unknown(kind) => kind,
        }
    }
}
