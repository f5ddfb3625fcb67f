//! Drag payload codec: the dragged node travels through the host's drag
//! channel as JSON.

use crate::models::Node;
use std::fmt;

#[derive(Debug)]
pub enum DragPayloadError {
    Missing,
    Encode(serde_json::Error),
    Malformed(serde_json::Error),
}

impl fmt::Display for DragPayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DragPayloadError::Missing => write!(f, "drag payload is empty"),
            DragPayloadError::Encode(err) => write!(f, "failed to serialize dragged node: {err}"),
            DragPayloadError::Malformed(err) => write!(f, "malformed drag payload: {err}"),
        }
    }
}

impl std::error::Error for DragPayloadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DragPayloadError::Missing => None,
            DragPayloadError::Encode(err) | DragPayloadError::Malformed(err) => Some(err),
        }
    }
}

pub fn encode_drag_payload(node: &Node) -> Result<String, DragPayloadError> {
    serde_json::to_string(node).map_err(DragPayloadError::Encode)
}

pub fn decode_drag_payload(payload: &str) -> Result<Node, DragPayloadError> {
    if payload.trim().is_empty() {
        return Err(DragPayloadError::Missing);
    }
    serde_json::from_str(payload).map_err(DragPayloadError::Malformed)
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/drag.rs"]
mod tests;
