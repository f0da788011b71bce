use crate::predict::Guess;
use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Messages sent from client to server over WebSocket.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Ask for the current top predictions of a session.
    RequestPrediction { player_id: String },
}

/// Messages sent from server to client over WebSocket.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Sent once when the socket opens.
    Connected,
    /// Leading predictions for the requested session.
    AiPrediction {
        predictions: Vec<Guess>,
        confidence: Probability,
        timestamp: String,
    },
    /// Unknown session or unreadable frame.
    Error { message: String },
}

impl ServerMessage {
    pub fn prediction(forecast: super::Forecast, timestamp: String) -> Self {
        Self::AiPrediction {
            predictions: forecast.predictions,
            confidence: forecast.confidence,
            timestamp,
        }
    }
    pub fn error(message: impl std::fmt::Display) -> Self {
        Self::Error {
            message: message.to_string(),
        }
    }
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            log::error!("failed to serialize server message: {}", e);
            String::from(r#"{"type":"error","message":"serialization failed"}"#)
        })
    }
}

impl TryFrom<&str> for ClientMessage {
    type Error = serde_json::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        serde_json::from_str(s)
    }
}
