//! Common types used across the facades.

use log::Level;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Category of a presented message. Governs icon, color and log severity.
///
/// Tags outside the known set are kept verbatim in [`MessageType::Other`] and
/// passed through to implementations unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MessageType {
    Info,
    Success,
    Warn,
    Error,
    Debug,
    Question,
    Other(String),
}

impl MessageType {
    pub fn as_str(&self) -> &str {
        match self {
            MessageType::Info => "info",
            MessageType::Success => "success",
            MessageType::Warn => "warn",
            MessageType::Error => "error",
            MessageType::Debug => "debug",
            MessageType::Question => "question",
            MessageType::Other(tag) => tag,
        }
    }

    /// Severity used when a facade records the message.
    pub fn log_level(&self) -> Level {
        match self {
            MessageType::Warn => Level::Warn,
            MessageType::Error => Level::Error,
            MessageType::Debug => Level::Debug,
            MessageType::Info
            | MessageType::Success
            | MessageType::Question
            | MessageType::Other(_) => Level::Info,
        }
    }
}

impl From<&str> for MessageType {
    fn from(tag: &str) -> Self {
        match tag {
            "info" => MessageType::Info,
            "success" => MessageType::Success,
            "warn" => MessageType::Warn,
            "error" => MessageType::Error,
            "debug" => MessageType::Debug,
            "question" => MessageType::Question,
            other => MessageType::Other(other.to_string()),
        }
    }
}

impl From<String> for MessageType {
    fn from(tag: String) -> Self {
        MessageType::from(tag.as_str())
    }
}

impl From<MessageType> for String {
    fn from(kind: MessageType) -> Self {
        kind.as_str().to_string()
    }
}

impl Display for MessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Screen corner a notification is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Position::TopLeft => "top-left",
            Position::TopRight => "top-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomRight => "bottom-right",
        };
        write!(f, "{s}")
    }
}
