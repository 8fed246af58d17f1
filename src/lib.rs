/// Popup message dialogs.
pub mod alert;

/// Concrete presentation backends.
pub mod backend;

/// Handles argument parsing for the demo binary.
pub mod cli;

/// Startup settings loaded from JSON or YAML.
pub mod config;

/// OK/Cancel dialogs.
pub mod confirm;

/// Shared constants: facade names, colors, exit codes.
pub mod constants;

/// The composition root and the process-wide facades.
pub mod context;

/// Defines custom error types.
pub mod error;

/// Enable flag, implementation slot and dispatch steps shared by all facades.
pub mod facade;

/// Message type to color and icon lookups.
pub mod icons;

/// Capability contracts implemented by backends.
pub mod interface;

/// The blocking loading overlay.
pub mod loading;

/// Localized labels and loading messages.
pub mod locale;

/// Transient notifications.
pub mod notify;

/// Text input dialogs.
pub mod prompt;

/// Message types and notification positions.
pub mod types;

#[cfg(test)]
mod test_utils;

pub use context::{facades, Facades};
pub use error::{Error, Result};
pub use interface::{Backend, Completion, NotifyOptions};
pub use locale::{Buttons, Labels, Locale};
pub use types::{MessageType, Position};
