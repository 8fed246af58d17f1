use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A value handed to a facade does not implement that facade's contract.
    #[error("The implementation passed to `{facade}` must implement `{expected}`.")]
    TypeMismatch {
        facade: &'static str,
        expected: &'static str,
    },

    /// `show`/`clear` was called before any implementation was registered.
    #[error(
        "No implementation is set for `{facade}`. Call `{facade}.set_implementation()` during startup."
    )]
    MissingImplementation { facade: &'static str },

    /// Confirm and prompt reject with this while switched off.
    #[error("The `{facade}` feature is disabled.")]
    FeatureDisabled { facade: &'static str },

    /// The end user dismissed a confirm or prompt dialog.
    #[error("Declined: {reason}")]
    Declined { reason: String },

    #[error("IO error: {0}.")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON settings. Original error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse YAML settings. Original error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(
        "Unsupported settings file '{}'. Expected a .json, .yaml or .yml file.",
        path.display()
    )]
    UnsupportedConfigFormat { path: PathBuf },

    #[error("Invalid settings: {0}.")]
    ConfigValidation(String),

    #[error("Terminal interaction failed. Original error: {0}")]
    Terminal(#[from] dialoguer::Error),
}

impl Error {
    /// Builds the user-declined rejection.
    pub fn declined(reason: impl Into<String>) -> Self {
        Error::Declined {
            reason: reason.into(),
        }
    }

    pub fn is_declined(&self) -> bool {
        matches!(self, Error::Declined { .. })
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, Error::FeatureDisabled { .. })
    }

    pub fn is_missing_implementation(&self) -> bool {
        matches!(self, Error::MissingImplementation { .. })
    }
}

/// Convenience type alias for Results with the crate error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
