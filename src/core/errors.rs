//! Error types for the textdup-rs library.
//!
//! Every failure in this crate is a deterministic function of its inputs, so
//! none of these errors are retriable. The similarity core only ever produces
//! [`TextdupError::EmptyInput`] and [`TextdupError::InvalidArgument`]; the
//! remaining variants belong to the surrounding I/O and configuration layers.

use std::fmt;
use std::io;

use thiserror::Error;

/// Main result type for textdup operations.
pub type Result<T> = std::result::Result<T, TextdupError>;

/// Which side of a comparison an input belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputRole {
    /// The original (ground-truth) document
    Reference,
    /// The document suspected of duplicating the reference
    Candidate,
}

impl fmt::Display for InputRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reference => f.write_str("reference"),
            Self::Candidate => f.write_str("candidate"),
        }
    }
}

/// Error type for all textdup operations.
#[derive(Error, Debug)]
pub enum TextdupError {
    /// A token sequence was empty where the scorer requires content
    #[error("Empty input: the {role} token sequence is empty")]
    EmptyInput {
        /// Which input was empty
        role: InputRole,
    },

    /// Non-positive sizes, mismatched fingerprint widths and similar misuse
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error description
        message: String,
        /// Parameter that was rejected
        parameter: Option<String>,
    },

    /// I/O related errors (document and config files)
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable error message
        message: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        /// Error description
        message: String,
        /// Configuration field that caused the error
        field: Option<String>,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error description
        message: String,
        /// Data format being (de)serialized
        data_type: Option<String>,
        /// Underlying serialization error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl TextdupError {
    /// Create an empty-input error for the given side of the comparison
    pub fn empty_input(role: InputRole) -> Self {
        Self::EmptyInput { role }
    }

    /// Create a new invalid-argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
            parameter: None,
        }
    }

    /// Create a new invalid-argument error naming the rejected parameter
    pub fn invalid_parameter(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
            parameter: Some(parameter.into()),
        }
    }

    /// Create a new I/O error with context
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: None,
        }
    }

    /// Create a new configuration error with field context
    pub fn config_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: Some(field.into()),
        }
    }
}

impl From<io::Error> for TextdupError {
    fn from(err: io::Error) -> Self {
        Self::io("I/O operation failed", err)
    }
}

impl From<serde_json::Error> for TextdupError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: format!("JSON serialization failed: {err}"),
            data_type: Some("JSON".to_string()),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_yaml::Error> for TextdupError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization {
            message: format!("YAML serialization failed: {err}"),
            data_type: Some("YAML".to_string()),
            source: Some(Box::new(err)),
        }
    }
}
