//! Error types for railyard.
//!
//! All fatal failures are strongly typed using thiserror. Analysis verdicts
//! (`Stuck`, `LoopFound`) are ordinary result values, never errors: a correct
//! topology check is allowed to come back negative.

use thiserror::Error;

use crate::port::Port;

/// Configuration errors: the track was never well-formed.
///
/// These surface immediately and are never retried. Analysis refuses to
/// proceed past the point of detection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("Malformed endpoint '{endpoint}': expected '<junction>.<left|right|root>'")]
    MalformedEndpoint {
        endpoint: String,
    },

    #[error("Unknown port name '{port}' in endpoint '{endpoint}'")]
    UnknownPort {
        endpoint: String,
        port: String,
    },

    #[error("Junction name is empty in endpoint '{endpoint}'")]
    EmptyJunctionName {
        endpoint: String,
    },

    #[error("Run name cannot be empty")]
    EmptyRunName,

    #[error("Name '{name}' exceeds maximum length of {max_length}")]
    NameTooLong {
        name: String,
        max_length: usize,
    },

    #[error("Port {junction}.{port} is claimed by both run '{existing}' and run '{duplicate}'")]
    PortAlreadyConnected {
        junction: String,
        port: Port,
        existing: String,
        duplicate: String,
    },

    #[error("Port {junction}.{port} is not connected to any run")]
    MissingRun {
        junction: String,
        port: Port,
    },

    #[error("Invalid traversal limits: {reason}")]
    InvalidLimits {
        reason: String,
    },

    #[error("Invalid connection spec: {reason}")]
    InvalidSpec {
        reason: String,
    },
}

impl ConfigurationError {
    /// Returns true if the error was raised while parsing endpoint strings
    /// or the surrounding spec document.
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(
            self,
            Self::MalformedEndpoint { .. }
                | Self::UnknownPort { .. }
                | Self::EmptyJunctionName { .. }
                | Self::EmptyRunName
                | Self::NameTooLong { .. }
                | Self::InvalidSpec { .. }
        )
    }

    /// Returns true if the port-degree invariant (every port on exactly one
    /// run) was violated.
    #[must_use]
    pub const fn is_degree_violation(&self) -> bool {
        matches!(
            self,
            Self::PortAlreadyConnected { .. } | Self::MissingRun { .. }
        )
    }
}

/// Result type alias for railyard operations.
pub type TrackResult<T> = Result<T, ConfigurationError>;
