//! Error types for connector operations.

use thiserror::Error;

/// Result type alias for connector operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by connector operations.
///
/// Every failure is returned to the caller; nothing is retried internally.
/// A mutating operation that fails does so before any state transition, so
/// there is no partial-failure state to clean up.
#[derive(Debug, Error)]
pub enum Error {
    /// The connector's backend is unavailable (e.g. the wallet extension is
    /// not installed).
    #[error("Connector not found: the wallet backend is unavailable")]
    NotFound,

    /// An operation requiring an active session was attempted, or account
    /// resolution found no account at the derived index.
    #[error("Connector not connected")]
    NotConnected,

    /// The backend declined the connection request, as a user dismissing a
    /// wallet prompt would.
    #[error("Connection request rejected by the user")]
    UserRejected,

    /// The dispatcher received a message type it does not recognize.
    #[error("Unknown request type: {0}")]
    UnknownRequestType(String),

    /// A construction-time invariant was violated.
    #[error("Invalid connector configuration: {0}")]
    InvalidConfiguration(String),

    /// The backend answered a request with the wrong result shape.
    #[error("Unexpected response from wallet backend: {0}")]
    UnexpectedResponse(String),
}

impl Error {
    /// Returns true if the failure means the backend cannot be used at all.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Error::NotFound)
    }

    /// Returns true if the failure clears once a session is established and
    /// the active account resolves.
    pub fn is_not_connected(&self) -> bool {
        matches!(self, Error::NotConnected)
    }
}
