//! Error types for the NEST speech gateway SDK

use thiserror::Error;

/// Result type alias for NEST SDK operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur when talking to the NEST gateway
///
/// Connection, authentication and RPC failures are kept distinct so callers
/// can react differently: a `Connection` error points at the network or TLS
/// layer, an `Auth` error means the secret key was rejected and needs to be
/// rotated, and an `Rpc` error carries whatever status the gateway returned
/// for a call that did reach it.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error (empty endpoint, missing secret, bad timeout)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failed to establish the secured channel (DNS, TCP, TLS handshake,
    /// or connect timeout)
    #[error("Connection to '{endpoint}' failed: {reason}")]
    Connection {
        /// Endpoint the channel was opened against
        endpoint: String,
        /// Underlying transport failure
        reason: String,
    },

    /// The gateway rejected the bearer token (UNAUTHENTICATED)
    #[error("Authentication rejected: {0}")]
    Auth(String),

    /// The call reached the gateway but returned a non-success status
    #[error("RPC failed with status {code}: {message}")]
    Rpc {
        /// Canonical gRPC status code name (e.g. "Unavailable")
        code: String,
        /// Status message from the gateway
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// True for failures of the transport itself, as opposed to the gateway
    /// rejecting the call
    pub fn is_connection(&self) -> bool {
        matches!(self, Error::Connection { .. })
    }

    /// True when the secret key was rejected by the gateway
    pub fn is_auth(&self) -> bool {
        matches!(self, Error::Auth(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Connection {
            endpoint: "https://clovaspeech-gw.ncloud.com:50051".to_string(),
            reason: "connect timeout".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Connection to 'https://clovaspeech-gw.ncloud.com:50051' failed: connect timeout"
        );

        let err = Error::Rpc {
            code: "Unavailable".to_string(),
            message: "upstream down".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "RPC failed with status Unavailable: upstream down"
        );
    }

    #[test]
    fn test_error_classification() {
        assert!(Error::Auth("bad key".to_string()).is_auth());
        assert!(!Error::Auth("bad key".to_string()).is_connection());
        assert!(Error::Connection {
            endpoint: "localhost:1".to_string(),
            reason: "refused".to_string(),
        }
        .is_connection());
    }
}
