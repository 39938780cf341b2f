//! Mapping of gRPC statuses onto the SDK error taxonomy
//!
//! UNAUTHENTICATED is pulled out as its own error so callers can trigger
//! secret rotation; every other non-success status surfaces as an RPC error
//! carrying the canonical code name.

use nest_core::Error;
use tonic::{Code, Status};

/// Convert a non-success gRPC status into an SDK error
pub(crate) fn map_status(status: Status) -> Error {
    match status.code() {
        Code::Unauthenticated => Error::Auth(status.message().to_string()),
        code => Error::Rpc {
            code: format!("{:?}", code),
            message: status.message().to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthenticated_maps_to_auth() {
        let err = map_status(Status::unauthenticated("invalid secret key"));
        assert!(matches!(err, Error::Auth(ref msg) if msg == "invalid secret key"));
    }

    #[test]
    fn test_unavailable_maps_to_rpc() {
        let err = map_status(Status::unavailable("gateway draining"));
        match err {
            Error::Rpc { code, message } => {
                assert_eq!(code, "Unavailable");
                assert_eq!(message, "gateway draining");
            }
            other => panic!("expected Rpc error, got {:?}", other),
        }
    }

    #[test]
    fn test_deadline_exceeded_maps_to_rpc() {
        let err = map_status(Status::deadline_exceeded("call took too long"));
        assert!(matches!(err, Error::Rpc { ref code, .. } if code == "DeadlineExceeded"));
    }
}
