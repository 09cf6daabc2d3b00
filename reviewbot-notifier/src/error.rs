//! Notifier error kinds
//!
//! One closed enumeration covers everything that can fail: startup
//! configuration, the transport to the review API, contract violations in
//! its payload, and notification delivery. The scheduler dispatches on the
//! kind in a single place instead of catching broadly.

use thiserror::Error;

use reviewbot_client::ClientError;
use reviewbot_core::response::ResponseError;

/// Everything that can go wrong in the notifier
#[derive(Debug, Error)]
pub enum NotifierError {
    /// Required configuration is missing or invalid; fatal at startup
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The review API could not be reached
    #[error("review API unreachable: {0}")]
    Transport(#[source] ClientError),

    /// The review API answered outside its contract
    #[error("review API contract violation: {0}")]
    Protocol(String),

    /// A notification could not be delivered
    #[error("failed to deliver notification: {0}")]
    NotifySend(#[source] ClientError),
}

impl From<ClientError> for NotifierError {
    fn from(err: ClientError) -> Self {
        match err {
            // Only a failed request is a transport problem; a bad status
            // code or an undecodable body is the API breaking its contract.
            ClientError::RequestFailed(_) => NotifierError::Transport(err),
            _ => NotifierError::Protocol(err.to_string()),
        }
    }
}

impl From<ResponseError> for NotifierError {
    fn from(err: ResponseError) -> Self {
        NotifierError::Protocol(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_maps_to_protocol() {
        let err = NotifierError::from(ClientError::api_error(500, "boom"));
        assert!(matches!(err, NotifierError::Protocol(_)));
    }

    #[test]
    fn test_parse_error_maps_to_protocol() {
        let err = NotifierError::from(ClientError::ParseError("bad json".into()));
        assert!(matches!(err, NotifierError::Protocol(_)));
    }

    #[test]
    fn test_response_error_maps_to_protocol() {
        let err = NotifierError::from(ResponseError::MissingKey("homeworks"));
        match &err {
            NotifierError::Protocol(message) => assert!(message.contains("homeworks")),
            other => panic!("expected Protocol, got {other:?}"),
        }
    }
}
