/// Transport errors for the domain layer.
///
/// Every failure of the remote product store ends up here: the list
/// coordinator treats all variants alike, they only differ in what gets logged.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("transport.network")]
    Network,
    #[error("transport.status: {0}")]
    Status(u16),
    #[error("transport.malformed_body")]
    MalformedBody,
    #[error("transport.timeout")]
    Timeout,
}

impl TransportError {
    pub fn network() -> Self {
        TransportError::Network
    }
    pub fn status(code: u16) -> Self {
        TransportError::Status(code)
    }
    pub fn malformed_body() -> Self {
        TransportError::MalformedBody
    }
    pub fn timeout() -> Self {
        TransportError::Timeout
    }
}
