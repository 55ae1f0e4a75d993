use thiserror::Error;

/// Opaque error reported by the transport in an acknowledgment.
///
/// The platform does not structure its error payloads, so whatever message
/// the transport hands back in a query/update/subscribe acknowledgment is
/// surfaced verbatim. `meshkit-core` wraps this into its domain error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The connection went away before an acknowledgment callback fired.
    pub fn dropped() -> Self {
        Self::new("connection dropped before acknowledgment")
    }
}
