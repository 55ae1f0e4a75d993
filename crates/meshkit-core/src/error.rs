// ── Domain error taxonomy ──
//
// User-facing errors from meshkit-core. Nothing here is retried or
// swallowed on the way to the caller; the one exception -- close failures
// while abandoning a rejected handshake -- never reaches this type at all.

use meshkit_api::TransportError;
use thiserror::Error;

/// The error type surfaced by every public operation.
#[derive(Debug, Error)]
pub enum Error {
    /// The platform rejected the connection handshake.
    #[error("Connection not authorized")]
    NotAuthorized,

    /// An operation that needs a live session was called while disconnected.
    #[error("Not connected")]
    NotConnected,

    /// No record in the current directory snapshot carries this external id.
    #[error("Device not found: {id}")]
    DeviceNotFound { id: String },

    /// The raw input matched none of the accepted value shapes.
    #[error("Unsupported value {input:?}: supported types are boolean, number or Base64 strings")]
    UnsupportedValue { input: String },

    /// Opaque error reported by the transport, surfaced verbatim.
    #[error(transparent)]
    Transport(#[from] TransportError),
}
