// Transport contract
//
// The connection object is an external collaborator: it opens the socket,
// authenticates against the platform, emits lifecycle events, and exposes
// callback-style RPCs. This module only defines the shape that
// `meshkit-core` consumes; concrete implementations live with the
// embedding application.

use std::sync::Arc;

use secrecy::SecretString;

use crate::error::TransportError;
use crate::wire::{DeviceFilter, DeviceRecord, SubscriptionRequest, UpdatePayload};

/// Lifecycle event names a freshly opened connection emits exactly once
/// per handshake (transport permitting -- consumers guard against repeats).
pub mod event {
    /// Handshake accepted; the connection is live.
    pub const READY: &str = "ready";
    /// Handshake rejected by the platform.
    pub const NOT_READY: &str = "notReady";
}

/// Acknowledgment callback for requests whose ack carries no payload.
pub type AckCallback = Box<dyn FnOnce() + Send>;

/// Reply callback for requests whose ack carries a result or an error.
pub type ReplyCallback<T> = Box<dyn FnOnce(Result<T, TransportError>) + Send>;

/// Handler for raw events delivered over the connection.
pub type EventHandler = Box<dyn Fn(serde_json::Value) + Send + Sync>;

/// Endpoint and credentials for opening a connection.
#[derive(Debug, Clone)]
pub struct ConnectOptions {
    pub server: String,
    pub port: u16,
    /// The credential uuid this client authenticates as.
    pub uuid: String,
    /// The token paired with `uuid`. Held in a [`SecretString`] so it never
    /// leaks through `Debug` output or logs.
    pub token: SecretString,
}

/// Factory for platform connections (`createConnection` in the platform's
/// own client libraries).
pub trait Connector: Send + Sync {
    /// Open a connection to the platform.
    ///
    /// Returns immediately; the handshake outcome arrives asynchronously
    /// through the [`event::READY`] / [`event::NOT_READY`] events on the
    /// returned handle.
    fn open(&self, options: ConnectOptions) -> Arc<dyn Connection>;
}

/// A single platform connection exposing the callback-style RPC surface.
///
/// Every RPC acknowledges through its callback; callers bridge those into
/// suspension points via [`crate::bridge::single_shot`].
pub trait Connection: Send + Sync {
    /// Close the connection. `done` fires once the close completes;
    /// the transport reports no close errors.
    fn close(&self, done: AckCallback);

    /// Query the directory of devices visible to this credential.
    fn devices(&self, filter: DeviceFilter, reply: ReplyCallback<Vec<DeviceRecord>>);

    /// Send a `set_data`/`get_data` update. The acknowledgment carries no
    /// success/failure signal -- it only means the platform received the
    /// request.
    fn update(&self, payload: UpdatePayload, done: AckCallback);

    /// Register for events from one device.
    fn subscribe(&self, request: SubscriptionRequest, reply: ReplyCallback<()>);

    /// Register a handler for raw events. Handlers may fire any number of
    /// times until the connection is closed.
    fn on(&self, event: &str, handler: EventHandler);
}
