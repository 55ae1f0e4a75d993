// ── Session lifecycle ──
//
// Owns the single connection slot for one client instance. `connect` is
// the only operation that creates a connection, `close` the only one that
// destroys it. The slot lock is held across the handshake, so two
// overlapping connects still perform exactly one handshake.

use std::sync::Arc;

use meshkit_api::bridge::single_shot;
use meshkit_api::transport::{event, Connection, Connector};
use tokio::sync::Mutex;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::Error;

pub(crate) struct Session {
    connector: Box<dyn Connector>,
    slot: Mutex<Option<Arc<dyn Connection>>>,
}

impl Session {
    pub(crate) fn new(connector: Box<dyn Connector>) -> Self {
        Self {
            connector,
            slot: Mutex::new(None),
        }
    }

    /// Establish the connection if there is none yet.
    ///
    /// Suspends until the transport signals the handshake outcome. On
    /// `notReady` the half-open connection is closed best-effort and the
    /// outcome of that close is discarded -- the session is being
    /// abandoned anyway.
    pub(crate) async fn connect(&self, config: &ClientConfig) -> Result<(), Error> {
        let mut slot = self.slot.lock().await;
        if slot.is_some() {
            debug!("already connected, skipping handshake");
            return Ok(());
        }

        debug!(server = %config.hostname, port = config.port, "opening connection");
        let connection = self.connector.open(config.connect_options());

        let (settle, settled) = single_shot::<bool>();
        let on_ready = settle.clone();
        connection.on(event::READY, Box::new(move |_| on_ready.settle(true)));
        connection.on(event::NOT_READY, Box::new(move |_| settle.settle(false)));

        if settled.wait().await? {
            debug!("handshake accepted");
            *slot = Some(connection);
            Ok(())
        } else {
            debug!("handshake rejected, discarding connection");
            connection.close(Box::new(|| {}));
            Err(Error::NotAuthorized)
        }
    }

    /// Tear down the connection, if any. Close failures are not surfaced;
    /// the slot is cleared either way.
    pub(crate) async fn close(&self) {
        let mut slot = self.slot.lock().await;
        let Some(connection) = slot.take() else {
            return;
        };

        debug!("closing connection");
        let (settle, settled) = single_shot::<()>();
        connection.close(Box::new(move || settle.settle(())));
        let _ = settled.wait().await;
    }

    /// The live connection handle, or `NotConnected`.
    pub(crate) async fn connection(&self) -> Result<Arc<dyn Connection>, Error> {
        self.slot.lock().await.clone().ok_or(Error::NotConnected)
    }
}
