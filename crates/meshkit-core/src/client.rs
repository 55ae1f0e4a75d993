// ── Client façade ──
//
// The single public surface application code uses. Composes the session,
// directory, and data-channel layers behind one object.

use meshkit_api::transport::Connector;
use meshkit_api::wire::ChannelType;

use crate::channel;
use crate::config::ClientConfig;
use crate::directory;
use crate::error::Error;
use crate::model::Device;
use crate::session::Session;

/// A client for one platform credential over one connection.
///
/// Each instance owns its session independently -- nothing here is
/// global, and nothing is shared between instances. Every operation
/// besides [`connect`](Self::connect) and [`close`](Self::close) requires
/// a live session and fails fast with [`Error::NotConnected`] otherwise;
/// no operation is queued while disconnected.
pub struct Client {
    config: ClientConfig,
    session: Session,
}

impl Client {
    /// Create a client. Does not connect -- call
    /// [`connect`](Self::connect) to perform the handshake.
    pub fn new(config: ClientConfig, connector: Box<dyn Connector>) -> Self {
        Self {
            config,
            session: Session::new(connector),
        }
    }

    /// Establish the session.
    ///
    /// Safe to call repeatedly: an existing live connection is reused,
    /// never replaced, and only the first call performs a handshake. A
    /// rejected handshake fails with [`Error::NotAuthorized`] and leaves
    /// the client disconnected, safe to retry.
    pub async fn connect(&self) -> Result<(), Error> {
        self.session.connect(&self.config).await
    }

    /// Tear the session down.
    ///
    /// A no-op when already disconnected; close failures are not
    /// surfaced.
    pub async fn close(&self) {
        self.session.close().await;
    }

    /// Every device registered on the platform, across all gateways,
    /// freshly queried.
    pub async fn list_devices(&self) -> Result<Vec<Device>, Error> {
        let connection = self.session.connection().await?;
        let records = directory::list(&connection).await?;
        Ok(records.into_iter().map(Device::from).collect())
    }

    /// The first directory entry whose external id matches `id`.
    pub async fn get_device(&self, id: &str) -> Result<Device, Error> {
        let connection = self.session.connection().await?;
        let records = directory::list(&connection).await?;
        let record = directory::lookup(&records, id)?;
        Ok(Device::from(record.clone()))
    }

    /// Coerce `raw_value` and write it to one sensor of the device `id`.
    ///
    /// Fails with [`Error::UnsupportedValue`] before anything reaches the
    /// wire if the value matches none of the accepted shapes, and with
    /// [`Error::DeviceNotFound`] if `id` does not resolve -- in that case
    /// no update request is sent.
    pub async fn set_data(&self, id: &str, sensor_id: &str, raw_value: &str) -> Result<(), Error> {
        let connection = self.session.connection().await?;
        channel::set_data(&connection, id, sensor_id, raw_value).await
    }

    /// Ask the device `id` to publish a reading for one sensor.
    ///
    /// Resolves once the platform acknowledges the request; the reading
    /// arrives later through an event registered via [`on`](Self::on).
    pub async fn request_data(&self, id: &str, sensor_id: &str) -> Result<(), Error> {
        let connection = self.session.connection().await?;
        channel::request_data(&connection, id, sensor_id).await
    }

    /// Subscribe to one event channel of the device `id`.
    pub async fn subscribe(&self, id: &str, channel_type: ChannelType) -> Result<(), Error> {
        let connection = self.session.connection().await?;
        channel::subscribe(&connection, id, channel_type).await
    }

    /// Register a raw event handler on the live connection.
    ///
    /// Events pass through unmodified; delivery stops when the connection
    /// closes.
    pub async fn on<F>(&self, event: &str, handler: F) -> Result<(), Error>
    where
        F: Fn(serde_json::Value) + Send + Sync + 'static,
    {
        let connection = self.session.connection().await?;
        connection.on(event, Box::new(handler));
        Ok(())
    }
}
